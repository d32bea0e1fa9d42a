//! # Flowcast - Simple Model to Process Graph Compiler
//!
//! **Flowcast** compiles the simplified workflow trees produced by visual process
//! designers into well-formed, executable process graphs. A designer tree uses
//! a single "next" pointer per node and, for gateways, an ordered list of
//! condition branches; the compiler turns it into typed nodes joined by directed
//! sequence flows, injects the terminal end event, and attaches the extension
//! metadata the execution engine needs.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Model**: Parse designer JSON with `SimpleNode::from_json`, or
//!     implement `IntoSimpleModel` for your own format.
//! 2.  **Compile**: Configure a `Compiler` with `Compiler::builder` and call
//!     `compile`. Nodes are materialized in one pass, flows are built in a second.
//! 3.  **Hand Off**: Pass the `ProcessGraph` to a `LayoutEngine`, serialize it with
//!     serde, or store it as a `GraphArtifact`.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowcast::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = r#"{
//!         "id": "start", "type": "START_EVENT", "name": "Submit",
//!         "childNode": {
//!             "id": "review", "type": "EXCLUSIVE_GATEWAY",
//!             "conditionNodes": [
//!                 { "childNode": { "id": "manager", "type": "USER_TASK", "name": "Manager" } },
//!                 { "name": "otherwise" }
//!             ]
//!         }
//!     }"#;
//!
//!     let compiler = Compiler::from_json(json)?
//!         .process_id("leave_request")
//!         .process_name("Leave request")
//!         .build();
//!     let graph = compiler.compile()?;
//!
//!     assert_eq!(graph.nodes.len(), 4);
//!     let default_flow = graph.flows.iter().find(|f| f.is_default).unwrap();
//!     assert_eq!(default_flow.id.as_deref(), Some("review_SequenceFlow_2"));
//!     assert_eq!(default_flow.target_id, END_EVENT_ID);
//!     assert!(graph.check_integrity().is_empty());
//!     Ok(())
//! }
//! ```

pub mod compiler;
pub mod constants;
pub mod error;
pub mod graph;
pub mod layout;
pub mod model;
pub mod prelude;
