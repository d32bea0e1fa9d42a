//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the flowcast crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowcast::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let model_json = std::fs::read_to_string("path/to/model.json")?;
//! let graph = Compiler::from_json(&model_json)?.build().compile()?;
//! println!("{}", visualize_graph(&graph));
//! # Ok(())
//! # }
//! ```

// Compilation
pub use crate::compiler::{Compiler, CompilerBuilder};

// Input model
pub use crate::model::{ConditionBranch, IntoSimpleModel, NodeType, SimpleNode};

// Output graph
pub use crate::graph::{
    ExtensionElement, FlowNode, FlowNodeKind, GraphArtifact, GraphIssue, ProcessGraph,
    SequenceFlow, visualize_graph,
};

// Layout boundary
pub use crate::layout::{DiagramLayout, LayoutEngine};

// Well-known identifiers
pub use crate::constants::{COPY_TASK_EXPRESSION, END_EVENT_ID};

// Error types
pub use crate::error::{CompileError, ModelConversionError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
