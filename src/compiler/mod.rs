use crate::constants::{END_EVENT_ID, END_EVENT_NAME};
use crate::error::{CompileError, ValidationError};
use crate::graph::{FlowNode, FlowNodeKind, ProcessGraph};
use crate::layout::{LaidOutProcess, LayoutEngine};
use crate::model::{IntoSimpleModel, SimpleNode};
use tracing::debug;

mod materializer;
mod sequence;

use materializer::FlowNodeMaterializer;
use sequence::SequenceFlowBuilder;

/// Process id used when the caller does not configure one.
pub const DEFAULT_PROCESS_ID: &str = "process";

/// Compiles one simplified model tree into an executable `ProcessGraph`.
///
/// Compilation is all-or-nothing: the graph is built locally and only handed
/// back once both passes succeed.
#[derive(Debug, Clone)]
pub struct Compiler {
    root: SimpleNode,
    process_id: String,
    process_name: Option<String>,
}

pub struct CompilerBuilder {
    root: SimpleNode,
    process_id: String,
    process_name: Option<String>,
}

impl CompilerBuilder {
    pub fn new(root: SimpleNode) -> Self {
        Self {
            root,
            process_id: DEFAULT_PROCESS_ID.to_string(),
            process_name: None,
        }
    }
    pub fn process_id(mut self, id: &str) -> Self {
        self.process_id = id.to_string();
        self
    }
    pub fn process_name(mut self, name: &str) -> Self {
        self.process_name = Some(name.to_string());
        self
    }
    pub fn build(self) -> Compiler {
        Compiler {
            root: self.root,
            process_id: self.process_id,
            process_name: self.process_name,
        }
    }
}

impl Compiler {
    pub fn builder(root: SimpleNode) -> CompilerBuilder {
        CompilerBuilder::new(root)
    }

    /// Starts a builder from designer JSON.
    pub fn from_json(json: &str) -> Result<CompilerBuilder, CompileError> {
        let root = SimpleNode::from_json(json).map_err(|e| CompileError::JsonParse(e.to_string()))?;
        Ok(CompilerBuilder::new(root))
    }

    /// Starts a builder from any custom format that converts into a simplified model.
    pub fn from_model<M: IntoSimpleModel>(model: M) -> Result<CompilerBuilder, CompileError> {
        Ok(CompilerBuilder::new(model.into_simple_model()?))
    }

    pub fn root(&self) -> &SimpleNode {
        &self.root
    }

    /// Runs both passes and returns the finished graph.
    ///
    /// 1. Materialize every reachable node (validating kinds, ids and attributes).
    /// 2. Inject the single end event.
    /// 3. Build the sequence flows, closing open chains into the end event.
    pub fn compile(&self) -> Result<ProcessGraph, ValidationError> {
        let mut graph = ProcessGraph::new(&self.process_id, self.process_name.as_deref());

        FlowNodeMaterializer::new(&mut graph).materialize_tree(&self.root)?;
        graph.add_node(FlowNode::new(
            END_EVENT_ID,
            FlowNodeKind::EndEvent,
            Some(END_EVENT_NAME),
        ));
        SequenceFlowBuilder::new(&mut graph).build(&self.root, END_EVENT_ID)?;

        debug!(
            process_id = %graph.id,
            nodes = graph.nodes.len(),
            flows = graph.flows.len(),
            "compiled simple model"
        );
        Ok(graph)
    }

    /// Compiles the model and hands the result to a layout engine.
    pub fn compile_with_layout(&self, engine: &dyn LayoutEngine) -> Result<LaidOutProcess, CompileError> {
        let graph = self.compile()?;
        let layout = engine.layout(&graph)?;
        layout.verify(&graph)?;
        Ok(LaidOutProcess { graph, layout })
    }
}
