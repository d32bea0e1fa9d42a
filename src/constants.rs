//! Fixed identifiers shared with the execution engine.
//!
//! These values are part of the wire contract between the compiled process
//! definition and the engine that runs it. Changing one side without the other
//! breaks deployed processes.

/// Id of the terminal node injected into every compiled graph.
pub const END_EVENT_ID: &str = "EndEvent";

/// Display name of the injected terminal node.
pub const END_EVENT_NAME: &str = "结束";

/// Engine expression bound to every `COPY_TASK` service task.
pub const COPY_TASK_EXPRESSION: &str = "#{bpmSimpleNodeService.copy(execution)}";

/// Namespace URI of engine-specific extension elements.
pub const EXTENSIONS_NAMESPACE: &str = "http://flowable.org/bpmn";

/// Namespace prefix of engine-specific extension elements.
pub const EXTENSIONS_PREFIX: &str = "flowable";

/// Attribute key holding the candidate-assignment strategy code.
pub const CANDIDATE_STRATEGY: &str = "candidateStrategy";

/// Attribute key holding the candidate-assignment parameter.
pub const CANDIDATE_PARAM: &str = "candidateParam";

/// Attribute key holding the list of form-field permission entries.
pub const FORM_FIELD_PERMISSIONS: &str = "formFieldPermissions";

/// Separator between the process id and the index in generated flow keys.
pub const ANONYMOUS_FLOW_INFIX: &str = "_Flow_";

/// Builds the synthesized id of the `position`-th (1-based) branch flow of a gateway.
pub fn branch_flow_id(gateway_id: &str, position: usize) -> String {
    format!("{}_SequenceFlow_{}", gateway_id, position)
}
