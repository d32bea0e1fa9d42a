use thiserror::Error;

/// Structural problems in a simplified model tree. Every variant is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Node '{node_id}' has an unsupported node type: '{type_name}'")]
    UnsupportedNodeType { node_id: String, type_name: String },

    #[error("Branch node '{node_id}' must declare at least one condition branch")]
    BranchWithoutConditions { node_id: String },

    #[error("Node id '{node_id}' is used more than once in the model")]
    DuplicateNodeId { node_id: String },

    #[error("The model must start with a START_EVENT node, but root '{node_id}' is a '{type_name}'")]
    MissingStartEvent { node_id: String, type_name: String },

    #[error("START_EVENT node '{node_id}' may only appear at the root of the model")]
    MisplacedStartEvent { node_id: String },

    #[error("The model has no root node")]
    EmptyModel,

    #[error("Attribute '{key}' on node '{node_id}' is invalid: {message}")]
    InvalidAttribute {
        node_id: String,
        key: String,
        message: String,
    },
}

/// Errors that can occur while compiling a simplified model into a process graph.
#[derive(Error, Debug, Clone)]
pub enum CompileError {
    #[error("Failed to parse simple model JSON: {0}")]
    JsonParse(String),

    #[error("Invalid simple model: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to convert custom model: {0}")]
    Conversion(#[from] ModelConversionError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),
}

/// Errors reported by a `LayoutEngine` implementation.
#[derive(Error, Debug, Clone)]
pub enum LayoutError {
    #[error("Layout references unknown element '{0}'")]
    UnknownElement(String),

    #[error("{0}")]
    Generic(String),
}

/// Errors that can occur when saving or loading a compiled graph artifact.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Artifact error: {0}")]
    Generic(String),
}

/// Errors that can occur when converting a custom designer format into a `SimpleNode` tree.
#[derive(Error, Debug, Clone)]
pub enum ModelConversionError {
    #[error("Invalid custom model: {0}")]
    Invalid(String),
}
