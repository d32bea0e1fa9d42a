use crate::constants::{EXTENSIONS_NAMESPACE, EXTENSIONS_PREFIX};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The executable element kinds a compiled graph can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowNodeKind {
    StartEvent,
    UserTask,
    ServiceTask,
    ExclusiveGateway,
    ParallelGateway,
    InclusiveGateway,
    EndEvent,
}

impl FlowNodeKind {
    pub fn is_gateway(self) -> bool {
        matches!(
            self,
            FlowNodeKind::ExclusiveGateway
                | FlowNodeKind::ParallelGateway
                | FlowNodeKind::InclusiveGateway
        )
    }
}

impl fmt::Display for FlowNodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FlowNodeKind::StartEvent => "startEvent",
            FlowNodeKind::UserTask => "userTask",
            FlowNodeKind::ServiceTask => "serviceTask",
            FlowNodeKind::ExclusiveGateway => "exclusiveGateway",
            FlowNodeKind::ParallelGateway => "parallelGateway",
            FlowNodeKind::InclusiveGateway => "inclusiveGateway",
            FlowNodeKind::EndEvent => "endEvent",
        };
        f.write_str(s)
    }
}

/// A typed node of the compiled process graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    pub kind: FlowNodeKind,
    pub name: Option<String>,
    /// Engine expression a service task evaluates.
    pub implementation: Option<String>,
    /// Id of the outgoing flow taken when no condition matches.
    pub default_flow: Option<String>,
    pub extensions: Vec<ExtensionElement>,
}

impl FlowNode {
    pub fn new(id: &str, kind: FlowNodeKind, name: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            kind,
            name: name.map(str::to_string),
            implementation: None,
            default_flow: None,
            extensions: Vec::new(),
        }
    }

    /// All extension elements with the given name, in attachment order.
    pub fn extensions_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a ExtensionElement> {
        self.extensions.iter().filter(move |e| e.name == name)
    }

    /// Text of the first extension element with the given name.
    pub fn extension_text(&self, name: &str) -> Option<&str> {
        self.extensions_named(name)
            .find_map(|e| e.text.as_deref())
    }
}

/// Namespaced metadata attached to a node for the execution engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionElement {
    pub namespace: String,
    pub prefix: String,
    pub name: String,
    pub text: Option<String>,
    pub attributes: Vec<ExtensionAttribute>,
}

/// A single namespaced key/value on an `ExtensionElement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionAttribute {
    pub namespace: String,
    pub name: String,
    pub value: String,
}

impl ExtensionElement {
    /// An element carrying a single text value, e.g. `<flowable:candidateParam>1,2</...>`.
    pub fn text(name: &str, value: String) -> Self {
        Self {
            namespace: EXTENSIONS_NAMESPACE.to_string(),
            prefix: EXTENSIONS_PREFIX.to_string(),
            name: name.to_string(),
            text: Some(value),
            attributes: Vec::new(),
        }
    }

    /// An element carrying structured attributes and no text.
    pub fn with_attributes<I>(name: &str, attributes: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            namespace: EXTENSIONS_NAMESPACE.to_string(),
            prefix: EXTENSIONS_PREFIX.to_string(),
            name: name.to_string(),
            text: None,
            attributes: attributes
                .into_iter()
                .map(|(name, value)| ExtensionAttribute {
                    namespace: EXTENSIONS_NAMESPACE.to_string(),
                    name,
                    value,
                })
                .collect(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

/// A directed edge of the compiled process graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceFlow {
    pub id: Option<String>,
    pub source_id: String,
    pub target_id: String,
    pub condition_expression: Option<String>,
    pub is_default: bool,
}

impl SequenceFlow {
    pub fn new(source_id: &str, target_id: &str) -> Self {
        Self {
            id: None,
            source_id: source_id.to_string(),
            target_id: target_id.to_string(),
            condition_expression: None,
            is_default: false,
        }
    }

    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }
}
