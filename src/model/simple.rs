use super::NodeType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node of the simplified, designer-authored workflow tree.
///
/// The tree encodes control flow by ownership: `child_node` is the node that
/// follows in the default flow, and each entry of `condition_nodes` owns the
/// first node of one branch. A node without an `id` stands for "nothing here".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Raw kind name. Kept as text so that unknown kinds are rejected by the
    /// compiler rather than by the JSON parser.
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_node: Option<Box<SimpleNode>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub condition_nodes: Vec<ConditionBranch>,
}

/// One authored branch of a gateway. Its position in the gateway's list decides
/// the synthesized flow id and whether it becomes the default flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionBranch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_node: Option<Box<SimpleNode>>,
}

impl SimpleNode {
    pub fn new(id: &str, node_type: NodeType) -> Self {
        Self::with_raw_type(id, node_type.name())
    }

    /// Creates a node whose type name is not checked until compilation.
    pub fn with_raw_type(id: &str, type_name: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            node_type: type_name.to_string(),
            name: None,
            attributes: Map::new(),
            child_node: None,
            condition_nodes: Vec::new(),
        }
    }

    /// Loads a model tree from designer JSON.
    ///
    /// Nesting depth is only bounded by memory: deep `childNode` chains grow the
    /// stack on demand instead of hitting serde_json's recursion limit.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        deserializer.disable_recursion_limit();
        let node = SimpleNode::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
        deserializer.end()?;
        Ok(node)
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn then(mut self, child: SimpleNode) -> Self {
        self.child_node = Some(Box::new(child));
        self
    }

    pub fn branch(mut self, branch: ConditionBranch) -> Self {
        self.condition_nodes.push(branch);
        self
    }

    pub fn attribute(mut self, key: &str, value: Value) -> Self {
        self.attributes.insert(key.to_string(), value);
        self
    }

    /// The node's id, or `None` when this slot holds no node. An empty id counts as absent.
    pub fn present_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// The following node in the default flow, if it is a real node.
    pub fn next(&self) -> Option<&SimpleNode> {
        self.child_node
            .as_deref()
            .filter(|child| child.present_id().is_some())
    }
}

// Long chains would otherwise be dropped recursively, one stack frame per node.
impl Drop for SimpleNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<SimpleNode>> = Vec::new();
        pending.extend(self.child_node.take());
        for branch in &mut self.condition_nodes {
            pending.extend(branch.child_node.take());
        }
        while let Some(mut node) = pending.pop() {
            pending.extend(node.child_node.take());
            for branch in &mut node.condition_nodes {
                pending.extend(branch.child_node.take());
            }
        }
    }
}

impl ConditionBranch {
    pub fn to(child: SimpleNode) -> Self {
        Self {
            child_node: Some(Box::new(child)),
            ..Default::default()
        }
    }

    /// A branch that goes straight to the gateway's continuation.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The first node of this branch, if it is a real node.
    pub fn first(&self) -> Option<&SimpleNode> {
        self.child_node
            .as_deref()
            .filter(|child| child.present_id().is_some())
    }
}
