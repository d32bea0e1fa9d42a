use crate::constants::{
    CANDIDATE_PARAM, CANDIDATE_STRATEGY, COPY_TASK_EXPRESSION, END_EVENT_ID,
    FORM_FIELD_PERMISSIONS, branch_flow_id,
};
use crate::error::ValidationError;
use crate::graph::{ExtensionElement, FlowNode, FlowNodeKind, ProcessGraph};
use crate::model::{NodeType, SimpleNode};
use ahash::AHashSet;
use serde_json::Value;
use tracing::trace;

/// First compiler pass: turns every reachable `SimpleNode` into a `FlowNode`.
///
/// Nodes are visited pre-order, depth first: a node, then each branch in
/// authored order, then the node's own child.
pub(super) struct FlowNodeMaterializer<'a> {
    graph: &'a mut ProcessGraph,
    seen: AHashSet<&'a str>,
}

impl<'a> FlowNodeMaterializer<'a> {
    pub(super) fn new(graph: &'a mut ProcessGraph) -> Self {
        Self {
            graph,
            seen: AHashSet::new(),
        }
    }

    pub(super) fn materialize_tree(mut self, root: &'a SimpleNode) -> Result<(), ValidationError> {
        let root_id = root.present_id().ok_or(ValidationError::EmptyModel)?;
        let root_kind = NodeType::resolve(&root.node_type, root_id)?;
        if root_kind != NodeType::StartEvent {
            return Err(ValidationError::MissingStartEvent {
                node_id: root_id.to_string(),
                type_name: root.node_type.clone(),
            });
        }

        let mut stack: Vec<&'a SimpleNode> = vec![root];
        while let Some(node) = stack.pop() {
            let Some(id) = node.present_id() else {
                continue;
            };
            let kind = NodeType::resolve(&node.node_type, id)?;
            if kind == NodeType::StartEvent && !std::ptr::eq(node, root) {
                return Err(ValidationError::MisplacedStartEvent {
                    node_id: id.to_string(),
                });
            }
            if id == END_EVENT_ID || !self.seen.insert(id) {
                return Err(ValidationError::DuplicateNodeId {
                    node_id: id.to_string(),
                });
            }

            trace!(node_id = id, kind = %kind, "materializing node");
            self.graph.add_node(materialize_node(node, id, kind)?);

            // Pushed in reverse so branches pop before the shared continuation.
            if let Some(child) = node.child_node.as_deref() {
                stack.push(child);
            }
            if kind.is_branch_node() {
                stack.extend(
                    node.condition_nodes
                        .iter()
                        .rev()
                        .filter_map(|branch| branch.child_node.as_deref()),
                );
            }
        }
        Ok(())
    }
}

/// Builds the output node for a single simplified node.
fn materialize_node(node: &SimpleNode, id: &str, kind: NodeType) -> Result<FlowNode, ValidationError> {
    let name = node.name.as_deref();
    let flow_node = match kind {
        NodeType::StartEvent => FlowNode::new(id, FlowNodeKind::StartEvent, name),
        NodeType::UserTask => {
            let mut task = FlowNode::new(id, FlowNodeKind::UserTask, name);
            task.extensions = candidate_extensions(node, id)?;
            task.extensions.extend(form_field_permissions(node, id)?);
            task
        }
        NodeType::CopyTask => {
            let mut task = FlowNode::new(id, FlowNodeKind::ServiceTask, name);
            task.implementation = Some(COPY_TASK_EXPRESSION.to_string());
            task.extensions = candidate_extensions(node, id)?;
            task
        }
        NodeType::ExclusiveGateway => forking_gateway(node, id, FlowNodeKind::ExclusiveGateway)?,
        NodeType::InclusiveGatewayFork => forking_gateway(node, id, FlowNodeKind::InclusiveGateway)?,
        NodeType::ParallelGatewayFork => {
            require_conditions(node, id)?;
            FlowNode::new(id, FlowNodeKind::ParallelGateway, name)
        }
        NodeType::ParallelGatewayJoin => FlowNode::new(id, FlowNodeKind::ParallelGateway, name),
        NodeType::InclusiveGatewayJoin => FlowNode::new(id, FlowNodeKind::InclusiveGateway, name),
    };
    Ok(flow_node)
}

fn require_conditions(node: &SimpleNode, id: &str) -> Result<(), ValidationError> {
    if node.condition_nodes.is_empty() {
        return Err(ValidationError::BranchWithoutConditions {
            node_id: id.to_string(),
        });
    }
    Ok(())
}

/// An exclusive or inclusive fork. The last authored branch is the default flow.
fn forking_gateway(node: &SimpleNode, id: &str, kind: FlowNodeKind) -> Result<FlowNode, ValidationError> {
    require_conditions(node, id)?;
    let mut gateway = FlowNode::new(id, kind, node.name.as_deref());
    gateway.default_flow = Some(branch_flow_id(id, node.condition_nodes.len()));
    Ok(gateway)
}

fn invalid(id: &str, key: &str, message: &str) -> ValidationError {
    ValidationError::InvalidAttribute {
        node_id: id.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}

/// Candidate strategy and parameter, each omitted when unset.
fn candidate_extensions(node: &SimpleNode, id: &str) -> Result<Vec<ExtensionElement>, ValidationError> {
    let mut extensions = Vec::with_capacity(2);

    let strategy = match node.attributes.get(CANDIDATE_STRATEGY) {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(
            n.as_i64()
                .ok_or_else(|| invalid(id, CANDIDATE_STRATEGY, "expected an integer code"))?,
        ),
        Some(Value::String(s)) => Some(
            s.trim()
                .parse::<i64>()
                .map_err(|_| invalid(id, CANDIDATE_STRATEGY, "expected an integer code"))?,
        ),
        Some(_) => return Err(invalid(id, CANDIDATE_STRATEGY, "expected an integer code")),
    };
    if let Some(code) = strategy {
        extensions.push(ExtensionElement::text(CANDIDATE_STRATEGY, code.to_string()));
    }

    let param = match node.attributes.get(CANDIDATE_PARAM) {
        None | Some(Value::Null) => None,
        Some(value) => Some(
            scalar_text(value)
                .ok_or_else(|| invalid(id, CANDIDATE_PARAM, "expected a scalar value"))?,
        ),
    };
    if let Some(param) = param {
        extensions.push(ExtensionElement::text(CANDIDATE_PARAM, param));
    }

    Ok(extensions)
}

/// One extension element per entry of the form-field permission list.
fn form_field_permissions(node: &SimpleNode, id: &str) -> Result<Vec<ExtensionElement>, ValidationError> {
    let entries = match node.attributes.get(FORM_FIELD_PERMISSIONS) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(invalid(id, FORM_FIELD_PERMISSIONS, "expected a list")),
    };

    entries
        .iter()
        .map(|entry| {
            let Value::Object(fields) = entry else {
                return Err(invalid(id, FORM_FIELD_PERMISSIONS, "entries must be objects"));
            };
            let mut attributes = Vec::with_capacity(fields.len());
            for (key, value) in fields {
                if value.is_null() {
                    continue;
                }
                let text = scalar_text(value).ok_or_else(|| {
                    invalid(id, FORM_FIELD_PERMISSIONS, "entry values must be scalars")
                })?;
                attributes.push((key.clone(), text));
            }
            Ok(ExtensionElement::with_attributes(FORM_FIELD_PERMISSIONS, attributes))
        })
        .collect()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
