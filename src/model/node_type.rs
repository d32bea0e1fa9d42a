use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of node kinds a simplified model may contain.
///
/// Both compiler passes dispatch on this enum with exhaustive matches, so adding
/// a variant forces every pass to decide how to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    StartEvent,
    UserTask,
    CopyTask,
    ExclusiveGateway,
    ParallelGatewayFork,
    ParallelGatewayJoin,
    InclusiveGatewayFork,
    InclusiveGatewayJoin,
}

impl NodeType {
    pub const ALL: [NodeType; 8] = [
        NodeType::StartEvent,
        NodeType::UserTask,
        NodeType::CopyTask,
        NodeType::ExclusiveGateway,
        NodeType::ParallelGatewayFork,
        NodeType::ParallelGatewayJoin,
        NodeType::InclusiveGatewayFork,
        NodeType::InclusiveGatewayJoin,
    ];

    /// The name used for this kind in designer JSON.
    pub fn name(self) -> &'static str {
        match self {
            NodeType::StartEvent => "START_EVENT",
            NodeType::UserTask => "USER_TASK",
            NodeType::CopyTask => "COPY_TASK",
            NodeType::ExclusiveGateway => "EXCLUSIVE_GATEWAY",
            NodeType::ParallelGatewayFork => "PARALLEL_GATEWAY_FORK",
            NodeType::ParallelGatewayJoin => "PARALLEL_GATEWAY_JOIN",
            NodeType::InclusiveGatewayFork => "INCLUSIVE_GATEWAY_FORK",
            NodeType::InclusiveGatewayJoin => "INCLUSIVE_GATEWAY_JOIN",
        }
    }

    /// True for the kinds that own an ordered list of condition branches.
    pub fn is_branch_node(self) -> bool {
        matches!(
            self,
            NodeType::ExclusiveGateway
                | NodeType::ParallelGatewayFork
                | NodeType::InclusiveGatewayFork
        )
    }

    /// True for the branch kinds whose last authored branch becomes the default flow.
    pub fn has_default_flow(self) -> bool {
        matches!(
            self,
            NodeType::ExclusiveGateway | NodeType::InclusiveGatewayFork
        )
    }

    /// Resolves a raw type name for the node `node_id`, failing closed on unknown kinds.
    pub fn resolve(type_name: &str, node_id: &str) -> Result<Self, ValidationError> {
        type_name
            .parse()
            .map_err(|_| ValidationError::UnsupportedNodeType {
                node_id: node_id.to_string(),
                type_name: type_name.to_string(),
            })
    }
}

impl FromStr for NodeType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ValidationError::UnsupportedNodeType {
                node_id: "N/A".to_string(),
                type_name: s.to_string(),
            })
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
