use super::{FlowNode, FlowNodeKind, SequenceFlow};
use crate::constants::ANONYMOUS_FLOW_INFIX;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// The compiled, executable graph of exactly one process.
///
/// Nodes keep the order in which they were materialized and flows the order in
/// which they were built, so two compilations of the same model compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessGraph {
    pub id: String,
    pub name: Option<String>,
    pub executable: bool,
    pub nodes: Vec<FlowNode>,
    pub flows: Vec<SequenceFlow>,
}

/// A structural defect found by `ProcessGraph::check_integrity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphIssue {
    DanglingFlow { flow: String, missing_id: String },
    StartEventCount(usize),
    EndEventCount(usize),
    Unreachable(String),
    CannotReachEnd(String),
}

impl fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphIssue::DanglingFlow { flow, missing_id } => {
                write!(f, "flow '{}' references unknown node '{}'", flow, missing_id)
            }
            GraphIssue::StartEventCount(n) => write!(f, "expected 1 start event, found {}", n),
            GraphIssue::EndEventCount(n) => write!(f, "expected 1 end event, found {}", n),
            GraphIssue::Unreachable(id) => write!(f, "node '{}' is not reachable from the start", id),
            GraphIssue::CannotReachEnd(id) => write!(f, "node '{}' has no path to the end", id),
        }
    }
}

impl ProcessGraph {
    pub fn new(id: &str, name: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.map(str::to_string),
            executable: true,
            nodes: Vec::new(),
            flows: Vec::new(),
        }
    }

    pub fn add_node(&mut self, node: FlowNode) {
        self.nodes.push(node);
    }

    pub fn add_flow(&mut self, flow: SequenceFlow) {
        self.flows.push(flow);
    }

    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a SequenceFlow> + 'a {
        self.flows.iter().filter(move |f| f.source_id == id)
    }

    pub fn incoming<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a SequenceFlow> + 'a {
        self.flows.iter().filter(move |f| f.target_id == id)
    }

    pub fn nodes_of_kind(&self, kind: FlowNodeKind) -> impl Iterator<Item = &FlowNode> {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }

    pub fn start_event(&self) -> Option<&FlowNode> {
        self.nodes_of_kind(FlowNodeKind::StartEvent).next()
    }

    pub fn end_event(&self) -> Option<&FlowNode> {
        self.nodes_of_kind(FlowNodeKind::EndEvent).next()
    }

    /// A stable key for the flow at `index`: its own id, or one derived from the
    /// process id and position when the flow is anonymous.
    pub fn flow_key(&self, index: usize) -> Option<String> {
        self.flows.get(index).map(|flow| match &flow.id {
            Some(id) => id.clone(),
            None => format!("{}{}{}", self.id, ANONYMOUS_FLOW_INFIX, index + 1),
        })
    }

    /// Checks the structural invariants every compiled graph must satisfy.
    /// An empty result means the graph is well formed.
    pub fn check_integrity(&self) -> Vec<GraphIssue> {
        let mut issues = Vec::new();

        let starts = self.nodes_of_kind(FlowNodeKind::StartEvent).count();
        if starts != 1 {
            issues.push(GraphIssue::StartEventCount(starts));
        }
        let ends = self.nodes_of_kind(FlowNodeKind::EndEvent).count();
        if ends != 1 {
            issues.push(GraphIssue::EndEventCount(ends));
        }

        let known: AHashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        let mut forward: AHashMap<&str, Vec<&str>> = AHashMap::new();
        let mut backward: AHashMap<&str, Vec<&str>> = AHashMap::new();
        for (index, flow) in self.flows.iter().enumerate() {
            for endpoint in [&flow.source_id, &flow.target_id] {
                if !known.contains(endpoint.as_str()) {
                    issues.push(GraphIssue::DanglingFlow {
                        flow: self.flow_key(index).unwrap_or_default(),
                        missing_id: endpoint.clone(),
                    });
                }
            }
            forward
                .entry(flow.source_id.as_str())
                .or_default()
                .push(flow.target_id.as_str());
            backward
                .entry(flow.target_id.as_str())
                .or_default()
                .push(flow.source_id.as_str());
        }

        if let Some(start) = self.start_event() {
            let reached = reachable_from(start.id.as_str(), &forward);
            issues.extend(
                self.nodes
                    .iter()
                    .filter(|n| !reached.contains(n.id.as_str()))
                    .map(|n| GraphIssue::Unreachable(n.id.clone())),
            );
        }
        if let Some(end) = self.end_event() {
            let reaching = reachable_from(end.id.as_str(), &backward);
            issues.extend(
                self.nodes
                    .iter()
                    .filter(|n| !reaching.contains(n.id.as_str()))
                    .map(|n| GraphIssue::CannotReachEnd(n.id.clone())),
            );
        }

        issues
    }
}

fn reachable_from<'a>(root: &'a str, edges: &AHashMap<&'a str, Vec<&'a str>>) -> AHashSet<&'a str> {
    let mut seen = AHashSet::new();
    let mut queue = VecDeque::from([root]);
    while let Some(id) = queue.pop_front() {
        if !seen.insert(id) {
            continue;
        }
        if let Some(next) = edges.get(id) {
            queue.extend(next.iter().copied());
        }
    }
    seen
}
