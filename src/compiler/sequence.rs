use crate::constants::branch_flow_id;
use crate::error::ValidationError;
use crate::graph::{ProcessGraph, SequenceFlow};
use crate::model::{NodeType, SimpleNode};
use tracing::trace;

/// A unit of pending work. `Visit` carries the continuation target the node's
/// local chain must flow into once it runs out of nodes.
enum Step<'a> {
    Visit(&'a SimpleNode, &'a str),
    Emit(SequenceFlow),
}

/// Second compiler pass: connects the materialized nodes with sequence flows.
///
/// Fork/join pairing is never matched explicitly. Each branch is walked with the
/// gateway's continuation as its target, so every branch's last node flows into
/// whatever follows the gateway (or into the enclosing target when nothing does).
pub(super) struct SequenceFlowBuilder<'g> {
    graph: &'g mut ProcessGraph,
}

impl<'g> SequenceFlowBuilder<'g> {
    pub(super) fn new(graph: &'g mut ProcessGraph) -> Self {
        Self { graph }
    }

    /// Emits every flow reachable from `root`, closing open chains into `target`.
    ///
    /// Flows are appended in the same order a recursive walk would produce them:
    /// a gateway's branch flow is followed by that branch's whole subtree before
    /// the next branch flow.
    pub(super) fn build<'a>(mut self, root: &'a SimpleNode, target: &'a str) -> Result<(), ValidationError> {
        let mut stack = vec![Step::Visit(root, target)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Emit(flow) => self.graph.add_flow(flow),
                Step::Visit(node, target) => self.visit(node, target, &mut stack)?,
            }
        }
        Ok(())
    }

    fn visit<'a>(
        &mut self,
        node: &'a SimpleNode,
        target: &'a str,
        stack: &mut Vec<Step<'a>>,
    ) -> Result<(), ValidationError> {
        let Some(id) = node.present_id() else {
            return Ok(());
        };
        let kind = NodeType::resolve(&node.node_type, id)?;
        trace!(node_id = id, kind = %kind, target, "building flows");

        match kind {
            NodeType::StartEvent
            | NodeType::UserTask
            | NodeType::CopyTask
            | NodeType::ParallelGatewayJoin
            | NodeType::InclusiveGatewayJoin => match node.next() {
                Some(child) => {
                    let child_id = child.present_id().unwrap_or(target);
                    self.graph.add_flow(SequenceFlow::new(id, child_id));
                    stack.push(Step::Visit(child, target));
                }
                None => self.graph.add_flow(SequenceFlow::new(id, target)),
            },
            NodeType::ExclusiveGateway
            | NodeType::ParallelGatewayFork
            | NodeType::InclusiveGatewayFork => {
                let continuation = node.next().and_then(SimpleNode::present_id).unwrap_or(target);
                let last = node.condition_nodes.len();

                let mut steps = Vec::with_capacity(last * 2 + 1);
                for (index, branch) in node.condition_nodes.iter().enumerate() {
                    let position = index + 1;
                    let first = branch.first();
                    let branch_target = first.and_then(SimpleNode::present_id).unwrap_or(continuation);

                    let mut flow = SequenceFlow::new(id, branch_target).with_id(branch_flow_id(id, position));
                    flow.is_default = kind.has_default_flow() && position == last;
                    steps.push(Step::Emit(flow));
                    if let Some(first) = first {
                        steps.push(Step::Visit(first, continuation));
                    }
                }
                if let Some(child) = node.child_node.as_deref() {
                    steps.push(Step::Visit(child, target));
                }
                stack.extend(steps.into_iter().rev());
            }
        }
        Ok(())
    }
}
