//! Common test utilities for building simplified models.
use flowcast::prelude::*;

/// Scenario A: `Start(S) -> UserTask(A)`.
#[allow(dead_code)]
pub fn create_linear_model() -> SimpleNode {
    SimpleNode::new("S", NodeType::StartEvent)
        .named("Start")
        .then(SimpleNode::new("A", NodeType::UserTask).named("Approve"))
}

/// Scenario B: `Start(S) -> ExclusiveGateway(G)` with branches `-> B` and an empty one.
#[allow(dead_code)]
pub fn create_exclusive_model() -> SimpleNode {
    SimpleNode::new("S", NodeType::StartEvent).then(
        SimpleNode::new("G", NodeType::ExclusiveGateway)
            .branch(ConditionBranch::to(SimpleNode::new("B", NodeType::UserTask)))
            .branch(ConditionBranch::empty()),
    )
}

/// Scenario C: `Start(S) -> ParallelGatewayFork(PF)` with branches `-> C` and `-> D`,
/// joined by `ParallelGatewayJoin(PJ)`.
#[allow(dead_code)]
pub fn create_parallel_model() -> SimpleNode {
    SimpleNode::new("S", NodeType::StartEvent).then(
        SimpleNode::new("PF", NodeType::ParallelGatewayFork)
            .branch(ConditionBranch::to(SimpleNode::new("C", NodeType::UserTask)))
            .branch(ConditionBranch::to(SimpleNode::new("D", NodeType::UserTask)))
            .then(SimpleNode::new("PJ", NodeType::ParallelGatewayJoin)),
    )
}

/// A model mixing every node kind, with nested gateways.
///
/// ```text
/// start -> submit -> route(excl) -+-> lead -> review(incl fork) -+-> legal ---+-> review_join -> notify(copy)
///                                 |                              +-> finance -+
///                                 |                              +-> (empty) -+
///                                 +-> (empty) ----------------------------------^
/// notify -> sign(par fork) -+-> ceo --+-> sign_join -> archive -> End
///                           +-> cfo --+
/// ```
#[allow(dead_code)]
pub fn create_complex_model() -> SimpleNode {
    let review = SimpleNode::new("review", NodeType::InclusiveGatewayFork)
        .branch(ConditionBranch::to(SimpleNode::new("legal", NodeType::UserTask)))
        .branch(ConditionBranch::to(SimpleNode::new("finance", NodeType::UserTask)))
        .branch(ConditionBranch::empty())
        .then(SimpleNode::new("review_join", NodeType::InclusiveGatewayJoin));

    let sign = SimpleNode::new("sign", NodeType::ParallelGatewayFork)
        .branch(ConditionBranch::to(SimpleNode::new("ceo", NodeType::UserTask)))
        .branch(ConditionBranch::to(SimpleNode::new("cfo", NodeType::UserTask)))
        .then(
            SimpleNode::new("sign_join", NodeType::ParallelGatewayJoin)
                .then(SimpleNode::new("archive", NodeType::UserTask)),
        );

    let route = SimpleNode::new("route", NodeType::ExclusiveGateway)
        .branch(ConditionBranch::to(
            SimpleNode::new("lead", NodeType::UserTask).then(review),
        ))
        .branch(ConditionBranch::empty())
        .then(SimpleNode::new("notify", NodeType::CopyTask).then(sign));

    SimpleNode::new("start", NodeType::StartEvent)
        .then(SimpleNode::new("submit", NodeType::UserTask).then(route))
}

/// Designer JSON for a small leave-request workflow.
#[allow(dead_code)]
pub const LEAVE_REQUEST_JSON: &str = r#"{
    "id": "start",
    "type": "START_EVENT",
    "name": "发起人",
    "childNode": {
        "id": "manager",
        "type": "USER_TASK",
        "name": "Manager approval",
        "attributes": {
            "candidateStrategy": 30,
            "candidateParam": "1,2",
            "formFieldPermissions": [
                { "field": "days", "permission": "1" },
                { "field": "reason", "permission": "2" }
            ],
            "someDesignerOnlyKey": { "x": 1 }
        },
        "childNode": {
            "id": "days_check",
            "type": "EXCLUSIVE_GATEWAY",
            "conditionNodes": [
                {
                    "name": "more than 3 days",
                    "childNode": { "id": "director", "type": "USER_TASK", "name": "Director approval" }
                },
                { "name": "otherwise" }
            ],
            "childNode": {
                "id": "hr_copy",
                "type": "COPY_TASK",
                "name": "Notify HR",
                "attributes": { "candidateStrategy": "10" }
            }
        }
    }
}"#;

/// Builds a `Start -> task_1 -> ... -> task_n` chain without recursion.
#[allow(dead_code)]
pub fn create_long_chain(length: usize) -> SimpleNode {
    let mut next: Option<SimpleNode> = None;
    for i in (1..=length).rev() {
        let mut node = SimpleNode::new(&format!("task_{}", i), NodeType::UserTask);
        node.child_node = next.take().map(Box::new);
        next = Some(node);
    }
    let mut root = SimpleNode::new("start", NodeType::StartEvent);
    root.child_node = next.map(Box::new);
    root
}

/// Collects `(source, target, id, is_default)` tuples for easy comparison.
#[allow(dead_code)]
pub fn flow_tuples(graph: &ProcessGraph) -> Vec<(String, String, Option<String>, bool)> {
    graph
        .flows
        .iter()
        .map(|f| {
            (
                f.source_id.clone(),
                f.target_id.clone(),
                f.id.clone(),
                f.is_default,
            )
        })
        .collect()
}
