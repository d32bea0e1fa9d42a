//! Tests for the two compiler passes against the reference scenarios.
mod common;
use common::*;
use flowcast::prelude::*;

fn compile(root: SimpleNode) -> std::result::Result<ProcessGraph, ValidationError> {
    Compiler::builder(root).build().compile()
}

#[test]
fn test_linear_chain_closes_into_end_event() {
    let graph = compile(create_linear_model()).expect("Failed to compile");

    let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["S", "A", END_EVENT_ID]);
    assert_eq!(
        flow_tuples(&graph),
        vec![
            ("S".to_string(), "A".to_string(), None, false),
            ("A".to_string(), END_EVENT_ID.to_string(), None, false),
        ]
    );
    assert_eq!(graph.node("A").unwrap().kind, FlowNodeKind::UserTask);
}

#[test]
fn test_exclusive_gateway_with_empty_branch() {
    let graph = compile(create_exclusive_model()).expect("Failed to compile");

    assert_eq!(
        flow_tuples(&graph),
        vec![
            ("S".to_string(), "G".to_string(), None, false),
            (
                "G".to_string(),
                "B".to_string(),
                Some("G_SequenceFlow_1".to_string()),
                false
            ),
            ("B".to_string(), END_EVENT_ID.to_string(), None, false),
            (
                "G".to_string(),
                END_EVENT_ID.to_string(),
                Some("G_SequenceFlow_2".to_string()),
                true
            ),
        ]
    );

    let gateway = graph.node("G").unwrap();
    assert_eq!(gateway.kind, FlowNodeKind::ExclusiveGateway);
    assert_eq!(gateway.default_flow.as_deref(), Some("G_SequenceFlow_2"));
}

#[test]
fn test_parallel_branches_reconverge_on_join() {
    let graph = compile(create_parallel_model()).expect("Failed to compile");

    assert_eq!(
        flow_tuples(&graph),
        vec![
            ("S".to_string(), "PF".to_string(), None, false),
            (
                "PF".to_string(),
                "C".to_string(),
                Some("PF_SequenceFlow_1".to_string()),
                false
            ),
            ("C".to_string(), "PJ".to_string(), None, false),
            (
                "PF".to_string(),
                "D".to_string(),
                Some("PF_SequenceFlow_2".to_string()),
                false
            ),
            ("D".to_string(), "PJ".to_string(), None, false),
            ("PJ".to_string(), END_EVENT_ID.to_string(), None, false),
        ]
    );
    assert!(graph.node("PF").unwrap().default_flow.is_none());
    assert_eq!(graph.node("PJ").unwrap().kind, FlowNodeKind::ParallelGateway);
}

#[test]
fn test_unsupported_node_type_fails_compilation() {
    let root = SimpleNode::new("S", NodeType::StartEvent).then(
        SimpleNode::new("G", NodeType::ExclusiveGateway)
            .branch(ConditionBranch::to(SimpleNode::with_raw_type(
                "wait",
                "TIMER_EVENT",
            )))
            .branch(ConditionBranch::empty()),
    );

    match compile(root) {
        Err(ValidationError::UnsupportedNodeType { node_id, type_name }) => {
            assert_eq!(node_id, "wait");
            assert_eq!(type_name, "TIMER_EVENT");
        }
        other => panic!("Expected UnsupportedNodeType error, got {:?}", other),
    }
}

#[test]
fn test_gateway_without_conditions_fails_compilation() {
    for kind in [
        NodeType::ExclusiveGateway,
        NodeType::InclusiveGatewayFork,
        NodeType::ParallelGatewayFork,
    ] {
        let root = SimpleNode::new("S", NodeType::StartEvent).then(SimpleNode::new("G", kind));
        assert_eq!(
            compile(root).unwrap_err(),
            ValidationError::BranchWithoutConditions {
                node_id: "G".to_string()
            },
            "{} without branches must be rejected",
            kind
        );
    }
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let root = SimpleNode::new("S", NodeType::StartEvent).then(
        SimpleNode::new("G", NodeType::ExclusiveGateway)
            .branch(ConditionBranch::to(SimpleNode::new("X", NodeType::UserTask)))
            .branch(ConditionBranch::to(SimpleNode::new("X", NodeType::CopyTask))),
    );
    assert_eq!(
        compile(root).unwrap_err(),
        ValidationError::DuplicateNodeId {
            node_id: "X".to_string()
        }
    );
}

#[test]
fn test_inclusive_fork_marks_last_branch_default() {
    let root = SimpleNode::new("S", NodeType::StartEvent).then(
        SimpleNode::new("IF", NodeType::InclusiveGatewayFork)
            .branch(ConditionBranch::to(SimpleNode::new("a", NodeType::UserTask)))
            .branch(ConditionBranch::to(SimpleNode::new("b", NodeType::UserTask)))
            .branch(ConditionBranch::to(SimpleNode::new("c", NodeType::UserTask)))
            .then(SimpleNode::new("IJ", NodeType::InclusiveGatewayJoin)),
    );
    let graph = compile(root).expect("Failed to compile");

    let outgoing: Vec<_> = graph.outgoing("IF").collect();
    assert_eq!(outgoing.len(), 3);
    let defaults: Vec<_> = outgoing.iter().filter(|f| f.is_default).collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].id.as_deref(), Some("IF_SequenceFlow_3"));
    assert_eq!(defaults[0].target_id, "c");

    assert_eq!(graph.incoming("IJ").count(), 3);
    assert_eq!(graph.node("IJ").unwrap().default_flow, None);
}

#[test]
fn test_nested_gateway_without_join_uses_outer_continuation() {
    // The inner fork declares no join, so its branches converge on "after".
    let root = SimpleNode::new("S", NodeType::StartEvent).then(
        SimpleNode::new("outer", NodeType::ParallelGatewayFork)
            .branch(ConditionBranch::to(
                SimpleNode::new("inner", NodeType::ExclusiveGateway)
                    .branch(ConditionBranch::to(SimpleNode::new("x", NodeType::UserTask)))
                    .branch(ConditionBranch::to(SimpleNode::new("y", NodeType::UserTask))),
            ))
            .branch(ConditionBranch::empty())
            .then(SimpleNode::new("after", NodeType::ParallelGatewayJoin)),
    );
    let graph = compile(root).expect("Failed to compile");

    let x_out: Vec<_> = graph.outgoing("x").map(|f| f.target_id.as_str()).collect();
    let y_out: Vec<_> = graph.outgoing("y").map(|f| f.target_id.as_str()).collect();
    assert_eq!(x_out, vec!["after"]);
    assert_eq!(y_out, vec!["after"]);

    let empty_branch = graph
        .flows
        .iter()
        .find(|f| f.id.as_deref() == Some("outer_SequenceFlow_2"))
        .unwrap();
    assert_eq!(empty_branch.target_id, "after");
    assert!(!empty_branch.is_default);
    assert!(graph.check_integrity().is_empty());
}

#[test]
fn test_unknown_attributes_are_ignored() {
    let root = SimpleNode::new("S", NodeType::StartEvent).then(
        SimpleNode::new("A", NodeType::UserTask)
            .attribute("designerColor", serde_json::json!("#ff0000")),
    );
    let graph = compile(root).expect("Failed to compile");
    assert!(graph.node("A").unwrap().extensions.is_empty());
}

#[test]
fn test_empty_id_child_closes_into_end_event() {
    let json = r#"{
        "id": "s",
        "type": "START_EVENT",
        "childNode": { "id": "", "type": "USER_TASK" }
    }"#;
    let graph = Compiler::from_json(json)
        .expect("Failed to parse model")
        .build()
        .compile()
        .expect("Failed to compile");

    let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["s", END_EVENT_ID]);
    assert_eq!(
        flow_tuples(&graph),
        vec![("s".to_string(), END_EVENT_ID.to_string(), None, false)]
    );
}

#[test]
fn test_empty_id_branch_targets_continuation() {
    let json = r#"{
        "id": "s",
        "type": "START_EVENT",
        "childNode": {
            "id": "G",
            "type": "EXCLUSIVE_GATEWAY",
            "conditionNodes": [
                { "childNode": { "id": "B", "type": "USER_TASK" } },
                { "childNode": { "id": "", "type": "USER_TASK" } }
            ]
        }
    }"#;
    let graph = Compiler::from_json(json).unwrap().build().compile().unwrap();
    assert!(graph.node("").is_none());
    let default = graph.flows.iter().find(|f| f.is_default).unwrap();
    assert_eq!(default.id.as_deref(), Some("G_SequenceFlow_2"));
    assert_eq!(default.target_id, END_EVENT_ID);
}

#[test]
fn test_deep_json_chain_compiles() {
    let length = 1_000;
    let mut json = String::from(r#"{"id":"start","type":"START_EVENT""#);
    for i in 1..=length {
        json.push_str(&format!(r#","childNode":{{"id":"task_{}","type":"USER_TASK""#, i));
    }
    json.push_str(&"}".repeat(length + 1));

    let graph = Compiler::from_json(&json)
        .expect("Deep JSON should parse")
        .build()
        .compile()
        .expect("Failed to compile");
    assert_eq!(graph.nodes.len(), length + 2);
    assert_eq!(graph.flows.len(), length + 1);
    assert_eq!(
        graph.outgoing("task_1000").next().map(|f| f.target_id.as_str()),
        Some(END_EVENT_ID)
    );
}
