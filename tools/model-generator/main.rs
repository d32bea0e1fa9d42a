use clap::Parser;
use flowcast::constants::{CANDIDATE_PARAM, CANDIDATE_STRATEGY, FORM_FIELD_PERMISSIONS};
use flowcast::model::{ConditionBranch, NodeType, SimpleNode};
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::json;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A CLI tool to generate random simplified models for stress-testing the compiler
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_model.json")]
    output: String,

    /// Number of nodes in the top-level chain after the start event
    #[arg(long, default_value_t = 20)]
    length: usize,

    /// Maximum nesting depth of gateways
    #[arg(long, default_value_t = 3)]
    depth: usize,

    /// Maximum number of branches per gateway
    #[arg(long, default_value_t = 4)]
    max_branches: usize,
}

/// Mutable state shared across the whole generated tree.
struct Generator {
    rng: ThreadRng,
    next_id: usize,
    max_branches: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    if cli.max_branches < 1 {
        eprintln!("Error: --max-branches must be at least 1");
        std::process::exit(1);
    }

    let mut generator = Generator {
        rng: rand::rng(),
        next_id: 0,
        max_branches: cli.max_branches,
    };

    let mut root = SimpleNode::new("start", NodeType::StartEvent).named("Start");
    root.child_node = generator.chain(cli.length, cli.depth).map(Box::new);

    let json_output = serde_json::to_string_pretty(&root)?;
    fs::write(&cli.output, json_output)?;

    info!(
        nodes = generator.next_id + 1,
        path = %cli.output,
        "generated simple model"
    );
    Ok(())
}

impl Generator {
    fn fresh_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}_{}", prefix, self.next_id)
    }

    /// Builds a chain of `length` nodes, returning its first node.
    fn chain(&mut self, length: usize, depth: usize) -> Option<SimpleNode> {
        let nodes: Vec<SimpleNode> = (0..length).map(|_| self.node(depth)).collect();
        nodes.into_iter().rev().fold(None, |next, node| {
            Some(match next {
                Some(next) => attach(node, next),
                None => node,
            })
        })
    }

    fn node(&mut self, depth: usize) -> SimpleNode {
        let roll = self.rng.random_range(0..10);
        match roll {
            0..=4 => self.user_task(),
            5 => {
                let id = self.fresh_id("copy");
                SimpleNode::new(&id, NodeType::CopyTask)
                    .named("Carbon copy")
                    .attribute(CANDIDATE_STRATEGY, json!(self.rng.random_range(10..=60)))
            }
            _ if depth == 0 => self.user_task(),
            6 | 7 => self.gateway(NodeType::ExclusiveGateway, None, depth),
            8 => self.gateway(
                NodeType::ParallelGatewayFork,
                Some(NodeType::ParallelGatewayJoin),
                depth,
            ),
            _ => self.gateway(
                NodeType::InclusiveGatewayFork,
                Some(NodeType::InclusiveGatewayJoin),
                depth,
            ),
        }
    }

    fn user_task(&mut self) -> SimpleNode {
        let id = self.fresh_id("task");
        let permissions: Vec<_> = (0..self.rng.random_range(0..3))
            .map(|i| json!({ "field": format!("field_{}", i), "permission": self.rng.random_range(1..=3).to_string() }))
            .collect();
        let mut task = SimpleNode::new(&id, NodeType::UserTask)
            .named("Approve")
            .attribute(CANDIDATE_STRATEGY, json!(self.rng.random_range(10..=60)))
            .attribute(CANDIDATE_PARAM, json!(self.rng.random_range(1..=100).to_string()));
        if !permissions.is_empty() {
            task = task.attribute(FORM_FIELD_PERMISSIONS, json!(permissions));
        }
        task
    }

    /// A fork with random branches, optionally followed by its matching join.
    fn gateway(&mut self, fork: NodeType, join: Option<NodeType>, depth: usize) -> SimpleNode {
        let id = self.fresh_id("gateway");
        let mut gateway = SimpleNode::new(&id, fork);
        let branches = self.rng.random_range(1..=self.max_branches);
        for _ in 0..branches {
            let length = self.rng.random_range(0..3);
            gateway = gateway.branch(match self.chain(length, depth - 1) {
                Some(first) => ConditionBranch::to(first),
                None => ConditionBranch::empty(),
            });
        }
        if let Some(join) = join {
            let join_id = self.fresh_id("join");
            gateway = gateway.then(SimpleNode::new(&join_id, join));
        }
        gateway
    }
}

/// Appends `next` after the last node of the default chain starting at `node`.
fn attach(mut node: SimpleNode, next: SimpleNode) -> SimpleNode {
    let mut cursor = &mut node;
    while cursor.child_node.is_some() {
        cursor = cursor.child_node.as_deref_mut().unwrap();
    }
    cursor.child_node = Some(Box::new(next));
    node
}
