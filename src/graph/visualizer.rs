use super::ProcessGraph;
use itertools::Itertools;
use std::fmt::Write;

/// Formats a `ProcessGraph` into a human-readable listing for debugging.
pub fn visualize_graph(graph: &ProcessGraph) -> String {
    let mut output = String::new();
    writeln!(
        &mut output,
        "======== PROCESS: {} ({}) ========",
        graph.id,
        graph.name.as_deref().unwrap_or("unnamed")
    )
    .unwrap();

    writeln!(&mut output, "\n--- NODES ---").unwrap();
    for node in &graph.nodes {
        let mut line = format!("{:<24} {:<18}", node.id, node.kind.to_string());
        if let Some(name) = &node.name {
            write!(&mut line, " \"{}\"", name).unwrap();
        }
        if let Some(expr) = &node.implementation {
            write!(&mut line, " impl={}", expr).unwrap();
        }
        if let Some(default_flow) = &node.default_flow {
            write!(&mut line, " default={}", default_flow).unwrap();
        }
        writeln!(&mut output, "{}", line.trim_end()).unwrap();

        for ext in &node.extensions {
            let body = match &ext.text {
                Some(text) => text.clone(),
                None => ext
                    .attributes
                    .iter()
                    .map(|a| format!("{}={}", a.name, a.value))
                    .join(", "),
            };
            writeln!(&mut output, "    {}:{} [{}]", ext.prefix, ext.name, body).unwrap();
        }
    }

    // Flows grouped by source so each gateway's branches read together.
    writeln!(&mut output, "\n--- FLOWS ---").unwrap();
    let by_source = graph
        .flows
        .iter()
        .enumerate()
        .into_group_map_by(|(_, flow)| flow.source_id.as_str());
    for source in graph.flows.iter().map(|f| f.source_id.as_str()).unique() {
        let targets = by_source[source]
            .iter()
            .map(|(index, flow)| {
                let key = graph.flow_key(*index).unwrap_or_default();
                let marker = if flow.is_default { " (default)" } else { "" };
                format!("{} -> {}{}", key, flow.target_id, marker)
            })
            .join("\n    ");
        writeln!(&mut output, "{}\n    {}", source, targets).unwrap();
    }

    writeln!(
        &mut output,
        "\n================ {} nodes, {} flows ================",
        graph.nodes.len(),
        graph.flows.len()
    )
    .unwrap();
    output
}
