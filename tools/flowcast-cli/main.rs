use clap::{Parser, ValueEnum};
use flowcast::prelude::*;
use std::fs;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Output formats the compiled graph can be written in.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable listing
    Text,
    /// Binary artifact (requires --output)
    Artifact,
}

/// Compiles a simplified workflow model into an executable process graph
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the simple model JSON file
    model_path: String,

    /// Id of the generated process
    #[arg(long, default_value = flowcast::compiler::DEFAULT_PROCESS_ID)]
    process_id: String,

    /// Display name of the generated process
    #[arg(long)]
    process_name: Option<String>,

    /// How to render the compiled graph
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Fail when the compiled graph violates a structural invariant
    #[arg(long)]
    strict: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. Loading ---
    let model_json = fs::read_to_string(&cli.model_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read model file '{}': {}",
            &cli.model_path, e
        ))
    });

    // --- 2. Compilation ---
    let mut builder = Compiler::from_json(&model_json)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()))
        .process_id(&cli.process_id);
    if let Some(name) = &cli.process_name {
        builder = builder.process_name(name);
    }

    let compile_start = Instant::now();
    let graph = builder
        .build()
        .compile()
        .unwrap_or_else(|e| exit_with_error(&format!("Compilation failed: {}", e)));
    info!(
        nodes = graph.nodes.len(),
        flows = graph.flows.len(),
        elapsed = ?compile_start.elapsed(),
        "compilation successful"
    );

    // --- 3. Integrity ---
    let issues = graph.check_integrity();
    for issue in &issues {
        warn!(%issue, "graph integrity");
    }
    if cli.strict && !issues.is_empty() {
        exit_with_error(&format!("{} integrity issue(s) found", issues.len()));
    }

    // --- 4. Output ---
    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&graph)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize graph: {}", e)));
            emit(cli.output.as_deref(), &json);
        }
        OutputFormat::Text => emit(cli.output.as_deref(), &visualize_graph(&graph)),
        OutputFormat::Artifact => {
            let path = cli.output.as_deref().unwrap_or_else(|| {
                exit_with_error("The artifact format requires --output.")
            });
            GraphArtifact::new(graph)
                .save(path)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            info!(path, "artifact written");
        }
    }

    info!(elapsed = ?total_start.elapsed(), "done");
}

fn emit(output: Option<&str>, content: &str) {
    match output {
        Some(path) => {
            fs::write(path, content).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path, e))
            });
            info!(path, "output written");
        }
        None => println!("{}", content),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
