use clap::{Parser, ValueEnum};
use fieldpath::error::GraphConversionError;
use fieldpath::prelude::*;
use serde::Deserialize;
use std::fs;
use std::process;
use std::time::Instant;

// --- JSON Deserialization Structs (Editor Format Specific) ---
// These structs match the editor's exported graph JSON and are only used
// here for conversion.

#[derive(Deserialize)]
struct RawGraph {
    nodes: Vec<RawNode>,
    edges: Vec<RawEdge>,
}

#[derive(Deserialize)]
struct RawNode {
    id: String,
    #[serde(default)]
    position: Option<RawPosition>,
    data: serde_json::Value,
}

#[derive(Deserialize)]
struct RawPosition {
    x: f64,
    y: f64,
}

#[derive(Deserialize)]
struct RawEdge {
    source: String,
    target: String,
    #[serde(default, alias = "sourceHandle")]
    source_handle: Option<String>,
}

#[derive(Deserialize, Default)]
struct RawHardware {
    #[serde(default)]
    motors: Vec<String>,
    #[serde(default)]
    servos: Vec<String>,
}

/// CLI-facing curve mode for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CurveModeCli {
    Linear,
    Smooth,
}

// --- Converter Implementation ---
// Conversion from the raw editor JSON to fieldpath's canonical graph.

impl IntoGraph for RawGraph {
    fn into_graph(self) -> std::result::Result<Graph, GraphConversionError> {
        let mut graph = Graph::new();

        for raw_node in self.nodes {
            let kind: NodeKind = serde_json::from_value(raw_node.data).map_err(|e| {
                GraphConversionError::ValidationError(format!(
                    "node '{}' has an invalid data record: {}",
                    raw_node.id, e
                ))
            })?;
            let mut node = Node::new(raw_node.id, kind);
            if let Some(position) = raw_node.position {
                node = node.with_position(position.x, position.y);
            }
            graph.add_node(node);
        }

        for raw_edge in self.edges {
            let handle = match raw_edge.source_handle.as_deref() {
                None => None,
                Some("true") => Some(Handle::True),
                Some("false") => Some(Handle::False),
                Some("loop") => Some(Handle::Loop),
                Some("next") => Some(Handle::Next),
                Some(other) => {
                    return Err(GraphConversionError::ValidationError(format!(
                        "edge '{}' -> '{}' has an unknown handle '{}'",
                        raw_edge.source, raw_edge.target, other
                    )));
                }
            };
            graph
                .try_connect(&raw_edge.source, handle, &raw_edge.target)
                .map_err(|e| GraphConversionError::ValidationError(e.to_string()))?;
        }

        Ok(graph)
    }
}

/// A graph-to-trajectory and code generation engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the editor graph JSON file
    graph_path: String,
    /// Optional path to the hardware configuration JSON file
    hardware_path: Option<String>,

    /// Robot origin pose as x,y,heading (field inches/degrees)
    #[arg(short, long, default_value = "72.0,72.0,0.0")]
    origin: String,

    /// Interpolation mode for the sampled curve
    #[arg(short, long, value_enum, default_value = "smooth")]
    mode: CurveModeCli,

    /// Print the sampled curve as JSON in addition to the program
    #[arg(long)]
    curve: bool,

    /// Save the compiled artifact to this path (bincode)
    #[arg(long)]
    save: Option<String>,
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}

fn parse_origin(raw: &str) -> Pose {
    let parts: Vec<f64> = raw
        .split(',')
        .map(|p| {
            p.trim()
                .parse()
                .unwrap_or_else(|e| exit_with_error(&format!("Invalid origin component '{p}': {e}")))
        })
        .collect();
    match parts.as_slice() {
        [x, y, heading] => Pose::new(*x, *y, *heading),
        _ => exit_with_error("Origin must be three comma-separated numbers: x,y,heading"),
    }
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File Loading and Conversion ---
    let graph_json = fs::read_to_string(&cli.graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read graph file '{}': {}",
            &cli.graph_path, e
        ))
    });
    let raw_graph: RawGraph = serde_json::from_str(&graph_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse graph JSON: {}", e)));
    let graph = raw_graph
        .into_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert editor graph: {}", e)));

    let hardware = match &cli.hardware_path {
        Some(path) => {
            let hardware_json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read hardware file '{}': {}", path, e))
            });
            let raw: RawHardware = serde_json::from_str(&hardware_json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to parse hardware JSON: {}", e))
            });
            HardwareConfig {
                motors: raw.motors,
                servos: raw.servos,
            }
        }
        None => {
            println!("No hardware file provided. Using an empty configuration.");
            HardwareConfig::new()
        }
    };

    let origin = parse_origin(&cli.origin);

    // --- 2. Trajectory Compilation ---
    println!("\nCompiling trajectory...");
    let compile_start = Instant::now();
    let order = flat_motion_order(&graph);
    let waypoints = build_waypoints(&graph, &order, origin);
    let mode = match cli.mode {
        CurveModeCli::Linear => CurveMode::Linear,
        CurveModeCli::Smooth => CurveMode::Smooth,
    };
    let curve = interpolate(&waypoints, mode, &SampleDensity::default());
    println!(
        "Trajectory ready: {} motion nodes, {} samples in {:?}",
        order.len(),
        curve.len(),
        compile_start.elapsed()
    );

    // --- 3. Code Generation ---
    let codegen_start = Instant::now();
    let program = CodeGenerator::new(&graph, &hardware)
        .generate()
        .unwrap_or_else(|e| exit_with_error(&format!("Code generation failed: {}", e)));
    println!("Program generated in {:?}\n", codegen_start.elapsed());

    println!("{program}");

    if cli.curve {
        let json = serde_json::to_string_pretty(&curve)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize curve: {}", e)));
        println!("{json}");
    }

    if let Some(path) = &cli.save {
        let artifact = CompiledAutonomy::new(program, waypoints, curve);
        artifact
            .save(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to save artifact: {}", e)));
        println!("Artifact saved to '{path}'");
    }

    println!("\nDone in {:?}", total_start.elapsed());
}
