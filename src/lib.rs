//! # Fieldpath - Block Graph to Trajectory and Program Compiler
//!
//! **Fieldpath** compiles a directed graph of robot-action blocks (movement,
//! mechanism, control flow) into two artifacts: a continuous field trajectory
//! for visualization and animation, and a structured op-mode program in the
//! robot controller's target language. The surrounding editor owns the graph
//! and the canvas; this crate owns validation, execution-order resolution,
//! kinematics, spline interpolation, and code emission.
//!
//! ## Core Workflow
//!
//! 1.  **Build the graph**: the editor adds blocks with
//!     [`graph::Graph::add_node`] and wires them with
//!     [`graph::Graph::try_connect`], which enforces the
//!     graph-shape rules (no self-loops, no raw cycles, unique branch
//!     handles, category-exclusive fan-out) at connection time.
//! 2.  **Resolve**: [`resolver::flat_motion_order`] walks the untagged edges
//!     from the start block and produces the motion sequence.
//! 3.  **Derive the trajectory**: [`kinematics::build_waypoints`] integrates
//!     the motion deltas into absolute field poses, and
//!     [`path::interpolate`] samples them into a dense curve for rendering.
//! 4.  **Generate code**: [`codegen::CodeGenerator`] performs the branching
//!     walk and emits the program text, one fixed template per block kind.
//! 5.  **Preview**: [`playback::PlaybackController`] and
//!     [`playback::NodeStepper`] animate the sampled curve under the
//!     editor's frame loop.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fieldpath::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut graph = Graph::new();
//!     graph.add_node(Node::new("start", NodeKind::Start));
//!     graph.add_node(Node::new("fwd", NodeKind::Forward { distance: 24.0, power: 0.5 }));
//!     graph.add_node(Node::new("turn", NodeKind::TurnRight { angle: 90.0 }));
//!     graph.try_connect("start", None, "fwd")?;
//!     graph.try_connect("fwd", None, "turn")?;
//!
//!     // Trajectory for the field preview
//!     let order = flat_motion_order(&graph);
//!     let waypoints = build_waypoints(&graph, &order, Pose::new(72.0, 72.0, 0.0));
//!     let curve = interpolate(&waypoints, CurveMode::Smooth, &SampleDensity::default());
//!     println!("{} samples", curve.len());
//!
//!     // Program for the robot controller
//!     let hardware = HardwareConfig::new().motor("lift").servo("claw");
//!     let program = CodeGenerator::new(&graph, &hardware).generate()?;
//!     println!("{program}");
//!
//!     Ok(())
//! }
//! ```
//!
//! The compiler only ever reads `&Graph`: every entry point is a pure
//! function of the snapshot it is handed, so compiling the same graph and
//! origin pose twice yields identical curves and identical program text.

pub mod artifact;
pub mod codegen;
pub mod error;
pub mod graph;
pub mod kinematics;
pub mod path;
pub mod playback;
pub mod prelude;
pub mod resolver;
