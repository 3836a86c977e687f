//! Prelude module for convenient imports
//!
//! Re-exports the types and functions most programs need: the graph model
//! and its validated mutation API, the compile pipeline (resolver, waypoint
//! builder, interpolator, code generator), and the playback controllers.
//!
//! # Example
//!
//! ```rust,no_run
//! use fieldpath::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let mut graph = Graph::new();
//! graph.add_node(Node::new("start", NodeKind::Start));
//! graph.add_node(Node::new("fwd", NodeKind::Forward { distance: 24.0, power: 0.5 }));
//! graph.try_connect("start", None, "fwd")?;
//!
//! let order = flat_motion_order(&graph);
//! let waypoints = build_waypoints(&graph, &order, Pose::new(72.0, 72.0, 0.0));
//! let curve = interpolate(&waypoints, CurveMode::Smooth, &SampleDensity::default());
//!
//! let hardware = HardwareConfig::new();
//! let program = CodeGenerator::new(&graph, &hardware).generate()?;
//! println!("{program}");
//! # Ok(())
//! # }
//! ```

// Graph model and validation
pub use crate::graph::{
    ArcDirection, Category, CategoryMap, Edge, Graph, Handle, IntoGraph, Node, NodeId, NodeKind,
};

// Compile pipeline
pub use crate::codegen::{CodeGenerator, HardwareConfig};
pub use crate::kinematics::{Pose, Waypoint, WaypointSource, build_waypoints};
pub use crate::path::{
    CurveMode, CurveSample, SampleDensity, SampledCurve, cubic_bezier, interpolate,
};
pub use crate::resolver::flat_motion_order;

// Playback
pub use crate::playback::{NodeStepper, PlaybackController, PlaybackFrame, StepTransition};

// Artifacts
pub use crate::artifact::CompiledAutonomy;

// Error types
pub use crate::error::{ArtifactError, CompileError, ConnectionError, GraphConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
