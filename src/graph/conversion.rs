use super::Graph;
use crate::error::GraphConversionError;

/// A trait for custom editor data models that can be converted into a
/// fieldpath [`Graph`].
///
/// This is the extension point that keeps the compiler format-agnostic: the
/// editor (or any other front end) parses its own persisted shape, then
/// implements `IntoGraph` to hand the compiler a canonical graph.
///
/// # Example
///
/// ```rust,no_run
/// use fieldpath::prelude::*;
/// use fieldpath::error::GraphConversionError;
///
/// struct MyBlock { id: String, block_type: String }
/// struct MyProgram { blocks: Vec<MyBlock> }
///
/// impl IntoGraph for MyProgram {
///     fn into_graph(self) -> std::result::Result<Graph, GraphConversionError> {
///         let mut graph = Graph::new();
///         for block in self.blocks {
///             let kind = match block.block_type.as_str() {
///                 "start" => NodeKind::Start,
///                 "forward" => NodeKind::Forward { distance: 24.0, power: 0.5 },
///                 other => {
///                     return Err(GraphConversionError::ValidationError(format!(
///                         "unknown block type '{other}'"
///                     )));
///                 }
///             };
///             graph.add_node(Node::new(block.id, kind));
///         }
///         // Convert your connections with `try_connect` here as well.
///         Ok(graph)
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a compiler-ready graph.
    fn into_graph(self) -> Result<Graph, GraphConversionError>;
}
