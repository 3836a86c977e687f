use super::{CategoryMap, Edge, Handle, Node, NodeId, NodeKind};
use ahash::AHashMap;

/// The block graph owned by an editing session.
///
/// Nodes live in a map keyed by id; edges keep their insertion order, which
/// is the order the compiler visits untagged fan-out in. All mutation goes
/// through the validated operations here and in the validator; the compiler
/// entry points only ever take `&Graph`.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: AHashMap<NodeId, Node>,
    edges: Vec<Edge>,
    categories: CategoryMap,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the category partition used by the fan-out rule.
    pub fn with_categories(mut self, categories: CategoryMap) -> Self {
        self.categories = categories;
        self
    }

    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node.id.clone(), node);
    }

    /// Removes a node and every edge touching it.
    pub fn remove_node(&mut self, id: &str) -> Option<Node> {
        let removed = self.nodes.remove(id);
        if removed.is_some() {
            self.edges.retain(|e| e.source != id && e.target != id);
        }
        removed
    }

    /// Removes the edge matching the given endpoints and handle, if present.
    pub fn disconnect(&mut self, source: &str, handle: Option<Handle>, target: &str) -> bool {
        let before = self.edges.len();
        self.edges
            .retain(|e| !(e.source == source && e.target == target && e.handle == handle));
        self.edges.len() != before
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All edges leaving `id`, in insertion order.
    pub fn outgoing<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Edge> {
        let id = id.to_string();
        self.edges.iter().filter(move |e| e.source == id)
    }

    /// Targets of untagged edges leaving `id`, in insertion order.
    pub fn untagged_successors<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a NodeId> {
        self.outgoing(id)
            .filter(|e| e.handle.is_none())
            .map(|e| &e.target)
    }

    /// Target of the edge leaving `id` on the given handle, if connected.
    pub fn handle_successor(&self, id: &str, handle: Handle) -> Option<&NodeId> {
        self.outgoing(id)
            .find(|e| e.handle == Some(handle))
            .map(|e| &e.target)
    }

    /// The unique start node, if the graph has exactly one.
    pub fn start_node(&self) -> Option<&Node> {
        let mut starts = self.nodes.values().filter(|n| n.kind == NodeKind::Start);
        match (starts.next(), starts.next()) {
            (Some(node), None) => Some(node),
            _ => None,
        }
    }

    pub fn start_count(&self) -> usize {
        self.nodes
            .values()
            .filter(|n| n.kind == NodeKind::Start)
            .count()
    }

    /// Whether `to` is reachable from `from` by following existing edges.
    /// Tolerates dangling edge targets; a missing node just ends that branch.
    pub(crate) fn reaches(&self, from: &str, to: &str) -> bool {
        let mut visited = ahash::AHashSet::new();
        let mut stack = vec![from.to_string()];
        while let Some(id) = stack.pop() {
            if id == to {
                return true;
            }
            if !visited.insert(id.clone()) {
                continue;
            }
            for edge in self.outgoing(&id) {
                stack.push(edge.target.clone());
            }
        }
        false
    }

    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }
}
