use super::{Edge, Graph, Handle};
use crate::error::ConnectionError;

/// Connection-time rule enforcement.
///
/// Every rule is checked before the edge is appended, in a fixed order with
/// the first violation winning, so a rejected connection leaves the graph
/// byte-for-byte unchanged. Cycle prevention lives here, at mutation time;
/// the traversal-side visited sets are defense in depth only.
impl Graph {
    /// Attempts to add an edge from `source` to `target` on the given handle.
    ///
    /// Rules, in order:
    /// 1. no self-loops;
    /// 2. the edge must not close a cycle (repetition is expressed through
    ///    the dedicated `loop` block, never through raw graph cycles);
    /// 3. only branch-style sources may tag their edges, and a tagged
    ///    `(source, handle)` pair may carry at most one edge;
    /// 4. `loop`/`forEach` sources must tag every edge; their untagged
    ///    successors would never be scheduled;
    /// 5. untagged fan-out from one node must go to targets of distinct
    ///    categories, since same-category fan-out has no defined sequencing.
    ///
    /// On success the appended edge is returned for UI display.
    pub fn try_connect(
        &mut self,
        source: &str,
        handle: Option<Handle>,
        target: &str,
    ) -> Result<Edge, ConnectionError> {
        if source == target {
            return Err(ConnectionError::SelfConnection {
                node_id: source.to_string(),
            });
        }

        if self.reaches(target, source) {
            return Err(ConnectionError::CycleDetected {
                source_id: source.to_string(),
                target_id: target.to_string(),
            });
        }

        if let Some(handle) = handle {
            if let Some(source_node) = self.node(source) {
                if !source_node.kind.supports_handles() {
                    return Err(ConnectionError::UnsupportedHandle {
                        source_id: source.to_string(),
                        handle,
                    });
                }
            }
            if self.handle_successor(source, handle).is_some() {
                return Err(ConnectionError::HandleAlreadyConnected {
                    source_id: source.to_string(),
                    handle,
                });
            }
        } else {
            if let Some(source_node) = self.node(source) {
                if source_node.kind.requires_handles() {
                    return Err(ConnectionError::HandleRequired {
                        source_id: source.to_string(),
                    });
                }
            }
            // An unknown target cannot be categorized; the UI may reference
            // nodes transiently mid-delete, so it is tolerated here and the
            // traversals treat it as a dead end.
            if let Some(target_node) = self.node(target) {
                let category = self.categories().category_of(&target_node.kind);
                for existing in self.untagged_successors(source) {
                    let Some(existing_node) = self.node(existing) else {
                        continue;
                    };
                    if self.categories().category_of(&existing_node.kind) == category {
                        return Err(ConnectionError::DuplicateCategoryFanout {
                            source_id: source.to_string(),
                            category,
                        });
                    }
                }
            }
        }

        let edge = Edge {
            source: source.to_string(),
            target: target.to_string(),
            handle,
        };
        self.push_edge(edge.clone());
        Ok(edge)
    }
}
