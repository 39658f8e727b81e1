use std::collections::HashMap;

use cortica_core::memory::MemoryId;

/// A weighted neighbor reference. One directed half of a symmetric link.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub id: MemoryId,
    /// Cosine similarity at the moment the link was created. Never
    /// recomputed.
    pub weight: f64,
}

/// Symmetric weighted adjacency over memory ids.
///
/// Undirected in meaning, stored as two directed neighbor lists so each
/// endpoint enumerates its neighbors independently. Neighbor lists preserve
/// link insertion order, which keeps traversal tie-breaks deterministic.
#[derive(Debug, Default)]
pub(crate) struct AdjacencyMap {
    edges: HashMap<MemoryId, Vec<Neighbor>>,
}

impl AdjacencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a symmetric edge between `a` and `b`.
    pub fn link(&mut self, a: &MemoryId, b: &MemoryId, weight: f64) {
        self.edges.entry(a.clone()).or_default().push(Neighbor {
            id: b.clone(),
            weight,
        });
        self.edges.entry(b.clone()).or_default().push(Neighbor {
            id: a.clone(),
            weight,
        });
    }

    /// Neighbors of `id`, in link insertion order. Empty if unlinked.
    pub fn neighbors(&self, id: &MemoryId) -> &[Neighbor] {
        self.edges.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Remove `id` and every edge touching it, in both directions.
    pub fn remove(&mut self, id: &MemoryId) {
        let Some(outgoing) = self.edges.remove(id) else {
            return;
        };
        for neighbor in outgoing {
            let now_empty = match self.edges.get_mut(&neighbor.id) {
                Some(back) => {
                    back.retain(|n| &n.id != id);
                    back.is_empty()
                }
                None => false,
            };
            if now_empty {
                self.edges.remove(&neighbor.id);
            }
        }
    }

    /// Number of directed neighbor records (2x the undirected edge count).
    pub fn directed_len(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}
