use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use cortica_core::config::GraphConfig;
use cortica_core::errors::{CorticaError, CorticaResult};
use cortica_core::memory::{Metadata, MemoryEntry, MemoryId};
use cortica_core::similarity;
use cortica_core::traits::{Clock, SystemClock};
use cortica_decay::DecayEngine;

use crate::adjacency::{AdjacencyMap, Neighbor};
use crate::scored::ScoredEntry;
use crate::{pruning, traversal};

/// Similarity-linked memory store.
///
/// Entries are kept in insertion order — the only deterministic tie-break
/// for equal scores. Auto-linking compares each new entry against every
/// existing one, so building a graph of n entries costs O(n²) similarity
/// computations. That is the accepted cost at session scale (tens to low
/// thousands of entries); an index would only be a valid replacement if it
/// preserved exact threshold comparison semantics.
pub struct MemoryGraph {
    pub(crate) entries: Vec<MemoryEntry>,
    /// id → position in `entries`. Rebuilt after pruning.
    pub(crate) index: HashMap<MemoryId, usize>,
    pub(crate) adjacency: AdjacencyMap,
    pub(crate) decay: Option<DecayEngine>,
    pub(crate) config: GraphConfig,
    pub(crate) clock: Arc<dyn Clock>,
}

impl fmt::Debug for MemoryGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryGraph")
            .field("entries", &self.entries)
            .field("index", &self.index)
            .field("adjacency", &self.adjacency)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MemoryGraph {
    /// Create a graph on the system clock.
    pub fn new(config: GraphConfig) -> CorticaResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a graph with an injected time source.
    pub fn with_clock(config: GraphConfig, clock: Arc<dyn Clock>) -> CorticaResult<Self> {
        config.validate()?;
        let decay = if config.use_decay {
            Some(DecayEngine::with_clock(
                config.decay_half_life_secs,
                Arc::clone(&clock),
            )?)
        } else {
            None
        };
        Ok(Self {
            entries: Vec::new(),
            index: HashMap::new(),
            adjacency: AdjacencyMap::new(),
            decay,
            config,
            clock,
        })
    }

    /// Store a new entry and auto-link it against every existing entry.
    ///
    /// Returns the synthetic id assigned to the entry. A symmetric edge is
    /// created for each existing entry whose cosine similarity meets the
    /// configured `link_threshold`; the edge weight is that similarity,
    /// fixed at creation. Fails with `DimensionMismatch` when the vector's
    /// length differs from the dimensionality established by the first
    /// stored entry.
    pub fn store(
        &mut self,
        content: impl Into<String>,
        vector: Vec<f64>,
        metadata: Metadata,
    ) -> CorticaResult<MemoryId> {
        if let Some(expected) = self.dimensions() {
            if vector.len() != expected {
                return Err(CorticaError::DimensionMismatch {
                    expected,
                    actual: vector.len(),
                });
            }
        }

        let now = self.clock.now();
        let entry = MemoryEntry::new(content, vector, metadata, now);
        let id = entry.id.clone();

        let mut links = Vec::new();
        for existing in &self.entries {
            let sim = similarity::cosine(&entry.vector, &existing.vector)?;
            if sim >= self.config.link_threshold {
                links.push((existing.id.clone(), sim));
            }
        }
        for (other, weight) in &links {
            self.adjacency.link(&id, other, *weight);
        }

        if let Some(decay) = self.decay.as_mut() {
            decay.register_at(&id, now);
        }

        self.index.insert(id.clone(), self.entries.len());
        self.entries.push(entry);

        debug!(id = %id, links = links.len(), total = self.entries.len(), "stored entry");
        Ok(id)
    }

    /// Rank every entry by `cosine(query, vector) x freshness` and return
    /// the top `top_k`.
    ///
    /// When decay applies, every scored entry is refreshed — recall
    /// reinforces everything it touched, not only the returned top-k — and
    /// freshness is sampled before the refresh, so reported scores reflect
    /// strength at the moment of the read. The sort is stable: equal scores
    /// keep insertion order.
    pub fn retrieve(
        &mut self,
        query: &[f64],
        top_k: usize,
        use_decay: bool,
    ) -> CorticaResult<Vec<ScoredEntry>> {
        if top_k == 0 || self.entries.is_empty() {
            return Ok(Vec::new());
        }

        let now = self.clock.now();
        let apply_decay = use_decay && self.decay.is_some();

        let mut scored = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let sim = similarity::cosine(query, &entry.vector)?;
            let freshness = match &self.decay {
                Some(decay) if apply_decay => decay.strength_at(&entry.id, now),
                _ => 1.0,
            };
            scored.push(ScoredEntry {
                entry: entry.clone(),
                score: sim * freshness,
            });
        }

        if apply_decay {
            if let Some(decay) = self.decay.as_mut() {
                for entry in &self.entries {
                    decay.register_at(&entry.id, now);
                }
            }
        }

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(top_k);

        debug!(top_k, returned = scored.len(), "retrieve");
        Ok(scored)
    }

    /// Greedy association walk: start at the entry most similar to `query`,
    /// then repeatedly follow the strongest fresh link to an unvisited
    /// neighbor, for up to `depth` nodes total.
    ///
    /// A heuristic, not a search: each step is the locally best choice
    /// (`edge_weight x freshness(neighbor)`), with no backtracking. The
    /// result is a simple path; every node on it is refreshed.
    pub fn traverse(&mut self, query: &[f64], depth: usize) -> CorticaResult<Vec<MemoryEntry>> {
        traversal::walk(self, query, depth)
    }

    /// Remove every entry whose strength has fallen below `threshold`,
    /// together with its edges and decay timestamp.
    ///
    /// Returns the number of entries removed; 0 when decay is disabled.
    pub fn prune(&mut self, threshold: f64) -> CorticaResult<usize> {
        pruning::run(self, threshold)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &MemoryId) -> bool {
        self.index.contains_key(id)
    }

    /// Look up an entry by id.
    pub fn entry(&self, id: &MemoryId) -> Option<&MemoryEntry> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[MemoryEntry] {
        &self.entries
    }

    /// Linked neighbors of `id`, in link insertion order.
    pub fn neighbors(&self, id: &MemoryId) -> &[Neighbor] {
        self.adjacency.neighbors(id)
    }

    /// Number of undirected links in the graph.
    pub fn link_count(&self) -> usize {
        self.adjacency.directed_len() / 2
    }

    /// Vector dimensionality established by the first stored entry, if any.
    pub fn dimensions(&self) -> Option<usize> {
        self.entries.first().map(|e| e.vector.len())
    }

    /// Current strength of `id` in [0, 1]; 1.0 when decay is disabled.
    pub fn freshness(&self, id: &MemoryId) -> f64 {
        match &self.decay {
            Some(decay) => decay.strength(id),
            None => 1.0,
        }
    }
}
