//! Forgetting: drop entries whose strength has decayed below a threshold
//! and repair the adjacency map so no edge dangles.

use std::collections::HashSet;

use tracing::info;

use cortica_core::errors::{CorticaError, CorticaResult};
use cortica_core::memory::MemoryId;

use crate::graph::MemoryGraph;

pub(crate) fn run(graph: &mut MemoryGraph, threshold: f64) -> CorticaResult<usize> {
    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        return Err(CorticaError::InvalidThreshold { value: threshold });
    }

    let Some(decay) = graph.decay.as_ref() else {
        return Ok(0);
    };

    let now = graph.clock.now();
    let doomed: HashSet<MemoryId> = graph
        .entries
        .iter()
        .filter(|entry| decay.should_forget_at(&entry.id, threshold, now))
        .map(|entry| entry.id.clone())
        .collect();

    if doomed.is_empty() {
        return Ok(0);
    }

    for id in &doomed {
        graph.adjacency.remove(id);
        if let Some(decay) = graph.decay.as_mut() {
            // Dropping the timestamp lets a reused identity start fresh.
            decay.forget(id);
        }
    }

    graph.entries.retain(|entry| !doomed.contains(&entry.id));

    // Surviving entries shifted position; rebuild the id → position map.
    graph.index = graph
        .entries
        .iter()
        .enumerate()
        .map(|(pos, entry)| (entry.id.clone(), pos))
        .collect();

    info!(removed = doomed.len(), remaining = graph.entries.len(), "pruned decayed entries");
    Ok(doomed.len())
}
