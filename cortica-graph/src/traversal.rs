//! Greedy walk over the link graph.
//!
//! Follows the strongest, freshest association chain from the best match to
//! the query. Each step is the locally best choice with no backtracking; the
//! visited set keeps the walk a simple path.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::debug;

use cortica_core::errors::CorticaResult;
use cortica_core::memory::{MemoryEntry, MemoryId};
use cortica_core::similarity;

use crate::graph::MemoryGraph;

pub(crate) fn walk(
    graph: &mut MemoryGraph,
    query: &[f64],
    depth: usize,
) -> CorticaResult<Vec<MemoryEntry>> {
    if depth == 0 || graph.entries.is_empty() {
        return Ok(Vec::new());
    }

    let now = graph.clock.now();

    // Start node: highest similarity to the query. Strict `>` keeps the
    // earliest entry on ties.
    let mut best: Option<(f64, usize)> = None;
    for (pos, entry) in graph.entries.iter().enumerate() {
        let sim = similarity::cosine(query, &entry.vector)?;
        if best.map_or(true, |(best_sim, _)| sim > best_sim) {
            best = Some((sim, pos));
        }
    }
    let Some((_, start)) = best else {
        return Ok(Vec::new());
    };

    let mut path = Vec::with_capacity(depth);
    let mut visited: HashSet<MemoryId> = HashSet::new();

    let mut current = graph.entries[start].id.clone();
    visited.insert(current.clone());
    path.push(graph.entries[start].clone());
    touch(graph, &current, now);

    // Up to depth - 1 steps beyond the start node.
    while path.len() < depth {
        let mut next: Option<(f64, MemoryId)> = None;
        for neighbor in graph.adjacency.neighbors(&current) {
            if visited.contains(&neighbor.id) {
                continue;
            }
            let metric = neighbor.weight * freshness_at(graph, &neighbor.id, now);
            if next.as_ref().map_or(true, |(best, _)| metric > *best) {
                next = Some((metric, neighbor.id.clone()));
            }
        }

        // Dead end: no unvisited neighbor.
        let Some((_, next_id)) = next else { break };
        let Some(&pos) = graph.index.get(&next_id) else {
            break;
        };

        visited.insert(next_id.clone());
        path.push(graph.entries[pos].clone());
        touch(graph, &next_id, now);
        current = next_id;
    }

    debug!(len = path.len(), depth, "traverse");
    Ok(path)
}

fn freshness_at(graph: &MemoryGraph, id: &MemoryId, now: DateTime<Utc>) -> f64 {
    graph
        .decay
        .as_ref()
        .map_or(1.0, |decay| decay.strength_at(id, now))
}

/// Read reinforces: walking over a node refreshes its timestamp.
fn touch(graph: &mut MemoryGraph, id: &MemoryId, now: DateTime<Utc>) {
    if let Some(decay) = graph.decay.as_mut() {
        decay.register_at(id, now);
    }
}
