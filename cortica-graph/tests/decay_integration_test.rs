use std::sync::Arc;

use cortica_core::config::GraphConfig;
use cortica_core::memory::Metadata;
use cortica_core::CorticaError;
use cortica_graph::MemoryGraph;
use test_fixtures::{unit_at_degrees, ManualClock};

fn decaying_graph(half_life_secs: f64, link_threshold: f64) -> (MemoryGraph, ManualClock) {
    let clock = ManualClock::new();
    let graph = MemoryGraph::with_clock(
        GraphConfig {
            use_decay: true,
            decay_half_life_secs: half_life_secs,
            link_threshold,
        },
        Arc::new(clock.clone()),
    )
    .unwrap();
    (graph, clock)
}

#[test]
fn scores_reflect_strength_at_the_moment_of_the_read() {
    let (mut graph, clock) = decaying_graph(10.0, 0.99);
    graph.store("a", vec![1.0, 0.0], Metadata::new()).unwrap();

    clock.advance_secs(20); // Strength 0.25.
    let hits = graph.retrieve(&[1.0, 0.0], 1, true).unwrap();
    assert!((hits[0].score - 0.25).abs() < 1e-6);

    // The read refreshed the entry, so an immediate second read scores full.
    let hits = graph.retrieve(&[1.0, 0.0], 1, true).unwrap();
    assert!((hits[0].score - 1.0).abs() < 1e-6);
}

#[test]
fn retrieval_refreshes_every_scored_entry_not_only_the_top_k() {
    let (mut graph, clock) = decaying_graph(10.0, 0.99);
    graph.store("near", vec![1.0, 0.0], Metadata::new()).unwrap();
    let far = graph.store("far", vec![0.0, 1.0], Metadata::new()).unwrap();

    clock.advance_secs(20);
    // top_k = 1 returns only "near", but "far" was scored and refreshed too.
    let hits = graph.retrieve(&[1.0, 0.0], 1, true).unwrap();
    assert_eq!(hits.len(), 1);
    assert!((graph.freshness(&far) - 1.0).abs() < 1e-9);
}

#[test]
fn use_decay_false_skips_weighting_and_refresh() {
    let (mut graph, clock) = decaying_graph(10.0, 0.99);
    let id = graph.store("a", vec![1.0, 0.0], Metadata::new()).unwrap();

    clock.advance_secs(20);
    let hits = graph.retrieve(&[1.0, 0.0], 1, false).unwrap();
    assert!((hits[0].score - 1.0).abs() < 1e-6);
    // No reinforcement without decay weighting.
    assert!((graph.freshness(&id) - 0.25).abs() < 1e-6);
}

#[test]
fn decay_reorders_retrieval_in_favor_of_fresh_entries() {
    let (mut graph, clock) = decaying_graph(10.0, 0.99);
    graph
        .store("stale-close", vec![1.0, 0.0], Metadata::new())
        .unwrap();
    clock.advance_secs(40); // stale-close decays to 0.0625.
    graph
        .store("fresh-close", vec![0.9, 0.1], Metadata::new())
        .unwrap();

    let hits = graph.retrieve(&[1.0, 0.0], 2, true).unwrap();
    // Similarity alone would rank stale-close first (1.0 vs ≈0.995);
    // freshness weighting flips the order.
    assert_eq!(hits[0].entry.content, "fresh-close");
    assert_eq!(hits[1].entry.content, "stale-close");
}

#[test]
fn prune_removes_weak_entries_and_their_edges() {
    let (mut graph, clock) = decaying_graph(10.0, 0.8);
    let a = graph.store("a", unit_at_degrees(0.0), Metadata::new()).unwrap();
    let b = graph.store("b", unit_at_degrees(30.0), Metadata::new()).unwrap();
    clock.advance_secs(20); // a and b decay to 0.25.
    let c = graph.store("c", unit_at_degrees(60.0), Metadata::new()).unwrap();

    // b–c edge exists (cos 30° ≈ 0.866); a–b too; a–c does not (0.5 < 0.8).
    assert_eq!(graph.neighbors(&b).len(), 2);

    let removed = graph.prune(0.3).unwrap();
    assert_eq!(removed, 2);
    assert!(!graph.contains(&a));
    assert!(!graph.contains(&b));
    assert!(graph.contains(&c));
    // No dangling edges to pruned entries.
    assert!(graph.neighbors(&c).is_empty());
    assert_eq!(graph.link_count(), 0);

    let hits = graph.retrieve(&unit_at_degrees(0.0), 10, false).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].entry.content, "c");
}

#[test]
fn prune_count_matches_the_scenario() {
    let (mut graph, clock) = decaying_graph(10.0, 0.99);
    let weak = graph.store("weak", vec![1.0, 0.0], Metadata::new()).unwrap();
    clock.advance_secs(23); // Strength ≈ 0.20.
    graph.store("strong", vec![0.0, 1.0], Metadata::new()).unwrap();

    let removed = graph.prune(0.3).unwrap();
    assert_eq!(removed, 1);
    assert!(!graph.contains(&weak));

    let hits = graph.retrieve(&[1.0, 0.0], 10, false).unwrap();
    assert!(hits.iter().all(|h| h.entry.content != "weak"));
}

#[test]
fn prune_is_a_noop_without_decay() {
    let mut graph = MemoryGraph::new(GraphConfig {
        use_decay: false,
        ..GraphConfig::default()
    })
    .unwrap();
    graph.store("a", vec![1.0, 0.0], Metadata::new()).unwrap();
    assert_eq!(graph.prune(0.9).unwrap(), 0);
    assert_eq!(graph.len(), 1);
}

#[test]
fn prune_rejects_out_of_range_thresholds() {
    let (mut graph, _clock) = decaying_graph(10.0, 0.8);
    for bad in [-0.1, 1.1, f64::NAN] {
        let err = graph.prune(bad).unwrap_err();
        assert!(matches!(err, CorticaError::InvalidThreshold { .. }));
    }
}

#[test]
fn pruning_everything_leaves_a_usable_graph() {
    let (mut graph, clock) = decaying_graph(10.0, 0.8);
    graph.store("a", unit_at_degrees(0.0), Metadata::new()).unwrap();
    graph.store("b", unit_at_degrees(30.0), Metadata::new()).unwrap();

    clock.advance_secs(200);
    let removed = graph.prune(0.5).unwrap();
    assert_eq!(removed, 2);
    assert!(graph.is_empty());

    // The graph keeps working after a full wipe.
    let id = graph.store("again", unit_at_degrees(0.0), Metadata::new()).unwrap();
    assert!(graph.contains(&id));
    assert_eq!(graph.retrieve(&unit_at_degrees(0.0), 1, true).unwrap().len(), 1);
}

#[test]
fn traversal_reinforces_the_walked_path() {
    let (mut graph, clock) = decaying_graph(10.0, 0.8);
    let a = graph.store("a", unit_at_degrees(0.0), Metadata::new()).unwrap();
    let b = graph.store("b", unit_at_degrees(30.0), Metadata::new()).unwrap();
    let c = graph.store("c", unit_at_degrees(60.0), Metadata::new()).unwrap();

    clock.advance_secs(20);
    let path = graph.traverse(&unit_at_degrees(0.0), 3).unwrap();
    assert_eq!(path.len(), 3);

    // Every node on the path was touched at walk time.
    for id in [&a, &b, &c] {
        assert!((graph.freshness(id) - 1.0).abs() < 1e-9);
    }
}
