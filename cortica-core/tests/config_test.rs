use cortica_core::config::{
    GraphConfig, DEFAULT_HALF_LIFE_SECS, DEFAULT_LINK_THRESHOLD, DEFAULT_PRUNE_THRESHOLD,
};
use cortica_core::CorticaError;

#[test]
fn default_config_is_valid() {
    let config = GraphConfig::default();
    assert!(config.validate().is_ok());
    assert!(config.use_decay);
    assert_eq!(config.decay_half_life_secs, DEFAULT_HALF_LIFE_SECS);
    assert_eq!(config.link_threshold, DEFAULT_LINK_THRESHOLD);
    assert_eq!(DEFAULT_PRUNE_THRESHOLD, 0.1);
}

#[test]
fn non_positive_half_life_is_rejected() {
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let config = GraphConfig {
            decay_half_life_secs: bad,
            ..GraphConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, CorticaError::InvalidConfig { .. }),
            "half-life {bad} should be rejected"
        );
    }
}

#[test]
fn link_threshold_outside_unit_interval_is_rejected() {
    for bad in [1.5, -1.5, f64::NAN] {
        let config = GraphConfig {
            link_threshold: bad,
            ..GraphConfig::default()
        };
        assert!(config.validate().is_err(), "threshold {bad} should be rejected");
    }
}

#[test]
fn boundary_link_thresholds_are_accepted() {
    for ok in [-1.0, 0.0, 1.0] {
        let config = GraphConfig {
            link_threshold: ok,
            ..GraphConfig::default()
        };
        assert!(config.validate().is_ok(), "threshold {ok} should be accepted");
    }
}

#[test]
fn config_deserializes_with_defaults() {
    let config: GraphConfig = serde_json::from_str(r#"{"link_threshold": 0.8}"#).unwrap();
    assert_eq!(config.link_threshold, 0.8);
    assert_eq!(config.decay_half_life_secs, DEFAULT_HALF_LIFE_SECS);
    assert!(config.use_decay);
}
