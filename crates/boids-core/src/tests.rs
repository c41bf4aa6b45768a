use glam::DVec2;

use crate::commands::FlockCommand;
use crate::config::{FlockConfig, RuleWeights};
use crate::enums::*;
use crate::error::FlockError;
use crate::state::{BoidView, FlockSnapshot};
use crate::types::{Boid, RuleFlags, SimTime};

#[test]
fn test_default_config_is_valid() {
    assert_eq!(FlockConfig::default().validate(), Ok(()));
}

#[test]
fn test_default_config_matches_reference_constants() {
    let config = FlockConfig::default();
    assert_eq!(config.population, 100);
    assert_eq!(config.canvas_width, 1200.0);
    assert_eq!(config.canvas_height, 800.0);
    assert_eq!(config.visual_range, 30.0);
    assert_eq!(config.min_separation, 30.0);
    assert_eq!(config.max_speed, 15.0);
    assert_eq!(config.boundary_margin, 150.0);
    assert_eq!(config.turn_factor, 1.0);
    assert_eq!(
        config.weights,
        RuleWeights {
            cohesion: 0.1,
            alignment: 0.5,
            separation: 1.1,
        }
    );
    assert_eq!(config.initial_flags, RuleFlags::all());
    assert!(config.predator_enabled);
}

#[test]
fn test_validate_rejects_bad_values() {
    let cases: Vec<(FlockConfig, &str)> = vec![
        (
            FlockConfig {
                visual_range: -1.0,
                ..Default::default()
            },
            "visual_range must be non-negative",
        ),
        (
            FlockConfig {
                max_speed: 0.0,
                ..Default::default()
            },
            "max_speed must be positive",
        ),
        (
            FlockConfig {
                max_speed: -3.0,
                ..Default::default()
            },
            "max_speed must be positive",
        ),
        (
            FlockConfig {
                canvas_width: 0.0,
                ..Default::default()
            },
            "canvas_width must be positive",
        ),
        (
            FlockConfig {
                min_separation: f64::NAN,
                ..Default::default()
            },
            "min_separation must be non-negative",
        ),
        (
            FlockConfig {
                weights: RuleWeights {
                    cohesion: f64::INFINITY,
                    ..Default::default()
                },
                ..Default::default()
            },
            "rule weights must be finite",
        ),
    ];

    for (config, message) in cases {
        assert_eq!(config.validate(), Err(FlockError::InvalidConfig(message)));
    }
}

#[test]
fn test_validate_leaves_cap_to_the_engine() {
    let config = FlockConfig {
        population: 100,
        max_population: Some(50),
        ..Default::default()
    };
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn test_config_partial_json_uses_defaults() {
    let config: FlockConfig =
        serde_json::from_str(r#"{"population": 12, "update_order": "Snapshot"}"#).unwrap();
    assert_eq!(config.population, 12);
    assert_eq!(config.update_order, UpdateOrder::Snapshot);
    assert_eq!(config.visual_range, 30.0);
    assert_eq!(config.neighbor_strategy, NeighborStrategy::BruteForce);
}

#[test]
fn test_rule_flags_toggle() {
    let mut flags = RuleFlags::all();
    assert!(!flags.toggle(Rule::Alignment));
    assert!(flags.cohesion);
    assert!(!flags.alignment);
    assert!(flags.separation);
    assert!(flags.toggle(Rule::Alignment));
    assert_eq!(flags, RuleFlags::all());

    flags.set(Rule::Separation, false);
    assert!(!flags.is_enabled(Rule::Separation));
    assert!(flags.is_enabled(Rule::Cohesion));
}

#[test]
fn test_boid_heading_and_speed() {
    let boid = Boid::new(0.0, 0.0, 3.0, 4.0);
    assert_eq!(boid.speed(), 5.0);

    let up = Boid::new(0.0, 0.0, 0.0, 2.0);
    assert!((up.heading_degrees() - 90.0).abs() < 1e-12);

    let left = Boid::new(0.0, 0.0, -1.0, 0.0);
    assert!((left.heading_degrees() - 180.0).abs() < 1e-12);
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    time.advance();
    time.advance();
    assert_eq!(time.tick, 2);
}

#[test]
fn test_command_wire_format() {
    let cmd: FlockCommand =
        serde_json::from_str(r#"{"type": "ToggleRule", "rule": "Separation"}"#).unwrap();
    assert_eq!(
        cmd,
        FlockCommand::ToggleRule {
            rule: Rule::Separation
        }
    );

    let click: FlockCommand =
        serde_json::from_str(r#"{"type": "Click", "x": 10.5, "y": 20.0}"#).unwrap();
    assert_eq!(click, FlockCommand::Click { x: 10.5, y: 20.0 });
}

#[test]
fn test_snapshot_mean_speed() {
    let snapshot = FlockSnapshot {
        boids: vec![
            BoidView::from(&Boid::new(0.0, 0.0, 3.0, 4.0)),
            BoidView::from(&Boid::new(0.0, 0.0, 0.0, 1.0)),
        ],
        ..Default::default()
    };
    assert_eq!(snapshot.mean_speed(), 3.0);
    assert_eq!(FlockSnapshot::default().mean_speed(), 0.0);
}

#[test]
fn test_boid_view_copies_state() {
    let boid = Boid::new(5.0, 6.0, 0.0, -1.0);
    let view = BoidView::from(&boid);
    assert_eq!(view.position, DVec2::new(5.0, 6.0));
    assert_eq!(view.velocity, DVec2::new(0.0, -1.0));
    assert!((view.heading_deg + 90.0).abs() < 1e-12);
}
