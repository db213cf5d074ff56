#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::PlayerCommand;
    use crate::config::{ConfigError, NerfPolicy, TuningConfig};
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{Color, Ray, SimTime, ViewBasis};

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![GamePhase::Title, GamePhase::Playing, GamePhase::GameOver];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_audio_event_is_tagged() {
        let json = serde_json::to_string(&AudioEvent::WaveStarted { wave: 4 }).unwrap();
        assert!(json.contains("\"type\":\"WaveStarted\""), "got {json}");
        let back: AudioEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AudioEvent::WaveStarted { wave: 4 });
    }

    #[test]
    fn test_fire_command_from_frontend_json() {
        let json = r#"{
            "type": "Fire",
            "ray": { "origin": [0.0, 0.0, 0.0], "direction": [0.0, 0.0, -1.0] },
            "view": { "forward": [0.0, 0.0, -1.0], "right": [1.0, 0.0, 0.0], "up": [0.0, 1.0, 0.0] }
        }"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        match cmd {
            PlayerCommand::Fire { ray, view } => {
                assert_eq!(ray.direction, Vec3::NEG_Z);
                assert_eq!(view, ViewBasis::default());
            }
            other => panic!("expected Fire, got {other:?}"),
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.frame, back.time.frame);
        assert_eq!(snapshot.phase, back.phase);
        assert_eq!(back.force_field.phase, ForceFieldPhase::Ready);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_view_basis_default_looks_down_negative_z() {
        let from_forward = ViewBasis::from_forward(Vec3::NEG_Z, Vec3::Y);
        let default = ViewBasis::default();
        assert!((from_forward.forward - default.forward).length() < 1e-6);
        assert!((from_forward.right - default.right).length() < 1e-6);
        assert!((from_forward.up - default.up).length() < 1e-6);
    }

    #[test]
    fn test_view_basis_degenerate_inputs() {
        // Zero forward falls back to the default basis
        assert_eq!(ViewBasis::from_forward(Vec3::ZERO, Vec3::Y), ViewBasis::default());

        // Forward parallel to up still yields an orthonormal basis
        let basis = ViewBasis::from_forward(Vec3::Y, Vec3::Y);
        assert!(basis.right.is_finite() && basis.up.is_finite());
        assert!((basis.right.length() - 1.0).abs() < 1e-5);
        assert!(basis.forward.dot(basis.right).abs() < 1e-5);
        assert!(basis.forward.dot(basis.up).abs() < 1e-5);
    }

    #[test]
    fn test_ray_point_at() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::NEG_Z);
        assert_eq!(ray.point_at(10.0), Vec3::new(1.0, 2.0, -7.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.frame, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_color_consts_are_opaque() {
        for c in [Color::BLUE, Color::RED] {
            assert_eq!(c.a, 255);
        }
    }

    // ---- Tuning ----

    #[test]
    fn test_nerf_policy_ramp() {
        let nerf = NerfPolicy::default();
        assert_eq!(nerf.disabled_slots(1), 2);
        assert_eq!(nerf.disabled_slots(3), 2);
        assert_eq!(nerf.disabled_slots(4), 1);
        assert_eq!(nerf.disabled_slots(5), 1);
        assert_eq!(nerf.disabled_slots(7), 1);
        assert_eq!(nerf.disabled_slots(8), 0);
        assert_eq!(nerf.disabled_slots(10), 0);
    }

    #[test]
    fn test_default_tuning_is_valid() {
        TuningConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            TuningConfig::from_json_str(r#"{ "starting_lives": 5, "nerf": { "heavy_until_wave": 1 } }"#)
                .unwrap();
        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.nerf.heavy_until_wave, 1);
        assert_eq!(config.nerf.light_until_wave, NerfPolicy::default().light_until_wave);
        assert_eq!(config.enemy_pool_capacity, TuningConfig::default().enemy_pool_capacity);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = TuningConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = TuningConfig::from_json_str(r#"{ "enemy_pool_capacity": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "enemy_pool_capacity",
                ..
            }
        ));

        let err = TuningConfig::from_json_str(r#"{ "force_field_timeout_secs": -1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "force_field_timeout_secs",
                ..
            }
        ));

        let err = TuningConfig::from_json_str(
            r#"{ "nerf": { "heavy_until_wave": 5, "light_until_wave": 2 } }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("nerf.light_until_wave"));
    }
}
