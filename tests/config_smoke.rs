use traversa_engine::{CollisionMask, ControllerConfig, World};

#[test]
fn config_json_fills_missing_fields_with_defaults() {
    let config = ControllerConfig::from_json(r#"{ "hor_ray_count": 6 }"#).unwrap();
    assert_eq!(config.hor_ray_count, 6);
    assert_eq!(config.ver_ray_count, 4);
    assert_eq!(config.max_climb_angle, 80.0);
    assert_eq!(config.collision_mask, CollisionMask::ALL);
}

#[test]
fn config_json_sanitizes_out_of_contract_values() {
    let config = ControllerConfig::from_json(
        r#"{ "hor_ray_count": 0, "ver_ray_count": 1, "skin_width": -2.0, "max_climb_angle": 135.0 }"#,
    )
    .unwrap();
    assert_eq!(config.hor_ray_count, 2);
    assert_eq!(config.ver_ray_count, 2);
    assert_eq!(config.skin_width, 0.015);
    assert!(config.max_climb_angle < 90.0);
}

#[test]
fn config_json_roundtrip() {
    let config = ControllerConfig {
        collision_mask: CollisionMask::layer(3),
        hor_ray_count: 8,
        ver_ray_count: 5,
        max_climb_angle: 55.0,
        max_descend_angle: 70.0,
        skin_width: 0.02,
    };
    let json = serde_json::to_string(&config).unwrap();
    let back = ControllerConfig::from_json(&json).unwrap();
    assert_eq!(back.collision_mask, config.collision_mask);
    assert_eq!(back.hor_ray_count, 8);
    assert_eq!(back.max_descend_angle, 70.0);
}

#[test]
fn facade_rejects_malformed_config() {
    let mut world = World::new();
    assert!(world.load_controller_config("not json".to_string()).is_err());
    assert!(world
        .load_controller_config(r#"{ "ver_ray_count": 3 }"#.to_string())
        .is_ok());

    // The parse message itself lives at the core boundary, not in the
    // facade's opaque error value
    let err = ControllerConfig::from_json("not json").unwrap_err();
    assert!(!err.is_empty());
}
