//! Configuration defaults, validation, and YAML persistence tests

use face_tracker::config::{Config, EXAMPLE_CONFIG};

#[test]
fn defaults_match_documented_values() {
    let config = Config::default();

    assert_eq!(config.camera.width, 640);
    assert_eq!(config.camera.height, 480);
    assert_eq!(config.camera.fps, 30);

    assert_eq!(config.pid.kp, 0.5);
    assert_eq!(config.pid.ki, 0.0);
    assert_eq!(config.pid.kd, 0.1);

    assert_eq!(config.tracking.deadzone_x, 30.0);
    assert_eq!(config.tracking.deadzone_y, 30.0);
    assert_eq!(config.tracking.smoothing_factor, 0.3);
    assert_eq!(config.tracking.lost_threshold, 30);

    assert_eq!(config.servo.pan_min, 0.0);
    assert_eq!(config.servo.pan_max, 180.0);
    assert_eq!(config.servo.pan_center, 90.0);
    assert_eq!(config.servo.tilt_min, 30.0);
    assert_eq!(config.servo.tilt_max, 150.0);
    assert_eq!(config.servo.tilt_center, 90.0);
}

#[test]
fn default_config_validates() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn centers_lie_within_their_ranges() {
    let config = Config::default();
    let s = &config.servo;
    assert!(s.pan_min <= s.pan_center && s.pan_center <= s.pan_max);
    assert!(s.tilt_min <= s.tilt_center && s.tilt_center <= s.tilt_max);
}

#[test]
fn example_config_parses_to_the_defaults() {
    let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).expect("example config parses");
    assert!(config.validate().is_ok());

    let defaults = Config::default();
    assert_eq!(config.camera.width, defaults.camera.width);
    assert_eq!(config.pid.kp, defaults.pid.kp);
    assert_eq!(config.tracking.lost_threshold, defaults.tracking.lost_threshold);
    assert_eq!(config.servo.tilt_min, defaults.servo.tilt_min);
    assert_eq!(config.servo.period_ns, defaults.servo.period_ns);
}

#[test]
fn partial_document_fills_missing_sections_with_defaults() {
    let config: Config = serde_yaml::from_str("pid:\n  kp: 0.8\n  ki: 0.0\n  kd: 0.2\n").unwrap();
    assert_eq!(config.pid.kp, 0.8);
    assert_eq!(config.pid.kd, 0.2);
    assert_eq!(config.camera.width, 640);
    assert_eq!(config.tracking.smoothing_factor, 0.3);
}

#[test]
fn file_round_trip_preserves_values() {
    let mut config = Config::default();
    config.pid.kp = 0.75;
    config.tracking.lost_threshold = 12;
    config.servo.tilt_center = 95.0;

    let path = std::env::temp_dir().join(format!("face-tracker-config-{}.yaml", std::process::id()));
    config.to_file(&path).expect("config written");
    let loaded = Config::from_file(&path).expect("config read back");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.pid.kp, 0.75);
    assert_eq!(loaded.tracking.lost_threshold, 12);
    assert_eq!(loaded.servo.tilt_center, 95.0);
}

#[test]
fn from_file_rejects_malformed_yaml() {
    let path = std::env::temp_dir().join(format!("face-tracker-bad-{}.yaml", std::process::id()));
    std::fs::write(&path, "camera: [not, a, mapping]").unwrap();
    let result = Config::from_file(&path);
    let _ = std::fs::remove_file(&path);
    assert!(result.is_err());
}

#[test]
fn validation_rejects_bad_values() {
    let mut config = Config::default();
    config.camera.width = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.camera.fps = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.pid.kp = -0.1;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.tracking.deadzone_x = 0.0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.tracking.smoothing_factor = 0.0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.tracking.smoothing_factor = 1.5;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.tracking.lost_threshold = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.servo.pan_center = 200.0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.servo.tilt_center = 20.0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.servo.tilt_channel = config.servo.pan_channel;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.servo.period_ns = 0;
    assert!(config.validate().is_err());
}

#[test]
fn smoothing_factor_of_one_is_allowed() {
    let mut config = Config::default();
    config.tracking.smoothing_factor = 1.0;
    assert!(config.validate().is_ok());
}
