//! Clamping and rest-pose tests for the simulated servo backend

use face_tracker::{
    config::ServoConfig,
    servo::{Actuator, ServoLimits, SimulatedServo},
};

fn servo() -> SimulatedServo {
    SimulatedServo::new(ServoLimits::default())
}

#[test]
fn initial_angles_are_the_rest_pose() {
    let servo = servo();
    assert_eq!(servo.get_position(), (90.0, 90.0));
}

#[test]
fn set_position_applies_in_range_angles() {
    let mut servo = servo();
    servo.set_position(45.0, 60.0).unwrap();
    assert_eq!(servo.get_position(), (45.0, 60.0));
}

#[test]
fn pan_clamps_at_both_bounds() {
    let mut servo = servo();
    servo.set_position(-10.0, 90.0).unwrap();
    assert_eq!(servo.get_position().0, 0.0);

    servo.set_position(200.0, 90.0).unwrap();
    assert_eq!(servo.get_position().0, 180.0);
}

#[test]
fn tilt_clamps_at_both_bounds() {
    let mut servo = servo();
    servo.set_position(90.0, 0.0).unwrap();
    assert_eq!(servo.get_position().1, 30.0);

    servo.set_position(90.0, 170.0).unwrap();
    assert_eq!(servo.get_position().1, 150.0);
}

#[test]
fn center_returns_to_rest_from_anywhere() {
    let mut servo = servo();
    servo.set_position(10.0, 140.0).unwrap();
    servo.center().unwrap();
    assert_eq!(servo.get_position(), (90.0, 90.0));
}

#[test]
fn custom_limits_are_honored() {
    let config = ServoConfig {
        pan_min: 40.0,
        pan_max: 140.0,
        pan_center: 100.0,
        tilt_min: 60.0,
        tilt_max: 120.0,
        tilt_center: 80.0,
        ..ServoConfig::default()
    };
    let mut servo = SimulatedServo::new(ServoLimits::from_config(&config));

    assert_eq!(servo.get_position(), (100.0, 80.0));

    servo.set_position(0.0, 180.0).unwrap();
    assert_eq!(servo.get_position(), (40.0, 120.0));

    servo.center().unwrap();
    assert_eq!(servo.get_position(), (100.0, 80.0));
}
