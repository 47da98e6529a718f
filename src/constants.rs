//! Constants used throughout the application

/// Default camera frame geometry
pub const DEFAULT_FRAME_WIDTH: u32 = 640;
pub const DEFAULT_FRAME_HEIGHT: u32 = 480;

/// Default frame cadence the control loop paces itself to
pub const DEFAULT_FPS: u32 = 30;

/// Default PID gains, shared by both axes
pub const DEFAULT_KP: f64 = 0.5;
pub const DEFAULT_KI: f64 = 0.0;
pub const DEFAULT_KD: f64 = 0.1;

/// Pixel radius below which an axis error is treated as zero
pub const DEFAULT_DEADZONE_X: f64 = 30.0;
pub const DEFAULT_DEADZONE_Y: f64 = 30.0;

/// EMA blend factor in (0, 1]; smaller values converge slower with less jitter
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.3;

/// Consecutive lost frames before the rig returns to its rest pose
pub const DEFAULT_LOST_THRESHOLD: u32 = 30;

/// Pan axis range and rest pose, degrees
pub const PAN_MIN: f64 = 0.0;
pub const PAN_MAX: f64 = 180.0;
pub const PAN_CENTER: f64 = 90.0;

/// Tilt axis range and rest pose, degrees; the mount limits vertical travel
pub const TILT_MIN: f64 = 30.0;
pub const TILT_MAX: f64 = 150.0;
pub const TILT_CENTER: f64 = 90.0;

/// Default sysfs PWM wiring
pub const DEFAULT_PWM_CHIP: u32 = 0;
pub const DEFAULT_PAN_CHANNEL: u32 = 0;
pub const DEFAULT_TILT_CHANNEL: u32 = 1;

/// PWM period in nanoseconds (50 Hz, standard for hobby servos)
pub const DEFAULT_PWM_PERIOD_NS: u64 = 20_000_000;

/// SG90 duty timing: 0 deg = 2.5% of the period, 180 deg = 12.5%
pub const SERVO_DUTY_MIN_PERCENT: f64 = 2.5;
pub const SERVO_DUTY_SPAN_PERCENT: f64 = 10.0;
pub const SERVO_ANGLE_SPAN: f64 = 180.0;
