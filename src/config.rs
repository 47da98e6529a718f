//! Configuration management for the face tracking application

use crate::{
    constants::{
        DEFAULT_DEADZONE_X, DEFAULT_DEADZONE_Y, DEFAULT_FPS, DEFAULT_FRAME_HEIGHT,
        DEFAULT_FRAME_WIDTH, DEFAULT_KD, DEFAULT_KI, DEFAULT_KP, DEFAULT_LOST_THRESHOLD,
        DEFAULT_PAN_CHANNEL, DEFAULT_PWM_CHIP, DEFAULT_PWM_PERIOD_NS, DEFAULT_SMOOTHING_FACTOR,
        DEFAULT_TILT_CHANNEL, PAN_CENTER, PAN_MAX, PAN_MIN, TILT_CENTER, TILT_MAX, TILT_MIN,
    },
    error::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Camera frame geometry and cadence
    pub camera: CameraConfig,

    /// PID gains, shared by both axes
    pub pid: PidConfig,

    /// Deadzone, smoothing, and loss-recovery parameters
    pub tracking: TrackingConfig,

    /// Servo ranges, rest pose, and PWM wiring
    pub servo: ServoConfig,
}

/// Camera frame parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Frame width in pixels
    pub width: u32,

    /// Frame height in pixels
    pub height: u32,

    /// Frames per second the control loop paces itself to
    pub fps: u32,
}

/// PID controller gains
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PidConfig {
    /// Proportional gain
    pub kp: f64,

    /// Integral gain
    pub ki: f64,

    /// Derivative gain
    pub kd: f64,
}

/// Tracking behavior parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Horizontal error below this many pixels is ignored
    pub deadzone_x: f64,

    /// Vertical error below this many pixels is ignored
    pub deadzone_y: f64,

    /// EMA blend factor in (0, 1]; smaller is smoother
    pub smoothing_factor: f64,

    /// Consecutive lost frames before the rig recenters
    pub lost_threshold: u32,
}

/// Servo geometry and PWM wiring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServoConfig {
    /// Pan axis lower bound, degrees
    pub pan_min: f64,

    /// Pan axis upper bound, degrees
    pub pan_max: f64,

    /// Pan rest angle, degrees
    pub pan_center: f64,

    /// Tilt axis lower bound, degrees
    pub tilt_min: f64,

    /// Tilt axis upper bound, degrees
    pub tilt_max: f64,

    /// Tilt rest angle, degrees
    pub tilt_center: f64,

    /// sysfs pwmchip index
    pub pwm_chip: u32,

    /// PWM channel driving the pan servo
    pub pan_channel: u32,

    /// PWM channel driving the tilt servo
    pub tilt_channel: u32,

    /// PWM period in nanoseconds (50 Hz for standard hobby servos)
    pub period_ns: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            pid: PidConfig::default(),
            tracking: TrackingConfig::default(),
            servo: ServoConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_FRAME_WIDTH,
            height: DEFAULT_FRAME_HEIGHT,
            fps: DEFAULT_FPS,
        }
    }
}

impl Default for PidConfig {
    fn default() -> Self {
        Self {
            kp: DEFAULT_KP,
            ki: DEFAULT_KI,
            kd: DEFAULT_KD,
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            deadzone_x: DEFAULT_DEADZONE_X,
            deadzone_y: DEFAULT_DEADZONE_Y,
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            lost_threshold: DEFAULT_LOST_THRESHOLD,
        }
    }
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            pan_min: PAN_MIN,
            pan_max: PAN_MAX,
            pan_center: PAN_CENTER,
            tilt_min: TILT_MIN,
            tilt_max: TILT_MAX,
            tilt_center: TILT_CENTER,
            pwm_chip: DEFAULT_PWM_CHIP,
            pan_channel: DEFAULT_PAN_CHANNEL,
            tilt_channel: DEFAULT_TILT_CHANNEL,
            period_ns: DEFAULT_PWM_PERIOD_NS,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        // Validate frame geometry
        if self.camera.width == 0 || self.camera.height == 0 {
            return Err(Error::Config("Frame dimensions must be greater than 0".to_string()));
        }
        if self.camera.fps == 0 {
            return Err(Error::Config("Frame rate must be greater than 0".to_string()));
        }

        // Validate gains
        if self.pid.kp < 0.0 || self.pid.ki < 0.0 || self.pid.kd < 0.0 {
            return Err(Error::Config("PID gains must not be negative".to_string()));
        }

        // Validate tracking parameters
        if self.tracking.deadzone_x <= 0.0 || self.tracking.deadzone_y <= 0.0 {
            return Err(Error::Config("Deadzone must be greater than 0".to_string()));
        }
        if !(self.tracking.smoothing_factor > 0.0 && self.tracking.smoothing_factor <= 1.0) {
            return Err(Error::Config(
                "Smoothing factor must be in the range (0, 1]".to_string(),
            ));
        }
        if self.tracking.lost_threshold == 0 {
            return Err(Error::Config("Lost threshold must be greater than 0".to_string()));
        }

        // Validate servo geometry
        let s = &self.servo;
        if !(s.pan_min <= s.pan_center && s.pan_center <= s.pan_max) {
            return Err(Error::Config(format!(
                "Pan center {} must lie within [{}, {}]",
                s.pan_center, s.pan_min, s.pan_max
            )));
        }
        if !(s.tilt_min <= s.tilt_center && s.tilt_center <= s.tilt_max) {
            return Err(Error::Config(format!(
                "Tilt center {} must lie within [{}, {}]",
                s.tilt_center, s.tilt_min, s.tilt_max
            )));
        }
        if s.pan_min < 0.0 || s.pan_max > 180.0 || s.tilt_min < 0.0 || s.tilt_max > 180.0 {
            return Err(Error::Config("Servo angles must lie within [0, 180]".to_string()));
        }
        if s.pan_channel == s.tilt_channel {
            return Err(Error::Config(
                "Pan and tilt must use distinct PWM channels".to_string(),
            ));
        }
        if s.period_ns == 0 {
            return Err(Error::Config("PWM period must be greater than 0".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Face Tracker Configuration

# Camera frame geometry
camera:
  width: 640
  height: 480
  fps: 30

# PID gains (shared by both axes)
pid:
  kp: 0.5
  ki: 0.0
  kd: 0.1

# Tracking behavior
tracking:
  deadzone_x: 30.0
  deadzone_y: 30.0
  smoothing_factor: 0.3
  lost_threshold: 30

# Servo geometry and PWM wiring
servo:
  pan_min: 0.0
  pan_max: 180.0
  pan_center: 90.0
  tilt_min: 30.0
  tilt_max: 150.0
  tilt_center: 90.0
  pwm_chip: 0
  pan_channel: 0
  tilt_channel: 1
  period_ns: 20000000
"#;
