use crate::config::PidConfig;

/// PID controller for a single axis.
///
/// The output is a correction relative to the current servo angle, not an
/// absolute target. The integral term accumulates without bound; the tracker
/// resets the controller whenever a loss episode ends the current pursuit.
#[derive(Debug, Clone)]
pub struct PidController {
    kp: f64,
    ki: f64,
    kd: f64,
    integral: f64,
    prev_error: f64,
}

impl PidController {
    /// Create a controller with explicit gains
    #[must_use]
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self {
            kp,
            ki,
            kd,
            integral: 0.0,
            prev_error: 0.0,
        }
    }

    /// Create a controller from the configured gains
    #[must_use]
    pub fn from_config(config: &PidConfig) -> Self {
        Self::new(config.kp, config.ki, config.kd)
    }

    /// Compute the control output for the given error
    pub fn compute(&mut self, error: f64) -> f64 {
        self.integral += error;
        let derivative = error - self.prev_error;

        let output = self.kp * error + self.ki * self.integral + self.kd * derivative;

        self.prev_error = error;
        output
    }

    /// Clear accumulated state; gains are unchanged
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_error = 0.0;
    }
}
