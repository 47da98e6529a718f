//! Face tracking orchestration: per-axis error computation, control stages,
//! and loss recovery.

use crate::{
    config::Config,
    control::{Deadzone, ExponentialSmoother, PidController},
    error::Result,
    recovery::{LossRecovery, RecoveryAction},
    servo::Actuator,
};
use log::{debug, info};

/// Read-only snapshot of the tracker state.
///
/// `pan` and `tilt` mirror the actuator's last reported position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerStatus {
    pub tracking: bool,
    pub pan: f64,
    pub tilt: f64,
    pub lost_count: u32,
}

/// Closed-loop pan/tilt controller keeping the target at the frame center.
///
/// Owns the per-axis control stages and the loss-recovery state machine;
/// the actuator keeps exclusive ownership of its own position state behind
/// the [`Actuator`] trait. All state is created once at construction and
/// mutated exactly once per [`update`](Self::update).
pub struct FaceTracker<A: Actuator> {
    servo: A,
    center_x: f64,
    center_y: f64,
    pid_pan: PidController,
    pid_tilt: PidController,
    deadzone_x: Deadzone,
    deadzone_y: Deadzone,
    smooth_pan: ExponentialSmoother,
    smooth_tilt: ExponentialSmoother,
    recovery: LossRecovery,
    rest_pan: f64,
    rest_tilt: f64,
}

impl<A: Actuator> FaceTracker<A> {
    /// Create a tracker seeded to the actuator's rest pose
    pub fn new(servo: A, config: &Config) -> Self {
        let tracking = &config.tracking;
        Self {
            center_x: f64::from(config.camera.width / 2),
            center_y: f64::from(config.camera.height / 2),
            pid_pan: PidController::from_config(&config.pid),
            pid_tilt: PidController::from_config(&config.pid),
            deadzone_x: Deadzone::new(tracking.deadzone_x),
            deadzone_y: Deadzone::new(tracking.deadzone_y),
            smooth_pan: ExponentialSmoother::new(tracking.smoothing_factor, config.servo.pan_center),
            smooth_tilt: ExponentialSmoother::new(tracking.smoothing_factor, config.servo.tilt_center),
            recovery: LossRecovery::new(tracking.lost_threshold),
            rest_pan: config.servo.pan_center,
            rest_tilt: config.servo.tilt_center,
            servo,
        }
    }

    /// Advance the control loop by one frame
    pub fn update(&mut self, target: Option<(i32, i32)>) -> Result<()> {
        match target {
            Some(center) => self.steer(center),
            None => self.handle_target_lost(),
        }
    }

    fn steer(&mut self, (face_x, face_y): (i32, i32)) -> Result<()> {
        self.recovery.target_seen();

        // Positive error steers pan left / tilt up, toward the target
        let error_pan = self.deadzone_x.apply(self.center_x - f64::from(face_x));
        let error_tilt = self.deadzone_y.apply(f64::from(face_y) - self.center_y);

        let delta_pan = self.pid_pan.compute(error_pan);
        let delta_tilt = self.pid_tilt.compute(error_tilt);

        // Corrections are relative to the current pose
        let (pan, tilt) = self.servo.get_position();
        let target_pan = pan + delta_pan;
        let target_tilt = tilt + delta_tilt;

        let smooth_pan = self.smooth_pan.advance(target_pan);
        let smooth_tilt = self.smooth_tilt.advance(target_tilt);

        debug!(
            "error=({error_pan:.0}, {error_tilt:.0}) px -> pose=({smooth_pan:.1}°, {smooth_tilt:.1}°)"
        );

        // The actuator clamps to its safe range; no re-clamping here
        self.servo.set_position(smooth_pan, smooth_tilt)
    }

    fn handle_target_lost(&mut self) -> Result<()> {
        match self.recovery.target_lost() {
            RecoveryAction::Recenter => {
                info!(
                    "Target lost for {} frames, returning to center",
                    self.recovery.lost_count()
                );
                self.pid_pan.reset();
                self.pid_tilt.reset();
                self.servo.center()?;
                self.smooth_pan.reset(self.rest_pan);
                self.smooth_tilt.reset(self.rest_tilt);
                Ok(())
            }
            RecoveryAction::None => Ok(()),
        }
    }

    /// Whether a target is currently being followed
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.recovery.is_tracking()
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn status(&self) -> TrackerStatus {
        let (pan, tilt) = self.servo.get_position();
        TrackerStatus {
            tracking: self.recovery.is_tracking(),
            pan,
            tilt,
            lost_count: self.recovery.lost_count(),
        }
    }

    /// Discard all accumulated control state and recenter the rig
    pub fn reset(&mut self) -> Result<()> {
        self.pid_pan.reset();
        self.pid_tilt.reset();
        self.recovery.reset();
        self.smooth_pan.reset(self.rest_pan);
        self.smooth_tilt.reset(self.rest_tilt);
        self.servo.center()
    }

    /// The owned actuator
    pub fn servo(&self) -> &A {
        &self.servo
    }

    /// Mutable access to the owned actuator
    pub fn servo_mut(&mut self) -> &mut A {
        &mut self.servo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::servo::{ServoLimits, SimulatedServo};

    fn make_tracker() -> FaceTracker<SimulatedServo> {
        let config = Config::default();
        FaceTracker::new(SimulatedServo::new(ServoLimits::default()), &config)
    }

    #[test]
    fn centered_target_holds_the_pose() {
        let mut tracker = make_tracker();
        tracker.update(Some((320, 240))).unwrap();
        assert!(tracker.is_tracking());
        assert_eq!(tracker.servo().get_position(), (90.0, 90.0));
    }

    #[test]
    fn off_center_target_moves_both_axes() {
        let mut tracker = make_tracker();
        tracker.update(Some((100, 100))).unwrap();

        let (pan, tilt) = tracker.servo().get_position();
        // Target left of center: pan grows; above center: tilt shrinks
        assert!(pan > 90.0);
        assert!(tilt < 90.0);
    }

    #[test]
    fn reset_restores_the_rest_pose() {
        let mut tracker = make_tracker();
        tracker.update(Some((100, 100))).unwrap();
        tracker.reset().unwrap();
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.servo().get_position(), (90.0, 90.0));
        assert_eq!(tracker.status().lost_count, 0);
    }
}
