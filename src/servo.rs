//! Servo actuator boundary for the pan/tilt rig.
//!
//! The tracking core only talks to the actuator through the [`Actuator`]
//! trait. Two implementations exist: [`SimulatedServo`] keeps angles in
//! memory and logs writes, for development and tests; [`PwmServo`] drives
//! real servos through the Linux sysfs PWM interface. Both clamp every
//! commanded angle to the configured safe range per axis.

use crate::{
    config::ServoConfig,
    constants::{SERVO_ANGLE_SPAN, SERVO_DUTY_MIN_PERCENT, SERVO_DUTY_SPAN_PERCENT},
    error::{Error, Result},
};
use log::{debug, info, warn};
use std::{fs, path::PathBuf};

/// Pan/tilt actuator capability.
///
/// Out-of-range angle requests are absorbed by clamping, never rejected;
/// `Err` is reserved for transport failures in hardware implementations.
pub trait Actuator {
    /// Current commanded angles in degrees, `(pan, tilt)`
    fn get_position(&self) -> (f64, f64);

    /// Command both axes, clamping each to its configured `[min, max]`
    fn set_position(&mut self, pan: f64, tilt: f64) -> Result<()>;

    /// Drive both axes to the configured rest pose
    fn center(&mut self) -> Result<()>;
}

impl<A: Actuator + ?Sized> Actuator for Box<A> {
    fn get_position(&self) -> (f64, f64) {
        (**self).get_position()
    }

    fn set_position(&mut self, pan: f64, tilt: f64) -> Result<()> {
        (**self).set_position(pan, tilt)
    }

    fn center(&mut self) -> Result<()> {
        (**self).center()
    }
}

/// Safe angle ranges and rest pose for both axes
#[derive(Debug, Clone, Copy)]
pub struct ServoLimits {
    pub pan_min: f64,
    pub pan_max: f64,
    pub pan_center: f64,
    pub tilt_min: f64,
    pub tilt_max: f64,
    pub tilt_center: f64,
}

impl ServoLimits {
    /// Extract the angle geometry from a servo configuration
    #[must_use]
    pub fn from_config(config: &ServoConfig) -> Self {
        Self {
            pan_min: config.pan_min,
            pan_max: config.pan_max,
            pan_center: config.pan_center,
            tilt_min: config.tilt_min,
            tilt_max: config.tilt_max,
            tilt_center: config.tilt_center,
        }
    }

    /// Clamp a pan angle to the safe range
    #[must_use]
    pub fn clamp_pan(&self, angle: f64) -> f64 {
        angle.clamp(self.pan_min, self.pan_max)
    }

    /// Clamp a tilt angle to the safe range
    #[must_use]
    pub fn clamp_tilt(&self, angle: f64) -> f64 {
        angle.clamp(self.tilt_min, self.tilt_max)
    }
}

impl Default for ServoLimits {
    fn default() -> Self {
        Self::from_config(&ServoConfig::default())
    }
}

/// In-memory servo used when no hardware is attached
pub struct SimulatedServo {
    limits: ServoLimits,
    pan: f64,
    tilt: f64,
}

impl SimulatedServo {
    /// Create a simulated servo resting at its center pose
    #[must_use]
    pub fn new(limits: ServoLimits) -> Self {
        Self {
            pan: limits.pan_center,
            tilt: limits.tilt_center,
            limits,
        }
    }
}

impl Actuator for SimulatedServo {
    fn get_position(&self) -> (f64, f64) {
        (self.pan, self.tilt)
    }

    fn set_position(&mut self, pan: f64, tilt: f64) -> Result<()> {
        self.pan = self.limits.clamp_pan(pan);
        self.tilt = self.limits.clamp_tilt(tilt);
        debug!("[sim] pan {:.1}°, tilt {:.1}°", self.pan, self.tilt);
        Ok(())
    }

    fn center(&mut self) -> Result<()> {
        self.set_position(self.limits.pan_center, self.limits.tilt_center)
    }
}

/// One exported sysfs PWM channel
struct PwmChannel {
    chip_path: PathBuf,
    path: PathBuf,
    number: u32,
}

impl PwmChannel {
    /// Export the channel and program its period
    fn export(chip: u32, number: u32, period_ns: u64) -> Result<Self> {
        let chip_path = PathBuf::from(format!("/sys/class/pwm/pwmchip{chip}"));
        if !chip_path.exists() {
            return Err(Error::Servo(format!(
                "PWM chip not present: {}",
                chip_path.display()
            )));
        }

        let path = chip_path.join(format!("pwm{number}"));
        if !path.exists() {
            fs::write(chip_path.join("export"), number.to_string())
                .map_err(|e| Error::Servo(format!("failed to export pwm{number}: {e}")))?;
        }

        fs::write(path.join("period"), period_ns.to_string())
            .map_err(|e| Error::Servo(format!("failed to set period on pwm{number}: {e}")))?;

        Ok(Self {
            chip_path,
            path,
            number,
        })
    }

    fn set_duty(&self, duty_ns: u64) -> Result<()> {
        fs::write(self.path.join("duty_cycle"), duty_ns.to_string())
            .map_err(|e| Error::Servo(format!("failed to set duty on pwm{}: {e}", self.number)))
    }

    fn enable(&self) -> Result<()> {
        fs::write(self.path.join("enable"), "1")
            .map_err(|e| Error::Servo(format!("failed to enable pwm{}: {e}", self.number)))
    }

    /// Best-effort teardown; failures are logged, not propagated
    fn release(&self) {
        if let Err(e) = fs::write(self.path.join("enable"), "0") {
            warn!("failed to disable pwm{}: {e}", self.number);
        }
        if let Err(e) = fs::write(self.chip_path.join("unexport"), self.number.to_string()) {
            warn!("failed to unexport pwm{}: {e}", self.number);
        }
    }
}

/// Hardware servo rig on the Linux sysfs PWM interface.
///
/// Construction exports both channels, programs the period, and enables
/// output at the rest pose; dropping the value disables and unexports the
/// channels on every exit path.
pub struct PwmServo {
    pan_channel: PwmChannel,
    tilt_channel: PwmChannel,
    limits: ServoLimits,
    period_ns: u64,
    pan: f64,
    tilt: f64,
}

impl PwmServo {
    /// Acquire the PWM channels and move the rig to its rest pose
    pub fn open(config: &ServoConfig) -> Result<Self> {
        let pan_channel = PwmChannel::export(config.pwm_chip, config.pan_channel, config.period_ns)?;
        let tilt_channel = PwmChannel::export(config.pwm_chip, config.tilt_channel, config.period_ns)?;

        let servo = Self {
            pan_channel,
            tilt_channel,
            limits: ServoLimits::from_config(config),
            period_ns: config.period_ns,
            pan: config.pan_center,
            tilt: config.tilt_center,
        };

        servo.pan_channel.set_duty(servo.angle_to_duty(servo.pan))?;
        servo.tilt_channel.set_duty(servo.angle_to_duty(servo.tilt))?;
        servo.pan_channel.enable()?;
        servo.tilt_channel.enable()?;

        info!(
            "Servo rig ready on pwmchip{}: pan={:.0}°, tilt={:.0}°",
            config.pwm_chip, servo.pan, servo.tilt
        );
        Ok(servo)
    }

    /// Convert an angle to a pulse width in nanoseconds (SG90 timing)
    fn angle_to_duty(&self, angle: f64) -> u64 {
        let percent = SERVO_DUTY_MIN_PERCENT + angle / SERVO_ANGLE_SPAN * SERVO_DUTY_SPAN_PERCENT;
        (self.period_ns as f64 * percent / 100.0) as u64
    }
}

impl Actuator for PwmServo {
    fn get_position(&self) -> (f64, f64) {
        (self.pan, self.tilt)
    }

    fn set_position(&mut self, pan: f64, tilt: f64) -> Result<()> {
        self.pan = self.limits.clamp_pan(pan);
        self.tilt = self.limits.clamp_tilt(tilt);

        self.pan_channel.set_duty(self.angle_to_duty(self.pan))?;
        self.tilt_channel.set_duty(self.angle_to_duty(self.tilt))?;
        debug!("pan {:.1}°, tilt {:.1}°", self.pan, self.tilt);
        Ok(())
    }

    fn center(&mut self) -> Result<()> {
        self.set_position(self.limits.pan_center, self.limits.tilt_center)
    }
}

impl Drop for PwmServo {
    fn drop(&mut self) {
        self.pan_channel.release();
        self.tilt_channel.release();
        info!("Servo PWM released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_servo_starts_at_rest() {
        let servo = SimulatedServo::new(ServoLimits::default());
        assert_eq!(servo.get_position(), (90.0, 90.0));
    }

    #[test]
    fn simulated_servo_clamps_both_axes() {
        let mut servo = SimulatedServo::new(ServoLimits::default());
        servo.set_position(-20.0, 200.0).unwrap();
        assert_eq!(servo.get_position(), (0.0, 150.0));

        servo.set_position(200.0, 0.0).unwrap();
        assert_eq!(servo.get_position(), (180.0, 30.0));
    }

    #[test]
    fn center_returns_to_rest() {
        let mut servo = SimulatedServo::new(ServoLimits::default());
        servo.set_position(45.0, 60.0).unwrap();
        servo.center().unwrap();
        assert_eq!(servo.get_position(), (90.0, 90.0));
    }

    #[test]
    fn limits_clamp_helpers() {
        let limits = ServoLimits::default();
        assert_eq!(limits.clamp_pan(-1.0), 0.0);
        assert_eq!(limits.clamp_pan(181.0), 180.0);
        assert_eq!(limits.clamp_pan(90.0), 90.0);
        assert_eq!(limits.clamp_tilt(10.0), 30.0);
        assert_eq!(limits.clamp_tilt(170.0), 150.0);
    }
}
