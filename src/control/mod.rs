//! Per-axis control stages for the tracking loop.
//!
//! Each frame, the error on one axis passes through three stages:
//! the deadzone (drops detector jitter), the PID controller (turns the
//! remaining error into a relative angle correction), and the exponential
//! smoother (blends the corrected target into the commanded angle).

/// Proportional-integral-derivative controller
pub mod pid;

/// Small-error suppression
pub mod deadzone;

/// Exponential moving-average smoothing of commanded angles
pub mod smoothing;

pub use deadzone::Deadzone;
pub use pid::PidController;
pub use smoothing::ExponentialSmoother;
