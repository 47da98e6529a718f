//! Closed-loop pan/tilt face tracking.
//!
//! This library keeps a detected target centered in the camera frame by
//! driving a two-axis servo rig. Each frame runs the same pipeline:
//!
//! 1. Pixel error between the target center and the frame center, per axis
//! 2. Deadzone filtering so detector jitter does not move the servos
//! 3. Per-axis PID producing a relative angle correction
//! 4. Exponential smoothing of the commanded pose
//! 5. A clamped actuator write through the [`servo::Actuator`] boundary
//!
//! When the target disappears, a loss-recovery state machine counts
//! consecutive misses and returns the rig to its rest pose once the
//! configured threshold is crossed. Reacquiring the target starts a fresh
//! pursuit with cleared controller state.
//!
//! Target detection and frame capture are collaborators, not part of this
//! crate: anything that yields one optional pixel centroid per frame can
//! drive the loop through [`detection::TargetSource`].
//!
//! # Examples
//!
//! ```
//! use face_tracker::{
//!     config::Config,
//!     servo::{ServoLimits, SimulatedServo},
//!     tracker::FaceTracker,
//! };
//!
//! let config = Config::default();
//! let servo = SimulatedServo::new(ServoLimits::from_config(&config.servo));
//! let mut tracker = FaceTracker::new(servo, &config);
//!
//! // Target left of center on a 640x480 frame: the pan axis swings left
//! tracker.update(Some((100, 240))).unwrap();
//! assert!(tracker.is_tracking());
//! assert!(tracker.status().pan > 90.0);
//!
//! // The target disappears; after enough misses the rig recenters itself
//! for _ in 0..=30 {
//!     tracker.update(None).unwrap();
//! }
//! assert!(!tracker.is_tracking());
//! assert_eq!(tracker.status().pan, 90.0);
//! ```

/// Frame loop wiring source, tracker, and servo backend
pub mod app;

/// Configuration structures and YAML persistence
pub mod config;

/// Shared default values
pub mod constants;

/// Per-axis control stages (deadzone, PID, smoothing)
pub mod control;

/// Target acquisition boundary and the synthetic stand-in source
pub mod detection;

/// Error types
pub mod error;

/// Loss-recovery state machine
pub mod recovery;

/// Actuator boundary and servo backends
pub mod servo;

/// The tracking orchestrator
pub mod tracker;

pub use error::{Error, Result};
pub use tracker::{FaceTracker, TrackerStatus};
