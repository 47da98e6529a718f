//! Target-loss bookkeeping and the recenter decision.
//!
//! Detections drop out for a few frames at a time even when the subject has
//! not moved, so losing the target is a counted condition, not an error.
//! Only a sustained loss ends the pursuit and sends the rig back to rest.

/// Tracking phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No target acquired; the rig rests at its center pose
    Searching,
    /// A target was observed recently and the loop is actively steering
    Tracking,
}

/// What the orchestrator must do after a lost frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum RecoveryAction {
    /// Keep the current pose
    None,
    /// The loss threshold was just crossed: reset the controllers and drive
    /// the actuator back to its rest pose
    Recenter,
}

/// Counts consecutive lost frames and decides when tracking has failed.
///
/// `Recenter` is edge-triggered: it fires on the frame the counter first
/// exceeds the threshold, once per loss episode.
#[derive(Debug, Clone)]
pub struct LossRecovery {
    phase: Phase,
    lost_count: u32,
    lost_threshold: u32,
}

impl LossRecovery {
    /// Create the state machine in its initial searching phase
    #[must_use]
    pub fn new(lost_threshold: u32) -> Self {
        Self {
            phase: Phase::Searching,
            lost_count: 0,
            lost_threshold,
        }
    }

    /// A target was observed this frame
    pub fn target_seen(&mut self) {
        self.lost_count = 0;
        self.phase = Phase::Tracking;
    }

    /// No target this frame
    pub fn target_lost(&mut self) -> RecoveryAction {
        self.lost_count = self.lost_count.saturating_add(1);

        if self.phase == Phase::Tracking && self.lost_count > self.lost_threshold {
            self.phase = Phase::Searching;
            return RecoveryAction::Recenter;
        }

        RecoveryAction::None
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a target is currently being followed
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.phase == Phase::Tracking
    }

    /// Consecutive frames without a target
    #[must_use]
    pub fn lost_count(&self) -> u32 {
        self.lost_count
    }

    /// Return to the initial searching phase with a cleared counter
    pub fn reset(&mut self) {
        self.phase = Phase::Searching;
        self.lost_count = 0;
    }
}
