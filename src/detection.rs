//! Target acquisition boundary.
//!
//! Detection itself (camera capture plus a face detector) lives outside this
//! crate; the tracking loop only consumes one optional target center per
//! frame through [`TargetSource`]. [`SyntheticTarget`] is a deterministic
//! stand-in that sweeps a plausible subject path across the frame, with
//! dropout windows to exercise loss recovery, so the full loop runs without
//! camera hardware.

use std::f64::consts::PI;

/// Per-frame supplier of the tracked target's pixel centroid
pub trait TargetSource {
    /// The target center for the next frame, or `None` when nothing was
    /// detected
    fn next_target(&mut self) -> Option<(i32, i32)>;
}

/// Deterministic Lissajous sweep across the frame with periodic dropout
/// windows, driven purely by the frame index
pub struct SyntheticTarget {
    width: f64,
    height: f64,
    frame: u64,
    dropout_period: u64,
    dropout_len: u64,
}

impl SyntheticTarget {
    /// Create a sweep over a frame of the given geometry.
    ///
    /// The default dropout schedule hides the target for 45 frames out of
    /// every 240 (1.5 s out of 8 s at 30 fps).
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
            frame: 0,
            dropout_period: 240,
            dropout_len: 45,
        }
    }

    /// Override the dropout schedule; `period = 0` disables dropouts
    #[must_use]
    pub fn with_dropout(mut self, period: u64, len: u64) -> Self {
        self.dropout_period = period;
        self.dropout_len = len.min(period);
        self
    }
}

impl TargetSource for SyntheticTarget {
    fn next_target(&mut self) -> Option<(i32, i32)> {
        let frame = self.frame;
        self.frame += 1;

        if self.dropout_period > 0 && frame % self.dropout_period >= self.dropout_period - self.dropout_len {
            return None;
        }

        // Slow figure-of-eight around the frame center, at most 30%/25% of
        // the frame away from it
        let t = frame as f64 / 30.0;
        let x = self.width * 0.5 + self.width * 0.3 * (2.0 * PI * 0.05 * t).sin();
        let y = self.height * 0.5 + self.height * 0.25 * (2.0 * PI * 0.08 * t).cos();

        Some((x as i32, y as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_deterministic() {
        let mut a = SyntheticTarget::new(640, 480);
        let mut b = SyntheticTarget::new(640, 480);
        for _ in 0..500 {
            assert_eq!(a.next_target(), b.next_target());
        }
    }

    #[test]
    fn path_stays_inside_the_frame() {
        let mut source = SyntheticTarget::new(640, 480).with_dropout(0, 0);
        for _ in 0..1000 {
            let (x, y) = source.next_target().expect("dropouts disabled");
            assert!((0..640).contains(&x));
            assert!((0..480).contains(&y));
        }
    }

    #[test]
    fn dropout_windows_hide_the_target() {
        let mut source = SyntheticTarget::new(640, 480).with_dropout(10, 4);
        let observed: Vec<bool> = (0..20).map(|_| source.next_target().is_some()).collect();
        // 6 visible frames then 4 hidden, repeating
        let expected: Vec<bool> = (0..20).map(|i| i % 10 < 6).collect();
        assert_eq!(observed, expected);
    }
}
