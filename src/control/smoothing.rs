/// Exponential smoothing between raw target angles and the commanded angle.
///
/// Seeded with the rest pose so the first frames blend away from a known
/// angle instead of jumping. `alpha = 1` disables smoothing entirely.
#[derive(Debug, Clone)]
pub struct ExponentialSmoother {
    alpha: f64,
    current: f64,
}

impl ExponentialSmoother {
    /// Create a smoother with the given blend factor and initial value
    ///
    /// # Panics
    ///
    /// Panics if alpha is not in the range (0, 1]
    #[must_use]
    pub fn new(alpha: f64, initial: f64) -> Self {
        assert!(alpha > 0.0 && alpha <= 1.0, "Alpha must be in (0, 1]");
        Self { alpha, current: initial }
    }

    /// Blend one step toward `target` and return the new commanded value
    pub fn advance(&mut self, target: f64) -> f64 {
        self.current = self.alpha.mul_add(target - self.current, self.current);
        self.current
    }

    /// Last emitted value
    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Force the smoother to a known value
    pub fn reset(&mut self, value: f64) {
        self.current = value;
    }
}
