//! Exponential easing for scroll offsets.

/// A float that eases toward a target on every tick.
///
/// Used for fire-and-forget offset animations: setting a new target while
/// one is in flight simply re-aims from the current value.
#[derive(Debug, Clone)]
pub struct AnimFloat {
    current: f32,
    target: f32,
    /// Convergence speed (higher = faster).
    speed: f32,
}

impl AnimFloat {
    /// Create a settled animation at `value`.
    pub fn new(value: f32, speed: f32) -> Self {
        Self {
            current: value,
            target: value,
            speed,
        }
    }

    /// Value a reader observes right now.
    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Advance by `dt` seconds and return the current value.
    pub fn tick(&mut self, dt: f32) -> f32 {
        if dt > 0.0 {
            self.current += (self.target - self.current) * (1.0 - (-self.speed * dt).exp());
        }
        if self.done() {
            self.current = self.target;
        }
        self.current
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` with no animation.
    pub fn jump_to(&mut self, value: f32) {
        self.current = value;
        self.target = value;
    }

    /// Check if the animation has essentially converged.
    pub fn done(&self) -> bool {
        (self.current - self.target).abs() < 0.001
    }
}

impl Default for AnimFloat {
    fn default() -> Self {
        Self::new(0.0, 10.0)
    }
}
