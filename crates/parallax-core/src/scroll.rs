/// Damped scroll: `target` is the latest raw page offset, `current` lags behind it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub current: f64,
    pub target: f64,
}

impl ScrollState {
    pub fn new(current: f64, target: f64) -> Self {
        Self { current, target }
    }

    #[inline]
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// One exponential smoothing step toward `target`; returns the new value.
    #[inline]
    pub fn step(&mut self, smoothness: f64) -> f64 {
        self.current += (self.target - self.current) * smoothness;
        self.current
    }
}
