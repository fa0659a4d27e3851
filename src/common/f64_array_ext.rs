//! `[f64]` extensions.

/// `[f64]` extensions.
pub trait F64ArrayExt {
    /// Returns the maximum absolute value.
    fn peak_level(&self) -> f64;
    /// Returns the [root mean square](https://en.wikipedia.org/wiki/Root_mean_square)
    /// level.
    fn rms_level(&self) -> f64;
}

impl F64ArrayExt for [f64] {
    fn peak_level(&self) -> f64 {
        let mut max: f64 = 0.0;
        for sample in self.iter() {
            let value = sample.abs();
            if value > max {
                max = value
            }
        }
        max
    }

    fn rms_level(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let mut sum: f64 = 0.0;
        for sample in self.iter() {
            sum += sample * sample
        }
        (sum / (self.len() as f64)).sqrt()
    }
}
