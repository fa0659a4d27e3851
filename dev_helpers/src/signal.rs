use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Synthesizes the telemetry a tilting device would emit: smooth true pitch
/// and roll angles plus a noise corrupted copy of each, in degrees.
///
/// The noise is gaussian, generated with the
/// [Box-Muller transform](https://en.wikipedia.org/wiki/Box%E2%80%93Muller_transform)
/// from a seeded generator, so a given seed always yields the same stream.
pub struct AttitudeSimulator {
    rng: StdRng,
    tick: u64,
    sample_period: f64,
    noise_stddev: f64,
}

impl AttitudeSimulator {
    pub fn new(seed: u64) -> Self {
        AttitudeSimulator::from_options(seed, 0.05, 1.0)
    }

    pub fn from_options(seed: u64, sample_period: f64, noise_stddev: f64) -> Self {
        AttitudeSimulator {
            rng: StdRng::seed_from_u64(seed),
            tick: 0,
            sample_period,
            noise_stddev,
        }
    }

    /// Returns `(pitch, roll, noisy pitch, noisy roll)` for the next tick.
    pub fn next_angles(&mut self) -> (f64, f64, f64, f64) {
        let t = self.tick as f64 * self.sample_period;
        self.tick += 1;
        // A gentle rocking motion, amplitudes in degrees.
        let pitch = 5.0 * (2.0 * PI * 0.2 * t).sin();
        let roll = 3.5 * (2.0 * PI * 0.13 * t).sin();
        let noisy_pitch = pitch + self.gaussian_noise();
        let noisy_roll = roll + self.gaussian_noise();
        (pitch, roll, noisy_pitch, noisy_roll)
    }

    /// Returns the next tick formatted as one telemetry wire line.
    pub fn next_line(&mut self) -> String {
        let (pitch, roll, noisy_pitch, noisy_roll) = self.next_angles();
        format!(
            "{:.4}, {:.4}, {:.4}, {:.4}",
            pitch, roll, noisy_pitch, noisy_roll
        )
    }

    fn gaussian_noise(&mut self) -> f64 {
        // Box-Muller transform. Flipping the first uniform to (0, 1] keeps
        // the log argument away from zero.
        let u1: f64 = 1.0 - self.rng.gen::<f64>();
        let u2: f64 = self.rng.gen();
        self.noise_stddev * (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }
}
