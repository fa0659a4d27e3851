//! Per-sample adaptive [least mean squares](https://en.wikipedia.org/wiki/Least_mean_squares_filter)
//! denoising.
//!
//! An [`LmsFilter`] predicts the true value of a channel from the most
//! recent noisy samples and adapts its weights online, one sample at a
//! time, by gradient descent on the squared prediction error. A
//! [`ChannelPipeline`] wraps one filter together with the sample windows
//! feeding it, which is the form the stream controller drives.
//!
//! Until `order` noisy samples have arrived the filter cannot form a
//! prediction and every step returns [`Prediction::Warming`] with a trivial
//! fallback value. This ramp-up state is part of the result type on purpose:
//! callers decide what to do with a warming value instead of re-checking
//! window lengths themselves.
//!
//! # Examples
//! ## Denoising a steady reading
//!
//! A sensor at rest: the true pitch angle holds steady while the measurement
//! carries uniform noise. After adaptation the filtered estimate tracks the
//! true angle much more closely than the raw measurement does.
//!
//! ```
//! use rand::{rngs::StdRng, Rng, SeedableRng};
//! use attitude_dsp::common::F64ArrayExt;
//! use attitude_dsp::lms::ChannelPipeline;
//!
//! let true_pitch = 1.0;
//! let mut rng = StdRng::seed_from_u64(123);
//!
//! let mut pipeline = ChannelPipeline::from_options(10, 0.001, 50);
//! let mut noisy_errors = vec![];
//! let mut filtered_errors = vec![];
//! for _ in 0..5000 {
//!     let noisy_pitch = true_pitch + rng.gen_range(-0.2..=0.2);
//!     let (_, _, prediction) = pipeline.ingest(true_pitch, noisy_pitch);
//!     noisy_errors.push(noisy_pitch - true_pitch);
//!     filtered_errors.push(prediction.value() - true_pitch);
//! }
//!
//! let tail = noisy_errors.len() - 1000;
//! let noisy_rms = noisy_errors[tail..].rms_level();
//! let filtered_rms = filtered_errors[tail..].rms_level();
//! assert!(filtered_rms < 0.5 * noisy_rms);
//! ```

mod channel_pipeline;
mod lms_filter;

pub use channel_pipeline::{ChannelPipeline, DEFAULT_DISPLAY_CAPACITY};
pub use lms_filter::{LmsFilter, Prediction, DEFAULT_LEARNING_RATE, DEFAULT_ORDER};
