//! attitude_dsp is an online [least mean squares](https://en.wikipedia.org/wiki/Least_mean_squares_filter)
//! denoiser for live streams of paired true/noisy attitude readings, for
//! example the pitch and roll angles reported by an IMU over a serial port.
//! Each channel is filtered sample by sample as lines arrive, so the crate
//! is suitable for driving live plots and dashboards.
//!
//! Features
//! * Per sample processing with no per sample allocation. Filter buffers are
//! allocated up front and reused.
//! * Explicit ramp up handling. Until enough history has accumulated the
//! filter reports a tagged fallback value instead of a fake prediction.
//! * A lenient line decoder: corrupted telemetry lines are logged and
//! dropped without disturbing filter state.
//!
//! # Examples
//!
//! Feeding raw device lines to a [`stream::StreamController`], which runs
//! one adaptive filter per channel and stamps frames with stream time:
//!
//! ```
//! use attitude_dsp::stream::{StreamConfig, StreamController};
//!
//! let mut controller = StreamController::from_config(StreamConfig {
//!     order: 4,
//!     learning_rate: 0.01,
//!     display_window_capacity: 50,
//! });
//!
//! // One comma separated line per device tick: true pitch, true roll,
//! // noisy pitch, noisy roll.
//! for line in ["0.50, -0.25, 0.52, -0.27", "0.50, -0.25, 0.47, -0.22"] {
//!     if let Some(frame) = controller.handle_line(line) {
//!         println!(
//!             "t={:.3}s pitch: noisy {:.3} -> filtered {:.3}",
//!             frame.pitch.elapsed_seconds, frame.pitch.noisy_value, frame.pitch.filtered_value,
//!         );
//!     }
//! }
//! ```
//!
//! For driving a single filter directly, without the stream layer, see
//! [`lms::LmsFilter`] and [`lms::ChannelPipeline`].

pub mod common;
pub mod lms;
pub mod stream;
