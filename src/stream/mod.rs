//! Live stream plumbing: the text wire format for device telemetry and the
//! controller that drives one denoising pipeline per attitude channel.
//!
//! A device emits one [`AttitudeRecord`] line per tick. The
//! [`StreamController`] decodes lines, feeds both channels, and stamps the
//! resulting frames with the time elapsed since the stream started, which is
//! the shape plotting frontends want.
//!
//! # Examples
//!
//! ```
//! use attitude_dsp::stream::StreamController;
//!
//! let mut controller = StreamController::new();
//!
//! let frame = controller.handle_line("0.5, -0.25, 0.625, -0.375").unwrap();
//! assert_eq!(frame.pitch.true_value, 0.5);
//! assert_eq!(frame.pitch.noisy_value, 0.625);
//! assert_eq!(frame.roll.true_value, -0.25);
//!
//! // Anything that does not decode is dropped without disturbing the
//! // filters.
//! assert!(controller.handle_line("not telemetry").is_none());
//! ```

mod controller;
mod record;

pub use controller::{ChannelFrame, StreamConfig, StreamController, TickFrame};
pub use record::{AttitudeRecord, DecodeError};
