use std::time::Instant;

use log::{debug, warn};

use crate::lms::{ChannelPipeline, DEFAULT_DISPLAY_CAPACITY, DEFAULT_LEARNING_RATE, DEFAULT_ORDER};
use crate::stream::record::AttitudeRecord;

/// Filtering parameters shared by both attitude channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamConfig {
    /// Number of filter weights, i.e. how many past noisy samples feed each
    /// prediction.
    pub order: usize,
    /// LMS adaptation step size.
    pub learning_rate: f64,
    /// Capacity of the per channel window of filtered values kept for
    /// display.
    pub display_window_capacity: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        StreamConfig {
            order: DEFAULT_ORDER,
            learning_rate: DEFAULT_LEARNING_RATE,
            display_window_capacity: DEFAULT_DISPLAY_CAPACITY,
        }
    }
}

/// One channel's view of a processed tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelFrame {
    /// Seconds since the controller was created, identical across both
    /// channels of a tick.
    pub elapsed_seconds: f64,
    pub true_value: f64,
    pub noisy_value: f64,
    pub filtered_value: f64,
}

/// Everything a consumer needs to plot one tick: a [`ChannelFrame`] per
/// attitude channel, stamped with a single shared elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickFrame {
    pub pitch: ChannelFrame,
    pub roll: ChannelFrame,
}

/// Drives one [`ChannelPipeline`] per attitude channel from a stream of
/// telemetry records.
///
/// The controller owns the stream clock: each processed tick is stamped with
/// the seconds elapsed since the controller was created, and the stamp is
/// read once per tick so the pitch and roll frames of a tick always agree.
///
/// [`handle_line`](StreamController::handle_line) is the lenient entry point
/// for text transports. Lines that fail to decode are logged and dropped
/// without touching any filter state, so one corrupted line costs one data
/// point and nothing else.
#[derive(Debug)]
pub struct StreamController {
    started_at: Instant,
    pitch: ChannelPipeline,
    roll: ChannelPipeline,
}

impl StreamController {
    /// Creates a controller with the default [`StreamConfig`].
    pub fn new() -> Self {
        StreamController::from_config(StreamConfig::default())
    }

    /// Creates a controller with the given parameters. Panics if the order
    /// or the display window capacity is zero.
    pub fn from_config(config: StreamConfig) -> Self {
        debug!("creating stream controller with {:?}", config);
        StreamController {
            started_at: Instant::now(),
            pitch: ChannelPipeline::from_options(
                config.order,
                config.learning_rate,
                config.display_window_capacity,
            ),
            roll: ChannelPipeline::from_options(
                config.order,
                config.learning_rate,
                config.display_window_capacity,
            ),
        }
    }

    /// Feeds one decoded record through both channel pipelines and returns
    /// the resulting frames.
    pub fn process(&mut self, record: AttitudeRecord) -> TickFrame {
        let elapsed_seconds = self.started_at.elapsed().as_secs_f64();
        let (true_pitch, noisy_pitch, pitch_prediction) =
            self.pitch.ingest(record.pitch, record.noisy_pitch);
        let (true_roll, noisy_roll, roll_prediction) =
            self.roll.ingest(record.roll, record.noisy_roll);
        TickFrame {
            pitch: ChannelFrame {
                elapsed_seconds,
                true_value: true_pitch,
                noisy_value: noisy_pitch,
                filtered_value: pitch_prediction.value(),
            },
            roll: ChannelFrame {
                elapsed_seconds,
                true_value: true_roll,
                noisy_value: noisy_roll,
                filtered_value: roll_prediction.value(),
            },
        }
    }

    /// Decodes one raw transport line and processes it.
    ///
    /// Returns `None` for blank lines and for lines that fail to decode.
    /// Decode failures are logged at warn level and leave the controller
    /// state exactly as it was.
    pub fn handle_line(&mut self, line: &str) -> Option<TickFrame> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        match line.parse::<AttitudeRecord>() {
            Ok(record) => Some(self.process(record)),
            Err(error) => {
                warn!("dropping undecodable line {:?}: {}", line, error);
                None
            }
        }
    }

    pub fn pitch(&self) -> &ChannelPipeline {
        &self.pitch
    }

    pub fn roll(&self) -> &ChannelPipeline {
        &self.roll
    }
}

impl Default for StreamController {
    fn default() -> Self {
        StreamController::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pitch: f64, roll: f64, noisy_pitch: f64, noisy_roll: f64) -> AttitudeRecord {
        AttitudeRecord {
            pitch,
            roll,
            noisy_pitch,
            noisy_roll,
        }
    }

    #[test]
    fn test_default_config() {
        let config = StreamConfig::default();
        assert_eq!(config.order, 10);
        assert_eq!(config.learning_rate, 0.001);
        assert_eq!(config.display_window_capacity, 50);
    }

    #[test]
    fn test_process_drives_both_channels() {
        let mut controller = StreamController::new();
        let frame = controller.process(record(1.0, -2.0, 1.25, -1.75));
        assert_eq!(frame.pitch.true_value, 1.0);
        assert_eq!(frame.pitch.noisy_value, 1.25);
        assert_eq!(frame.roll.true_value, -2.0);
        assert_eq!(frame.roll.noisy_value, -1.75);
        // Both pipelines saw exactly one sample.
        assert_eq!(controller.pitch().noisy().len(), 1);
        assert_eq!(controller.roll().noisy().len(), 1);
    }

    #[test]
    fn test_channels_share_one_time_stamp() {
        let mut controller = StreamController::new();
        for tick in 0..5 {
            let frame = controller.process(record(tick as f64, 0.0, 0.0, 0.0));
            assert_eq!(frame.pitch.elapsed_seconds, frame.roll.elapsed_seconds);
        }
    }

    #[test]
    fn test_elapsed_time_is_monotonic() {
        let mut controller = StreamController::new();
        let first = controller.process(record(0.0, 0.0, 0.0, 0.0));
        let second = controller.process(record(0.0, 0.0, 0.0, 0.0));
        assert!(first.pitch.elapsed_seconds >= 0.0);
        assert!(second.pitch.elapsed_seconds >= first.pitch.elapsed_seconds);
    }

    #[test]
    fn test_frames_match_a_directly_driven_pipeline() {
        let config = StreamConfig {
            order: 3,
            learning_rate: 0.1,
            display_window_capacity: 50,
        };
        let mut controller = StreamController::from_config(config);
        let mut reference_pipeline =
            ChannelPipeline::from_options(config.order, config.learning_rate, 50);
        for tick in 0..20 {
            let true_pitch = (tick as f64 * 0.1).sin();
            let noisy_pitch = true_pitch + if tick % 2 == 0 { 0.05 } else { -0.05 };
            let frame = controller.process(record(true_pitch, 0.0, noisy_pitch, 0.0));
            let (_, _, expected) = reference_pipeline.ingest(true_pitch, noisy_pitch);
            assert_eq!(frame.pitch.filtered_value, expected.value());
        }
    }

    #[test]
    fn test_handle_line_decodes_and_processes() {
        let mut controller = StreamController::new();
        let frame = controller.handle_line("1.0, 2.0, 1.5, 2.5\r\n").unwrap();
        assert_eq!(frame.pitch.true_value, 1.0);
        assert_eq!(frame.roll.true_value, 2.0);
        assert_eq!(frame.pitch.noisy_value, 1.5);
        assert_eq!(frame.roll.noisy_value, 2.5);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut controller = StreamController::new();
        assert_eq!(controller.handle_line(""), None);
        assert_eq!(controller.handle_line("   \r\n"), None);
        assert_eq!(controller.pitch().noisy().len(), 0);
        assert_eq!(controller.roll().noisy().len(), 0);
    }

    #[test]
    fn test_malformed_line_leaves_state_untouched() {
        let mut controller = StreamController::new();
        controller.handle_line("1.0, 2.0, 3.0, 4.0");
        controller.handle_line("1.1, 2.1, 3.1, 4.1");
        let weights_before = controller.pitch().filter().weights().to_vec();
        let noisy_len_before = controller.pitch().noisy().len();
        let filtered_len_before = controller.pitch().filtered().len();

        assert_eq!(controller.handle_line("1.0, 2.0, 3.0"), None);
        assert_eq!(controller.handle_line("1.0, oops, 3.0, 4.0"), None);

        assert_eq!(controller.pitch().filter().weights(), &weights_before[..]);
        assert_eq!(controller.pitch().noisy().len(), noisy_len_before);
        assert_eq!(controller.pitch().filtered().len(), filtered_len_before);
    }

    #[test]
    fn test_ramp_up_frames_fall_back_to_noisy() {
        let config = StreamConfig {
            order: 3,
            learning_rate: 0.1,
            display_window_capacity: 50,
        };
        let mut controller = StreamController::from_config(config);
        for tick in 0..2 {
            let noisy = 5.0 + tick as f64;
            let frame = controller.process(record(1.0, 1.0, noisy, noisy));
            assert_eq!(frame.pitch.filtered_value, noisy);
            assert_eq!(frame.roll.filtered_value, noisy);
        }
        // Third tick has enough history for a real prediction.
        let frame = controller.process(record(1.0, 1.0, 7.0, 7.0));
        assert_eq!(frame.pitch.filtered_value, 0.0);
    }
}
