use attitude_dsp::lms::{DEFAULT_DISPLAY_CAPACITY, DEFAULT_LEARNING_RATE, DEFAULT_ORDER};
use attitude_dsp::stream::{StreamConfig, StreamController};
use clap::Parser;
use dev_helpers::LineSource;

/// Denoises telemetry lines read from stdin and prints one frame per tick.
///
/// Feed it a live device stream, e.g.:
///
///   cat /dev/ttyUSB0 | cargo run --example live_lines
#[derive(Parser)]
struct Args {
    /// Number of filter weights per channel
    #[arg(long, default_value_t = DEFAULT_ORDER)]
    order: usize,

    /// LMS adaptation step size
    #[arg(long, default_value_t = DEFAULT_LEARNING_RATE)]
    learning_rate: f64,

    /// Filtered values kept per channel for display
    #[arg(long, default_value_t = DEFAULT_DISPLAY_CAPACITY)]
    display_window_capacity: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut controller = StreamController::from_config(StreamConfig {
        order: args.order,
        learning_rate: args.learning_rate,
        display_window_capacity: args.display_window_capacity,
    });

    println!(
        "Reading telemetry from stdin (order {}, learning rate {})",
        args.order, args.learning_rate
    );

    let source = LineSource::from_stdin();
    for line in source.from_reader_thread.iter() {
        if let Some(frame) = controller.handle_line(&line) {
            println!(
                "t={:8.3}s | pitch true {:7.3}° noisy {:7.3}° filtered {:7.3}° | roll true {:7.3}° noisy {:7.3}° filtered {:7.3}°",
                frame.pitch.elapsed_seconds,
                frame.pitch.true_value,
                frame.pitch.noisy_value,
                frame.pitch.filtered_value,
                frame.roll.true_value,
                frame.roll.noisy_value,
                frame.roll.filtered_value,
            );
        }
    }
}
