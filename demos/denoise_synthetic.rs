use attitude_dsp::common::F64ArrayExt;
use attitude_dsp::lms::ChannelPipeline;
use dev_helpers::AttitudeSimulator;

fn main() {
    const FILTER_ORDER: usize = 10;
    const LEARNING_RATE: f64 = 0.001;
    const DISPLAY_CAPACITY: usize = 50;
    const TICK_COUNT: usize = 4000;
    const SEGMENT: usize = 500;

    // Using notation from https://en.wikipedia.org/wiki/Least_mean_squares_filter
    // d(n) is the true angle, x(n) the noisy measurement and y(n) the filter
    // output. The printed RMS values track e(n) = y(n) - d(n) per segment.

    let mut simulator = AttitudeSimulator::new(7);
    let mut pitch_pipeline =
        ChannelPipeline::from_options(FILTER_ORDER, LEARNING_RATE, DISPLAY_CAPACITY);
    let mut roll_pipeline =
        ChannelPipeline::from_options(FILTER_ORDER, LEARNING_RATE, DISPLAY_CAPACITY);

    println!(
        "Filtering {} synthetic ticks (order {}, learning rate {})",
        TICK_COUNT, FILTER_ORDER, LEARNING_RATE
    );
    println!();

    let mut pitch_noise = Vec::with_capacity(SEGMENT);
    let mut pitch_error = Vec::with_capacity(SEGMENT);
    let mut roll_noise = Vec::with_capacity(SEGMENT);
    let mut roll_error = Vec::with_capacity(SEGMENT);
    for tick in 0..TICK_COUNT {
        let (pitch, roll, noisy_pitch, noisy_roll) = simulator.next_angles();
        let (_, _, pitch_prediction) = pitch_pipeline.ingest(pitch, noisy_pitch);
        let (_, _, roll_prediction) = roll_pipeline.ingest(roll, noisy_roll);
        pitch_noise.push(noisy_pitch - pitch);
        pitch_error.push(pitch_prediction.value() - pitch);
        roll_noise.push(noisy_roll - roll);
        roll_error.push(roll_prediction.value() - roll);

        if (tick + 1) % SEGMENT == 0 {
            println!(
                "ticks {:>4}-{:<4} | pitch noise RMS {:.3}°, error RMS {:.3}° | roll noise RMS {:.3}°, error RMS {:.3}°",
                tick + 1 - SEGMENT,
                tick + 1,
                pitch_noise.rms_level(),
                pitch_error.rms_level(),
                roll_noise.rms_level(),
                roll_error.rms_level(),
            );
            pitch_noise.clear();
            pitch_error.clear();
            roll_noise.clear();
            roll_error.clear();
        }
    }

    println!();
    println!(
        "Final pitch weights: {:?}",
        pitch_pipeline.filter().weights()
    );
}
