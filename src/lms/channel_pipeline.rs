use crate::common::SampleWindow;
use crate::lms::lms_filter::{LmsFilter, Prediction, DEFAULT_LEARNING_RATE};

/// Default capacity of the filtered-value display history.
pub const DEFAULT_DISPLAY_CAPACITY: usize = 50;

/// Couples the sample windows and the adaptive filter for one physical
/// channel (pitch or roll) and sequences the per-sample steps.
///
/// The noisy and reference windows are bounded at the filter order: the
/// filter never looks further back, and no history beyond that is retained.
/// The filtered window is display history only, never fed back into the
/// filter.
#[derive(Debug)]
pub struct ChannelPipeline {
    filter: LmsFilter,
    noisy: SampleWindow,
    reference: SampleWindow,
    filtered: SampleWindow,
}

impl ChannelPipeline {
    /// Creates a pipeline of the given filter order with the default
    /// learning rate and display capacity.
    pub fn new(order: usize) -> Self {
        ChannelPipeline::from_options(order, DEFAULT_LEARNING_RATE, DEFAULT_DISPLAY_CAPACITY)
    }

    /// Creates a pipeline from explicit options.
    pub fn from_options(order: usize, learning_rate: f64, display_capacity: usize) -> Self {
        ChannelPipeline {
            filter: LmsFilter::from_options(order, learning_rate),
            noisy: SampleWindow::bounded(order),
            reference: SampleWindow::bounded(order),
            filtered: SampleWindow::bounded(display_capacity),
        }
    }

    /// Ingests one aligned sample pair: appends both values to their
    /// windows, steps the filter, records the prediction in the display
    /// history and returns `(true_value, noisy_value, prediction)`.
    pub fn ingest(&mut self, true_value: f64, noisy_value: f64) -> (f64, f64, Prediction) {
        self.reference.append(true_value);
        self.noisy.append(noisy_value);
        let prediction = self.filter.step(&self.noisy, &self.reference);
        self.filtered.append(prediction.value());
        (true_value, noisy_value, prediction)
    }

    /// The adaptive filter, exposing the learned weight vector.
    pub fn filter(&self) -> &LmsFilter {
        &self.filter
    }

    /// The most recent noisy input samples, bounded at the filter order.
    pub fn noisy(&self) -> &SampleWindow {
        &self.noisy
    }

    /// The most recent true reference samples, bounded at the filter order.
    pub fn reference(&self) -> &SampleWindow {
        &self.reference
    }

    /// The most recent filtered values, bounded at the display capacity.
    pub fn filtered(&self) -> &SampleWindow {
        &self.filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_echoes_the_pair() {
        let mut pipeline = ChannelPipeline::from_options(3, 0.1, 50);
        let (true_value, noisy_value, prediction) = pipeline.ingest(2.0, 5.0);
        assert_eq!(true_value, 2.0);
        assert_eq!(noisy_value, 5.0);
        assert_eq!(prediction, Prediction::Warming(5.0));
        assert_eq!(pipeline.filtered().latest(), Some(5.0));
    }

    #[test]
    fn test_history_windows_are_bounded_at_order() {
        let mut pipeline = ChannelPipeline::from_options(3, 0.01, 50);
        for i in 0..10 {
            pipeline.ingest(i as f64, i as f64 + 0.5);
        }
        assert_eq!(pipeline.noisy().len(), 3);
        assert_eq!(pipeline.reference().len(), 3);
        assert_eq!(pipeline.noisy().capacity(), Some(3));
    }

    #[test]
    fn test_filtered_history_caps_at_display_capacity() {
        let mut pipeline = ChannelPipeline::from_options(2, 0.1, 4);
        let outputs: Vec<f64> = (0..9)
            .map(|i| pipeline.ingest(i as f64, i as f64).2.value())
            .collect();
        assert_eq!(pipeline.filtered().len(), 4);
        let stored: Vec<f64> = pipeline.filtered().iter().collect();
        assert_eq!(stored, outputs[5..].to_vec());
    }

    #[test]
    fn test_matches_a_directly_driven_filter() {
        let mut pipeline = ChannelPipeline::from_options(4, 0.02, 50);

        let mut filter = LmsFilter::from_options(4, 0.02);
        let mut noisy = SampleWindow::bounded(4);
        let mut reference = SampleWindow::bounded(4);

        for i in 0..40 {
            let true_value = (i as f64 * 0.1).sin();
            let noisy_value = true_value + if i % 2 == 0 { 0.05 } else { -0.05 };

            let (_, _, from_pipeline) = pipeline.ingest(true_value, noisy_value);

            reference.append(true_value);
            noisy.append(noisy_value);
            let direct = filter.step(&noisy, &reference);

            assert_eq!(from_pipeline, direct);
        }
        assert_eq!(pipeline.filter().weights(), filter.weights());
    }

    #[test]
    fn test_weights_adapt_once_warmed_up() {
        let mut pipeline = ChannelPipeline::new(3);
        for _ in 0..2 {
            pipeline.ingest(1.0, 1.0);
        }
        assert!(pipeline.filter().weights().iter().all(|&w| w == 0.0));
        pipeline.ingest(1.0, 1.0);
        assert!(pipeline.filter().weights().iter().all(|&w| w != 0.0));
    }
}
