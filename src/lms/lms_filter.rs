use crate::common::SampleWindow;

/// Default filter order, i.e. the number of lagged noisy samples used to
/// form one prediction.
pub const DEFAULT_ORDER: usize = 10;
/// Default step size for the gradient descent weight update.
pub const DEFAULT_LEARNING_RATE: f64 = 0.001;

/// An adaptive [least mean squares filter](https://en.wikipedia.org/wiki/Least_mean_squares_filter)
/// predicting the true value of a channel from its most recent noisy samples.
///
/// Weights start at zero and are adapted after every full-history step by
/// gradient descent on the squared prediction error. There is no clipping and
/// no regularization: on a diverging stream the weights can grow without
/// bound, matching the unregularized reference algorithm.
#[derive(Debug)]
pub struct LmsFilter {
    /// Filter coefficients. `weights[i]` applies to the noisy sample `i`
    /// arrivals in the past.
    weights: Box<[f64]>,
    /// Lagged noisy samples for the current step, most recent first. Kept
    /// preallocated so a step never allocates.
    lags: Box<[f64]>,
    learning_rate: f64,
}

/// The outcome of one filter step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prediction {
    /// A prediction formed from a full set of lagged samples. The weights
    /// were adapted against the latest reference value.
    Ready(f64),
    /// Not enough noisy history yet. Carries the fallback value, the latest
    /// raw noisy sample or 0.0 before any arrive. The weights were not
    /// touched: without `order` aligned lags there is no valid error signal.
    Warming(f64),
}

impl Prediction {
    /// The predicted or fallback value.
    pub fn value(self) -> f64 {
        match self {
            Prediction::Ready(value) | Prediction::Warming(value) => value,
        }
    }

    /// True once the value came from the weight vector rather than the
    /// ramp-up fallback policy.
    pub fn is_ready(self) -> bool {
        matches!(self, Prediction::Ready(_))
    }
}

impl LmsFilter {
    /// Creates a filter of the given order with the default learning rate.
    pub fn new(order: usize) -> Self {
        LmsFilter::from_options(order, DEFAULT_LEARNING_RATE)
    }

    /// Creates a filter from explicit options.
    pub fn from_options(order: usize, learning_rate: f64) -> Self {
        if order == 0 {
            panic!("Filter order must be greater than 0")
        }
        LmsFilter {
            weights: vec![0.0; order].into_boxed_slice(),
            lags: vec![0.0; order].into_boxed_slice(),
            learning_rate,
        }
    }

    /// The weight vector, one coefficient per lag. Exposed so the learned
    /// state can be inspected after any step.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn order(&self) -> usize {
        self.weights.len()
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Performs one predict-and-adapt step.
    ///
    /// `noisy` supplies the lagged input samples, `reference` the true value
    /// aligned with the current step. With fewer than `order` noisy samples
    /// this returns [`Prediction::Warming`] and leaves the weights alone.
    pub fn step(&mut self, noisy: &SampleWindow, reference: &SampleWindow) -> Prediction {
        if noisy.last_into(&mut self.lags).is_err() {
            return Prediction::Warming(noisy.latest().unwrap_or(0.0));
        }

        let mut prediction = 0.0;
        for (weight, lag) in self.weights.iter().zip(self.lags.iter()) {
            prediction += weight * lag;
        }

        let error = reference.latest().unwrap_or(0.0) - prediction;

        // d/dw of the squared-error cost; the factor 2 belongs to the
        // derivative and is not a tunable.
        for (weight, lag) in self.weights.iter_mut().zip(self.lags.iter()) {
            *weight += self.learning_rate * error * lag * 2.0;
        }

        Prediction::Ready(prediction)
    }
}
