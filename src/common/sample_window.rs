use std::collections::VecDeque;

use thiserror::Error;

/// Returned when a window holds fewer samples than a caller asked for.
///
/// During stream ramp-up this is the expected state, not a fault: callers
/// treat it as "not enough data yet" and fall back accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("window holds {available} samples, {needed} requested")]
pub struct InsufficientHistory {
    /// Number of samples the caller asked for.
    pub needed: usize,
    /// Number of samples currently in the window.
    pub available: usize,
}

/// An ordered history of scalar samples for one logical channel.
///
/// Values are appended in arrival order. A bounded window evicts its oldest
/// value once the length would exceed the capacity, so it always holds the
/// most recent samples, still in the order they arrived.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    samples: VecDeque<f64>,
    capacity: Option<usize>,
}

impl SampleWindow {
    /// Creates a window with no capacity bound.
    pub fn unbounded() -> Self {
        SampleWindow {
            samples: VecDeque::new(),
            capacity: None,
        }
    }

    /// Creates a window holding at most `capacity` samples.
    pub fn bounded(capacity: usize) -> Self {
        if capacity == 0 {
            panic!("Window capacity must be greater than 0")
        }
        SampleWindow {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity: Some(capacity),
        }
    }

    /// Appends a value at the end, evicting the oldest value if the
    /// configured capacity is exceeded. O(1) amortized.
    pub fn append(&mut self, value: f64) {
        self.samples.push_back(value);
        if let Some(capacity) = self.capacity {
            if self.samples.len() > capacity {
                self.samples.pop_front();
            }
        }
    }

    /// Returns the most recently appended value, if any.
    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    /// Fills `dest` with the `dest.len()` most recent values, most recent
    /// first, so `dest[i]` is the value `i` arrivals in the past.
    ///
    /// This is the one accessor that yields lagged samples. Both the
    /// prediction dot product and the weight update read from a buffer
    /// filled here, which keeps lag index `i` meaning the same thing in
    /// both places.
    pub fn last_into(&self, dest: &mut [f64]) -> Result<(), InsufficientHistory> {
        if self.samples.len() < dest.len() {
            return Err(InsufficientHistory {
                needed: dest.len(),
                available: self.samples.len(),
            });
        }
        for (slot, value) in dest.iter_mut().zip(self.samples.iter().rev()) {
            *slot = *value;
        }
        Ok(())
    }

    /// Iterates over the stored values in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Number of samples currently stored.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The configured capacity, or `None` for an unbounded window.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_arrival_order() {
        let mut window = SampleWindow::unbounded();
        for value in [3.0, 1.0, 4.0, 1.5] {
            window.append(value);
        }
        let stored: Vec<f64> = window.iter().collect();
        assert_eq!(stored, vec![3.0, 1.0, 4.0, 1.5]);
        assert_eq!(window.len(), 4);
        assert_eq!(window.latest(), Some(1.5));
    }

    #[test]
    fn test_bounded_window_evicts_oldest() {
        let capacity = 50;
        let mut window = SampleWindow::bounded(capacity);
        for i in 0..capacity + 5 {
            window.append(i as f64);
        }
        assert_eq!(window.len(), capacity);
        let stored: Vec<f64> = window.iter().collect();
        let expected: Vec<f64> = (5..capacity + 5).map(|i| i as f64).collect();
        assert_eq!(stored, expected);
    }

    #[test]
    fn test_last_into_is_most_recent_first() {
        let mut window = SampleWindow::unbounded();
        for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
            window.append(value);
        }
        let mut lags = [0.0; 3];
        window.last_into(&mut lags).unwrap();
        assert_eq!(lags, [5.0, 4.0, 3.0]);
    }

    #[test]
    fn test_last_into_reports_insufficient_history() {
        let mut window = SampleWindow::unbounded();
        window.append(1.0);
        window.append(2.0);
        let mut lags = [0.0; 3];
        let err = window.last_into(&mut lags).unwrap_err();
        assert_eq!(err, InsufficientHistory { needed: 3, available: 2 });
    }

    #[test]
    fn test_exact_length_is_enough() {
        let mut window = SampleWindow::bounded(3);
        for value in [1.0, 2.0, 3.0] {
            window.append(value);
        }
        let mut lags = [0.0; 3];
        assert!(window.last_into(&mut lags).is_ok());
        assert_eq!(lags, [3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_empty_window() {
        let window = SampleWindow::unbounded();
        assert!(window.is_empty());
        assert_eq!(window.latest(), None);
        let mut lags = [0.0; 1];
        assert!(window.last_into(&mut lags).is_err());
    }

    #[test]
    fn test_zero_length_request_always_succeeds() {
        let window = SampleWindow::unbounded();
        assert!(window.last_into(&mut []).is_ok());
    }

    #[test]
    #[should_panic]
    fn test_zero_capacity() {
        SampleWindow::bounded(0);
    }
}
