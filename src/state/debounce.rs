//! Debounced value, driven by the UI loop's clock

use std::time::{Duration, Instant};

/// Delay used when none is given
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Holds the settled value and, separately, the latest input.
/// The input becomes the settled value once `delay` passes with no newer input.
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    settled: T,
    pending: Option<(T, Instant)>,
    delay: Duration,
}

impl<T: Clone> Debounced<T> {
    pub fn new(initial: T) -> Self {
        Self::with_delay(initial, DEFAULT_DEBOUNCE)
    }

    pub fn with_delay(initial: T, delay: Duration) -> Self {
        Self {
            settled: initial,
            pending: None,
            delay,
        }
    }

    /// Record new input at `now`; restarts the delay
    pub fn set_at(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    pub fn set(&mut self, value: T) {
        self.set_at(value, Instant::now());
    }

    /// Promote the pending input if its delay has elapsed at `now`.
    /// Returns true when the settled value changed.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        match self.pending.take() {
            Some((value, since)) if now.saturating_duration_since(since) >= self.delay => {
                self.settled = value;
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn value(&self) -> &T {
        &self.settled
    }

    /// Latest input, settled or not
    pub fn latest(&self) -> &T {
        self.pending
            .as_ref()
            .map(|(value, _)| value)
            .unwrap_or(&self.settled)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn test_default_delay() {
        assert_eq!(Debounced::new(0).delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_value_waits_for_delay() {
        let start = Instant::now();
        let mut search = Debounced::with_delay(String::new(), DELAY);
        search.set_at("rust".to_string(), start);

        assert!(!search.tick_at(start + Duration::from_millis(499)));
        assert_eq!(search.value(), "");
        assert_eq!(search.latest(), "rust");

        assert!(search.tick_at(start + DELAY));
        assert_eq!(search.value(), "rust");
        assert!(!search.is_pending());
    }

    #[test]
    fn test_new_input_restarts_delay() {
        let start = Instant::now();
        let mut search = Debounced::with_delay(String::new(), DELAY);
        search.set_at("r".to_string(), start);
        search.set_at("ru".to_string(), start + Duration::from_millis(400));

        assert!(!search.tick_at(start + Duration::from_millis(600)));
        assert_eq!(search.value(), "");

        assert!(search.tick_at(start + Duration::from_millis(900)));
        assert_eq!(search.value(), "ru");
    }

    #[test]
    fn test_tick_without_input_is_noop() {
        let mut value = Debounced::new(1);
        assert!(!value.tick());
        assert_eq!(*value.value(), 1);
    }
}
