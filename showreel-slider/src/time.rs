//! Time abstraction so autoplay and transition deadlines can be driven by
//! a real clock, tokio's clock, or manually in tests.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait TimeProvider: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

/// Wall-clock monotonic time.
#[derive(Clone, Debug, Default)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Follows tokio's clock, including paused and auto-advanced test time.
#[derive(Clone, Debug, Default)]
pub struct TokioTimeProvider;

impl TimeProvider for TokioTimeProvider {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

/// Manually advanced clock for deterministic tests.
#[derive(Clone, Debug)]
pub struct VirtualTimeProvider {
    instant: Arc<Mutex<Instant>>,
    base_instant: Instant,
}

impl VirtualTimeProvider {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            instant: Arc::new(Mutex::new(now)),
            base_instant: now,
        }
    }

    /// Advance time by a duration.
    pub fn advance(&self, duration: Duration) {
        let mut instant =
            self.instant.lock().unwrap_or_else(PoisonError::into_inner);
        *instant += duration;
    }

    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    /// Time elapsed since the provider was created.
    pub fn elapsed(&self) -> Duration {
        self.now().saturating_duration_since(self.base_instant)
    }
}

impl Default for VirtualTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for VirtualTimeProvider {
    fn now(&self) -> Instant {
        *self.instant.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtual_time_advance() {
        let provider = VirtualTimeProvider::new();
        let start = provider.now();

        provider.advance(Duration::from_secs(10));

        assert_eq!(provider.now() - start, Duration::from_secs(10));
        assert_eq!(provider.elapsed(), Duration::from_secs(10));
    }

    #[test]
    fn test_clones_share_the_clock() {
        let provider = VirtualTimeProvider::new();
        let clone = provider.clone();

        clone.advance_millis(250);

        assert_eq!(provider.elapsed(), Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_provider_follows_paused_clock() {
        let provider = TokioTimeProvider;
        let before = provider.now();

        tokio::time::advance(Duration::from_millis(800)).await;

        assert_eq!(provider.now() - before, Duration::from_millis(800));
    }

    #[test]
    fn test_time_provider_as_trait_object() {
        let provider: Arc<dyn TimeProvider> =
            Arc::new(VirtualTimeProvider::new());
        let _now = provider.now();
    }
}
