// ============================================================================
// Horloges
// ============================================================================
// Le ticker ne lit jamais l'heure lui-même : on lui passe `now`.
// Le binaire utilise SystemClock, les tests utilisent ManualClock
// pour avancer le temps sans jamais dormir.
// ============================================================================

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source de temps monotone, exprimée depuis une origine arbitraire
pub trait Clock {
    /// Temps écoulé depuis l'origine de l'horloge
    fn now(&self) -> Duration;
}

/// Horloge réelle basée sur Instant
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Horloge virtuelle, avancée à la main
///
/// CONCEPT RUST : Cell<T>
/// - Mutabilité intérieure pour un type Copy
/// - advance() prend &self, comme now()
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Avance l'horloge de `delta`
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    /// Avance l'horloge de `ms` millisecondes
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);

        clock.advance_ms(500);
        clock.advance(Duration::from_secs(5));
        assert_eq!(clock.now(), Duration::from_millis(5500));
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}
