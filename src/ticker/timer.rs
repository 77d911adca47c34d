// ============================================================================
// RepeatingTimer : minuteur périodique à la setInterval
// ============================================================================
// Le timer ne "tourne" pas tout seul : la boucle principale lui demande
// à chaque frame s'il est échu (poll). Un seul déclenchement par appel.
//
// Si la boucle a pris du retard (terminal suspendu, machine en veille),
// les périodes ratées ne sont pas rejouées : le timer se déclenche une
// fois puis se recale sur la prochaine échéance future.
// ============================================================================

use std::time::Duration;

/// Minuteur périodique
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatingTimer {
    period: Duration,
    next_due: Duration,
}

impl RepeatingTimer {
    /// Crée un timer dont la première échéance est `start + period`
    pub fn new(start: Duration, period: Duration) -> Self {
        Self {
            period,
            next_due: start + period,
        }
    }

    /// Prochaine échéance
    pub fn next_due(&self) -> Duration {
        self.next_due
    }

    /// Retourne true si le timer est échu à `now`, et programme la suivante
    pub fn fire_if_due(&mut self, now: Duration) -> bool {
        if now < self.next_due {
            return false;
        }

        self.next_due += self.period;

        // Retard de plusieurs périodes : on saute les échéances passées
        if self.next_due <= now && !self.period.is_zero() {
            let behind = (now - self.next_due).as_nanos() / self.period.as_nanos() + 1;
            // behind tient dans un u32 tant que le retard reste raisonnable
            let skipped = u32::try_from(behind).unwrap_or(u32::MAX);
            self.next_due += self.period * skipped;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_fires_every_period() {
        let mut timer = RepeatingTimer::new(ms(0), ms(5000));

        assert!(!timer.fire_if_due(ms(4999)));
        assert!(timer.fire_if_due(ms(5000)));
        assert!(!timer.fire_if_due(ms(5000)));
        assert_eq!(timer.next_due(), ms(10000));
        assert!(timer.fire_if_due(ms(10001)));
        assert_eq!(timer.next_due(), ms(15000));
    }

    #[test]
    fn test_coalesces_missed_periods() {
        let mut timer = RepeatingTimer::new(ms(0), ms(5000));

        // 23 secondes d'un coup : un seul déclenchement
        assert!(timer.fire_if_due(ms(23000)));
        assert!(!timer.fire_if_due(ms(23000)));
        assert_eq!(timer.next_due(), ms(25000));
    }

    #[test]
    fn test_exact_multiple_realigns_forward() {
        let mut timer = RepeatingTimer::new(ms(0), ms(5000));

        assert!(timer.fire_if_due(ms(10000)));
        assert_eq!(timer.next_due(), ms(15000));
    }
}
