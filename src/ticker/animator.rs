// ============================================================================
// TickerAnimator : rotation des quotes avec fondu
// ============================================================================
// Un cycle = fondu sortant → (délai) → changement de contenu + fondu entrant
// → avance du curseur.
//
// State machine :
//
//   Idle ──tick()──▶ FadingOut{swap_at} ──swap──▶ FadingIn{settled_at} ──▶ Idle
//
// - Le contenu n'est JAMAIS remplacé sans fondu sortant dans le même cycle
// - Le délai de fondu est strictement plus court que la période,
//   donc deux cycles ne se chevauchent pas
// - Tout est piloté par `now` : pas de thread, pas de sleep
// ============================================================================

use std::time::Duration;

use anyhow::{ensure, Result};
use tracing::{debug, info};

use crate::models::QuoteRecord;
use crate::ticker::target::{FadeState, TickerContent, TickerHost};
use crate::ticker::timer::RepeatingTimer;

/// Période de rotation par défaut (5 secondes)
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(5000);

/// Délai entre le fondu sortant et le changement de contenu
pub const DEFAULT_FADE_DELAY: Duration = Duration::from_millis(500);

/// Durée de la transition de fondu entrant (opacité 0 → 1)
pub const DEFAULT_FADE_IN: Duration = Duration::from_millis(500);

/// Timings du ticker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerTiming {
    pub period: Duration,
    pub fade_delay: Duration,
    pub fade_in: Duration,
}

impl TickerTiming {
    /// Vérifie que deux cycles ne peuvent pas se chevaucher
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.period.is_zero(), "La période du ticker doit être > 0");
        ensure!(
            self.fade_delay < self.period,
            "Le délai de fondu ({:?}) doit être plus court que la période ({:?})",
            self.fade_delay,
            self.period
        );
        Ok(())
    }
}

impl Default for TickerTiming {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            fade_delay: DEFAULT_FADE_DELAY,
            fade_in: DEFAULT_FADE_IN,
        }
    }
}

/// Phase de l'animation en cours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Rien en cours, contenu stable
    Idle,

    /// Fondu sortant appliqué, contenu remplacé à `swap_at`
    FadingOut { started_at: Duration, swap_at: Duration },

    /// Contenu remplacé, fondu entrant jusqu'à `settled_at`
    FadingIn { swapped_at: Duration, settled_at: Duration },
}

/// Anime le ticker : une seule instance, possédée par App
pub struct TickerAnimator {
    /// Liste fixe, jamais modifiée après construction (len >= 1)
    quotes: Vec<QuoteRecord>,

    /// Prochaine quote à afficher, toujours dans [0, quotes.len())
    cursor: usize,

    timing: TickerTiming,

    /// Some tant que le ticker tourne (un seul timer à la fois)
    timer: Option<RepeatingTimer>,

    phase: Phase,

    /// Nombre de contenus effectivement affichés
    swaps: u64,
}

impl TickerAnimator {
    /// Crée l'animateur (arrêté) avec une liste de quotes non vide
    pub fn new(quotes: Vec<QuoteRecord>, timing: TickerTiming) -> Result<Self> {
        ensure!(!quotes.is_empty(), "Le ticker a besoin d'au moins une quote");
        timing.validate()?;

        Ok(Self {
            quotes,
            cursor: 0,
            timing,
            timer: None,
            phase: Phase::Idle,
            swaps: 0,
        })
    }

    // ========================================================================
    // Cycle de vie
    // ========================================================================

    /// Démarre la rotation : un cycle immédiat, puis un cycle par période
    ///
    /// Retourne false (et ne fait rien) si le ticker tourne déjà.
    pub fn start(&mut self, now: Duration, host: &mut dyn TickerHost) -> bool {
        if self.timer.is_some() {
            debug!("Ticker already running, start ignored");
            return false;
        }

        info!(
            quotes = self.quotes.len(),
            cursor = self.cursor,
            period_ms = self.timing.period.as_millis() as u64,
            "Starting ticker"
        );
        self.timer = Some(RepeatingTimer::new(now, self.timing.period));
        self.tick(now, host);
        true
    }

    /// Arrête la rotation et annule un changement de contenu en attente
    ///
    /// Le curseur est conservé : start() reprendra sur la même quote.
    /// Un fondu sortant interrompu est annulé : le contenu actuel redevient
    /// visible (fade-in) au lieu de rester transparent pendant la pause.
    pub fn stop(&mut self, host: &mut dyn TickerHost) {
        if self.timer.take().is_some() {
            info!(cursor = self.cursor, "Stopping ticker");
        }

        if let Phase::FadingOut { .. } = self.phase {
            if let Some(target) = host.ticker_target() {
                debug!(cursor = self.cursor, "Fade-out cancelled, restoring content");
                target.apply_fade(FadeState::FadeIn);
            }
        }
        self.phase = Phase::Idle;
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    // ========================================================================
    // Cycle
    // ========================================================================

    /// Démarre un cycle : fondu sortant immédiat, contenu remplacé plus tard
    ///
    /// Sans zone de rendu, le cycle ne fait rien (et le curseur ne bouge
    /// pas). Retourne true si le fondu a commencé.
    pub fn tick(&mut self, now: Duration, host: &mut dyn TickerHost) -> bool {
        let Some(target) = host.ticker_target() else {
            debug!(cursor = self.cursor, "No ticker target, cycle skipped");
            return false;
        };

        target.apply_fade(FadeState::FadeOut);
        self.phase = Phase::FadingOut {
            started_at: now,
            swap_at: now + self.timing.fade_delay,
        };
        true
    }

    /// Fait avancer l'animation jusqu'à `now`
    ///
    /// Ordre : changement de contenu en attente, fin du fondu entrant,
    /// puis timer périodique.
    pub fn poll(&mut self, now: Duration, host: &mut dyn TickerHost) {
        if let Phase::FadingOut { swap_at, .. } = self.phase {
            if now >= swap_at {
                self.swap(swap_at, host);
            }
        }

        if let Phase::FadingIn { settled_at, .. } = self.phase {
            if now >= settled_at {
                self.phase = Phase::Idle;
            }
        }

        let due = self
            .timer
            .as_mut()
            .map(|timer| timer.fire_if_due(now))
            .unwrap_or(false);
        if due {
            self.tick(now, host);
        }
    }

    /// Remplace le contenu par la quote au curseur puis avance le curseur
    fn swap(&mut self, at: Duration, host: &mut dyn TickerHost) {
        let Some(target) = host.ticker_target() else {
            // La zone a disparu pendant le fondu : on abandonne ce cycle
            debug!(cursor = self.cursor, "Ticker target gone before swap");
            self.phase = Phase::Idle;
            return;
        };

        let quote = &self.quotes[self.cursor];
        debug!(cursor = self.cursor, symbol = %quote.symbol, "Swapping ticker content");

        target.replace_content(TickerContent::from_quote(quote));
        target.apply_fade(FadeState::FadeIn);

        self.cursor = (self.cursor + 1) % self.quotes.len();
        self.swaps += 1;
        self.phase = Phase::FadingIn {
            swapped_at: at,
            settled_at: at + self.timing.fade_in,
        };
    }

    // ========================================================================
    // Accesseurs
    // ========================================================================

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn quotes(&self) -> &[QuoteRecord] {
        &self.quotes
    }

    pub fn timing(&self) -> TickerTiming {
        self.timing
    }

    /// Nombre de contenus affichés depuis la création
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Prochaine échéance du timer périodique (None si arrêté)
    pub fn next_cycle_at(&self) -> Option<Duration> {
        self.timer.as_ref().map(RepeatingTimer::next_due)
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
