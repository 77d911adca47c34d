// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état global de l'application TUI
//
// CONCEPTS RUST :
// 1. State Management : centraliser l'état dans une seule structure
// 2. Mutabilité contrôlée : &mut self pour modifier l'état
// 3. Ownership : App possède la page ET le ticker, et prête la page
//    au ticker à chaque appel (&mut self.document)
//
// PATTERN : "Application State"
// - Le rendu lit depuis App
// - Toutes les modifications passent par les méthodes de App
// ============================================================================

use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use crate::config::Config;
use crate::page::{mount_date, Document};
use crate::ticker::TickerAnimator;

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// La page affichée (zones date et ticker, chacune optionnelle)
    pub document: Document,

    /// Rotation des quotes
    pub ticker: TickerAnimator,

    /// Indique si l'utilisateur a demandé à quitter (attend confirmation)
    /// - Première pression de 'q' : confirm_quit = true
    /// - Deuxième pression de 'q' : running = false (quit réel)
    /// - N'importe quelle autre touche : confirm_quit = false (annulation)
    pub confirm_quit: bool,

    /// Dernier instant vu par tick() (pour le rendu du fondu)
    pub now: Duration,
}

impl App {
    /// Crée l'application à partir de la configuration
    ///
    /// Monte les zones demandées, écrit la date une fois, prépare le
    /// ticker (arrêté : voir start()).
    pub fn new(config: &Config, today: NaiveDate) -> Result<Self> {
        let hooks = config.hooks();
        let ids: Vec<&str> = hooks.iter().map(|hook| hook.id()).collect();
        info!(hooks = ?ids, "Mounting page");

        let mut document = Document::with_hooks(&hooks);
        mount_date(today, &mut document);

        let ticker = TickerAnimator::new(config.quotes.clone(), config.timing())?;

        Ok(Self {
            running: true,
            document,
            ticker,
            confirm_quit: false,
            now: Duration::ZERO,
        })
    }

    /// Lance le ticker (premier cycle immédiat)
    pub fn start(&mut self, now: Duration) {
        self.now = now;
        self.ticker.start(now, &mut self.document);
    }

    /// Tick : appelé à chaque itération de la boucle
    ///
    /// CONCEPT : Event Loop Pattern
    /// - Fait avancer l'animation du ticker jusqu'à `now`
    /// - Rien ne se passe entre deux appels : le temps est passé en argument
    pub fn tick(&mut self, now: Duration) {
        self.now = now;
        self.ticker.poll(now, &mut self.document);
    }

    /// Met en pause ou relance la rotation
    pub fn toggle_pause(&mut self) {
        if self.ticker.is_running() {
            info!("Ticker paused");
            self.ticker.stop(&mut self.document);
        } else {
            info!("Ticker resumed");
            self.ticker.start(self.now, &mut self.document);
        }
    }

    pub fn is_paused(&self) -> bool {
        !self.ticker.is_running()
    }

    /// Quitte l'application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Vérifie si l'application doit continuer
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Demande la confirmation de quitter
    ///
    /// CONCEPT : Two-step quit pattern
    /// - Appelé lors de la première pression de 'q'
    /// - Évite les sorties accidentelles
    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    /// Annule la demande de quit
    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    /// Vérifie si on attend la confirmation de quit
    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuoteRecord;
    use crate::ticker::{Clock, ManualClock};

    fn may_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn shown_name(app: &App) -> Option<String> {
        app.document
            .ticker()
            .and_then(|element| element.content.as_ref())
            .map(|content| content.label.text.clone())
    }

    #[test]
    fn test_app_creation() {
        let app = App::new(&Config::default(), may_first()).unwrap();
        assert!(app.is_running());
        assert!(app.is_paused());
        assert_eq!(app.document.date().unwrap().text, "Wednesday, May 1, 2024");
        assert_eq!(shown_name(&app), None);
    }

    #[test]
    fn test_app_quit() {
        let mut app = App::new(&Config::default(), may_first()).unwrap();

        app.request_quit();
        assert!(app.is_awaiting_quit_confirmation());
        app.cancel_quit();
        assert!(!app.is_awaiting_quit_confirmation());

        app.quit();
        assert!(!app.is_running());
    }

    #[test]
    fn test_rotation_through_app() {
        let clock = ManualClock::new();
        let mut app = App::new(&Config::default(), may_first()).unwrap();

        app.start(clock.now());
        clock.advance_ms(500);
        app.tick(clock.now());
        assert_eq!(shown_name(&app).as_deref(), Some("S&P 500"));

        clock.advance_ms(5000);
        app.tick(clock.now());
        clock.advance_ms(500);
        app.tick(clock.now());
        assert_eq!(shown_name(&app).as_deref(), Some("NASDAQ"));
        assert_eq!(app.ticker.cursor(), 2);
    }

    #[test]
    fn test_toggle_pause() {
        let clock = ManualClock::new();
        let mut app = App::new(&Config::default(), may_first()).unwrap();

        app.start(clock.now());
        assert!(!app.is_paused());

        app.toggle_pause();
        assert!(app.is_paused());
        clock.advance_ms(30_000);
        app.tick(clock.now());
        assert_eq!(shown_name(&app), None);

        app.toggle_pause();
        clock.advance_ms(500);
        app.tick(clock.now());
        assert_eq!(shown_name(&app).as_deref(), Some("S&P 500"));
    }

    #[test]
    fn test_pause_mid_fade_out_keeps_ticker_visible() {
        use crate::ticker::FadeState;

        let clock = ManualClock::new();
        let mut app = App::new(&Config::default(), may_first()).unwrap();

        app.start(clock.now());
        clock.advance_ms(500);
        app.tick(clock.now());
        clock.advance_ms(4500);
        app.tick(clock.now());
        clock.advance_ms(100);
        app.tick(clock.now());

        app.toggle_pause();
        clock.advance_ms(60_000);
        app.tick(clock.now());

        let element = app.document.ticker().unwrap();
        assert_eq!(element.fade, Some(FadeState::FadeIn));
        assert_eq!(shown_name(&app).as_deref(), Some("S&P 500"));
    }

    #[test]
    fn test_hidden_ticker() {
        let config = Config {
            show_ticker: false,
            quotes: vec![QuoteRecord::new("X", "X1", "+1.00%", true)],
            ..Config::default()
        };
        let clock = ManualClock::new();
        let mut app = App::new(&config, may_first()).unwrap();

        app.start(clock.now());
        clock.advance_ms(6000);
        app.tick(clock.now());

        assert!(app.document.ticker().is_none());
        assert_eq!(app.ticker.cursor(), 0);
    }

    #[test]
    fn test_hidden_date() {
        let config = Config {
            show_date: false,
            ..Config::default()
        };
        let app = App::new(&config, may_first()).unwrap();
        assert!(app.document.date().is_none());
    }
}
