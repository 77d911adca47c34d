// ============================================================================
// Frontpage - Point d'entrée
// ============================================================================
// Page d'accueil dans le terminal : la date du jour et un ticker qui fait
// défiler des quotes avec un fondu.
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : render → input → update, sur un seul thread
// 3. Horloge injectée : le ticker avance avec clock.now()
// ============================================================================

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info, warn};

use frontpage::app::App;
use frontpage::cli::Cli;
use frontpage::page::date::today;
use frontpage::ticker::{Clock, SystemClock};
use frontpage::ui::events::{is_pause_event, is_quit_event, Event, EventHandler};
use frontpage::ui::render;

// ============================================================================
// Initialisation du logging
// ============================================================================
// Les println! ne fonctionnent pas une fois le TUI lancé : on log vers un
// fichier, avec rotation quotidienne.
// ============================================================================

/// Répertoire de logs par défaut
///
/// - Linux : ~/.local/share/frontpage/logs
/// - macOS : ~/Library/Application Support/frontpage/logs
/// - Sinon : ./logs
fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("frontpage").join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Initialise le système de logging vers fichier
///
/// # Utilisation
/// ```bash
/// tail -f ~/.local/share/frontpage/logs/frontpage.log.*
/// RUST_LOG=frontpage=trace cargo run
/// ```
fn init_logging(log_dir: &Path) -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    std::fs::create_dir_all(log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "frontpage.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true)
                .with_line_number(true),
        )
        .with(
            // RUST_LOG=debug : tous les logs debug+
            // Par défaut : debug pour frontpage, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frontpage=debug,info".into()),
        )
        .try_init()
        .context("Un subscriber tracing est déjà installé")?;

    info!(log_dir = %log_dir.display(), "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Une config invalide arrête tout AVANT de passer en mode TUI
    let config = cli.resolve_config()?;

    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
    init_logging(&log_dir).unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {:#}", e);
        eprintln!("   Continuing without logging...");
    });

    info!(
        quotes = config.quotes.len(),
        period_ms = config.period_ms,
        show_date = config.show_date,
        show_ticker = config.show_ticker,
        "Frontpage starting up"
    );

    let clock = SystemClock::new();
    let mut app = App::new(&config, today())?;

    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    // Premier cycle immédiat, puis un cycle par période
    app.start(clock.now());

    let events = EventHandler::new();
    let result = run(&mut terminal, &mut app, &events, &clock);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(_) => info!(swaps = app.ticker.swaps(), "Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Event loop
// ============================================================================
// 1. RENDER : dessine la page
// 2. INPUT  : attend un événement (100 ms max)
// 3. UPDATE : fait avancer le ticker jusqu'à clock.now()
//
// Tout se passe sur ce thread : pas de Mutex, App est prêtée en &mut.
// ============================================================================

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    clock: &dyn Clock,
) -> Result<()> {
    while app.is_running() {
        terminal.draw(|frame| render(frame, app))?;

        match events.next() {
            Ok(event) => handle_event(app, event),
            Err(e) => warn!(error = ?e, "Failed to read terminal event"),
        }

        app.tick(clock.now());
    }

    Ok(())
}

/// Traite un événement et met à jour l'état de l'application
fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(_) if is_quit_event(&event) => {
            if app.is_awaiting_quit_confirmation() {
                info!("User confirmed quit");
                app.quit();
            } else {
                info!("User requested quit (awaiting confirmation)");
                app.request_quit();
            }
        }

        Event::Key(_) if is_pause_event(&event) => {
            app.cancel_quit();
            app.toggle_pause();
        }

        Event::Key(_) => {
            // Toute autre touche (Échap compris) : annule la confirmation si active
            app.cancel_quit();
        }

        Event::Tick | Event::Resize => {
            // Le prochain draw() s'adapte à la nouvelle taille
        }
    }
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================
// IMPORTANT : Toujours restaurer le terminal avant de quitter !
// ============================================================================

/// Configure le terminal en mode TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Impossible d'activer le raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Impossible de créer le terminal")
}

/// Restaure le terminal à son état normal
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
