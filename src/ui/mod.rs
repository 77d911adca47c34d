// ============================================================================
// Module : ui
// ============================================================================
// Gère toute l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod events;     // Gestion des événements clavier
pub mod front_page; // Rendu de la page (bandeau, ticker, tableau)
pub mod styles;     // Classes de la page → styles ratatui

// Re-exports pour simplifier les imports
pub use events::{Event, EventHandler};
pub use front_page::render;
