// ============================================================================
// Module : models
// ============================================================================
// Structures de données de la page : les quotes du ticker
// ============================================================================

pub mod quote; // Déclaration du module quote (fichier quote.rs)

// Re-export des structures principales pour simplifier les imports
// On peut faire : use frontpage::models::QuoteRecord;
pub use quote::{default_quotes, QuoteRecord, Trend, NAME_CLASS};
