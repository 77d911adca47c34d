// ============================================================================
// Module : page
// ============================================================================
// La page hôte (zones nommées) et l'affichage de la date
// ============================================================================

pub mod date;     // Date du jour, formatée une seule fois
pub mod document; // Document et ses zones "current-date" / "stock-ticker"

pub use date::{format_long_date, mount_date, DateHost, DateTarget};
pub use document::{DateElement, Document, Hook, TickerElement};
