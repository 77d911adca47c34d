// ============================================================================
// Structure : QuoteRecord
// ============================================================================
// Une entrée du ticker : libellé, symbole, variation déjà formatée et sens.
//
// CONCEPTS RUST :
// 1. Enums avec méthodes : Trend porte le glyphe et la classe de style
// 2. Serde : les quotes peuvent venir du fichier de configuration
// 3. &'static str : les classes de style sont des constantes du programme
// ============================================================================

use serde::{Deserialize, Serialize};

/// Classe du span contenant le nom de la quote
pub const NAME_CLASS: &str = "stock-name";

// ============================================================================
// Enum : Trend
// ============================================================================
// Le sens d'affichage vient UNIQUEMENT du flag is_up, jamais du signe de
// la chaîne `change` (les deux peuvent ne pas être d'accord).
// ============================================================================

/// Sens d'une quote (hausse ou baisse)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Glyphe affiché devant la variation
    pub fn glyph(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }

    /// Classe de style du span directionnel
    pub fn class_name(&self) -> &'static str {
        match self {
            Trend::Up => "stock-up",
            Trend::Down => "stock-down",
        }
    }
}

/// Une quote affichée par le ticker
///
/// CONCEPT RUST : #[serde(rename = "...")]
/// - Le champ Rust s'appelle is_up
/// - Dans le JSON on accepte "up" (même forme que la liste d'origine)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Libellé affiché (ex: "S&P 500")
    pub name: String,

    /// Symbole boursier (ex: "SPY")
    pub symbol: String,

    /// Variation déjà formatée, affichée telle quelle (ex: "+0.63%")
    pub change: String,

    /// Sens faisant autorité pour le glyphe et la couleur
    #[serde(rename = "up", alias = "is_up")]
    pub is_up: bool,
}

impl QuoteRecord {
    /// Crée une quote
    pub fn new(name: &str, symbol: &str, change: &str, is_up: bool) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            change: change.to_string(),
            is_up,
        }
    }

    /// Sens d'affichage, dérivé de is_up uniquement
    pub fn trend(&self) -> Trend {
        if self.is_up {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    /// Texte du span directionnel : glyphe + variation littérale
    pub fn direction_text(&self) -> String {
        format!("{} {}", self.trend().glyph(), self.change)
    }
}

/// Liste de quotes intégrée (valeurs du 1er mai 2024)
///
/// Les Timberwolves et les Lakers sont là pour l'exemple : les valeurs ne
/// sont pas réalistes et le flag is_up n'est pas recalculé depuis `change`.
pub fn default_quotes() -> Vec<QuoteRecord> {
    vec![
        QuoteRecord::new("S&P 500", "SPY", "+0.63%", true),
        QuoteRecord::new("NASDAQ", "NDAQ", "+1.52%", true),
        QuoteRecord::new("Timberwolves", "MIN", "+100%", true),
        QuoteRecord::new("Lakers", "LAL", "-100%", false),
        QuoteRecord::new("DOW", "DJI", "+0.21%", true),
    ]
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_from_flag() {
        let up = QuoteRecord::new("S&P 500", "SPY", "+0.63%", true);
        assert_eq!(up.trend(), Trend::Up);
        assert_eq!(up.direction_text(), "▲ +0.63%");

        let down = QuoteRecord::new("Lakers", "LAL", "-100%", false);
        assert_eq!(down.trend().class_name(), "stock-down");
        assert_eq!(down.direction_text(), "▼ -100%");
    }

    #[test]
    fn test_flag_wins_over_sign() {
        // Le signe de `change` dit "hausse", le flag dit "baisse"
        let quote = QuoteRecord::new("Odd", "ODD", "+5.00%", false);
        assert_eq!(quote.trend(), Trend::Down);
        assert_eq!(quote.direction_text(), "▼ +5.00%");
    }

    #[test]
    fn test_default_quotes() {
        let quotes = default_quotes();
        assert_eq!(quotes.len(), 5);
        assert_eq!(quotes[0].symbol, "SPY");
        assert_eq!(quotes[3].name, "Lakers");
        assert!(!quotes[3].is_up);
    }

    #[test]
    fn test_deserialize_up_field() {
        let json = r#"{"name":"X","symbol":"X1","change":"+1.00%","up":true}"#;
        let quote: QuoteRecord = serde_json::from_str(json).unwrap();
        assert_eq!(quote, QuoteRecord::new("X", "X1", "+1.00%", true));

        let json = r#"{"name":"Y","symbol":"Y1","change":"-2%","is_up":false}"#;
        let quote: QuoteRecord = serde_json::from_str(json).unwrap();
        assert!(!quote.is_up);
    }
}
