// ============================================================================
// Cible de rendu du ticker
// ============================================================================
// Le ticker n'écrit pas directement dans la page : il passe par deux
// traits.
// - TickerTarget : la zone où l'on écrit (classe de fondu + contenu)
// - TickerHost   : l'accès à cette zone, qui peut être absente
//
// CONCEPT RUST : Trait objects
// - Option<&mut dyn TickerTarget> : "la zone, si elle existe"
// - Les tests injectent leur propre hôte pour enregistrer les appels
// ============================================================================

use crate::models::{QuoteRecord, NAME_CLASS};

/// Classe de transition appliquée à la zone du ticker
///
/// Les deux états sont mutuellement exclusifs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeState {
    FadeOut,
    FadeIn,
}

impl FadeState {
    pub fn class_name(&self) -> &'static str {
        match self {
            FadeState::FadeOut => "fade-out",
            FadeState::FadeIn => "fade-in",
        }
    }
}

/// Un morceau de texte avec sa classe de style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSpan {
    pub class: &'static str,
    pub text: String,
}

/// Contenu affiché par le ticker : libellé + span directionnel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerContent {
    pub label: ContentSpan,
    pub direction: ContentSpan,
}

impl TickerContent {
    /// Construit le contenu d'une quote
    ///
    /// Le glyphe et la classe viennent de is_up, la variation est
    /// recopiée telle quelle.
    pub fn from_quote(quote: &QuoteRecord) -> Self {
        let trend = quote.trend();
        Self {
            label: ContentSpan {
                class: NAME_CLASS,
                text: quote.name.clone(),
            },
            direction: ContentSpan {
                class: trend.class_name(),
                text: quote.direction_text(),
            },
        }
    }
}

/// Zone de la page où le ticker s'affiche
pub trait TickerTarget {
    /// Remplace la classe de transition (retire l'autre)
    fn apply_fade(&mut self, fade: FadeState);

    /// Remplace tout le contenu affiché
    fn replace_content(&mut self, content: TickerContent);
}

/// Accès à la zone du ticker
pub trait TickerHost {
    /// None si la zone n'existe pas dans la page
    fn ticker_target(&mut self) -> Option<&mut dyn TickerTarget>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_from_quote() {
        let quote = QuoteRecord::new("NASDAQ", "NDAQ", "+1.52%", true);
        let content = TickerContent::from_quote(&quote);

        assert_eq!(content.label.class, "stock-name");
        assert_eq!(content.label.text, "NASDAQ");
        assert_eq!(content.direction.class, "stock-up");
        assert_eq!(content.direction.text, "▲ +1.52%");
    }

    #[test]
    fn test_fade_class_names() {
        assert_eq!(FadeState::FadeOut.class_name(), "fade-out");
        assert_eq!(FadeState::FadeIn.class_name(), "fade-in");
    }
}
