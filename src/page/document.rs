// ============================================================================
// Document : la page et ses zones nommées
// ============================================================================
// La page possède deux zones optionnelles, repérées par un identifiant :
// - "current-date"  : la date du jour
// - "stock-ticker"  : le ticker
//
// Une zone non montée est simplement None : tous les consommateurs
// doivent tolérer son absence.
// ============================================================================

use crate::page::date::{DateHost, DateTarget};
use crate::ticker::{FadeState, TickerContent, TickerHost, TickerTarget};

/// Zones nommées de la page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    CurrentDate,
    StockTicker,
}

impl Hook {
    /// Identifiant de la zone
    pub fn id(&self) -> &'static str {
        match self {
            Hook::CurrentDate => "current-date",
            Hook::StockTicker => "stock-ticker",
        }
    }
}

/// Zone de la date : un simple texte
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateElement {
    pub text: String,
}

impl DateTarget for DateElement {
    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

/// Zone du ticker : classe de fondu + contenu
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerElement {
    /// Classe de transition active (aucune avant le premier cycle)
    pub fade: Option<FadeState>,

    /// Contenu affiché (None avant le premier changement)
    pub content: Option<TickerContent>,
}

impl TickerTarget for TickerElement {
    fn apply_fade(&mut self, fade: FadeState) {
        self.fade = Some(fade);
    }

    fn replace_content(&mut self, content: TickerContent) {
        self.content = Some(content);
    }
}

/// La page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    date: Option<DateElement>,
    ticker: Option<TickerElement>,
}

impl Document {
    /// Crée une page avec les zones demandées
    pub fn with_hooks(hooks: &[Hook]) -> Self {
        let mut document = Self::default();
        for hook in hooks {
            document.mount(*hook);
        }
        document
    }

    /// Ajoute une zone vide (sans effet si elle existe déjà)
    fn mount(&mut self, hook: Hook) {
        match hook {
            Hook::CurrentDate => {
                self.date.get_or_insert_with(DateElement::default);
            }
            Hook::StockTicker => {
                self.ticker.get_or_insert_with(TickerElement::default);
            }
        }
    }

    pub fn date(&self) -> Option<&DateElement> {
        self.date.as_ref()
    }

    pub fn ticker(&self) -> Option<&TickerElement> {
        self.ticker.as_ref()
    }
}

impl TickerHost for Document {
    fn ticker_target(&mut self) -> Option<&mut dyn TickerTarget> {
        self.ticker
            .as_mut()
            .map(|element| element as &mut dyn TickerTarget)
    }
}

impl DateHost for Document {
    fn date_target(&mut self) -> Option<&mut dyn DateTarget> {
        self.date
            .as_mut()
            .map(|element| element as &mut dyn DateTarget)
    }
}
