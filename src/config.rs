// ============================================================================
// Configuration
// ============================================================================
// Fichier JSON optionnel, tous les champs ont une valeur par défaut :
//
// {
//   "quotes": [{ "name": "S&P 500", "symbol": "SPY", "change": "+0.63%", "up": true }],
//   "period_ms": 5000,
//   "fade_delay_ms": 500,
//   "fade_in_ms": 500,
//   "show_date": true,
//   "show_ticker": true,
//   "log_dir": "/tmp/frontpage-logs"
// }
//
// Ordre de recherche :
// 1. --config <PATH> (le fichier doit exister)
// 2. <config_dir>/frontpage/config.json s'il existe (~/.config sur Linux)
// 3. valeurs par défaut
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{default_quotes, QuoteRecord};
use crate::page::Hook;
use crate::ticker::animator::{DEFAULT_FADE_DELAY, DEFAULT_FADE_IN, DEFAULT_PERIOD};
use crate::ticker::TickerTiming;

/// Nom du fichier cherché dans le répertoire de configuration
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration complète de l'application
///
/// CONCEPT RUST : #[serde(default)]
/// - Un champ absent du JSON prend la valeur de Default::default()
/// - Un fichier "{}" est donc une configuration valide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Quotes affichées par le ticker, dans l'ordre
    pub quotes: Vec<QuoteRecord>,

    /// Période de rotation en millisecondes
    pub period_ms: u64,

    /// Délai entre le fondu sortant et le changement de contenu
    pub fade_delay_ms: u64,

    /// Durée du fondu entrant
    pub fade_in_ms: u64,

    /// Monte la zone "current-date"
    pub show_date: bool,

    /// Monte la zone "stock-ticker"
    pub show_ticker: bool,

    /// Répertoire des logs (sinon répertoire de données de l'utilisateur)
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quotes: default_quotes(),
            period_ms: DEFAULT_PERIOD.as_millis() as u64,
            fade_delay_ms: DEFAULT_FADE_DELAY.as_millis() as u64,
            fade_in_ms: DEFAULT_FADE_IN.as_millis() as u64,
            show_date: true,
            show_ticker: true,
            log_dir: None,
        }
    }
}

impl Config {
    /// Lit et valide un fichier de configuration
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Impossible de lire la configuration {}", path.display()))?;

        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("Configuration invalide dans {}", path.display()))?;

        config.validate()?;
        info!(path = %path.display(), quotes = config.quotes.len(), "Configuration loaded");
        Ok(config)
    }

    /// Charge la configuration selon l'ordre de recherche
    ///
    /// CONCEPT RUST : Option<&Path>
    /// - Some(path) : chemin explicite, une erreur de lecture est fatale
    /// - None : on essaie le fichier par défaut, sinon Config::default()
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Vérifie la cohérence de la configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.quotes.is_empty(), "La liste de quotes ne peut pas être vide");
        self.timing().validate()
    }

    /// Timings du ticker
    pub fn timing(&self) -> TickerTiming {
        TickerTiming {
            period: Duration::from_millis(self.period_ms),
            fade_delay: Duration::from_millis(self.fade_delay_ms),
            fade_in: Duration::from_millis(self.fade_in_ms),
        }
    }

    /// Zones à monter dans la page
    pub fn hooks(&self) -> Vec<Hook> {
        let mut hooks = Vec::new();
        if self.show_date {
            hooks.push(Hook::CurrentDate);
        }
        if self.show_ticker {
            hooks.push(Hook::StockTicker);
        }
        hooks
    }
}

/// Chemin du fichier de configuration par défaut
///
/// Linux : ~/.config/frontpage/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("frontpage").join(CONFIG_FILE_NAME))
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.quotes.len(), 5);
        assert_eq!(config.timing(), TickerTiming::default());
        assert_eq!(config.hooks(), vec![Hook::CurrentDate, Hook::StockTicker]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("{}");
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let file = write_config(
            r#"{
                "quotes": [{ "name": "X", "symbol": "X1", "change": "+1.00%", "up": true }],
                "period_ms": 2000,
                "show_date": false
            }"#,
        );
        let config = Config::from_file(file.path()).unwrap();

        assert_eq!(config.quotes, vec![QuoteRecord::new("X", "X1", "+1.00%", true)]);
        assert_eq!(config.timing().period, Duration::from_secs(2));
        assert_eq!(config.timing().fade_delay, Duration::from_millis(500));
        assert_eq!(config.hooks(), vec![Hook::StockTicker]);
    }

    #[test]
    fn test_empty_quotes_rejected() {
        let file = write_config(r#"{ "quotes": [] }"#);
        assert!(Config::from_file(file.path()).is_err());
    }

    #[test]
    fn test_overlapping_cycles_rejected() {
        let file = write_config(r#"{ "period_ms": 400, "fade_delay_ms": 500 }"#);
        let error = Config::from_file(file.path()).unwrap_err();
        assert!(error.to_string().contains("délai"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let file = write_config(r#"{ "perod_ms": 1000 }"#);
        assert!(Config::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = Config::load(Some(Path::new("/nonexistent/frontpage.json")));
        assert!(result.is_err());
    }
}
