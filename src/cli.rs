// ============================================================================
// Ligne de commande
// ============================================================================
// Les options de la ligne de commande priment sur le fichier de config.
// ============================================================================

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::Config;

/// Page d'accueil dans le terminal : date du jour et ticker de quotes
#[derive(Debug, Parser)]
#[command(name = "frontpage", version, about)]
pub struct Cli {
    /// Fichier de configuration JSON
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ne monte pas la zone de la date
    #[arg(long)]
    pub hide_date: bool,

    /// Ne monte pas la zone du ticker
    #[arg(long)]
    pub hide_ticker: bool,

    /// Répertoire des fichiers de log
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Charge la configuration puis applique les options
    pub fn resolve_config(&self) -> Result<Config> {
        let config = Config::load(self.config.as_deref())?;
        Ok(self.apply(config))
    }

    /// Applique les options à une configuration déjà chargée
    pub fn apply(&self, mut config: Config) -> Config {
        if self.hide_date {
            config.show_date = false;
        }
        if self.hide_ticker {
            config.show_ticker = false;
        }
        if let Some(dir) = &self.log_dir {
            config.log_dir = Some(dir.clone());
        }
        config
    }
}
