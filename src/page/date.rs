// ============================================================================
// DateDisplay : la date du jour dans la page
// ============================================================================
// Exécuté une seule fois au démarrage. Format fixe, en anglais (en-US) :
//   "Wednesday, May 1, 2024"
// ============================================================================

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

/// Format chrono : jour de la semaine, mois, jour sans zéro, année
///
/// CONCEPT : %-d supprime le zéro initial ("1" et pas "01")
const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Zone de la page qui reçoit la date
pub trait DateTarget {
    fn set_text(&mut self, text: String);
}

/// Accès à la zone de la date
pub trait DateHost {
    /// None si la zone n'existe pas dans la page
    fn date_target(&mut self) -> Option<&mut dyn DateTarget>;
}

/// Formate une date en "Weekday, Month Day, Year"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

/// Date du jour selon le fuseau local
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Écrit la date dans la page si la zone existe
///
/// Retourne false (sans erreur) si la zone est absente.
pub fn mount_date(date: NaiveDate, host: &mut dyn DateHost) -> bool {
    match host.date_target() {
        Some(target) => {
            let text = format_long_date(date);
            info!(date = %text, "Date mounted");
            target.set_text(text);
            true
        }
        None => {
            debug!("No date target, skipped");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Document, Hook};

    #[test]
    fn test_format_long_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(format_long_date(date), "Wednesday, May 1, 2024");

        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(format_long_date(date), "Monday, December 25, 2023");
    }

    #[test]
    fn test_mount_date() {
        let mut document = Document::with_hooks(&[Hook::CurrentDate, Hook::StockTicker]);
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        assert!(mount_date(date, &mut document));
        assert_eq!(document.date().unwrap().text, "Wednesday, May 1, 2024");
    }

    #[test]
    fn test_mount_date_without_target() {
        let mut document = Document::with_hooks(&[Hook::StockTicker]);
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        assert!(!mount_date(date, &mut document));
        assert!(document.date().is_none());
    }
}
