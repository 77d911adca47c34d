// ============================================================================
// Frontpage - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod app;    // État de l'application
pub mod cli;    // Arguments de la ligne de commande
pub mod config; // Fichier de configuration JSON
pub mod models; // Structures de données (quotes)
pub mod page;   // Page hôte : zones nommées + date
pub mod ticker; // Rotation des quotes avec fondu
pub mod ui;     // Interface utilisateur
