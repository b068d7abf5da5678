// ============================================================================
// LazyInterest - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod models;      // Structures de données
pub mod engine;      // Calcul des intérêts composés
pub mod format;      // Formatage devise / pourcentage / années
pub mod controls;    // Champ numérique + slider
pub mod config;      // Configuration JSON
pub mod coordinator; // État des paramètres et liaison des contrôles
pub mod app;         // État de l'application
pub mod ui;          // Interface utilisateur
