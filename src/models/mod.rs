// ============================================================================
// Module : models
// ============================================================================
// Ce module contient toutes les structures de données de l'application
//
// CONCEPT RUST : Modules et visibilité
// - "pub mod" : déclare un sous-module publique (accessible depuis l'extérieur)
// - Sans "pub", le module serait privé au crate
// ============================================================================

pub mod parameters; // Paramètres du calcul (fichier parameters.rs)
pub mod result;     // Résultat du calcul (fichier result.rs)

// Re-export des structures principales pour simplifier les imports
// Au lieu de : use lazyinterest::models::parameters::Parameters;
// On peut faire : use lazyinterest::models::Parameters;
pub use parameters::{Frequency, Parameters, MAX_YEARS};
pub use result::{CalculationResult, ChartSeries, YearPoint, YearlySeries};
