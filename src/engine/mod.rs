// ============================================================================
// Module : engine
// ============================================================================
// Moteur de calcul (feuille de l'architecture, aucune dépendance vers l'UI)
// ============================================================================

pub mod compound;

pub use compound::{compute, periodic_rate, yearly_series};
