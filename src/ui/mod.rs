// ============================================================================
// Module : ui
// ============================================================================
// Gère toute l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod events;    // Gestion des événements clavier
pub mod dashboard; // Rendu de l'interface principale
pub mod chart;     // Rendu du graphique de croissance
pub mod display;   // DisplaySink du terminal

// Re-exports pour simplifier les imports
pub use events::{Event, EventHandler};
pub use dashboard::render;
pub use display::TerminalDisplay;
