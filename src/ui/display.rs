// ============================================================================
// TerminalDisplay : DisplaySink pour le TUI
// ============================================================================
// Garde la dernière version des résultats à afficher. Le rendu ratatui
// (dashboard, chart) lit ces données à chaque frame.
// ============================================================================

use crate::coordinator::DisplaySink;
use crate::models::ChartSeries;

/// Données affichées : totaux formatés + série du graphique
#[derive(Debug, Clone, Default)]
pub struct TerminalDisplay {
    /// Valeur finale formatée ("$16,288.95")
    pub final_value: String,

    /// Intérêts cumulés formatés
    pub total_interest: String,

    /// Série du graphique (remplacée à chaque recalcul)
    pub chart: ChartSeries,

    /// Nombre de redessins du graphique
    pub redraws: u64,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for TerminalDisplay {
    fn show_totals(&mut self, final_value: &str, total_interest: &str) {
        self.final_value = final_value.to_string();
        self.total_interest = total_interest.to_string();
    }

    fn redraw_chart(&mut self, series: &ChartSeries) {
        // CONCEPT : Remplacement complet, pas de mise à jour incrémentale
        self.chart = series.clone();
        self.redraws += 1;
    }
}
