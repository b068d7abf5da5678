// ============================================================================
// Structure : CalculationResult
// ============================================================================
// Résultat dérivé d'un calcul : valeur finale, intérêts, série annuelle
//
// CONCEPTS RUST :
// 1. Immutabilité : un résultat n'est jamais modifié, il est remplacé
// 2. Iterator chaining : conversion de la série vers le contrat du graphique
// ============================================================================

/// Un point de la série : valeur du compte à la fin d'une année
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearPoint {
    /// Index de l'année (0 = montant initial)
    pub year: u32,

    /// Valeur du compte à cette date
    pub value: f64,
}

/// Série annuelle : years + 1 points, de l'année 0 à l'année `years`
pub type YearlySeries = Vec<YearPoint>;

/// Résultat complet d'un calcul
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculationResult {
    /// Valeur finale du compte
    pub final_value: f64,

    /// Intérêts cumulés (final_value - principal)
    pub total_interest: f64,

    /// Valeurs à chaque fin d'année
    pub series: YearlySeries,
}

/// Données transmises au graphique : labels + valeurs
///
/// CONCEPT : Contrat de données simple
/// - Le graphique ne connaît pas le moteur de calcul
/// - Chaque redessin remplace entièrement les données précédentes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Points (x, y) pour le widget Chart de ratatui
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &value)| (i as f64, value))
            .collect()
    }

    /// Valeurs min et max de la série (None si vide)
    pub fn bounds(&self) -> Option<(f64, f64)> {
        if self.values.is_empty() {
            return None;
        }

        Some(self.values.iter().fold(
            (f64::MAX, f64::MIN),
            |(min, max), &v| (min.min(v), max.max(v)),
        ))
    }
}

impl CalculationResult {
    /// Construit le contrat du graphique ("Year 0", "Year 1", ...)
    pub fn chart_series(&self) -> ChartSeries {
        let (labels, values) = self
            .series
            .iter()
            .map(|point| (format!("Year {}", point.year), point.value))
            .unzip();

        ChartSeries { labels, values }
    }
}
