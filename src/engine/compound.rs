// ============================================================================
// Moteur de calcul : intérêts composés
// ============================================================================
// Fonction pure : Parameters -> CalculationResult
//
// Formule : A = P (1 + r/n)^(n t)
// - P : principal
// - r : taux annuel (décimal)
// - n : nombre de capitalisations par an
// - t : durée en années
//
// CONCEPTS RUST :
// 1. Fonction pure : &Parameters en lecture seule, aucun effet de bord
// 2. Ranges inclusives : 0..=years pour years + 1 points
// 3. Iterator chaining : construction de la série en une expression
// ============================================================================

use tracing::trace;

use crate::models::{CalculationResult, Parameters, YearPoint, YearlySeries};

/// Calcule la valeur finale, les intérêts et la série annuelle
///
/// Chaque point de la série est évalué directement avec la formule
/// (pas de multiplication cumulative d'une année sur l'autre).
pub fn compute(params: &Parameters) -> CalculationResult {
    let series = yearly_series(params);

    // La dernière valeur de la série est exactement la valeur finale
    let final_value = growth_at(params, params.years);
    let total_interest = final_value - params.principal;

    trace!(
        principal = params.principal,
        rate = params.annual_rate_percent,
        periods = params.frequency.periods_per_year(),
        years = params.years,
        final_value,
        "Compound interest computed"
    );

    CalculationResult {
        final_value,
        total_interest,
        series,
    }
}

/// Génère la série annuelle : une valeur par fin d'année, de 0 à years
pub fn yearly_series(params: &Parameters) -> YearlySeries {
    (0..=params.years)
        .map(|year| YearPoint {
            year,
            value: growth_at(params, year),
        })
        .collect()
}

/// Taux appliqué à chaque période de capitalisation
pub fn periodic_rate(params: &Parameters) -> f64 {
    params.annual_rate_percent / 100.0 / f64::from(params.frequency.periods_per_year())
}

/// Valeur du compte après `year` années entières
///
/// Le facteur de croissance peut déborder vers +inf (taux élevé, 1000 ans) :
/// avec un principal positif le résultat vaut alors +inf, jamais NaN
fn growth_at(params: &Parameters, year: u32) -> f64 {
    // 0 * inf donnerait NaN
    if params.principal == 0.0 {
        return 0.0;
    }

    let periods = f64::from(params.frequency.periods_per_year()) * f64::from(year);
    params.principal * (1.0 + periodic_rate(params)).powf(periods)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_value() {
        let params = Parameters::new(10_000.0, 5.0, Frequency::Annually, 10);
        let result = compute(&params);

        assert_relative_eq!(result.final_value, 16_288.946_267_774_42, epsilon = 1e-6);
        assert_relative_eq!(result.total_interest, 6_288.946_267_774_42, epsilon = 1e-6);
        assert_relative_eq!(result.series[1].value, 10_500.0, epsilon = 1e-9);
        assert_eq!(result.series.len(), 11);
    }

    #[test]
    fn test_deterministic() {
        let params = Parameters::new(2_500.0, 7.25, Frequency::Daily, 30);
        let a = compute(&params);
        let b = compute(&params);

        assert_eq!(a.final_value.to_bits(), b.final_value.to_bits());
        assert_eq!(a.total_interest.to_bits(), b.total_interest.to_bits());
        for (x, y) in a.series.iter().zip(b.series.iter()) {
            assert_eq!(x.year, y.year);
            assert_eq!(x.value.to_bits(), y.value.to_bits());
        }
    }

    #[test]
    fn test_series_length() {
        for years in [0, 1, 5, 40] {
            for frequency in Frequency::all() {
                let params = Parameters::new(1_000.0, 3.0, frequency, years);
                let result = compute(&params);
                assert_eq!(result.series.len(), years as usize + 1);
                assert_eq!(result.series.last().map(|p| p.year), Some(years));
            }
        }
    }

    #[test]
    fn test_zero_years() {
        let params = Parameters::new(1_234.56, 8.0, Frequency::Monthly, 0);
        let result = compute(&params);

        assert_eq!(result.series, vec![YearPoint { year: 0, value: 1_234.56 }]);
        assert_eq!(result.final_value, 1_234.56);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_zero_rate() {
        let params = Parameters::new(5_000.0, 0.0, Frequency::Daily, 25);
        let result = compute(&params);

        assert_eq!(result.final_value, 5_000.0);
        assert_eq!(result.total_interest, 0.0);
        assert!(result.series.iter().all(|p| p.value == 5_000.0));
    }

    #[test]
    fn test_strictly_increasing() {
        for frequency in Frequency::all() {
            let params = Parameters::new(100.0, 0.5, frequency, 50);
            let result = compute(&params);
            for pair in result.series.windows(2) {
                assert!(pair[1].value > pair[0].value);
            }
        }
    }

    #[test]
    fn test_frequency_compounds_within_year() {
        let annual = compute(&Parameters::new(1_000.0, 12.0, Frequency::Annually, 1));
        let monthly = compute(&Parameters::new(1_000.0, 12.0, Frequency::Monthly, 1));

        assert_relative_eq!(annual.final_value, 1_120.0, epsilon = 1e-9);
        // 1000 * 1.01^12
        assert_relative_eq!(monthly.final_value, 1_126.825_030_131_969_7, epsilon = 1e-9);
        // La série reste annuelle quelle que soit la fréquence
        assert_eq!(monthly.series.len(), 2);
    }

    #[test]
    fn test_zero_principal() {
        let result = compute(&Parameters::new(0.0, 5.0, Frequency::Quarterly, 10));
        assert_eq!(result.final_value, 0.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_final_value_matches_last_point() {
        let params = Parameters::new(7_777.0, 4.4, Frequency::SemiAnnually, 17);
        let result = compute(&params);
        let last = result.series.last().map(|p| p.value);
        assert_eq!(last, Some(result.final_value));
    }

    #[test]
    fn test_zero_principal_with_overflowing_growth() {
        let result = compute(&Parameters::new(0.0, 100.0, Frequency::Daily, 1_000));

        assert_eq!(result.final_value, 0.0);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.series.len(), 1_001);
        assert!(result.series.iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn test_overflowing_growth_is_infinite() {
        let result = compute(&Parameters::new(1.0, 100.0, Frequency::Daily, 1_000));

        assert!(result.final_value.is_infinite());
        assert!(result.final_value > 0.0);
        assert!(result.total_interest.is_infinite());
        assert!(result.series.iter().all(|p| !p.value.is_nan()));
    }
}
