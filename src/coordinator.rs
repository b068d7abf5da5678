// ============================================================================
// Coordinator : état des paramètres + liaison bidirectionnelle des contrôles
// ============================================================================
// Possède l'unique état `Parameters` et garde chaque paire champ/slider
// synchronisée. Chaque modification déclenche exactement un recalcul et un
// envoi des résultats vers le DisplaySink.
//
// CONCEPTS RUST :
// 1. Trait comme point d'extension : DisplaySink (terminal, tests, ...)
// 2. Génériques : Coordinator<S: DisplaySink>, dispatch statique
// 3. Un seul setter : les deux chemins (champ, slider) y convergent
//
// PATTERN : Observer
// - on_field_input / on_slider_input sont les deux "listeners" d'une paire
// - set_bound_value écrit l'état puis reflète la valeur normalisée dans les
//   contrôles, sans jamais rappeler un listener (pas de boucle de rétroaction)
// - Le champ source garde le texte brut tapé par l'utilisateur
// ============================================================================

use tracing::debug;

use crate::config::Config;
use crate::controls::{parse_number, BoundControl};
use crate::engine;
use crate::format::{format_currency, format_percent, format_years};
use crate::models::{CalculationResult, ChartSeries, Frequency, Parameters, MAX_YEARS};

/// Consommateur des résultats : texte des totaux + données du graphique
///
/// Chaque appel remplace entièrement les données précédentes.
pub trait DisplaySink {
    /// Reçoit la valeur finale et les intérêts déjà formatés
    fn show_totals(&mut self, final_value: &str, total_interest: &str);

    /// Reçoit la série complète à redessiner
    fn redraw_chart(&mut self, series: &ChartSeries);
}

/// Paramètres liés à une paire champ + slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundParam {
    Principal,
    Rate,
    Years,
}

impl BoundParam {
    pub fn all() -> [BoundParam; 3] {
        [BoundParam::Principal, BoundParam::Rate, BoundParam::Years]
    }

    pub fn title(&self) -> &'static str {
        match self {
            BoundParam::Principal => "Initial Investment",
            BoundParam::Rate => "Annual Interest Rate",
            BoundParam::Years => "Time Period",
        }
    }
}

/// Contrôle à l'origine d'une modification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSource {
    Field,
    Slider,
}

/// Coordinateur : seul propriétaire de l'état des paramètres
pub struct Coordinator<S: DisplaySink> {
    params: Parameters,
    principal: BoundControl,
    rate: BoundControl,
    years: BoundControl,
    result: CalculationResult,
    recomputes: u64,
    sink: S,
}

impl<S: DisplaySink> Coordinator<S> {
    /// Crée le coordinateur et effectue le calcul initial
    pub fn new(config: &Config, sink: S) -> Self {
        let defaults = config.defaults;
        let principal = sanitize(BoundParam::Principal, defaults.principal);
        let rate = sanitize(BoundParam::Rate, defaults.annual_rate_percent);
        let years = sanitize(BoundParam::Years, f64::from(defaults.years));

        let params = Parameters::new(principal, rate, defaults.frequency, years as u32);

        let mut coordinator = Self {
            params,
            principal: BoundControl::new(
                config.principal_slider,
                principal,
                format_label(BoundParam::Principal, principal),
            ),
            rate: BoundControl::new(
                config.rate_slider,
                rate,
                format_label(BoundParam::Rate, rate),
            ),
            years: BoundControl::new(
                config.years_slider,
                years,
                format_label(BoundParam::Years, years),
            ),
            result: CalculationResult::default(),
            recomputes: 0,
            sink,
        };

        coordinator.recompute();
        coordinator
    }

    // ========================================================================
    // Listeners : un par contrôle
    // ========================================================================

    /// Le texte d'un champ numérique a changé
    ///
    /// Texte invalide ou vide -> 0
    pub fn on_field_input(&mut self, param: BoundParam, text: &str) {
        self.control_mut(param).field.set_text(text);
        let value = parse_number(text);
        self.set_bound_value(param, value, ControlSource::Field);
    }

    /// Le slider a bougé (valeur numérique par construction)
    pub fn on_slider_input(&mut self, param: BoundParam, value: f64) {
        self.control_mut(param).slider.set_value(value);
        let value = self.control(param).slider.value();
        self.set_bound_value(param, value, ControlSource::Slider);
    }

    /// Déplace le slider de `steps` crans (flèches gauche/droite)
    pub fn nudge_slider(&mut self, param: BoundParam, steps: i32) {
        let value = self.control(param).slider.stepped(steps);
        self.on_slider_input(param, value);
    }

    /// Change la fréquence de capitalisation (sélecteur discret)
    pub fn set_frequency(&mut self, frequency: Frequency) {
        debug!(frequency = %frequency, "Frequency changed");
        self.params.frequency = frequency;
        self.recompute();
    }

    pub fn next_frequency(&mut self) {
        self.set_frequency(self.params.frequency.next());
    }

    pub fn previous_frequency(&mut self) {
        self.set_frequency(self.params.frequency.previous());
    }

    // ========================================================================
    // Setter unique
    // ========================================================================

    /// Écrit la valeur dans l'état, met à jour le slider, le champ frère et le
    /// label, puis recalcule
    fn set_bound_value(&mut self, param: BoundParam, raw: f64, source: ControlSource) {
        let value = sanitize(param, raw);

        match param {
            BoundParam::Principal => self.params.principal = value,
            BoundParam::Rate => self.params.annual_rate_percent = value,
            BoundParam::Years => self.params.years = value as u32,
        }

        // Le slider reçoit toujours la valeur normalisée, même s'il est la source :
        // une valeur tronquée ou clampée ne doit pas le laisser désynchronisé
        let control = self.control_mut(param);
        control.slider.set_value(value);
        if source == ControlSource::Slider {
            control.field.set_number(value);
        }
        control.label = format_label(param, value);

        debug!(?param, ?source, value, "Parameter updated");
        self.recompute();
    }

    /// Recalcule et pousse le résultat vers le sink
    fn recompute(&mut self) {
        self.result = engine::compute(&self.params);
        self.recomputes += 1;

        let final_value = format_currency(self.result.final_value);
        let total_interest = format_currency(self.result.total_interest);
        self.sink.show_totals(&final_value, &total_interest);
        self.sink.redraw_chart(&self.result.chart_series());

        debug!(
            recompute = self.recomputes,
            final_value = %final_value,
            total_interest = %total_interest,
            points = self.result.series.len(),
            "Results recomputed"
        );
    }

    // ========================================================================
    // Accesseurs
    // ========================================================================

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn result(&self) -> &CalculationResult {
        &self.result
    }

    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    pub fn control(&self, param: BoundParam) -> &BoundControl {
        match param {
            BoundParam::Principal => &self.principal,
            BoundParam::Rate => &self.rate,
            BoundParam::Years => &self.years,
        }
    }

    fn control_mut(&mut self, param: BoundParam) -> &mut BoundControl {
        match param {
            BoundParam::Principal => &mut self.principal,
            BoundParam::Rate => &mut self.rate,
            BoundParam::Years => &mut self.years,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Ramène une valeur brute dans le domaine du paramètre
///
/// - Principal et taux : négatif -> 0
/// - Années : tronquées à l'entier, bornées à [0, MAX_YEARS]
fn sanitize(param: BoundParam, value: f64) -> f64 {
    match param {
        BoundParam::Principal | BoundParam::Rate => value.max(0.0),
        BoundParam::Years => value.trunc().clamp(0.0, f64::from(MAX_YEARS)),
    }
}

/// Label lisible selon le paramètre
fn format_label(param: BoundParam, value: f64) -> String {
    match param {
        BoundParam::Principal => format_currency(value),
        BoundParam::Rate => format_percent(value),
        BoundParam::Years => format_years(value as u32),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::SliderRange;
    use approx::assert_relative_eq;

    /// Sink de test : enregistre chaque envoi
    #[derive(Default)]
    struct RecordingSink {
        totals: Vec<(String, String)>,
        charts: Vec<ChartSeries>,
    }

    impl DisplaySink for RecordingSink {
        fn show_totals(&mut self, final_value: &str, total_interest: &str) {
            self.totals
                .push((final_value.to_string(), total_interest.to_string()));
        }

        fn redraw_chart(&mut self, series: &ChartSeries) {
            self.charts.push(series.clone());
        }
    }

    fn coordinator() -> Coordinator<RecordingSink> {
        Coordinator::new(&Config::default(), RecordingSink::default())
    }

    #[test]
    fn test_initial_compute() {
        let c = coordinator();

        assert_eq!(c.recompute_count(), 1);
        assert_eq!(c.parameters(), &Parameters::default());
        assert_eq!(
            c.sink().totals,
            vec![("$16,288.95".to_string(), "$6,288.95".to_string())]
        );
        assert_eq!(c.sink().charts[0].labels.len(), 11);
        assert_eq!(c.sink().charts[0].labels[10], "Year 10");

        assert_eq!(c.control(BoundParam::Principal).label, "$10,000.00");
        assert_eq!(c.control(BoundParam::Rate).label, "5%");
        assert_eq!(c.control(BoundParam::Years).label, "10 Years");
        assert_eq!(c.control(BoundParam::Rate).field.text(), "5");
    }

    #[test]
    fn test_rate_field_updates_slider_and_label() {
        let mut c = coordinator();
        c.on_field_input(BoundParam::Rate, "7");

        let rate = c.control(BoundParam::Rate);
        assert_eq!(rate.slider.value(), 7.0);
        assert_eq!(rate.label, "7%");
        assert_eq!(rate.field.text(), "7");

        // Exactement un recalcul pour l'événement
        assert_eq!(c.recompute_count(), 2);
        assert_eq!(c.sink().totals.len(), 2);
        assert_eq!(c.sink().charts.len(), 2);

        assert_eq!(c.parameters().annual_rate_percent, 7.0);
        assert_relative_eq!(
            c.result().final_value,
            10_000.0 * 1.07_f64.powf(10.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_slider_updates_field() {
        let mut c = coordinator();
        c.on_slider_input(BoundParam::Years, 25.0);

        let years = c.control(BoundParam::Years);
        assert_eq!(years.field.text(), "25");
        assert_eq!(years.label, "25 Years");
        assert_eq!(c.parameters().years, 25);
        assert_eq!(c.result().series.len(), 26);
        assert_eq!(c.recompute_count(), 2);
    }

    #[test]
    fn test_last_write_wins() {
        let mut c = coordinator();
        c.on_field_input(BoundParam::Principal, "2500");
        c.on_slider_input(BoundParam::Principal, 4000.0);
        assert_eq!(c.parameters().principal, 4000.0);
        assert_eq!(c.control(BoundParam::Principal).field.text(), "4000");

        c.on_field_input(BoundParam::Principal, "3000");
        assert_eq!(c.parameters().principal, 3000.0);
        assert_eq!(c.control(BoundParam::Principal).slider.value(), 3000.0);
        assert_eq!(c.recompute_count(), 4);
    }

    #[test]
    fn test_invalid_principal_coerced_to_zero() {
        let mut c = coordinator();

        c.on_field_input(BoundParam::Principal, "abc");
        assert_eq!(c.parameters().principal, 0.0);
        assert_eq!(c.result().final_value, 0.0);
        // Le champ garde le texte tapé, le slider reçoit 0
        assert_eq!(c.control(BoundParam::Principal).field.text(), "abc");
        assert_eq!(c.control(BoundParam::Principal).slider.value(), 0.0);
        assert_eq!(c.control(BoundParam::Principal).label, "$0.00");

        c.on_field_input(BoundParam::Principal, "");
        assert_eq!(c.parameters().principal, 0.0);
        assert_eq!(
            c.sink().totals.last(),
            Some(&("$0.00".to_string(), "$0.00".to_string()))
        );
    }

    #[test]
    fn test_negative_and_fractional_inputs() {
        let mut c = coordinator();

        c.on_field_input(BoundParam::Principal, "-500");
        assert_eq!(c.parameters().principal, 0.0);

        c.on_field_input(BoundParam::Years, "2.7");
        assert_eq!(c.parameters().years, 2);
        assert_eq!(c.control(BoundParam::Years).label, "2 Years");

        c.on_field_input(BoundParam::Years, "-4");
        assert_eq!(c.parameters().years, 0);
        assert_eq!(c.result().series.len(), 1);

        c.on_field_input(BoundParam::Years, "99999");
        assert_eq!(c.parameters().years, MAX_YEARS);
    }

    #[test]
    fn test_field_above_slider_range() {
        let mut c = coordinator();
        c.on_field_input(BoundParam::Principal, "5000000");

        // L'état garde la valeur saisie, le slider reste en butée
        assert_eq!(c.parameters().principal, 5_000_000.0);
        let max = c.control(BoundParam::Principal).slider.range().max;
        assert_eq!(c.control(BoundParam::Principal).slider.value(), max);
    }

    #[test]
    fn test_nudge_slider() {
        let mut c = coordinator();
        c.nudge_slider(BoundParam::Rate, 3);

        assert_eq!(c.parameters().annual_rate_percent, 5.3);
        assert_eq!(c.control(BoundParam::Rate).field.text(), "5.3");
        assert_eq!(c.control(BoundParam::Rate).label, "5.3%");
    }

    #[test]
    fn test_frequency_selector() {
        let mut c = coordinator();
        c.set_frequency(Frequency::Monthly);

        assert_eq!(c.parameters().frequency, Frequency::Monthly);
        assert_eq!(c.recompute_count(), 2);
        assert_relative_eq!(
            c.result().final_value,
            10_000.0 * (1.0 + 0.05 / 12.0_f64).powf(120.0),
            epsilon = 1e-9
        );

        c.next_frequency();
        assert_eq!(c.parameters().frequency, Frequency::Daily);
        c.previous_frequency();
        c.previous_frequency();
        assert_eq!(c.parameters().frequency, Frequency::Quarterly);
        assert_eq!(c.recompute_count(), 5);
    }

    #[test]
    fn test_zero_rate_series_constant() {
        let mut c = coordinator();
        c.on_field_input(BoundParam::Rate, "0");

        assert_eq!(c.result().final_value, 10_000.0);
        let chart = c.sink().charts.last().cloned().unwrap_or_default();
        assert!(chart.values.iter().all(|&v| v == 10_000.0));
    }

    fn config_with(edit: impl FnOnce(&mut Config)) -> Config {
        let mut config = Config::default();
        edit(&mut config);
        config
    }

    #[test]
    fn test_fractional_years_step_keeps_pair_in_sync() {
        let config = config_with(|c| c.years_slider = SliderRange::new(0.0, 50.0, 0.5));
        let mut c = Coordinator::new(&config, RecordingSink::default());

        c.nudge_slider(BoundParam::Years, 1);

        let years = c.control(BoundParam::Years);
        assert_eq!(c.parameters().years, 10);
        assert_eq!(years.slider.value(), 10.0);
        assert_eq!(years.field.text(), "10");
    }

    #[test]
    fn test_negative_slider_minimum_keeps_pair_in_sync() {
        let config = config_with(|c| c.principal_slider = SliderRange::new(-1_000.0, 100_000.0, 100.0));
        let mut c = Coordinator::new(&config, RecordingSink::default());

        c.on_slider_input(BoundParam::Principal, -500.0);

        let principal = c.control(BoundParam::Principal);
        assert_eq!(c.parameters().principal, 0.0);
        assert_eq!(principal.slider.value(), 0.0);
        assert_eq!(principal.field.text(), "0");
        assert_eq!(principal.label, "$0.00");
    }

    #[test]
    fn test_zero_principal_with_overflowing_growth() {
        let mut c = coordinator();
        c.on_field_input(BoundParam::Principal, "");
        c.on_field_input(BoundParam::Rate, "100");
        c.set_frequency(Frequency::Daily);
        c.on_field_input(BoundParam::Years, "1000");

        assert_eq!(c.result().final_value, 0.0);
        assert_eq!(
            c.sink().totals.last(),
            Some(&("$0.00".to_string(), "$0.00".to_string()))
        );
    }
}
