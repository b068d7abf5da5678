// ============================================================================
// Contrôles : champ numérique + slider
// ============================================================================
// Modélise les deux contrôles liés de chaque paramètre :
// - NumberField : texte libre saisi par l'utilisateur
// - Slider : valeur numérique bornée, ajustée par pas
//
// CONCEPTS RUST :
// 1. Encapsulation : la valeur du slider reste toujours dans ses bornes
// 2. Serde : les bornes des sliders viennent de la configuration
// ============================================================================

use serde::Deserialize;

/// Bornes et pas d'un slider
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Vérifie que les bornes sont utilisables (min < max, step > 0, finis)
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.step.is_finite()
            && self.min < self.max
            && self.step > 0.0
    }

    /// Ramène une valeur dans les bornes
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Aligne une valeur sur la grille min + k * step
    ///
    /// L'arrondi final à 10 décimales évite les résidus du type 5.300000000000001
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((value - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        let cleaned = (snapped * 1e10).round() / 1e10;
        self.clamp(cleaned)
    }
}

// ============================================================================
// Slider
// ============================================================================

/// Slider : toujours numérique, toujours dans ses bornes
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    range: SliderRange,
    value: f64,
}

impl Slider {
    pub fn new(range: SliderRange, value: f64) -> Self {
        Self {
            range,
            value: range.clamp(value),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn range(&self) -> SliderRange {
        self.range
    }

    /// Positionne le slider (valeur ramenée dans les bornes)
    pub fn set_value(&mut self, value: f64) {
        self.value = self.range.clamp(value);
    }

    /// Valeur obtenue en déplaçant le curseur de `steps` crans
    ///
    /// Ne modifie pas le slider : la nouvelle valeur passe par le coordinateur
    pub fn stepped(&self, steps: i32) -> f64 {
        self.range
            .snap(self.value + f64::from(steps) * self.range.step)
    }

    /// Position relative dans [0, 1] (pour une jauge)
    pub fn ratio(&self) -> f64 {
        let span = self.range.max - self.range.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.range.min) / span).clamp(0.0, 1.0)
    }
}

// ============================================================================
// NumberField
// ============================================================================

/// Champ numérique : conserve le texte brut tapé par l'utilisateur
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberField {
    text: String,
}

impl NumberField {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Affiche une valeur numérique : 7.0 -> "7", 5.5 -> "5.5"
    pub fn set_number(&mut self, value: f64) {
        self.text = value.to_string();
    }
}

/// Parse le texte d'un champ numérique
///
/// CONCEPT : Coercition à 0
/// - Texte vide, non numérique ou non fini ("inf", "NaN") -> 0
/// - Aucune erreur n'est remontée à l'utilisateur
pub fn parse_number(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

// ============================================================================
// BoundControl : une paire champ + slider + label
// ============================================================================

/// Paire de contrôles liés pour un paramètre, avec son label formaté
#[derive(Debug, Clone, PartialEq)]
pub struct BoundControl {
    pub field: NumberField,
    pub slider: Slider,
    pub label: String,
}

impl BoundControl {
    pub fn new(range: SliderRange, value: f64, label: String) -> Self {
        let mut field = NumberField::default();
        field.set_number(value);

        Self {
            field,
            slider: Slider::new(range, value),
            label,
        }
    }
}
