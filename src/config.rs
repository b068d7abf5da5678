// ============================================================================
// Configuration
// ============================================================================
// Fichier JSON optionnel : valeurs initiales + bornes des sliders
//
// Emplacement :
// - Variable d'environnement LAZYINTEREST_CONFIG si définie
// - Sinon : <config_dir>/lazyinterest/config.json
//   (Linux : ~/.config/lazyinterest/config.json)
//
// Exemple :
// ```json
// {
//   "defaults": { "principal": 25000, "annual_rate_percent": 4.5, "frequency": 12, "years": 20 },
//   "rate_slider": { "min": 0, "max": 15, "step": 0.25 }
// }
// ```
//
// CONCEPTS RUST :
// 1. #[serde(default)] : chaque clé est optionnelle
// 2. anyhow::Context : messages d'erreur avec contexte
// ============================================================================

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::controls::SliderRange;
use crate::models::Parameters;

/// Variable d'environnement qui force le chemin du fichier de config
pub const CONFIG_ENV_VAR: &str = "LAZYINTEREST_CONFIG";

/// Configuration de l'application
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Paramètres affichés au démarrage
    pub defaults: Parameters,

    /// Bornes du slider "principal"
    pub principal_slider: SliderRange,

    /// Bornes du slider "taux"
    pub rate_slider: SliderRange,

    /// Bornes du slider "années"
    pub years_slider: SliderRange,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Parameters::default(),
            principal_slider: SliderRange::new(0.0, 100_000.0, 100.0),
            rate_slider: SliderRange::new(0.0, 20.0, 0.1),
            years_slider: SliderRange::new(0.0, 50.0, 1.0),
        }
    }
}

impl Config {
    /// Charge la configuration depuis l'emplacement standard
    ///
    /// - Chemin explicite (LAZYINTEREST_CONFIG) absent : erreur
    /// - Fichier par défaut absent : configuration par défaut
    pub fn load() -> Result<Config> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Config::load_from(Path::new(&path));
        }

        match Config::default_path() {
            Some(path) if path.exists() => Config::load_from(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Chemin par défaut du fichier de configuration
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lazyinterest").join("config.json"))
    }

    /// Charge et valide un fichier de configuration
    pub fn load_from(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Impossible de lire la configuration {}", path.display()))?;

        let config = Config::from_json(&content)
            .with_context(|| format!("Configuration invalide dans {}", path.display()))?;

        info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Parse et valide une configuration JSON
    pub fn from_json(json: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(json).context("JSON invalide")?;
        config.validate()?;
        Ok(config)
    }

    /// Vérifie la cohérence des bornes et des valeurs initiales
    pub fn validate(&self) -> Result<()> {
        let sliders = [
            ("principal_slider", self.principal_slider),
            ("rate_slider", self.rate_slider),
            ("years_slider", self.years_slider),
        ];

        for (name, range) in sliders {
            if !range.is_valid() {
                bail!(
                    "{}: bornes invalides (min={}, max={}, step={})",
                    name,
                    range.min,
                    range.max,
                    range.step
                );
            }

            // Les trois paramètres sont ramenés à 0 au minimum
            if range.min < 0.0 {
                bail!("{}: min doit être positif ou nul (min={})", name, range.min);
            }
        }

        // Les années sont entières : un pas ou un min fractionnaire ferait
        // dériver le slider de la valeur tronquée
        if self.years_slider.min.fract() != 0.0 || self.years_slider.step.fract() != 0.0 {
            bail!(
                "years_slider: min et step doivent être entiers (min={}, step={})",
                self.years_slider.min,
                self.years_slider.step
            );
        }

        if !self.defaults.principal.is_finite() || !self.defaults.annual_rate_percent.is_finite() {
            bail!("defaults: principal et annual_rate_percent doivent être finis");
        }

        Ok(())
    }
}
