// ============================================================================
// Structure : Parameters
// ============================================================================
// Représente les paramètres du calcul d'intérêts composés
//
// CONCEPTS RUST :
// 1. Enum fermé : la fréquence ne peut prendre que 5 valeurs valides
// 2. TryFrom : conversion faillible depuis un entier (rejette 0)
// 3. Serde try_from/into : la config JSON utilise des entiers (1, 12, ...)
// ============================================================================

use std::fmt;

use serde::Deserialize;

/// Nombre maximum d'années accepté par le calculateur
pub const MAX_YEARS: u32 = 1000;

/// Fréquence de capitalisation (nombre de périodes par an)
///
/// CONCEPT RUST : Enum fermé au lieu d'un entier libre
/// - Une fréquence de 0 est impossible à construire
/// - Le moteur de calcul n'a jamais à diviser par zéro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u32")]
pub enum Frequency {
    /// 1 fois par an
    Annually,
    /// 2 fois par an
    SemiAnnually,
    /// 4 fois par an
    Quarterly,
    /// 12 fois par an
    Monthly,
    /// 365 fois par an
    Daily,
}

impl Frequency {
    /// Retourne le nombre de périodes de capitalisation par an
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annually => 1,
            Frequency::SemiAnnually => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
            Frequency::Daily => 365,
        }
    }

    /// Label lisible pour le sélecteur
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Annually => "Annually",
            Frequency::SemiAnnually => "Semi-Annually",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
            Frequency::Daily => "Daily",
        }
    }

    /// Construit une fréquence depuis un nombre de périodes
    ///
    /// Retourne None pour toute valeur hors de l'ensemble {1, 2, 4, 12, 365}
    pub fn from_periods(periods: u32) -> Option<Frequency> {
        Frequency::all()
            .into_iter()
            .find(|f| f.periods_per_year() == periods)
    }

    /// Retourne toutes les fréquences disponibles (pour UI de sélection)
    pub fn all() -> Vec<Frequency> {
        vec![
            Frequency::Annually,
            Frequency::SemiAnnually,
            Frequency::Quarterly,
            Frequency::Monthly,
            Frequency::Daily,
        ]
    }

    /// Retourne la fréquence suivante (cycle)
    pub fn next(&self) -> Frequency {
        match self {
            Frequency::Annually => Frequency::SemiAnnually,
            Frequency::SemiAnnually => Frequency::Quarterly,
            Frequency::Quarterly => Frequency::Monthly,
            Frequency::Monthly => Frequency::Daily,
            Frequency::Daily => Frequency::Annually, // Boucle
        }
    }

    /// Retourne la fréquence précédente (cycle)
    pub fn previous(&self) -> Frequency {
        match self {
            Frequency::Annually => Frequency::Daily, // Boucle
            Frequency::SemiAnnually => Frequency::Annually,
            Frequency::Quarterly => Frequency::SemiAnnually,
            Frequency::Monthly => Frequency::Quarterly,
            Frequency::Daily => Frequency::Monthly,
        }
    }
}

impl Default for Frequency {
    /// Capitalisation annuelle par défaut
    fn default() -> Self {
        Frequency::Annually
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Conversions entier <-> Frequency
// ============================================================================
// CONCEPT RUST : TryFrom
// - Conversion qui peut échouer, retourne Result
// - Utilisé par serde (#[serde(try_from = "u32")]) pour la config
// ============================================================================

impl TryFrom<u32> for Frequency {
    type Error = String;

    fn try_from(periods: u32) -> Result<Self, Self::Error> {
        Frequency::from_periods(periods).ok_or_else(|| {
            format!(
                "invalid compounding frequency {} (expected one of 1, 2, 4, 12, 365)",
                periods
            )
        })
    }
}

/// Paramètres du calcul : la seule source de vérité pour le moteur
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Montant initial investi
    pub principal: f64,

    /// Taux annuel en pourcentage (5.0 = 5%)
    pub annual_rate_percent: f64,

    /// Fréquence de capitalisation
    pub frequency: Frequency,

    /// Durée en années entières
    pub years: u32,
}

impl Parameters {
    /// Constructeur
    pub fn new(principal: f64, annual_rate_percent: f64, frequency: Frequency, years: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            frequency,
            years,
        }
    }
}

impl Default for Parameters {
    /// 10 000 $ à 5% sur 10 ans, capitalisation annuelle
    fn default() -> Self {
        Self::new(10_000.0, 5.0, Frequency::Annually, 10)
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_periods() {
        assert_eq!(Frequency::Annually.periods_per_year(), 1);
        assert_eq!(Frequency::Monthly.periods_per_year(), 12);
        assert_eq!(Frequency::Daily.periods_per_year(), 365);
    }

    #[test]
    fn test_frequency_rejects_zero() {
        assert!(Frequency::try_from(0u32).is_err());
        assert!(Frequency::try_from(3u32).is_err());
        assert_eq!(Frequency::try_from(4u32), Ok(Frequency::Quarterly));
    }

    #[test]
    fn test_frequency_cycle() {
        let mut f = Frequency::Annually;
        for _ in 0..Frequency::all().len() {
            f = f.next();
        }
        assert_eq!(f, Frequency::Annually);
        assert_eq!(Frequency::Annually.previous(), Frequency::Daily);
        assert_eq!(Frequency::Daily.next().previous(), Frequency::Daily);
    }

    #[test]
    fn test_parameters_from_json() {
        let params: Parameters =
            serde_json::from_str(r#"{"principal": 500, "frequency": 12}"#).unwrap();
        assert_eq!(params.principal, 500.0);
        assert_eq!(params.frequency, Frequency::Monthly);
        // Champs absents : valeurs par défaut
        assert_eq!(params.years, 10);
        assert_eq!(params.annual_rate_percent, 5.0);

        let bad = serde_json::from_str::<Parameters>(r#"{"frequency": 0}"#);
        assert!(bad.is_err());
    }
}
