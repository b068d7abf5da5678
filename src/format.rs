// ============================================================================
// Formatage des nombres
// ============================================================================
// Labels lisibles pour l'UI : devise (USD, en-US), pourcentage, années
//
// CONCEPTS RUST :
// 1. String building : construire une chaîne caractère par caractère
// 2. f64::is_finite / is_nan : gérer les valeurs spéciales
// ============================================================================

/// Formate un montant en dollars US avec 2 décimales : "$16,288.95"
///
/// Les négatifs sont préfixés par "-" : "-$1,234.50"
pub fn format_currency(value: f64) -> String {
    format_usd(value, 2)
}

/// Formate un montant en dollars entiers : "$16,289" (labels d'axe)
pub fn format_whole_currency(value: f64) -> String {
    format_usd(value, 0)
}

/// Formate un taux : 7 -> "7%", 5.5 -> "5.5%"
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

/// Formate une durée : 10 -> "10 Years"
pub fn format_years(years: u32) -> String {
    format!("{} Years", years)
}

fn format_usd(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    let sign = if value.is_sign_negative() && value != 0.0 {
        "-"
    } else {
        ""
    };

    if value.is_infinite() {
        return format!("{}$∞", sign);
    }

    let fixed = format!("{:.*}", decimals, value.abs());

    // Un montant qui arrondit à zéro ne garde pas son signe ("-$0.00")
    let sign = if fixed.chars().all(|c| c == '0' || c == '.') {
        ""
    } else {
        sign
    };

    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = format!("{}${}", sign, group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Insère une virgule toutes les 3 positions : "1234567" -> "1,234,567"
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
