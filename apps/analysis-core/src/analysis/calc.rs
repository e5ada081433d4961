use super::types::{Calculation, CalculationProfile};
use astro_math::{orbital_period_days, schwarzschild_radius_km};

// Illustrative reference parameters, not user inputs.
const STELLAR_MASS_SOLAR: f64 = 10.0;
const SUPERMASSIVE_MASS_SOLAR: f64 = 4.0e6;
const STAR_MASS_SOLAR: f64 = 1.0;

/// Run the fixed-parameter computations for a profile. `None` emits
/// nothing: dark matter, inflation, CMB and similar topics get no horizon
/// or orbit numbers bolted on.
pub fn run_profile(profile: CalculationProfile) -> Vec<Calculation> {
    match profile {
        CalculationProfile::BlackHole => black_hole_calculations(),
        CalculationProfile::Orbital => orbital_calculations(),
        CalculationProfile::None => vec![],
    }
}

fn black_hole_calculations() -> Vec<Calculation> {
    let rs_stellar = schwarzschild_radius_km(STELLAR_MASS_SOLAR);
    let rs_supermassive = schwarzschild_radius_km(SUPERMASSIVE_MASS_SOLAR);
    vec![
        Calculation {
            label: "Schwarzschild radius (stellar-mass black hole)".into(),
            value: format!("{} km", group_thousands(rs_stellar)),
            details: format!("Event horizon radius for a {} M☉ black hole.", STELLAR_MASS_SOLAR),
        },
        Calculation {
            label: "Schwarzschild radius (supermassive black hole)".into(),
            value: format!("{} km", group_thousands(rs_supermassive)),
            details: format!(
                "Event horizon radius for a {:.1e} M☉ supermassive black hole (similar to the Milky Way's center).",
                SUPERMASSIVE_MASS_SOLAR
            ),
        },
    ]
}

fn orbital_calculations() -> Vec<Calculation> {
    // The unit star mass keeps the guard in astro_math unreachable here.
    let p_1au = orbital_period_days(1.0, STAR_MASS_SOLAR).expect("positive star mass");
    let p_5au = orbital_period_days(5.0, STAR_MASS_SOLAR).expect("positive star mass");
    vec![
        Calculation {
            label: "Orbital period at 1 AU".into(),
            value: format!("{:.1} days", p_1au),
            details: "Approximate orbital period of an Earth-like orbit around a Sun-like star.".into(),
        },
        Calculation {
            label: "Orbital period at 5 AU".into(),
            value: format!("{:.1} days", p_5au),
            details: "Approximate orbital period for a Jupiter-like orbit around a Sun-like star.".into(),
        },
    ]
}

/// Two decimals with comma-grouped integer digits (`11813052.2` becomes
/// `"11,813,052.20"`). The standard formatter has no grouping flag.
fn group_thousands(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (int_part, frac_part) = formatted.split_once('.').expect("two-decimal format");
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}.{}", sign, grouped, frac_part)
}
