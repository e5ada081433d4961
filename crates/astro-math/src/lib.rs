//! Closed-form astrophysics formulas used by the analysis pipeline.
//!
//! Everything here is pure: no I/O, no shared state. Inputs and outputs use
//! astrophysical units (solar masses, AU, days) rather than raw SI.

use thiserror::Error;

/// Gravitational constant, m^3 kg^-1 s^-2.
pub const G: f64 = 6.674_30e-11;
/// Speed of light, m/s.
pub const C: f64 = 2.997_924_58e8;
/// Mass of the Sun, kg.
pub const M_SUN: f64 = 1.988_47e30;
/// Astronomical unit, m.
pub const AU: f64 = 1.495_978_707e11;
/// Days per Julian year.
pub const DAYS_PER_YEAR: f64 = 365.25;

#[derive(Debug, Error, PartialEq)]
pub enum AstroError {
    #[error("star mass must be positive (got {0} solar masses)")]
    NonPositiveStarMass(f64),
}

/// Schwarzschild radius `Rs = 2GM / c^2` of a non-rotating mass, in meters.
pub fn schwarzschild_radius_m(mass_solar: f64) -> f64 {
    2.0 * G * mass_solar * M_SUN / (C * C)
}

/// Schwarzschild radius in kilometers.
pub fn schwarzschild_radius_km(mass_solar: f64) -> f64 {
    schwarzschild_radius_m(mass_solar) / 1000.0
}

/// Kepler's third law in solar units: `P^2 = a^3 / M`, with the period in
/// years, the semi-major axis in AU and the star mass in solar masses.
///
/// A non-positive star mass is a programming error at the call site, not an
/// external fault, so it fails fast instead of degrading.
pub fn orbital_period_years(a_au: f64, star_mass_solar: f64) -> Result<f64, AstroError> {
    if star_mass_solar <= 0.0 {
        return Err(AstroError::NonPositiveStarMass(star_mass_solar));
    }
    Ok((a_au.powi(3) / star_mass_solar).sqrt())
}

/// Orbital period in days.
pub fn orbital_period_days(a_au: f64, star_mass_solar: f64) -> Result<f64, AstroError> {
    Ok(orbital_period_years(a_au, star_mass_solar)? * DAYS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn earth_orbit_takes_one_year() {
        let p = orbital_period_days(1.0, 1.0).expect("unit star mass");
        assert_abs_diff_eq!(p, 365.25, epsilon = 0.1);
    }

    #[test]
    fn jupiter_like_orbit_is_much_longer() {
        let p = orbital_period_years(5.0, 1.0).expect("unit star mass");
        assert_abs_diff_eq!(p, 11.18, epsilon = 0.01);
    }

    #[test]
    fn heavier_star_shortens_the_period() {
        let light = orbital_period_days(1.0, 1.0).unwrap();
        let heavy = orbital_period_days(1.0, 4.0).unwrap();
        assert_abs_diff_eq!(heavy, light / 2.0, epsilon = 0.1);
    }

    #[test]
    fn stellar_mass_event_horizon() {
        assert_abs_diff_eq!(schwarzschild_radius_km(10.0), 29.53, epsilon = 0.1);
    }

    #[test]
    fn horizon_scales_linearly_with_mass() {
        let one = schwarzschild_radius_m(1.0);
        assert_abs_diff_eq!(schwarzschild_radius_m(4.0e6), one * 4.0e6, epsilon = 1.0);
    }

    #[test]
    fn rejects_non_positive_star_mass() {
        assert_eq!(
            orbital_period_years(1.0, 0.0),
            Err(AstroError::NonPositiveStarMass(0.0))
        );
        assert!(orbital_period_days(2.0, -1.5).is_err());
    }
}
