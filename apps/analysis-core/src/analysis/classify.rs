use super::types::CalculationProfile;

// Keyword tiers for the result budget, broadest first. First match wins.
const VERY_BROAD: &[&str] = &["universe", "cosmology", "astrophysics"];
const BROAD: &[&str] = &["dark matter", "dark energy", "inflation", "structure formation"];
const MEDIUM: &[&str] = &["galaxy", "exoplanet", "planet", "accretion", "supernova"];

const ORBITAL: &[&str] = &["orbit", "exoplanet", "planet"];

fn contains_any(topic: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| topic.contains(n))
}

/// How many arXiv results to request for a topic. Broader topics get a
/// larger budget; unrecognized topics stay narrow.
pub fn decide_max_results(topic: &str) -> usize {
    let t = topic.to_lowercase();
    if contains_any(&t, VERY_BROAD) {
        8
    } else if contains_any(&t, BROAD) {
        6
    } else if contains_any(&t, MEDIUM) {
        5
    } else {
        3
    }
}

/// Which calculation profile fits a topic. Evaluated independently of the
/// result budget; the two scans may land on unrelated tiers and that is
/// intentional.
pub fn select_profile(topic: &str) -> CalculationProfile {
    let t = topic.to_lowercase();
    if t.contains("black hole") {
        CalculationProfile::BlackHole
    } else if contains_any(&t, ORBITAL) {
        CalculationProfile::Orbital
    } else {
        CalculationProfile::None
    }
}
