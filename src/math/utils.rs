// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f64 = 1e-10;
    /// Toleranz für Vergleiche von Koordinaten nach einer Schnittpunktberechnung
    pub const COORDINATE_TOLERANCE: f64 = 1e-9;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob zwei Floats mit custom Toleranz gleich sind
    pub fn nearly_equal_eps(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f64) -> bool {
        a.abs() < EPSILON
    }
}

/// Random utilities (erweitert vorhandene rand-Funktionalität)
pub mod random {
    use bevy::math::DVec2;
    use rand::Rng;

    /// Generiert zufälligen Punkt in einem Rechteck
    pub fn random_point_in_rect(min: DVec2, max: DVec2, rng: &mut impl Rng) -> DVec2 {
        DVec2::new(
            rng.random_range(min.x..=max.x),
            rng.random_range(min.y..=max.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::DVec2;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_nearly_equal() {
        assert!(comparison::nearly_equal(0.1 + 0.2, 0.3));
        assert!(!comparison::nearly_equal(1.0, 1.001));
        assert!(comparison::nearly_equal_eps(1.0, 1.001, 0.01));
        assert!(comparison::nearly_zero(1e-12));
    }

    #[test]
    fn test_random_point_stays_in_rect() {
        let mut rng = StdRng::seed_from_u64(7);
        let min = DVec2::new(-2.0, 3.0);
        let max = DVec2::new(4.0, 5.0);
        for _ in 0..100 {
            let p = random::random_point_in_rect(min, max, &mut rng);
            assert!(p.x >= min.x && p.x <= max.x);
            assert!(p.y >= min.y && p.y <= max.y);
        }
    }
}
