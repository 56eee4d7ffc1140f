use rand::Rng;

use crate::types::{Axis, BoundingBox, GeoPoint};

/// Draws a point uniformly from `bounds`, each axis rounded to six decimals.
pub fn random_point<R: Rng + ?Sized>(bounds: &BoundingBox, rng: &mut R) -> GeoPoint {
    GeoPoint::new(
        random_value(bounds.range(Axis::Latitude), rng),
        random_value(bounds.range(Axis::Longitude), rng),
    )
}

fn random_value<R: Rng + ?Sized>((min, max): (f64, f64), rng: &mut R) -> f64 {
    round_to_micro(rng.gen_range(min..=max)).clamp(min, max)
}

/// Rounds to the nearest millionth of a degree.
pub fn round_to_micro(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NIZHNY_NOVGOROD;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_points_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let point = random_point(&NIZHNY_NOVGOROD, &mut rng);
            assert!(NIZHNY_NOVGOROD.contains(&point), "{:?} escaped", point);
        }
    }

    #[test]
    fn test_random_points_have_six_decimals() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let point = random_point(&NIZHNY_NOVGOROD, &mut rng);
            assert_eq!(point.lat, round_to_micro(point.lat));
            assert_eq!(point.lng, round_to_micro(point.lng));
        }
    }

    #[test]
    fn test_same_seed_same_point() {
        let a = random_point(&NIZHNY_NOVGOROD, &mut StdRng::seed_from_u64(3));
        let b = random_point(&NIZHNY_NOVGOROD, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_round_to_micro() {
        assert_eq!(round_to_micro(56.123_456_7), 56.123_457);
        assert_eq!(round_to_micro(44.0), 44.0);
    }
}
