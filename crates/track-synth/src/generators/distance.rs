//! Great-circle distance and its accumulation along a track.

use crate::models::Sample;

/// Mean Earth radius used for every distance in the crate.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance in meters between two lat/lon points in degrees.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Writes the running great-circle total into every sample, starting at 0.
///
/// Returns the final total.
pub fn accumulate_distance(samples: &mut [Sample]) -> f64 {
    let mut total = 0.0;
    for i in 0..samples.len() {
        if i > 0 {
            let prev = &samples[i - 1];
            let curr = &samples[i];
            total += haversine_distance(prev.lat, prev.lon, curr.lat, curr.lon);
        }
        samples[i].distance_meters = total;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(lat: f64, lon: f64) -> Sample {
        Sample {
            lat,
            lon,
            altitude: 0.0,
            elapsed_seconds: 0.0,
            distance_meters: -1.0,
        }
    }

    #[test]
    fn test_haversine_one_degree_latitude() {
        // ~111km for 1 degree of latitude
        let dist = haversine_distance(0.0, 0.0, 1.0, 0.0);
        assert!((dist - 111_195.0).abs() < 1.0);
    }

    #[test]
    fn test_haversine_same_point_is_zero() {
        assert_eq!(haversine_distance(39.084861, 121.808194, 39.084861, 121.808194), 0.0);
        assert_eq!(haversine_distance(-33.9, 18.4, -33.9, 18.4), 0.0);
    }

    #[test]
    fn test_haversine_symmetric() {
        let ab = haversine_distance(39.084861, 121.808194, 39.085528, 121.807667);
        let ba = haversine_distance(39.085528, 121.807667, 39.084861, 121.808194);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_haversine_track_edge() {
        let dist = haversine_distance(39.084861, 121.808194, 39.085528, 121.807667);
        assert!(dist > 84.0 && dist < 90.0, "got {dist}");
    }

    #[test]
    fn test_accumulate_distance() {
        let mut samples = vec![
            sample(39.084861, 121.808194),
            sample(39.085528, 121.807667),
            sample(39.085528, 121.807667),
            sample(39.086250, 121.808194),
        ];
        let total = accumulate_distance(&mut samples);

        assert_eq!(samples[0].distance_meters, 0.0);
        assert_eq!(samples[1].distance_meters, samples[2].distance_meters);
        for w in samples.windows(2) {
            assert!(w[1].distance_meters >= w[0].distance_meters);
        }
        assert_eq!(samples[3].distance_meters, total);

        let expected = haversine_distance(39.084861, 121.808194, 39.085528, 121.807667)
            + haversine_distance(39.085528, 121.807667, 39.086250, 121.808194);
        assert!((total - expected).abs() < 1e-9);
    }

    #[test]
    fn test_accumulate_empty() {
        let mut samples: Vec<Sample> = Vec::new();
        assert_eq!(accumulate_distance(&mut samples), 0.0);
    }
}
