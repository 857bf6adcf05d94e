//! Closed Catmull-Rom spline through loop vertices.

use crate::error::SynthError;
use crate::models::Waypoint;

/// Samples a closed uniform Catmull-Rom spline through `vertices`.
///
/// A trailing vertex equal to the first one is treated as the closing point
/// and dropped. Samples are evenly spaced in parameter space and the loop
/// end is not repeated, so `num_samples` points cover exactly one lap.
pub fn closed_catmull_rom(
    vertices: &[Waypoint],
    num_samples: usize,
) -> Result<Vec<Waypoint>, SynthError> {
    let vertices = match vertices {
        [first, .., last] if first == last => &vertices[..vertices.len() - 1],
        _ => vertices,
    };
    let n = vertices.len();
    if n < 2 {
        return Err(SynthError::TooFewWaypoints(n));
    }

    let mut samples = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        let u = i as f64 * n as f64 / num_samples as f64;
        let k = (u.floor() as usize).min(n - 1);
        let t = u - k as f64;

        let p0 = &vertices[(k + n - 1) % n];
        let p1 = &vertices[k];
        let p2 = &vertices[(k + 1) % n];
        let p3 = &vertices[(k + 2) % n];

        samples.push(Waypoint::new(
            catmull_rom(p0.lat, p1.lat, p2.lat, p3.lat, t),
            catmull_rom(p0.lon, p1.lon, p2.lon, p3.lon, t),
            catmull_rom(p0.altitude, p1.altitude, p2.altitude, p3.altitude, t),
        ));
    }

    Ok(samples)
}

fn catmull_rom(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}
