//! Linear interpolation along straight lines and polylines.

use crate::error::SynthError;
use crate::models::Waypoint;

/// Returns `num` evenly spaced values over `[start, end]`.
///
/// Values are computed as `start + i * step` and the last one is pinned to
/// `end`, so the endpoints are always exact.
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
            values[num - 1] = end;
            values
        }
    }
}

/// Interpolates `num_points` points on the straight line from `start` to `end`,
/// altitude included.
pub fn interpolate_line(start: &Waypoint, end: &Waypoint, num_points: usize) -> Vec<Waypoint> {
    let lats = linspace(start.lat, end.lat, num_points);
    let lons = linspace(start.lon, end.lon, num_points);
    let alts = linspace(start.altitude, end.altitude, num_points);

    lats.into_iter()
        .zip(lons)
        .zip(alts)
        .map(|((lat, lon), altitude)| Waypoint::new(lat, lon, altitude))
        .collect()
}

/// Resamples a polyline into `num_samples` points.
///
/// Sample positions are evenly spaced in anchor-index space `[0, N-1]`, so
/// each segment receives a share proportional to its index span rather than
/// its length. When `num_samples` is not a multiple of `N-1` the share per
/// segment is uneven.
pub fn interpolate_polyline(
    waypoints: &[Waypoint],
    num_samples: usize,
) -> Result<Vec<Waypoint>, SynthError> {
    if waypoints.len() < 2 {
        return Err(SynthError::TooFewWaypoints(waypoints.len()));
    }

    let last = waypoints.len() - 1;
    let positions = linspace(0.0, last as f64, num_samples);

    Ok(positions
        .into_iter()
        .map(|x| point_at_index(waypoints, x))
        .collect())
}

/// Evaluates the polyline at fractional anchor index `x`.
fn point_at_index(waypoints: &[Waypoint], x: f64) -> Waypoint {
    let last = waypoints.len() - 1;
    if x <= 0.0 {
        return waypoints[0];
    }
    if x >= last as f64 {
        return waypoints[last];
    }

    let j = (x.floor() as usize).min(last - 1);
    let t = x - j as f64;
    let a = &waypoints[j];
    let b = &waypoints[j + 1];

    Waypoint::new(
        a.lat + t * (b.lat - a.lat),
        a.lon + t * (b.lon - a.lon),
        a.altitude + t * (b.altitude - a.altitude),
    )
}
