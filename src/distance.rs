use crate::gpx_types::{Distance, GpxPoint};

/// Mean earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points, haversine formula.
pub fn distance_between(p1: &GpxPoint, p2: &GpxPoint) -> f64 {
    let dlat = (p2.lat - p1.lat).to_radians();
    let dlon = (p2.lon - p1.lon).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + p1.lat.to_radians().cos() * p2.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Running and total distance along `points`, visited in order.
pub fn path_distance(points: &[GpxPoint]) -> Distance {
    let mut total = 0.0;
    let cumul = points
        .windows(2)
        .map(|pair| {
            total += distance_between(&pair[0], &pair[1]);
            total
        })
        .collect();

    Distance { total, cumul }
}
