//! Great-circle navigation math on a spherical earth
//!
//! All functions are pure. Inputs are expected to lie on one regional map, so
//! antipodal-adjacent pairs are not handled specially.
//!
//! - Latitude/longitude: decimal degrees
//! - Bearing: degrees true, `[0, 360)`, clockwise from north
//! - Distance: meters

use crate::core::{GeoPoint, EARTH_RADIUS_M};

/// Great-circle distance between two points (haversine).
///
/// Symmetric, and exactly zero for identical inputs.
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    if a == b {
        return 0.0;
    }

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair outside [0, 1]
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Initial bearing travelling from `a` to `b` along the great circle.
///
/// Returns 0 for coincident points.
pub fn bearing(a: GeoPoint, b: GeoPoint) -> f64 {
    if a == b {
        return 0.0;
    }

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    normalize_degrees(y.atan2(x).to_degrees())
}

/// Point reached from `origin` after travelling `distance_m` on `bearing_deg`.
pub fn destination(origin: GeoPoint, bearing_deg: f64, distance_m: f64) -> GeoPoint {
    let delta = distance_m / EARTH_RADIUS_M;
    let theta = bearing_deg.to_radians();
    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();

    let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * sin_lat2);

    GeoPoint::new(lat2.to_degrees(), normalize_longitude(lon2.to_degrees()))
}

/// Wrap an angle into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

fn normalize_longitude(lon: f64) -> f64 {
    (lon + 540.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: GeoPoint, b: GeoPoint, tol_deg: f64) {
        assert!(
            (a.lat - b.lat).abs() < tol_deg && (a.lon - b.lon).abs() < tol_deg,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_distance_symmetric_and_zero() {
        let a = GeoPoint::new(33.50, 36.30);
        let b = GeoPoint::new(33.52, 36.35);

        let ab = distance(a, b);
        let ba = distance(b, a);
        assert!((ab - ba).abs() <= ab * 1e-6);
        assert_eq!(distance(a, a), 0.0);
        assert!(ab > 0.0);
    }

    #[test]
    fn test_distance_one_degree_of_latitude() {
        let a = GeoPoint::new(35.0, 36.0);
        let b = GeoPoint::new(36.0, 36.0);

        let expected = EARTH_RADIUS_M * 1.0_f64.to_radians();
        assert!((distance(a, b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = GeoPoint::new(35.0, 36.0);

        assert!(bearing(origin, GeoPoint::new(35.1, 36.0)).abs() < 1e-9);
        assert!((bearing(origin, GeoPoint::new(34.9, 36.0)) - 180.0).abs() < 1e-9);
        // Due east drifts slightly north of 90 at this latitude, but not by much
        assert!((bearing(origin, GeoPoint::new(35.0, 36.1)) - 90.0).abs() < 0.1);
        assert!((bearing(origin, GeoPoint::new(35.0, 35.9)) - 270.0).abs() < 0.1);
    }

    #[test]
    fn test_bearing_not_symmetric() {
        let a = GeoPoint::new(33.50, 36.30);
        let b = GeoPoint::new(33.52, 36.35);

        let forward = bearing(a, b);
        let back = bearing(b, a);
        let diff = normalize_degrees(back - forward);
        assert!((diff - 180.0).abs() < 0.5);
    }

    #[test]
    fn test_bearing_coincident_points() {
        let a = GeoPoint::new(33.5, 36.3);
        assert_eq!(bearing(a, a), 0.0);
    }

    #[test]
    fn test_destination_round_trip() {
        let pairs = [
            (GeoPoint::new(33.50, 36.30), GeoPoint::new(33.52, 36.35)),
            (GeoPoint::new(35.021, 35.9), GeoPoint::new(34.7, 36.4)),
            (GeoPoint::new(-27.46, 153.03), GeoPoint::new(-27.48, 153.02)),
            (GeoPoint::new(10.0, 179.9), GeoPoint::new(10.1, -179.9)),
        ];

        for (a, b) in pairs {
            let reached = destination(a, bearing(a, b), distance(a, b));
            assert_close(reached, b, 1e-7);
        }
    }

    #[test]
    fn test_destination_zero_distance() {
        let a = GeoPoint::new(33.5, 36.3);
        assert_close(destination(a, 123.0, 0.0), a, 1e-12);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(450.0), 90.0);
        assert!(normalize_degrees(-1e-20) < 360.0);
    }
}
