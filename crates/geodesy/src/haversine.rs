//! Haversine great-circle distance.

/// Mean Earth radius in kilometers (IUGG mean radius R1).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance between two points in kilometers.
///
/// Inputs are degrees. The haversine form is numerically stable for the
/// short distances that dominate storm-scale work (unlike the spherical
/// law of cosines, which loses precision below ~1 km).
///
/// Symmetric in its endpoints and exactly zero for identical points.
pub fn distance_km(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        assert_eq!(distance_km(121.5, 23.5, 121.5, 23.5), 0.0);
    }

    #[test]
    fn test_one_degree_latitude() {
        // One degree of latitude is ~111.19 km everywhere on the sphere.
        let d = distance_km(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111.195).abs() < 0.1, "got {}", d);
    }

    #[test]
    fn test_one_degree_longitude_at_equator() {
        let d = distance_km(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111.195).abs() < 0.1, "got {}", d);
    }

    #[test]
    fn test_longitude_shrinks_with_latitude() {
        let at_equator = distance_km(120.0, 0.0, 121.0, 0.0);
        let at_60n = distance_km(120.0, 60.0, 121.0, 60.0);
        // cos(60 deg) = 0.5
        assert!((at_60n / at_equator - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_symmetry() {
        let d1 = distance_km(121.5, 23.5, 125.0, 20.0);
        let d2 = distance_km(125.0, 20.0, 121.5, 23.5);
        assert!((d1 - d2).abs() < 1e-12);
    }

    #[test]
    fn test_taipei_to_tokyo() {
        // Known reference distance ~2100 km.
        let d = distance_km(121.56, 25.03, 139.69, 35.69);
        assert!(d > 2050.0 && d < 2150.0, "got {}", d);
    }
}
