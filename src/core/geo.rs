use crate::domain::model::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two coordinates given in degrees.
///
/// Inputs are not range-checked; out-of-range degrees produce a number, not an error.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    // rounding can push `a` a hair past 1.0 near antipodes
    let a = ((d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn distance_km(from: GeoPoint, to: GeoPoint) -> f64 {
    haversine_km(from.latitude, from.longitude, to.latitude, to.longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCRA: GeoPoint = GeoPoint::new(5.6037, -0.1870);
    const ACHIMOTA: GeoPoint = GeoPoint::new(5.6060, -0.1910);

    #[test]
    fn test_identical_points_are_zero_apart() {
        assert!(haversine_km(5.6037, -0.1870, 5.6037, -0.1870).abs() < 1e-9);
        assert_eq!(distance_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.0)), 0.0);
        assert!(distance_km(GeoPoint::new(-33.9, 151.2), GeoPoint::new(-33.9, 151.2)) < 1e-9);
    }

    #[test]
    fn test_one_degree_of_latitude_at_equator() {
        let d = haversine_km(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111.19).abs() < 0.5, "got {}", d);
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let d = haversine_km(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111.19).abs() < 0.5, "got {}", d);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (ACCRA, ACHIMOTA),
            (GeoPoint::new(51.5, -0.12), GeoPoint::new(40.71, -74.0)),
            (GeoPoint::new(-89.0, 10.0), GeoPoint::new(89.0, -170.0)),
        ];
        for (p, q) in pairs {
            let forward = distance_km(p, q);
            let backward = distance_km(q, p);
            assert!((forward - backward).abs() < 1e-9, "{} vs {}", forward, backward);
        }
    }

    #[test]
    fn test_antipodal_points_are_half_circumference() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half).abs() < 1e-6, "got {}", d);
    }

    #[test]
    fn test_city_scale_distance() {
        // Accra centre to Achimota is roughly half a kilometre
        let d = distance_km(ACCRA, ACHIMOTA);
        assert!(d > 0.4 && d < 0.6, "got {}", d);
    }
}
