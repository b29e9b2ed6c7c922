/// Sphere radius used by the haversine computation, in kilometers.
/// A simplification, not WGS-84 accurate.
const EARTH_RADIUS_KM: f64 = 6367.0;

/// Great-circle distance in kilometers between two coordinate pairs,
/// via the haversine formula. Arguments are degrees, longitude first.
pub fn distance_km(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (lon1, lat1, lon2, lat2) = (
        lon1.to_radians(),
        lat1.to_radians(),
        lon2.to_radians(),
        lat2.to_radians(),
    );

    let dlon = lon2 - lon1;
    let dlat = lat2 - lat1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    EARTH_RADIUS_KM * 2.0 * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero_apart() {
        assert_eq!(distance_km(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(distance_km(13.4, 52.5, 13.4, 52.5), 0.0);
    }

    #[test]
    fn symmetric_under_swapping_endpoints() {
        let ab = distance_km(2.3522, 48.8566, 13.405, 52.52);
        let ba = distance_km(13.405, 52.52, 2.3522, 48.8566);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn non_negative_for_scattered_inputs() {
        let points = [
            (0.0, 0.0),
            (-180.0, -90.0),
            (180.0, 90.0),
            (-73.9857, 40.7484),
            (151.2093, -33.8688),
        ];

        for &(lon1, lat1) in &points {
            for &(lon2, lat2) in &points {
                assert!(distance_km(lon1, lat1, lon2, lat2) >= 0.0);
            }
        }
    }

    #[test]
    fn paris_to_berlin_is_roughly_right() {
        // True great-circle distance is about 878 km.
        let km = distance_km(2.3522, 48.8566, 13.405, 52.52);
        assert!((km - 878.0).abs() < 25.0, "got {km} km");
    }

    #[test]
    fn antipodal_points_are_half_the_circumference() {
        let km = distance_km(0.0, 0.0, 180.0, 0.0);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((km - half_circumference).abs() < 1.0);
    }
}
