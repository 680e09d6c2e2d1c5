//! Geographic coordinates and great-circle distance.

/// Mean Earth radius in kilometres used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface in decimal degrees.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::GeoPoint;
///
/// let p = GeoPoint::new(37.5665, 126.9780).unwrap();
/// assert_eq!(p.lat(), 37.5665);
/// assert!(GeoPoint::new(91.0, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Creates a new point.
    ///
    /// Returns `None` if either coordinate is non-finite or out of range.
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return None;
        }
        Some(Self { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to another point, in kilometres.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine_km(self, other)
    }
}

/// Haversine great-circle distance between two points, in kilometres.
///
/// ```
/// use u_mdvrp::models::{haversine_km, GeoPoint};
///
/// let a = GeoPoint::new(0.0, 0.0).unwrap();
/// let b = GeoPoint::new(0.0, 1.0).unwrap();
/// assert!((haversine_km(&a, &b) - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push h marginally above 1 for antipodal points.
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).expect("valid point")
    }

    #[test]
    fn test_geo_point_invalid() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_none());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_none());
        assert!(GeoPoint::new(-90.5, 0.0).is_none());
        assert!(GeoPoint::new(0.0, 180.5).is_none());
        assert!(GeoPoint::new(90.0, -180.0).is_some());
    }

    #[test]
    fn test_haversine_zero() {
        let p = point(48.8566, 2.3522);
        assert_eq!(haversine_km(&p, &p), 0.0);
    }

    #[test]
    fn test_haversine_one_degree_equator() {
        // 2πR / 360
        let expected = 2.0 * std::f64::consts::PI * EARTH_RADIUS_KM / 360.0;
        let d = haversine_km(&point(0.0, 0.0), &point(0.0, 1.0));
        assert!((d - expected).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = point(40.4168, -3.7038);
        let b = point(41.3874, 2.1686);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-12);
        // Madrid to Barcelona is roughly 505 km.
        assert!((a.distance_to(&b) - 505.0).abs() < 5.0);
    }

    #[test]
    fn test_haversine_antipodal() {
        let d = haversine_km(&point(0.0, 0.0), &point(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}
