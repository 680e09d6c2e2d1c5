//! Route type.

use jiff::Timestamp;

/// An ordered itinerary for one vehicle: depot → stops → depot.
///
/// The depot itself is not stored in the stop sequence; the return leg is
/// implicit.
///
/// # Examples
///
/// ```
/// use jiff::Timestamp;
/// use u_mdvrp::models::Route;
///
/// let route = Route::new("route_1", "w1", "t1", vec!["s1".into()], Timestamp::UNIX_EPOCH);
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.vehicle_id(), "t1");
/// assert_eq!(route.total_distance(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    id: String,
    depot_id: String,
    vehicle_id: String,
    stop_ids: Vec<String>,
    total_distance: f64,
    estimated_duration: f64,
    created: Timestamp,
}

impl Route {
    /// Creates a route with zero metrics.
    pub fn new(
        id: impl Into<String>,
        depot_id: impl Into<String>,
        vehicle_id: impl Into<String>,
        stop_ids: Vec<String>,
        created: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            depot_id: depot_id.into(),
            vehicle_id: vehicle_id.into(),
            stop_ids,
            total_distance: 0.0,
            estimated_duration: 0.0,
            created,
        }
    }

    /// Route ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Depot the route starts and ends at.
    pub fn depot_id(&self) -> &str {
        &self.depot_id
    }

    /// Vehicle driving this route.
    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    /// Stop IDs in visit order.
    pub fn stop_ids(&self) -> &[String] {
        &self.stop_ids
    }

    /// Number of stops (excluding depot).
    pub fn len(&self) -> usize {
        self.stop_ids.len()
    }

    /// Returns `true` if this route visits no stops.
    pub fn is_empty(&self) -> bool {
        self.stop_ids.is_empty()
    }

    /// Closed-tour distance.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Estimated driving time.
    pub fn estimated_duration(&self) -> f64 {
        self.estimated_duration
    }

    /// When the route was generated.
    pub fn created(&self) -> Timestamp {
        self.created
    }

    /// Replaces the stop sequence.
    pub fn set_stop_ids(&mut self, stop_ids: Vec<String>) {
        self.stop_ids = stop_ids;
    }

    /// Sets the total distance.
    pub fn set_total_distance(&mut self, d: f64) {
        self.total_distance = d;
    }

    /// Sets the estimated duration.
    pub fn set_estimated_duration(&mut self, t: f64) {
        self.estimated_duration = t;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = Route::new("r", "w1", "t1", Vec::new(), Timestamp::UNIX_EPOCH);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.depot_id(), "w1");
        assert_eq!(r.estimated_duration(), 0.0);
    }

    #[test]
    fn test_route_metrics_setters() {
        let mut r = Route::new(
            "r",
            "w1",
            "t1",
            vec!["a".into(), "b".into()],
            Timestamp::UNIX_EPOCH,
        );
        r.set_total_distance(12.5);
        r.set_estimated_duration(0.25);
        assert_eq!(r.stop_ids(), &["a".to_string(), "b".to_string()]);
        assert_eq!(r.total_distance(), 12.5);
        assert_eq!(r.estimated_duration(), 0.25);
        assert_eq!(r.created(), Timestamp::UNIX_EPOCH);
    }
}
