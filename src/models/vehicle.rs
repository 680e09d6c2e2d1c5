//! Vehicle type with capacity and speed.

/// A truck based at one depot.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::Vehicle;
///
/// let v = Vehicle::new("t1", 200.0, 50.0, "w1");
/// assert_eq!(v.id(), "t1");
/// assert_eq!(v.capacity(), 200.0);
/// assert_eq!(v.depot_id(), "w1");
/// ```
#[derive(Debug, Clone)]
pub struct Vehicle {
    id: String,
    name: String,
    capacity: f64,
    speed: f64,
    depot_id: String,
}

impl Vehicle {
    /// Creates a vehicle with the given capacity, speed (distance per time
    /// unit) and home depot.
    pub fn new(
        id: impl Into<String>,
        capacity: f64,
        speed: f64,
        depot_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity,
            speed,
            depot_id: depot_id.into(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Vehicle ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Travel speed in distance units per time unit.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Home depot ID (start and end of the route).
    pub fn depot_id(&self) -> &str {
        &self.depot_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new("t1", 100.0, 40.0, "w2").with_name("Truck 1");
        assert_eq!(v.id(), "t1");
        assert_eq!(v.name(), "Truck 1");
        assert_eq!(v.capacity(), 100.0);
        assert_eq!(v.speed(), 40.0);
        assert_eq!(v.depot_id(), "w2");
    }
}
