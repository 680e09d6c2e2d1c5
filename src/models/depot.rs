//! Depot (warehouse) type.

use super::GeoPoint;

/// An origin location from which vehicles depart and to which they return.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{Depot, GeoPoint};
///
/// let d = Depot::new("w1", GeoPoint::new(0.0, 0.0).unwrap()).with_capacity(500.0);
/// assert_eq!(d.id(), "w1");
/// assert_eq!(d.capacity(), 500.0);
/// ```
#[derive(Debug, Clone)]
pub struct Depot {
    id: String,
    name: String,
    location: GeoPoint,
    capacity: f64,
    address: String,
}

impl Depot {
    /// Creates a depot at the given location with no name, address or capacity.
    pub fn new(id: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            location,
            capacity: 0.0,
            address: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the storage capacity. Informational only; the solver ignores it.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the postal address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Depot ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geographic location.
    pub fn location(&self) -> &GeoPoint {
        &self.location
    }

    /// Storage capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Postal address.
    pub fn address(&self) -> &str {
        &self.address
    }
}
