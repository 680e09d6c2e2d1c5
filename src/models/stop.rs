//! Delivery stop and time window types.

use super::GeoPoint;

/// A delivery time window, carried as the caller supplied it.
///
/// Time windows are recorded on stops but never consulted by the solver.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::TimeWindow;
///
/// let tw = TimeWindow::new("08:00", "12:00");
/// assert_eq!(tw.start(), "08:00");
/// assert_eq!(tw.end(), "12:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    start: String,
    end: String,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Opening time.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Closing time.
    pub fn end(&self) -> &str {
        &self.end
    }
}

/// A delivery destination carrying a demand quantity.
///
/// # Examples
///
/// ```
/// use u_mdvrp::models::{GeoPoint, Stop};
///
/// let s = Stop::new("s1", GeoPoint::new(0.0, 1.0).unwrap(), 10.0);
/// assert_eq!(s.id(), "s1");
/// assert_eq!(s.demand(), 10.0);
/// assert!(s.time_window().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Stop {
    id: String,
    name: String,
    location: GeoPoint,
    demand: f64,
    address: String,
    time_window: Option<TimeWindow>,
}

impl Stop {
    /// Creates a new stop.
    pub fn new(id: impl Into<String>, location: GeoPoint, demand: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            location,
            demand,
            address: String::new(),
            time_window: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the postal address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets a time window for this stop.
    pub fn with_time_window(mut self, tw: TimeWindow) -> Self {
        self.time_window = Some(tw);
        self
    }

    /// Stop ID.
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

    /// Quantity to deliver.
    pub fn demand(&self) -> f64 {
        self.demand
    }

    /// Postal address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Time window, if any.
    pub fn time_window(&self) -> Option<&TimeWindow> {
        self.time_window.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_new() {
        let s = Stop::new("s1", GeoPoint::new(10.0, 20.0).expect("valid"), 5.0);
        assert_eq!(s.id(), "s1");
        assert_eq!(s.location().lat(), 10.0);
        assert_eq!(s.location().lng(), 20.0);
        assert_eq!(s.demand(), 5.0);
        assert_eq!(s.name(), "");
        assert!(s.time_window().is_none());
    }

    #[test]
    fn test_stop_with_time_window() {
        let s = Stop::new("s1", GeoPoint::new(0.0, 0.0).expect("valid"), 1.0)
            .with_name("Corner shop")
            .with_address("2 High St")
            .with_time_window(TimeWindow::new("09:00", "17:00"));
        assert_eq!(s.name(), "Corner shop");
        assert_eq!(s.address(), "2 High St");
        assert_eq!(s.time_window().expect("has tw").start(), "09:00");
    }
}
