//! Wire types for the solve request and response.
//!
//! Field names follow the payloads exchanged with the planning front end:
//! depots are `warehouses`, stops are `stores`, vehicles are `trucks`.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::SolveError;
use crate::models::{Depot, GeoPoint, Route, Stop, TimeWindow, Vehicle};
use crate::solver::{Problem, SolverConfig};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename = "SolveRequest")]
pub struct SolveRequest {
    pub warehouses: Option<Vec<JsonDepot>>,
    pub stores: Option<Vec<JsonStop>>,
    pub trucks: Option<Vec<JsonVehicle>>,
    pub options: Option<JsonSolveOptions>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "Location")]
pub struct JsonLocation {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename = "Warehouse")]
pub struct JsonDepot {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub location: Option<JsonLocation>,
    #[serde(default)]
    pub capacity: f64,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "TimeWindow")]
pub struct JsonTimeWindow {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename = "Store", rename_all = "camelCase")]
pub struct JsonStop {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub location: Option<JsonLocation>,
    pub demand: f64,
    #[serde(default)]
    pub address: String,
    pub time_window: Option<JsonTimeWindow>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename = "Truck", rename_all = "camelCase")]
pub struct JsonVehicle {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub capacity: f64,
    pub speed: f64,
    pub warehouse_id: String,
}

/// Optional overrides of [`SolverConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "SolveOptions", deny_unknown_fields)]
pub struct JsonSolveOptions {
    /// 2-opt round budget.
    pub iterations: Option<usize>,
    /// Per-depot parallelism.
    pub parallel: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename = "Route", rename_all = "camelCase")]
pub struct JsonRoute {
    pub id: String,
    pub warehouse_id: String,
    pub truck_id: String,
    pub stores: Vec<String>,
    /// Kilometres, rounded to 2 decimals.
    pub distance: f64,
    /// Time units of the vehicle speed, rounded to 2 decimals.
    pub estimated_time: f64,
    pub created: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename = "SolveResponse")]
pub struct SolveResponse {
    pub routes: Vec<JsonRoute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "ErrorResponse")]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&SolveError> for ErrorResponse {
    fn from(err: &SolveError) -> Self {
        ErrorResponse {
            error: err.to_string(),
        }
    }
}

fn parse_location(
    kind: &'static str,
    id: &str,
    location: Option<JsonLocation>,
) -> Result<GeoPoint, SolveError> {
    let missing = || SolveError::MissingLocation {
        kind,
        id: id.to_owned(),
    };
    let location = location.ok_or_else(missing)?;
    let (Some(lat), Some(lng)) = (location.lat, location.lng) else {
        return Err(missing());
    };
    GeoPoint::new(lat, lng).ok_or_else(|| SolveError::InvalidCoordinates {
        kind,
        id: id.to_owned(),
        lat,
        lng,
    })
}

impl TryFrom<JsonDepot> for Depot {
    type Error = SolveError;

    fn try_from(value: JsonDepot) -> Result<Self, Self::Error> {
        let location = parse_location("warehouse", &value.id, value.location)?;
        Ok(Depot::new(value.id, location)
            .with_name(value.name)
            .with_capacity(value.capacity)
            .with_address(value.address))
    }
}

impl TryFrom<JsonStop> for Stop {
    type Error = SolveError;

    fn try_from(value: JsonStop) -> Result<Self, Self::Error> {
        let location = parse_location("store", &value.id, value.location)?;
        let mut stop = Stop::new(value.id, location, value.demand)
            .with_name(value.name)
            .with_address(value.address);
        if let Some(tw) = value.time_window {
            stop = stop.with_time_window(TimeWindow::new(tw.start, tw.end));
        }
        Ok(stop)
    }
}

impl From<JsonVehicle> for Vehicle {
    fn from(value: JsonVehicle) -> Self {
        Vehicle::new(value.id, value.capacity, value.speed, value.warehouse_id).with_name(value.name)
    }
}

impl JsonSolveOptions {
    /// Applies the overrides on top of `config`.
    pub fn apply(&self, mut config: SolverConfig) -> SolverConfig {
        if let Some(iterations) = self.iterations {
            config = config.with_max_improvement_rounds(iterations);
        }
        if let Some(parallel) = self.parallel {
            config = config.with_parallel(parallel);
        }
        config
    }
}

impl SolveRequest {
    /// Validates the request into a problem and the effective configuration.
    pub fn into_problem(self, base: SolverConfig) -> Result<(Problem, SolverConfig), SolveError> {
        let warehouses = self.warehouses.ok_or(SolveError::MissingField("warehouses"))?;
        let stores = self.stores.ok_or(SolveError::MissingField("stores"))?;
        let trucks = self.trucks.ok_or(SolveError::MissingField("trucks"))?;

        let depots = warehouses
            .into_iter()
            .map(Depot::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let stops = stores
            .into_iter()
            .map(Stop::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let vehicles = trucks.into_iter().map(Vehicle::from).collect();

        let config = match &self.options {
            Some(options) => options.apply(base),
            None => base,
        };
        Ok((Problem::new(depots, stops, vehicles)?, config))
    }
}

/// Rounds to 2 decimals for the wire.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl From<&Route> for JsonRoute {
    fn from(route: &Route) -> Self {
        JsonRoute {
            id: route.id().to_owned(),
            warehouse_id: route.depot_id().to_owned(),
            truck_id: route.vehicle_id().to_owned(),
            stores: route.stop_ids().to_vec(),
            distance: round2(route.total_distance()),
            estimated_time: round2(route.estimated_duration()),
            created: route.created(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_request() {
        let body = r#"{
            "warehouses": [{"id": "w1", "name": "Main", "location": {"lat": 1.5, "lng": 2.5}, "capacity": 900, "address": "A"}],
            "stores": [{"id": "s1", "name": "Shop", "location": {"lat": 1.0, "lng": 2.0}, "demand": 12, "address": "B",
                        "timeWindow": {"start": "08:00", "end": "10:00"}}],
            "trucks": [{"id": "t1", "name": "T", "capacity": 100, "speed": 40, "warehouseId": "w1"}]
        }"#;
        let request: SolveRequest = serde_json::from_str(body).expect("valid json");
        let (problem, config) = request
            .into_problem(SolverConfig::default())
            .expect("valid request");
        assert_eq!(config, SolverConfig::default());
        assert_eq!(problem.depots()[0].capacity(), 900.0);
        let stop = &problem.stops()[0];
        assert_eq!(stop.demand(), 12.0);
        assert_eq!(stop.time_window().expect("has tw").end(), "10:00");
        assert_eq!(problem.vehicles()[0].depot_id(), "w1");
    }

    #[test]
    fn test_missing_collection() {
        let request: SolveRequest =
            serde_json::from_str(r#"{"warehouses": [], "stores": []}"#).expect("valid json");
        let err = request.into_problem(SolverConfig::default()).unwrap_err();
        assert!(matches!(err, SolveError::MissingField("trucks")));
    }

    #[test]
    fn test_missing_coordinates() {
        let body = r#"{
            "warehouses": [{"id": "w1", "location": {"lat": 1.0}}],
            "stores": [], "trucks": []
        }"#;
        let request: SolveRequest = serde_json::from_str(body).expect("valid json");
        let err = request.into_problem(SolverConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "warehouse w1 has no location");
    }

    #[test]
    fn test_out_of_range_coordinates() {
        let body = r#"{
            "warehouses": [],
            "stores": [{"id": "s1", "location": {"lat": 100.0, "lng": 0.0}, "demand": 1}],
            "trucks": []
        }"#;
        let request: SolveRequest = serde_json::from_str(body).expect("valid json");
        let err = request.into_problem(SolverConfig::default()).unwrap_err();
        assert!(matches!(err, SolveError::InvalidCoordinates { kind: "store", .. }));
    }

    #[test]
    fn test_options_override() {
        let body = r#"{"warehouses": [], "stores": [], "trucks": [],
                       "options": {"iterations": 7, "parallel": false}}"#;
        let request: SolveRequest = serde_json::from_str(body).expect("valid json");
        let (_, config) = request
            .into_problem(SolverConfig::default())
            .expect("valid request");
        assert_eq!(config.max_improvement_rounds, 7);
        assert!(!config.parallel);
    }

    #[test]
    fn test_route_serialization() {
        let created = Timestamp::from_millisecond(0).expect("valid");
        let mut route = Route::new("route_1_0", "w1", "t1", vec!["s1".into()], created);
        route.set_total_distance(222.38985328911747);
        route.set_estimated_duration(4.447797065782349);
        let json = serde_json::to_value(JsonRoute::from(&route)).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "id": "route_1_0",
                "warehouseId": "w1",
                "truckId": "t1",
                "stores": ["s1"],
                "distance": 222.39,
                "estimatedTime": 4.45,
                "created": "1970-01-01T00:00:00Z"
            })
        );
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.235_1), 1.24);
        assert_eq!(round2(0.0), 0.0);
    }
}
