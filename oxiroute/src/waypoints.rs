use serde::{Deserialize, Serialize};

use std::fmt;

/// A location to be visited by a route.
///
/// The name doubles as the key under which
/// a [`DistanceProvider`] knows the location.
///
/// [`DistanceProvider`]: crate::DistanceProvider
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Waypoint {
    id: usize,
    name: String,
}

impl Waypoint {
    /// Creates a new waypoint.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::Waypoint;
    ///
    /// let depot = Waypoint::new(1, "Depot");
    /// assert_eq!(depot.id(), 1);
    /// assert_eq!(depot.name(), "Depot");
    /// ```
    pub fn new(id: usize, name: impl Into<String>) -> Waypoint {
        Waypoint {
            id,
            name: name.into(),
        }
    }

    /// Returns the waypoint's identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the waypoint's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A source of waypoints to be visited.
///
/// The first waypoint listed is the depot, at
/// which every route starts and ends.
pub trait WaypointCatalog {
    /// Returns all waypoints, depot first.
    fn list_waypoints(&self) -> Vec<Waypoint>;
}

impl WaypointCatalog for [Waypoint] {
    fn list_waypoints(&self) -> Vec<Waypoint> {
        self.to_vec()
    }
}

impl WaypointCatalog for Vec<Waypoint> {
    fn list_waypoints(&self) -> Vec<Waypoint> {
        self.clone()
    }
}

impl<C: WaypointCatalog + ?Sized> WaypointCatalog for &C {
    fn list_waypoints(&self) -> Vec<Waypoint> {
        (**self).list_waypoints()
    }
}
