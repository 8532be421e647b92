use crate::Waypoint;

use ahash::AHashSet;
use rand::prelude::{Rng, SliceRandom};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::sync::Arc;

/// A candidate tour: every destination visited exactly
/// once, starting and ending at the depot.
///
/// Waypoints are shared between routes, so cloning
/// a route only clones the sequence of handles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RouteData")]
pub struct Route {
    waypoints: Vec<Arc<Waypoint>>,
}

/// Serialized form of a [`Route`], checked on the way in.
#[derive(Deserialize)]
struct RouteData {
    waypoints: Vec<Arc<Waypoint>>,
}

/// An error type indicating a waypoint sequence
/// that isn't anchored at a depot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("a route needs at least one destination between two visits to the depot, and no other depot visits")]
pub struct InvalidRoute;

impl TryFrom<RouteData> for Route {
    type Error = InvalidRoute;

    fn try_from(data: RouteData) -> Result<Route, InvalidRoute> {
        Route::new(data.waypoints).ok_or(InvalidRoute)
    }
}

impl Route {
    /// Creates a route from a full waypoint sequence.
    ///
    /// Returns `None` if the sequence has fewer than
    /// three waypoints, doesn't start and end at the
    /// same waypoint, or visits that waypoint in between.
    /// Whether every destination appears
    /// exactly once can be checked with [`Route::is_tour_of`].
    ///
    /// # Examples
    /// ```
    /// use oxiroute::{Route, Waypoint};
    /// use std::sync::Arc;
    ///
    /// let depot = Arc::new(Waypoint::new(0, "Depot"));
    /// let market = Arc::new(Waypoint::new(1, "Market"));
    ///
    /// assert!(Route::new(vec![depot.clone(), market.clone(), depot.clone()]).is_some());
    /// assert!(Route::new(vec![depot, market]).is_none());
    /// ```
    pub fn new(waypoints: Vec<Arc<Waypoint>>) -> Option<Route> {
        match (waypoints.first(), waypoints.last()) {
            (Some(first), Some(last))
                if waypoints.len() >= 3
                    && first == last
                    && !waypoints[1..waypoints.len() - 1].contains(first) =>
            {
                Some(Route { waypoints })
            }
            _ => None,
        }
    }

    /// Returns a route visiting `destinations` in a
    /// uniformly random order.
    pub fn random<R: Rng + ?Sized>(
        depot: &Arc<Waypoint>,
        destinations: &[Arc<Waypoint>],
        rng: &mut R,
    ) -> Route {
        let mut interior = destinations.to_vec();
        interior.shuffle(rng);
        let mut waypoints = Vec::with_capacity(destinations.len() + 2);
        waypoints.push(depot.clone());
        waypoints.extend(interior);
        waypoints.push(depot.clone());
        Route { waypoints }
    }

    /// Returns the full waypoint sequence, depot at both ends.
    pub fn waypoints(&self) -> &[Arc<Waypoint>] {
        &self.waypoints
    }

    /// Returns the number of stops, counting the depot twice.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Routes always hold at least three stops.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the depot.
    pub fn depot(&self) -> &Waypoint {
        &self.waypoints[0]
    }

    /// Returns the destinations in visiting order.
    pub fn interior(&self) -> &[Arc<Waypoint>] {
        &self.waypoints[1..self.waypoints.len() - 1]
    }

    /// Returns an iterator over consecutive stop pairs,
    /// including the final leg back to the depot.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::{Route, Waypoint};
    /// use std::sync::Arc;
    ///
    /// let depot = Arc::new(Waypoint::new(0, "Depot"));
    /// let market = Arc::new(Waypoint::new(1, "Market"));
    /// let route = Route::new(vec![depot.clone(), market, depot]).unwrap();
    ///
    /// let legs: Vec<_> = route.legs().map(|(a, b)| (a.name(), b.name())).collect();
    /// assert_eq!(legs, [("Depot", "Market"), ("Market", "Depot")]);
    /// ```
    pub fn legs(&self) -> impl Iterator<Item = (&Waypoint, &Waypoint)> {
        self.waypoints
            .windows(2)
            .map(|pair| (pair[0].as_ref(), pair[1].as_ref()))
    }

    /// Returns whether the route starts and ends at `depot`,
    /// and visits each of `destinations` exactly once in between.
    pub fn is_tour_of(&self, depot: &Waypoint, destinations: &[Arc<Waypoint>]) -> bool {
        if self.len() != destinations.len() + 2
            || self.depot() != depot
            || self.waypoints[self.len() - 1].as_ref() != depot
        {
            return false;
        }
        let expected: AHashSet<usize> = destinations.iter().map(|w| w.id()).collect();
        let mut seen = AHashSet::with_capacity(expected.len());
        self.interior()
            .iter()
            .all(|w| expected.contains(&w.id()) && seen.insert(w.id()))
    }

    /// Exchanges the stops at two interior positions.
    ///
    /// # Panics
    /// Panics if either position is a depot slot.
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        let last = self.waypoints.len() - 1;
        assert!(
            (1..last).contains(&a) && (1..last).contains(&b),
            "attempted to move the depot ({} <-> {})",
            a,
            b
        );
        self.waypoints.swap(a, b);
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.waypoints.iter().map(|w| w.name()).collect();
        write!(f, "{}", names.join(" -> "))
    }
}
