mod errors;

pub use errors::TableError;

use crate::DistanceMatrix;
use oxiroute::{Waypoint, WaypointCatalog};

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A single directed (or, in symmetric tables,
/// undirected) leg between two waypoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// A list of waypoints and the distances between them.
///
/// The first waypoint is the depot. Waypoint ids are
/// assigned by position in the list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteTable {
    /// Whether each leg also gives the distance
    /// of the reverse leg.
    pub symmetric: bool,
    pub waypoints: Vec<String>,
    pub legs: Vec<Leg>,
}

impl RouteTable {
    /// Returns a table listing `waypoints`, with no legs.
    pub fn new<S: Into<String>>(
        symmetric: bool,
        waypoints: impl IntoIterator<Item = S>,
    ) -> RouteTable {
        RouteTable {
            symmetric,
            waypoints: waypoints.into_iter().map(Into::into).collect(),
            legs: vec![],
        }
    }

    /// Returns a symmetric table listing `waypoints`, with no legs.
    pub fn symmetric<S: Into<String>>(waypoints: impl IntoIterator<Item = S>) -> RouteTable {
        RouteTable::new(true, waypoints)
    }

    /// Returns an asymmetric table listing `waypoints`, with no legs.
    pub fn asymmetric<S: Into<String>>(waypoints: impl IntoIterator<Item = S>) -> RouteTable {
        RouteTable::new(false, waypoints)
    }

    /// Appends a leg to the table. Later legs
    /// override earlier ones between the same waypoints.
    pub fn add_leg(&mut self, from: impl Into<String>, to: impl Into<String>, distance: f64) {
        self.legs.push(Leg {
            from: from.into(),
            to: to.into(),
            distance,
        });
    }

    /// Checks the table and indexes its legs.
    ///
    /// # Errors
    /// Returns a [`TableError`] if a waypoint is listed twice,
    /// a leg refers to an unlisted waypoint or has a negative
    /// or non-finite distance, or any two listed waypoints
    /// have no leg between them.
    ///
    /// # Examples
    /// ```
    /// use oxiroute_matrix::{RouteTable, TableError};
    ///
    /// let mut table = RouteTable::asymmetric(["Depot", "Mill"]);
    /// table.add_leg("Depot", "Mill", 3.0);
    /// assert_eq!(
    ///     table.to_matrix(),
    ///     Err(TableError::MissingLeg { from: "Mill".into(), to: "Depot".into() })
    /// );
    ///
    /// table.add_leg("Mill", "Depot", 4.0);
    /// assert!(table.to_matrix().is_ok());
    /// ```
    pub fn to_matrix(&self) -> Result<DistanceMatrix, TableError> {
        let mut names = AHashSet::with_capacity(self.waypoints.len());
        for name in &self.waypoints {
            if !names.insert(name.as_str()) {
                return Err(TableError::DuplicateWaypoint(name.clone()));
            }
        }

        let mut matrix = DistanceMatrix::new(self.symmetric);
        for leg in &self.legs {
            if let Some(unknown) = [&leg.from, &leg.to]
                .into_iter()
                .find(|name| !names.contains(name.as_str()))
            {
                return Err(TableError::UnknownWaypoint {
                    from: leg.from.clone(),
                    to: leg.to.clone(),
                    name: unknown.clone(),
                });
            }
            if !leg.distance.is_finite() || leg.distance < 0.0 {
                return Err(TableError::InvalidDistance {
                    from: leg.from.clone(),
                    to: leg.to.clone(),
                    distance: leg.distance,
                });
            }
            matrix.insert(&leg.from, &leg.to, leg.distance);
        }

        for from in &self.waypoints {
            for to in &self.waypoints {
                if matrix.get(from, to).is_none() {
                    return Err(TableError::MissingLeg {
                        from: from.clone(),
                        to: to.clone(),
                    });
                }
            }
        }
        Ok(matrix)
    }
}

impl WaypointCatalog for RouteTable {
    fn list_waypoints(&self) -> Vec<Waypoint> {
        self.waypoints
            .iter()
            .enumerate()
            .map(|(id, name)| Waypoint::new(id, name.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxiroute::DistanceProvider;

    const TABLE: &str = r#"(
        symmetric: false,
        waypoints: ["Depot", "Bakery", "Market"],
        legs: [
            (from: "Depot", to: "Bakery", distance: 2.0),
            (from: "Bakery", to: "Depot", distance: 2.5),
            (from: "Depot", to: "Market", distance: 4.0),
            (from: "Market", to: "Depot", distance: 4.0),
            (from: "Bakery", to: "Market", distance: 3.0),
            (from: "Market", to: "Bakery", distance: 1.0),
        ],
    )"#;

    #[test]
    fn ron_table() {
        let table: RouteTable = ron::from_str(TABLE).unwrap();
        let matrix = table.to_matrix().unwrap();
        assert!(!matrix.is_symmetric());
        assert_eq!(matrix.distance("Bakery", "Depot"), Ok(2.5));
        assert_eq!(matrix.distance("Market", "Bakery"), Ok(1.0));

        let waypoints = table.list_waypoints();
        assert_eq!(waypoints.len(), 3);
        assert_eq!(waypoints[2].id(), 2);
        assert_eq!(waypoints[2].name(), "Market");
    }

    #[test]
    fn json_table() {
        let table: RouteTable = ron::from_str(TABLE).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(serde_json::from_str::<RouteTable>(&json).unwrap(), table);
    }

    #[test]
    fn duplicate_waypoint() {
        let table = RouteTable::symmetric(["Depot", "Mill", "Depot"]);
        assert_eq!(
            table.to_matrix(),
            Err(TableError::DuplicateWaypoint("Depot".into()))
        );
    }

    #[test]
    fn unknown_waypoint() {
        let mut table = RouteTable::symmetric(["Depot", "Mill"]);
        table.add_leg("Depot", "Harbour", 1.0);
        assert!(matches!(
            table.to_matrix(),
            Err(TableError::UnknownWaypoint { name, .. }) if name == "Harbour"
        ));
    }

    #[test]
    fn invalid_distance() {
        for distance in [-1.0, f64::NAN, f64::INFINITY] {
            let mut table = RouteTable::symmetric(["Depot", "Mill"]);
            table.add_leg("Depot", "Mill", distance);
            assert!(matches!(
                table.to_matrix(),
                Err(TableError::InvalidDistance { .. })
            ));
        }
    }

    #[test]
    fn symmetric_completeness() {
        let mut table = RouteTable::symmetric(["Depot", "Mill", "Harbour"]);
        table.add_leg("Depot", "Mill", 1.0);
        table.add_leg("Harbour", "Depot", 2.0);
        assert!(matches!(
            table.to_matrix(),
            Err(TableError::MissingLeg { .. })
        ));

        table.add_leg("Mill", "Harbour", 3.0);
        let matrix = table.to_matrix().unwrap();
        assert_eq!(matrix.distance("Harbour", "Mill"), Ok(3.0));
    }
}
