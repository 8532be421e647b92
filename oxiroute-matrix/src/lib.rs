//! # OxiRoute-Matrix
//! A table-backed implementation of the [`OxiRoute` crate](https://crates.io/crates/oxiroute)'s
//! `DistanceProvider` and `WaypointCatalog` traits.
//!
//! Provides a serializable [`RouteTable`], listing waypoint names and the
//! distances of the legs between them, which can be validated into a
//! [`DistanceMatrix`] for fast lookups during evolution.
//!
//! # Example usage: Loading a table from RON
//! ```
//! use oxiroute::{DistanceProvider, WaypointCatalog};
//! use oxiroute_matrix::RouteTable;
//!
//! let table: RouteTable = ron::from_str(
//!     r#"(
//!         symmetric: true,
//!         waypoints: ["Depot", "Bakery", "Market"],
//!         legs: [
//!             (from: "Depot", to: "Bakery", distance: 2.0),
//!             (from: "Depot", to: "Market", distance: 4.0),
//!             (from: "Bakery", to: "Market", distance: 3.0),
//!         ],
//!     )"#,
//! )
//! .unwrap();
//!
//! let matrix = table.to_matrix().unwrap();
//! assert_eq!(matrix.distance("Market", "Bakery"), Ok(3.0));
//! assert_eq!(table.list_waypoints()[0].name(), "Depot");
//! ```

mod matrix;
mod tables;

pub use matrix::DistanceMatrix;
pub use tables::{Leg, RouteTable, TableError};
