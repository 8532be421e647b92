//! A genetic algorithm for depot-anchored Traveling Salesman routes.
//!
//! Candidate routes visit every waypoint of a catalog exactly once,
//! starting and ending at the depot. Populations of routes evolve
//! through roulette or tournament selection, cycle crossover,
//! swap mutation and elitism. Several populations may evolve side by
//! side on a worker pool, periodically exchanging their best routes.
//!
//! Distances are never computed by the engine: they are looked up
//! through a user-supplied [`DistanceProvider`]. A table-backed provider
//! and catalog is supplied by the [`OxiRoute-Matrix`](https://crates.io/crates/oxiroute-matrix) crate.
//!
//! # Example usage: A small delivery round, using `OxiRoute-Matrix`
//! ```
//! use oxiroute::{EngineConfig, EvolutionEngine, SelectionMethod};
//! use oxiroute_matrix::RouteTable;
//! use std::num::NonZeroUsize;
//!
//! fn main() {
//!     let mut table = RouteTable::symmetric(["Depot", "Bakery", "Market", "Harbour", "Mill"]);
//!     for (from, to, distance) in [
//!         ("Depot", "Bakery", 2.0),
//!         ("Depot", "Market", 4.0),
//!         ("Depot", "Harbour", 7.0),
//!         ("Depot", "Mill", 3.0),
//!         ("Bakery", "Market", 3.0),
//!         ("Bakery", "Harbour", 6.0),
//!         ("Bakery", "Mill", 4.0),
//!         ("Market", "Harbour", 2.0),
//!         ("Market", "Mill", 5.0),
//!         ("Harbour", "Mill", 5.0),
//!     ] {
//!         table.add_leg(from, to, distance);
//!     }
//!     let matrix = table.to_matrix().unwrap();
//!
//!     let config = EngineConfig {
//!         population_size: NonZeroUsize::new(30).unwrap(),
//!         crossover_rate: 0.9,
//!         mutation_rate: 0.1,
//!         elitism: 2,
//!         selection: SelectionMethod::Tournament,
//!         tournament_size: Some(3),
//!         populations: 3,
//!         migration_interval: 5,
//!         migration_count: 1,
//!         ..EngineConfig::zero()
//!     };
//!
//!     let mut engine = EvolutionEngine::new(config, &table, matrix).unwrap();
//!     let outcome = engine
//!         .run_with_callback(40, |report| {
//!             println!("generation {}: {:?}", report.generation(), report.best_scores());
//!         })
//!         .unwrap();
//!
//!     let best = outcome.best.unwrap();
//!     println!(
//!         "Best route: {} ({})",
//!         best.route,
//!         engine.evaluator().distance_of(best.score)
//!     );
//! }
//! ```

mod distances;
mod engine;
mod fitness;
pub mod logging;
mod operators;
mod populations;
mod rng;
mod routes;
#[cfg(test)]
mod testing;
mod waypoints;

pub use distances::{DistanceProvider, LookupError};
pub use engine::*;
pub use fitness::{best_index, FitnessEvaluator, DEFAULT_BASELINE};
pub use operators::*;
pub use populations::Population;
pub use routes::{InvalidRoute, Route};
pub use waypoints::{Waypoint, WaypointCatalog};
