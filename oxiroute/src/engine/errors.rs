use super::EngineState;
use crate::{DomainError, LookupError};

use std::fmt;

/// An error type indicating invalid engine parameters
/// or an unusable waypoint catalog.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("{name} must be in [0, 1], got {rate}")]
    RateOutOfRange { name: &'static str, rate: f32 },
    #[error("elitism of {elitism} leaves no room in a population of {population_size}")]
    ElitismTooLarge {
        elitism: usize,
        population_size: usize,
    },
    #[error("tournament selection requires a tournament size")]
    MissingTournamentSize,
    #[error("tournament size must be in [2, {population_size}], got {size}")]
    TournamentSizeOutOfRange { size: usize, population_size: usize },
    #[error("at least one population is required")]
    NoPopulations,
    #[error("migration interval must be positive")]
    ZeroMigrationInterval,
    #[error("migration count must be in [1, {population_size}), got {count}")]
    MigrationCountOutOfRange { count: usize, population_size: usize },
    #[error("fitness baseline must be finite, got {0}")]
    InvalidBaseline(f64),
    #[error("catalog must hold a depot and at least one destination, got {0} waypoints")]
    CatalogTooSmall(usize),
    #[error("waypoint id {0} appears more than once in the catalog")]
    DuplicateWaypointId(usize),
    #[error("waypoint name `{0}` appears more than once in the catalog")]
    DuplicateWaypointName(String),
}

/// The phase of a generation in which an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Evaluation,
    Selection,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Evaluation => write!(f, "fitness evaluation"),
            Self::Selection => write!(f, "selection"),
        }
    }
}

/// Errors surfaced by [`EvolutionEngine`] runs.
///
/// None of these are recovered from: a failed run
/// returns no result.
///
/// [`EvolutionEngine`]: crate::EvolutionEngine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("{phase} failed in population {population}: {source}")]
    Lookup {
        phase: Phase,
        population: usize,
        #[source]
        source: LookupError,
    },
    #[error("{phase} failed in population {population}: {source}")]
    Domain {
        phase: Phase,
        population: usize,
        #[source]
        source: DomainError,
    },
    #[error("cannot run an engine in the {0:?} state; reset it first")]
    InvalidState(EngineState),
    #[error("failed to start population workers: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
