use super::island::{Champion, Island};
use super::EngineState;
use crate::Population;

/// A view of the engine after a completed generation,
/// handed to the update callback.
pub struct GenerationReport<'a> {
    pub(super) generation: usize,
    pub(super) islands: &'a [Island],
    pub(super) global_best: &'a Champion,
}

impl<'a> GenerationReport<'a> {
    /// Returns the generation just completed, counting from 1.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the best route found so far across all populations.
    pub fn global_best(&self) -> &'a Champion {
        self.global_best
    }

    /// Returns each population's current best route.
    pub fn champions(&self) -> impl Iterator<Item = &'a Champion> {
        let islands: &'a [Island] = self.islands;
        islands.iter().filter_map(Island::champion)
    }

    /// Returns each population's current best score.
    pub fn best_scores(&self) -> Vec<f64> {
        self.champions().map(|c| c.score).collect()
    }

    /// Returns each population along with the scores of its routes.
    pub fn populations(&self) -> impl Iterator<Item = (&'a Population, &'a [f64])> {
        let islands: &'a [Island] = self.islands;
        islands
            .iter()
            .map(|island| (island.population(), island.scores()))
    }

    /// Returns the number of populations.
    pub fn population_count(&self) -> usize {
        self.islands.len()
    }
}

/// The result of a run that wasn't aborted by an error.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    /// Either [`EngineState::Completed`] or [`EngineState::Stopped`].
    pub status: EngineState,
    /// Number of generations completed.
    pub generations: usize,
    /// The best route found, or `None` if the run was
    /// stopped before its first generation.
    pub best: Option<Champion>,
}
