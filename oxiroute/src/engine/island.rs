use super::{EngineError, Phase};
use crate::operators::{capture_elites, crossover, mutate, restore_elites, Selector};
use crate::{best_index, DistanceProvider, FitnessEvaluator, Population, Route};

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A route together with its fitness score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Champion {
    pub route: Route,
    pub score: f64,
}

/// Operator settings shared by every island of a run.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Operators {
    pub selector: Selector,
    pub crossover_rate: f32,
    pub mutation_rate: f32,
    pub elitism: usize,
}

/// One independently evolving population, with
/// its own random generator and best-route record.
///
/// Stepping an island only touches the island itself,
/// so islands can be stepped concurrently.
#[derive(Debug)]
pub(crate) struct Island {
    index: usize,
    pub(super) population: Population,
    /// Scores of `population`, once evaluated.
    pub(super) scores: Vec<f64>,
    pub(super) champion: Option<Champion>,
    rng: StdRng,
}

impl Island {
    pub(crate) fn new(index: usize, population: Population, rng: StdRng) -> Island {
        Island {
            index,
            population,
            scores: vec![],
            champion: None,
            rng,
        }
    }

    pub(crate) fn population(&self) -> &Population {
        &self.population
    }

    pub(crate) fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub(crate) fn champion(&self) -> Option<&Champion> {
        self.champion.as_ref()
    }

    /// Runs one generation: evaluation, elite capture, selection,
    /// crossover, mutation, elite restoration, and finally
    /// re-evaluation to record the island's champion.
    pub(crate) fn step<D>(
        &mut self,
        evaluator: &FitnessEvaluator<'_, D>,
        operators: &Operators,
    ) -> Result<(), EngineError>
    where
        D: DistanceProvider + ?Sized,
    {
        let scores = self.evaluate(evaluator, &self.population)?;
        let elites = capture_elites(&self.population, &scores, operators.elitism);

        let selected = operators
            .selector
            .select(&self.population, &scores, &mut self.rng)
            .map_err(|source| EngineError::Domain {
                phase: Phase::Selection,
                population: self.index,
                source,
            })?;
        let mut offspring = crossover(selected, operators.crossover_rate, &mut self.rng);
        let mutated = mutate(&mut offspring, operators.mutation_rate, &mut self.rng);

        let mut scores = self.evaluate(evaluator, &offspring)?;
        let restored = restore_elites(&mut offspring, &mut scores, elites);
        trace!(
            population = self.index,
            mutated,
            elites = restored.len(),
            "stepped population"
        );

        self.population = offspring;
        self.scores = scores;
        self.update_champion();
        Ok(())
    }

    /// Records the best route of the current population.
    pub(super) fn update_champion(&mut self) {
        self.champion = best_index(&self.scores).map(|i| Champion {
            route: self.population.routes()[i].clone(),
            score: self.scores[i],
        });
    }

    fn evaluate<D>(
        &self,
        evaluator: &FitnessEvaluator<'_, D>,
        population: &Population,
    ) -> Result<Vec<f64>, EngineError>
    where
        D: DistanceProvider + ?Sized,
    {
        evaluator
            .evaluate_population(population)
            .map_err(|source| EngineError::Lookup {
                phase: Phase::Evaluation,
                population: self.index,
                source,
            })
    }
}
