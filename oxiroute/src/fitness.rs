//! Fitness scores are transformed route distances:
//! `score = baseline - total distance`, so that higher
//! is better. The baseline should exceed any realistic
//! route distance, or roulette selection will fail.
use crate::{DistanceProvider, LookupError, Population, Route};

/// Default fitness baseline.
pub const DEFAULT_BASELINE: f64 = 1000.0;

/// Scores routes using a [`DistanceProvider`].
pub struct FitnessEvaluator<'d, D: ?Sized> {
    provider: &'d D,
    baseline: f64,
}

impl<'d, D: ?Sized> Clone for FitnessEvaluator<'d, D> {
    fn clone(&self) -> Self {
        FitnessEvaluator {
            provider: self.provider,
            baseline: self.baseline,
        }
    }
}

impl<'d, D: DistanceProvider + ?Sized> FitnessEvaluator<'d, D> {
    /// Creates an evaluator scoring routes against `baseline`.
    pub fn new(provider: &'d D, baseline: f64) -> FitnessEvaluator<'d, D> {
        FitnessEvaluator { provider, baseline }
    }

    /// Returns the fitness baseline.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Returns the total distance of a route, closing leg included.
    ///
    /// # Errors
    /// Propagates the provider's [`LookupError`] for the first
    /// unresolvable leg.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::{FitnessEvaluator, LookupError, Route, Waypoint};
    /// use std::sync::Arc;
    ///
    /// fn unit(_: &str, _: &str) -> Result<f64, LookupError> {
    ///     Ok(1.0)
    /// }
    ///
    /// let depot = Arc::new(Waypoint::new(0, "Depot"));
    /// let market = Arc::new(Waypoint::new(1, "Market"));
    /// let route = Route::new(vec![depot.clone(), market, depot]).unwrap();
    ///
    /// let evaluator = FitnessEvaluator::new(&unit, 100.0);
    /// assert_eq!(evaluator.route_distance(&route), Ok(2.0));
    /// assert_eq!(evaluator.evaluate(&route), Ok(98.0));
    /// ```
    pub fn route_distance(&self, route: &Route) -> Result<f64, LookupError> {
        route
            .legs()
            .map(|(from, to)| self.provider.distance(from.name(), to.name()))
            .sum()
    }

    /// Returns the fitness score of a route.
    pub fn evaluate(&self, route: &Route) -> Result<f64, LookupError> {
        Ok(self.baseline - self.route_distance(route)?)
    }

    /// Returns the score of every route in the population,
    /// in population order.
    pub fn evaluate_population(&self, population: &Population) -> Result<Vec<f64>, LookupError> {
        population.iter().map(|route| self.evaluate(route)).collect()
    }

    /// Converts a score back into a route distance.
    pub fn distance_of(&self, score: f64) -> f64 {
        self.baseline - score
    }
}

/// Returns the index of the highest score,
/// the first one in case of ties.
///
/// # Examples
/// ```
/// assert_eq!(oxiroute::best_index(&[3.0, 7.0, 1.0, 7.0]), Some(1));
/// assert_eq!(oxiroute::best_index(&[]), None);
/// ```
pub fn best_index(scores: &[f64]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &score)| match best {
            Some((_, top)) if top >= score => best,
            _ => Some((i, score)),
        })
        .map(|(i, _)| i)
}
