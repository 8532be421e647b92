use super::DomainError;
use crate::Population;

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Parent selection methods, as named in configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMethod {
    /// Fitness-proportionate selection.
    Roulette,
    /// Best-of-k selection.
    Tournament,
}

/// A fully specified selection operator.
///
/// Selection builds the next generation's parent pool
/// from the current population, drawing exactly as many
/// routes as it holds. The input population is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    /// Each draw picks route `i` with probability
    /// `scores[i] / sum(scores)`, with replacement.
    Roulette,
    /// Each draw takes the best of `size` distinct,
    /// uniformly chosen routes.
    Tournament { size: usize },
}

impl Selector {
    /// Draws a new population of the same size as `population`.
    ///
    /// # Errors
    /// Returns a [`DomainError`] if `scores` doesn't match the
    /// population, if roulette selection meets a negative or
    /// non-finite score or an all-zero score set, or if the
    /// tournament is empty or larger than the population.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::{Population, Route, Selector, Waypoint};
    /// use std::sync::Arc;
    ///
    /// let depot = Arc::new(Waypoint::new(0, "Depot"));
    /// let stops: Vec<_> = (1..4).map(|i| Arc::new(Waypoint::new(i, format!("S{}", i)))).collect();
    /// let mut rng = rand::thread_rng();
    /// let population: Population = (0..3).map(|_| Route::random(&depot, &stops, &mut rng)).collect();
    ///
    /// let selected = Selector::Roulette
    ///     .select(&population, &[10.0, 0.0, 0.0], &mut rng)
    ///     .unwrap();
    /// assert!(selected.iter().all(|r| r == population.get(0).unwrap()));
    /// ```
    pub fn select<R: Rng + ?Sized>(
        &self,
        population: &Population,
        scores: &[f64],
        rng: &mut R,
    ) -> Result<Population, DomainError> {
        if scores.len() != population.len() {
            return Err(DomainError::ScoreCountMismatch {
                scores: scores.len(),
                population: population.len(),
            });
        }
        let picks = match *self {
            Selector::Roulette => roulette(scores, rng)?,
            Selector::Tournament { size } => tournament(scores, size, rng)?,
        };
        Ok(picks
            .into_iter()
            .map(|i| population.routes()[i].clone())
            .collect())
    }
}

/// Returns `scores.len()` indices drawn proportionally to their scores.
fn roulette<R: Rng + ?Sized>(scores: &[f64], rng: &mut R) -> Result<Vec<usize>, DomainError> {
    if let Some((index, &score)) = scores
        .iter()
        .enumerate()
        .find(|(_, s)| !s.is_finite() || **s < 0.0)
    {
        return Err(DomainError::InvalidRouletteScore { index, score });
    }
    let wheel = WeightedIndex::new(scores).map_err(|_| DomainError::DegenerateScores)?;
    Ok((0..scores.len()).map(|_| wheel.sample(rng)).collect())
}

/// Returns `scores.len()` tournament winners.
fn tournament<R: Rng + ?Sized>(
    scores: &[f64],
    size: usize,
    rng: &mut R,
) -> Result<Vec<usize>, DomainError> {
    if size == 0 || size > scores.len() {
        return Err(DomainError::InvalidTournamentSize {
            size,
            population: scores.len(),
        });
    }
    Ok((0..scores.len())
        .map(|_| {
            index::sample(rng, scores.len(), size)
                .into_iter()
                .fold(None, |winner: Option<usize>, i| match winner {
                    Some(w) if scores[w] >= scores[i] => Some(w),
                    _ => Some(i),
                })
                .unwrap_or_else(|| panic!("empty tournament"))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::catalog;
    use crate::Route;

    const TOLERANCE: f64 = 0.05;

    fn population(size: usize) -> Population {
        let (depot, destinations) = catalog(5);
        let mut rng = crate::rng::master(Some(11));
        (0..size)
            .map(|_| Route::random(&depot, &destinations, &mut rng))
            .collect()
    }

    #[test]
    fn roulette_degenerate_wheel() {
        let mut rng = crate::rng::master(Some(0));
        for _ in 0..100 {
            assert_eq!(roulette(&[10.0, 0.0, 0.0], &mut rng).unwrap(), [0, 0, 0]);
        }
    }

    #[test]
    fn roulette_proportions() {
        let mut rng = crate::rng::master(Some(1));
        let scores = [1.0, 3.0, 6.0];
        let mut counts = [0usize; 3];
        for _ in 0..2000 {
            for i in roulette(&scores, &mut rng).unwrap() {
                counts[i] += 1;
            }
        }
        let total = counts.iter().sum::<usize>() as f64;
        for (count, expected) in counts.iter().zip([0.1, 0.3, 0.6]) {
            assert!((*count as f64 / total - expected).abs() < TOLERANCE);
        }
    }

    #[test]
    fn roulette_rejects_negative_scores() {
        let mut rng = crate::rng::master(Some(2));
        assert_eq!(
            roulette(&[4.0, -1.0], &mut rng),
            Err(DomainError::InvalidRouletteScore {
                index: 1,
                score: -1.0
            })
        );
        assert_eq!(
            roulette(&[0.0, 0.0], &mut rng),
            Err(DomainError::DegenerateScores)
        );
    }

    #[test]
    fn full_tournament_always_picks_best() {
        let mut rng = crate::rng::master(Some(3));
        let scores = [4.0, 8.0, 1.0, 8.0, 2.0];
        // Ties go to whichever was drawn first.
        for winner in tournament(&scores, 5, &mut rng).unwrap() {
            assert!(winner == 1 || winner == 3);
        }
    }

    #[test]
    fn tournament_never_picks_worst() {
        let mut rng = crate::rng::master(Some(4));
        let scores = [5.0, 1.0, 3.0, 4.0];
        for _ in 0..200 {
            assert!(!tournament(&scores, 2, &mut rng).unwrap().contains(&1));
        }
    }

    #[test]
    fn select_keeps_size() {
        let population = population(7);
        let scores = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0];
        let mut rng = crate::rng::master(Some(5));
        for selector in [Selector::Roulette, Selector::Tournament { size: 3 }] {
            let selected = selector.select(&population, &scores, &mut rng).unwrap();
            assert_eq!(selected.len(), population.len());
            assert!(selected.iter().all(|r| population.iter().any(|p| p == r)));
        }
    }

    #[test]
    fn oversized_tournament() {
        let population = population(3);
        let mut rng = crate::rng::master(Some(6));
        assert_eq!(
            Selector::Tournament { size: 4 }.select(&population, &[1.0, 2.0, 3.0], &mut rng),
            Err(DomainError::InvalidTournamentSize {
                size: 4,
                population: 3
            })
        );
    }

    #[test]
    fn mismatched_scores() {
        let population = population(3);
        let mut rng = crate::rng::master(Some(7));
        assert!(matches!(
            Selector::Roulette.select(&population, &[1.0], &mut rng),
            Err(DomainError::ScoreCountMismatch { .. })
        ));
    }
}
