use super::island::Island;
use crate::operators::{capture_elites, restore_elites};

use tracing::trace;

/// Ring migration: island `i` sends copies of its `count`
/// best routes to island `i + 1` (wrapping around), where
/// they overwrite the `count` worst routes.
///
/// Emigrants are all chosen before any island receives
/// migrants, so a route moves at most one hop per migration.
/// Taking `&mut` to every island makes this the one step of
/// a generation with access to more than one population.
pub(crate) fn migrate(islands: &mut [Island], count: usize) {
    let island_count = islands.len();
    if island_count < 2 {
        return;
    }
    let emigrants: Vec<_> = islands
        .iter()
        .map(|island| capture_elites(&island.population, &island.scores, count))
        .collect();

    for (source, migrants) in emigrants.into_iter().enumerate() {
        let target = &mut islands[(source + 1) % island_count];
        let replaced = restore_elites(&mut target.population, &mut target.scores, migrants);
        target.update_champion();
        trace!(
            source,
            target = (source + 1) % island_count,
            ?replaced,
            "migrated routes"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{catalog, line_distance};
    use crate::{FitnessEvaluator, Population, DEFAULT_BASELINE};
    use std::num::NonZeroUsize;

    fn islands(count: usize, size: usize) -> Vec<Island> {
        let (depot, destinations) = catalog(8);
        let mut master = crate::rng::master(Some(61));
        let evaluator = FitnessEvaluator::new(&line_distance, DEFAULT_BASELINE);
        (0..count)
            .map(|i| {
                let mut rng = crate::rng::derive(&mut master);
                let population = Population::random(
                    &depot,
                    &destinations,
                    NonZeroUsize::new(size).unwrap(),
                    &mut rng,
                );
                let mut island = Island::new(i, population, rng);
                island.scores = evaluator.evaluate_population(&island.population).unwrap();
                island.update_champion();
                island
            })
            .collect()
    }

    #[test]
    fn ring_exchange() {
        let mut islands = islands(3, 10);
        let champions: Vec<_> = islands
            .iter()
            .map(|i| i.champion().unwrap().clone())
            .collect();

        migrate(&mut islands, 1);

        for (i, island) in islands.iter().enumerate() {
            let sender = &champions[(i + 2) % 3];
            assert_eq!(island.population().len(), 10);
            assert_eq!(island.scores().len(), 10);
            assert!(island.population().iter().any(|r| r == &sender.route));
            assert!(island.champion().unwrap().score >= sender.score);
        }
    }

    #[test]
    fn several_migrants() {
        let mut islands = islands(2, 8);
        let evaluator = FitnessEvaluator::new(&line_distance, DEFAULT_BASELINE);
        let best_of_first = capture_elites(&islands[0].population, &islands[0].scores, 3);

        migrate(&mut islands, 3);

        for (route, score) in &best_of_first {
            assert!(islands[1].population().iter().any(|r| r == route));
            assert_eq!(evaluator.evaluate(route), Ok(*score));
        }
        assert_eq!(
            islands[1].scores(),
            evaluator
                .evaluate_population(islands[1].population())
                .unwrap()
        );
    }

    #[test]
    fn single_island_untouched() {
        let mut islands = islands(1, 5);
        let before = islands[0].population().clone();
        migrate(&mut islands, 2);
        assert_eq!(islands[0].population(), &before);
    }
}
