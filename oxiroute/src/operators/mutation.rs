use crate::rng::Bernoulli;
use crate::{Population, Route};

use rand::seq::index;
use rand::Rng;

/// Exchanges two distinct, uniformly chosen destinations
/// of a route. Returns the swapped positions, or `None`
/// if the route has fewer than two destinations.
pub fn swap_mutation<R: Rng + ?Sized>(route: &mut Route, rng: &mut R) -> Option<(usize, usize)> {
    let destinations = route.len() - 2;
    if destinations < 2 {
        return None;
    }
    let picks = index::sample(rng, destinations, 2);
    let (a, b) = (picks.index(0) + 1, picks.index(1) + 1);
    route.swap(a, b);
    Some((a, b))
}

/// Applies at most one swap mutation to each route,
/// with probability `rate`. Returns the number of
/// routes mutated.
pub fn mutate<R: Rng + ?Sized>(population: &mut Population, rate: f32, rng: &mut R) -> usize {
    let mut mutated = 0;
    for route in population.iter_mut() {
        if rng.chance(rate) && swap_mutation(route, rng).is_some() {
            mutated += 1;
        }
    }
    mutated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::catalog;

    fn differing_positions(a: &Route, b: &Route) -> Vec<usize> {
        (0..a.len())
            .filter(|&i| a.waypoints()[i] != b.waypoints()[i])
            .collect()
    }

    #[test]
    fn one_swap_per_route() {
        let (depot, destinations) = catalog(8);
        let mut rng = crate::rng::master(Some(31));
        let original: Population = (0..30)
            .map(|_| Route::random(&depot, &destinations, &mut rng))
            .collect();
        let mut population = original.clone();

        assert_eq!(mutate(&mut population, 1.0, &mut rng), 30);
        for (before, after) in original.iter().zip(population.iter()) {
            assert_eq!(after.len(), before.len());
            assert_eq!(differing_positions(before, after).len(), 2);
            assert!(after.is_tour_of(&depot, &destinations));
        }
    }

    #[test]
    fn zero_rate_is_identity() {
        let (depot, destinations) = catalog(8);
        let mut rng = crate::rng::master(Some(32));
        let original: Population = (0..10)
            .map(|_| Route::random(&depot, &destinations, &mut rng))
            .collect();
        let mut population = original.clone();
        assert_eq!(mutate(&mut population, 0.0, &mut rng), 0);
        assert_eq!(population, original);
    }

    #[test]
    fn depot_never_moves() {
        let (depot, destinations) = catalog(2);
        let mut rng = crate::rng::master(Some(33));
        let mut route = Route::random(&depot, &destinations, &mut rng);
        for _ in 0..100 {
            let (a, b) = swap_mutation(&mut route, &mut rng).unwrap();
            assert_eq!((a.min(b), a.max(b)), (1, 2));
        }
    }

    #[test]
    fn single_destination_is_left_alone() {
        let (depot, destinations) = catalog(1);
        let mut rng = crate::rng::master(Some(34));
        let mut route = Route::random(&depot, &destinations, &mut rng);
        assert_eq!(swap_mutation(&mut route, &mut rng), None);
    }
}
