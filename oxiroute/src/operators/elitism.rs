use super::{rank_ascending, rank_descending};
use crate::{Population, Route};

/// Returns copies of the `count` best routes and their
/// scores, best first. Ties go to the earlier route.
pub fn capture_elites(population: &Population, scores: &[f64], count: usize) -> Vec<(Route, f64)> {
    rank_descending(scores)
        .into_iter()
        .take(count)
        .map(|i| (population.routes()[i].clone(), scores[i]))
        .collect()
}

/// Overwrites the lowest-scoring routes of `population`
/// with `elites`, in place, and updates `scores` to match.
/// Returns the overwritten positions.
///
/// The worst route receives the best elite.
pub fn restore_elites(
    population: &mut Population,
    scores: &mut [f64],
    elites: Vec<(Route, f64)>,
) -> Vec<usize> {
    let worst = rank_ascending(scores);
    worst
        .into_iter()
        .zip(elites)
        .map(|(i, (route, score))| {
            population.replace(i, route);
            scores[i] = score;
            i
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::catalog;

    fn population(size: usize, seed: u64) -> Population {
        let (depot, destinations) = catalog(6);
        let mut rng = crate::rng::master(Some(seed));
        (0..size)
            .map(|_| Route::random(&depot, &destinations, &mut rng))
            .collect()
    }

    #[test]
    fn capture_best_first() {
        let population = population(5, 41);
        let scores = [3.0, 8.0, 1.0, 8.0, 5.0];
        let elites = capture_elites(&population, &scores, 3);
        let picked: Vec<_> = elites.iter().map(|(_, s)| *s).collect();
        assert_eq!(picked, [8.0, 8.0, 5.0]);
        assert_eq!(&elites[0].0, population.get(1).unwrap());
        assert_eq!(&elites[1].0, population.get(3).unwrap());
    }

    #[test]
    fn restore_overwrites_worst() {
        let before = population(4, 42);
        let elites = capture_elites(&before, &[9.0, 7.0, 1.0, 2.0], 2);

        let mut after = population(4, 43);
        let mut scores = vec![4.0, 0.5, 6.0, 0.1];
        let positions = restore_elites(&mut after, &mut scores, elites);

        assert_eq!(positions, [3, 1]);
        assert_eq!(after.get(3), before.get(0));
        assert_eq!(after.get(1), before.get(1));
        assert_eq!(scores, [4.0, 7.0, 6.0, 9.0]);
        assert_eq!(after.len(), 4);
    }

    #[test]
    fn no_elites_no_change() {
        let original = population(3, 44);
        let mut after = original.clone();
        let mut scores = vec![1.0, 2.0, 3.0];
        assert!(restore_elites(&mut after, &mut scores, vec![]).is_empty());
        assert_eq!(after, original);
    }
}
