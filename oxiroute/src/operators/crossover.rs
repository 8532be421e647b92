use crate::rng::Bernoulli;
use crate::{Population, Route};

use ahash::AHashMap;
use rand::prelude::{Rng, SliceRandom};

/// Pairs up the selected routes in random order and
/// mates each pair with probability `rate`.
///
/// Pairs that don't mate pass through unchanged, as does
/// the last route of an odd-sized population. The output
/// always has as many routes as the input.
pub fn crossover<R: Rng + ?Sized>(selected: Population, rate: f32, rng: &mut R) -> Population {
    let mut parents = selected.into_routes();
    parents.shuffle(rng);

    let mut offspring = Vec::with_capacity(parents.len());
    let mut parents = parents.into_iter();
    while let Some(parent1) = parents.next() {
        match parents.next() {
            Some(parent2) if rng.chance(rate) => {
                let (child1, child2) = cycle_crossover(&parent1, &parent2);
                offspring.push(child1);
                offspring.push(child2);
            }
            Some(parent2) => {
                offspring.push(parent1);
                offspring.push(parent2);
            }
            None => offspring.push(parent1),
        }
    }
    offspring.into()
}

/// Mates two routes over the same waypoints by cycle crossover.
///
/// The depot slots and the first interior slot are pinned:
/// the cycle of positions passing through the first interior
/// slot is inherited from the child's own parent, and every
/// other interior position is swapped with the other parent.
/// Both children are therefore valid tours, and each keeps its
/// own parent's first destination.
///
/// # Panics
/// Panics if the parents aren't tours over the same waypoints.
///
/// # Examples
/// ```
/// use oxiroute::{cycle_crossover, Route, Waypoint};
/// use std::sync::Arc;
///
/// let w: Vec<_> = (0..6).map(|i| Arc::new(Waypoint::new(i, format!("W{}", i)))).collect();
/// let route = |order: &[usize]| {
///     Route::new(order.iter().map(|&i| w[i].clone()).collect()).unwrap()
/// };
///
/// let parent1 = route(&[0, 1, 2, 3, 4, 5, 0]);
/// let parent2 = route(&[0, 2, 1, 4, 5, 3, 0]);
/// let (child1, child2) = cycle_crossover(&parent1, &parent2);
///
/// // Positions 1 and 2 form the pinned cycle, the rest is swapped.
/// assert_eq!(child1, route(&[0, 1, 2, 4, 5, 3, 0]));
/// assert_eq!(child2, route(&[0, 2, 1, 3, 4, 5, 0]));
/// ```
pub fn cycle_crossover(parent1: &Route, parent2: &Route) -> (Route, Route) {
    let swapped = swap_positions(parent1, parent2);
    let mut child1 = parent1.waypoints().to_vec();
    let mut child2 = parent2.waypoints().to_vec();
    for i in swapped {
        child1[i] = parent2.waypoints()[i].clone();
        child2[i] = parent1.waypoints()[i].clone();
    }
    (
        Route::new(child1).unwrap_or_else(|| panic!("crossover moved the depot")),
        Route::new(child2).unwrap_or_else(|| panic!("crossover moved the depot")),
    )
}

/// Returns the interior positions which are not on
/// the cycle through the first interior slot.
///
/// Bounds are derived from the routes' length, so routes
/// of any size are handled.
fn swap_positions(parent1: &Route, parent2: &Route) -> Vec<usize> {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "crossover between routes of different lengths"
    );
    let last = parent1.len() - 1;
    const PINNED: usize = 1;

    let p1 = parent1.waypoints();
    let p2 = parent2.waypoints();
    let position_in_p1: AHashMap<usize, usize> = p1[1..last]
        .iter()
        .enumerate()
        .map(|(i, w)| (w.id(), i + 1))
        .collect();

    let mut on_cycle = vec![false; parent1.len()];
    on_cycle[PINNED] = true;
    let mut value = p2[PINNED].id();
    while value != p1[PINNED].id() {
        let position = *position_in_p1.get(&value).unwrap_or_else(|| {
            panic!(
                "crossover between tours over different waypoints (id {} missing)",
                value
            )
        });
        on_cycle[position] = true;
        value = p2[position].id();
    }

    (PINNED + 1..last).filter(|&i| !on_cycle[i]).collect()
}
