//! Genetic operators acting on whole populations:
//! parent selection, cycle crossover, swap mutation
//! and elitism.
//!
//! Each phase takes its input population explicitly
//! and either returns a new one (selection, crossover)
//! or modifies it in place (mutation, elite restoration).
mod crossover;
mod elitism;
mod errors;
mod mutation;
mod selection;

pub use crossover::{crossover, cycle_crossover};
pub use elitism::{capture_elites, restore_elites};
pub use errors::DomainError;
pub use mutation::{mutate, swap_mutation};
pub use selection::{SelectionMethod, Selector};

/// Returns population indices ordered from highest to
/// lowest score. Ties keep population order.
pub(crate) fn rank_descending(scores: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    indices
}

/// Returns population indices ordered from lowest to
/// highest score. Ties keep population order.
pub(crate) fn rank_ascending(scores: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));
    indices
}

#[cfg(test)]
mod tests {
    #[test]
    fn rankings_are_stable() {
        let scores = [2.0, 9.0, 2.0, 5.0, 9.0];
        assert_eq!(super::rank_descending(&scores), [1, 4, 3, 0, 2]);
        assert_eq!(super::rank_ascending(&scores), [0, 2, 3, 1, 4]);
    }
}
