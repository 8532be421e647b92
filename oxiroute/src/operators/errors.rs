/// An error type indicating that the scores handed
/// to an operator can't drive it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A score was negative or not finite, which roulette
    /// selection can't turn into a probability. Usually
    /// a sign of a fitness baseline set too low.
    #[error("roulette selection requires non-negative scores, route {index} scored {score}")]
    InvalidRouletteScore { index: usize, score: f64 },
    /// All scores were zero.
    #[error("roulette selection over a population with zero total score")]
    DegenerateScores,
    /// A tournament was empty, or larger than the population.
    #[error("tournament of size {size} over a population of {population}")]
    InvalidTournamentSize { size: usize, population: usize },
    /// The number of scores doesn't match the number of routes.
    #[error("{scores} scores supplied for a population of {population} routes")]
    ScoreCountMismatch { scores: usize, population: usize },
}
