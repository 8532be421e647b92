use super::ConfigurationError;
use crate::fitness::DEFAULT_BASELINE;
use crate::operators::{SelectionMethod, Selector};

use serde::{Deserialize, Serialize};

use std::num::NonZeroUsize;

/// Configuration data for route evolution.
///
/// # Note
/// All quantities expressing probabilities
/// must be in the range [0.0, 1.0]; this and the
/// remaining constraints are checked by [`validate`],
/// which the engine runs on construction.
///
/// [`validate`]: EngineConfig::validate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of routes in each population.
    pub population_size: NonZeroUsize,
    /// Chance that a route receives a swap mutation
    /// each generation.
    pub mutation_rate: f32,
    /// Chance that a pair of selected routes is mated
    /// instead of being passed through.
    pub crossover_rate: f32,
    /// Top n of each population which survive
    /// each generation unchanged.
    pub elitism: usize,
    /// Parent selection method.
    pub selection: SelectionMethod,
    /// Number of participants in each tournament.
    /// Required by tournament selection.
    pub tournament_size: Option<usize>,
    /// Number of independently evolving populations.
    pub populations: usize,
    /// Generations between migrations, if there
    /// is more than one population.
    pub migration_interval: usize,
    /// Number of routes each population sends
    /// to its neighbour during migration.
    pub migration_count: usize,
    /// Constant from which route distances are
    /// subtracted to obtain fitness scores.
    pub baseline: f64,
    /// Seed for all random decisions of a run.
    /// Runs are seeded from entropy if absent.
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Returns a "zero-valued" default configuration.
    /// All values are 0, empty, or in the case of
    /// `NonZeroUsize`s and the population count, 1.
    /// The baseline is [`DEFAULT_BASELINE`].
    ///
    /// # Note
    /// This value is not suitable for use in most experiments.
    /// It is meant as a way to abbreviate configuration
    /// instantiation, or to fill in unused values.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::EngineConfig;
    ///
    /// let cfg1 = EngineConfig::zero();
    ///
    /// let cfg2 = EngineConfig {
    ///     // Specify some values here...
    ///     mutation_rate: 0.1,
    ///     crossover_rate: 0.9,
    ///     // Default the rest...
    ///     ..EngineConfig::zero()
    /// };
    /// assert!(cfg2.validate().is_ok());
    /// ```
    pub const fn zero() -> EngineConfig {
        EngineConfig {
            population_size: NonZeroUsize::MIN,
            mutation_rate: 0.0,
            crossover_rate: 0.0,
            elitism: 0,
            selection: SelectionMethod::Roulette,
            tournament_size: None,
            populations: 1,
            migration_interval: 0,
            migration_count: 0,
            baseline: DEFAULT_BASELINE,
            seed: None,
        }
    }

    /// Checks that the configuration describes a runnable engine.
    ///
    /// Migration settings are only checked if there is
    /// more than one population.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::{ConfigurationError, EngineConfig, SelectionMethod};
    /// use std::num::NonZeroUsize;
    ///
    /// let config = EngineConfig {
    ///     population_size: NonZeroUsize::new(10).unwrap(),
    ///     selection: SelectionMethod::Tournament,
    ///     ..EngineConfig::zero()
    /// };
    ///
    /// assert_eq!(config.validate(), Err(ConfigurationError::MissingTournamentSize));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let size = self.population_size.get();
        for (name, rate) in [
            ("mutation_rate", self.mutation_rate),
            ("crossover_rate", self.crossover_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigurationError::RateOutOfRange { name, rate });
            }
        }
        if self.elitism >= size {
            return Err(ConfigurationError::ElitismTooLarge {
                elitism: self.elitism,
                population_size: size,
            });
        }
        self.selector()?;
        if !self.baseline.is_finite() {
            return Err(ConfigurationError::InvalidBaseline(self.baseline));
        }
        if self.populations == 0 {
            return Err(ConfigurationError::NoPopulations);
        }
        if self.populations > 1 {
            if self.migration_interval == 0 {
                return Err(ConfigurationError::ZeroMigrationInterval);
            }
            if self.migration_count == 0 || self.migration_count >= size {
                return Err(ConfigurationError::MigrationCountOutOfRange {
                    count: self.migration_count,
                    population_size: size,
                });
            }
        }
        Ok(())
    }

    /// Resolves the configured selection method into an operator.
    pub(crate) fn selector(&self) -> Result<Selector, ConfigurationError> {
        match (self.selection, self.tournament_size) {
            (SelectionMethod::Roulette, _) => Ok(Selector::Roulette),
            (SelectionMethod::Tournament, None) => Err(ConfigurationError::MissingTournamentSize),
            (SelectionMethod::Tournament, Some(size))
                if size < 2 || size > self.population_size.get() =>
            {
                Err(ConfigurationError::TournamentSizeOutOfRange {
                    size,
                    population_size: self.population_size.get(),
                })
            }
            (SelectionMethod::Tournament, Some(size)) => Ok(Selector::Tournament { size }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> EngineConfig {
        EngineConfig {
            population_size: NonZeroUsize::new(10).unwrap(),
            mutation_rate: 0.1,
            crossover_rate: 0.9,
            ..EngineConfig::zero()
        }
    }

    #[test]
    fn zero_is_valid() {
        assert_eq!(EngineConfig::zero().validate(), Ok(()));
        assert_eq!(base().validate(), Ok(()));
    }

    #[test]
    fn rates_bounded() {
        let config = EngineConfig {
            crossover_rate: 1.5,
            ..base()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::RateOutOfRange {
                name: "crossover_rate",
                rate: 1.5
            })
        );
        let config = EngineConfig {
            mutation_rate: f32::NAN,
            ..base()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn elitism_below_size() {
        let config = EngineConfig {
            elitism: 10,
            ..base()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::ElitismTooLarge {
                elitism: 10,
                population_size: 10
            })
        );
    }

    #[test]
    fn tournament_sizes() {
        let config = |size| EngineConfig {
            selection: SelectionMethod::Tournament,
            tournament_size: size,
            ..base()
        };
        assert_eq!(config(Some(3)).selector(), Ok(Selector::Tournament { size: 3 }));
        assert_eq!(
            config(None).validate(),
            Err(ConfigurationError::MissingTournamentSize)
        );
        assert!(config(Some(1)).validate().is_err());
        assert!(config(Some(11)).validate().is_err());
    }

    #[test]
    fn migration_checked_only_with_islands() {
        let single = EngineConfig {
            migration_interval: 0,
            migration_count: 0,
            ..base()
        };
        assert_eq!(single.validate(), Ok(()));

        let islands = EngineConfig {
            populations: 3,
            ..single
        };
        assert_eq!(
            islands.validate(),
            Err(ConfigurationError::ZeroMigrationInterval)
        );
        let islands = EngineConfig {
            migration_interval: 5,
            migration_count: 10,
            ..islands
        };
        assert_eq!(
            islands.validate(),
            Err(ConfigurationError::MigrationCountOutOfRange {
                count: 10,
                population_size: 10
            })
        );
        let islands = EngineConfig {
            migration_count: 1,
            ..islands
        };
        assert_eq!(islands.validate(), Ok(()));
    }

    #[test]
    fn no_populations() {
        let config = EngineConfig {
            populations: 0,
            ..base()
        };
        assert_eq!(config.validate(), Err(ConfigurationError::NoPopulations));
    }

    #[test]
    fn serde_round_trip() {
        let config = EngineConfig {
            selection: SelectionMethod::Tournament,
            tournament_size: Some(3),
            seed: Some(9),
            ..base()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"selection\":\"tournament\""));
        assert_eq!(serde_json::from_str::<EngineConfig>(&json).unwrap(), config);
    }
}
