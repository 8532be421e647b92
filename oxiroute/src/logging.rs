use crate::{Champion, GenerationReport, Population};

use std::fmt;

/// Defines different possible reporting levels for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportingLevel {
    /// Clones every population along with its scores.
    AllRoutes,
    /// Clones each population's champion.
    PopulationChampions,
    /// Clones only the global champion.
    GlobalChampion,
    /// Clones no routes.
    NoRoutes,
}

/// A snapshot of the engine after one generation.
#[derive(Clone, Debug)]
pub struct Log {
    pub generation_number: usize,
    pub generation_sample: GenerationMemberRecord,
    pub population_count: usize,
    /// Statistics over the scores of every route in every population.
    pub score_stats: Option<Stats>,
    pub global_best_score: f64,
}

impl fmt::Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Log {{\n\
            \tgeneration_number: {:?}\n\
            \tpopulation_count: {:?}\n\
            \tglobal_best_score: {:?}\n\
            \tscores: {:?}\n\
            }}",
            &self.generation_number,
            &self.population_count,
            &self.global_best_score,
            &self.score_stats,
        )
    }
}

/// A struct for reporting basic statistical data.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub maximum: f64,
    pub minimum: f64,
    pub mean: f64,
    pub median: f64,
}

impl Stats {
    /// Returns statistics about numbers in a sequence,
    /// or `None` if the sequence is empty.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::logging::Stats;
    ///
    /// let stats = Stats::from([-2.0, -1.0, 0.5, 1.0, 1.5].iter().copied()).unwrap();
    /// assert_eq!(stats.maximum, 1.5);
    /// assert_eq!(stats.minimum, -2.0);
    /// assert_eq!(stats.mean, 0.0);
    /// assert_eq!(stats.median, 0.5);
    ///
    /// assert_eq!(Stats::from(std::iter::empty()), None);
    /// ```
    pub fn from(data: impl Iterator<Item = f64>) -> Option<Stats> {
        let mut data: Vec<f64> = data.collect();
        if data.is_empty() {
            return None;
        }
        data.sort_unstable_by(f64::total_cmp);

        let mid = data.len() / 2;
        let median = if data.len() % 2 == 0 {
            (data[mid - 1] + data[mid]) / 2.0
        } else {
            data[mid]
        };
        Some(Stats {
            maximum: data[data.len() - 1],
            minimum: data[0],
            mean: data.iter().sum::<f64>() / data.len() as f64,
            median,
        })
    }
}

/// A reporting-level dependant store
/// of routes from the engine.
#[derive(Clone, Debug)]
pub enum GenerationMemberRecord {
    /// Every population, with the score of each route.
    Populations(Vec<(Population, Vec<f64>)>),
    /// Only the champion of each population.
    PopulationChampions(Vec<Champion>),
    /// Only the global champion.
    GlobalChampion(Champion),
    /// Empty.
    None,
}

/// A log of the evolution of the engine's populations over time.
#[derive(Clone, Debug)]
pub struct EvolutionLogger {
    reporting_level: ReportingLevel,
    logs: Vec<Log>,
}

impl EvolutionLogger {
    /// Returns a logger with the appropiate reporting level.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::logging::{EvolutionLogger, ReportingLevel};
    ///
    /// let logger = EvolutionLogger::new(ReportingLevel::NoRoutes);
    /// ```
    pub fn new(reporting_level: ReportingLevel) -> EvolutionLogger {
        EvolutionLogger {
            reporting_level,
            logs: vec![],
        }
    }

    /// Store a snapshot of a generation.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::logging::{EvolutionLogger, ReportingLevel};
    /// use oxiroute::{EngineConfig, EvolutionEngine, LookupError, Waypoint};
    ///
    /// # fn distance(_: &str, _: &str) -> Result<f64, LookupError> { Ok(1.0) }
    /// # let catalog: Vec<_> = (0..4).map(|i| Waypoint::new(i, i.to_string())).collect();
    /// let mut logger = EvolutionLogger::new(ReportingLevel::GlobalChampion);
    /// let mut engine = EvolutionEngine::new(EngineConfig::zero(), &catalog, distance).unwrap();
    ///
    /// engine.run_with_callback(10, |report| logger.log(report)).unwrap();
    /// assert_eq!(logger.iter().count(), 10);
    /// ```
    pub fn log(&mut self, report: &GenerationReport<'_>) {
        let score_stats = Stats::from(
            report
                .populations()
                .flat_map(|(_, scores)| scores.iter().copied()),
        );
        self.logs.push(Log {
            generation_number: report.generation(),
            generation_sample: match self.reporting_level {
                ReportingLevel::AllRoutes => GenerationMemberRecord::Populations(
                    report
                        .populations()
                        .map(|(population, scores)| (population.clone(), scores.to_vec()))
                        .collect(),
                ),
                ReportingLevel::PopulationChampions => {
                    GenerationMemberRecord::PopulationChampions(
                        report.champions().cloned().collect(),
                    )
                }
                ReportingLevel::GlobalChampion => {
                    GenerationMemberRecord::GlobalChampion(report.global_best().clone())
                }
                ReportingLevel::NoRoutes => GenerationMemberRecord::None,
            },
            population_count: report.population_count(),
            score_stats,
            global_best_score: report.global_best().score,
        })
    }

    /// Iterate over all logged snapshots.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::logging::{EvolutionLogger, ReportingLevel};
    ///
    /// let logger = EvolutionLogger::new(ReportingLevel::AllRoutes);
    /// // Log some stuff... then
    /// for log in logger.iter() {
    ///     println!("{}", log);
    /// }
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &Log> {
        self.logs.iter()
    }

    /// Returns the most recent snapshot.
    pub fn last(&self) -> Option<&Log> {
        self.logs.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_median() {
        let stats = Stats::from([4.0, 1.0, 3.0, 2.0].iter().copied()).unwrap();
        assert_eq!(stats.median, 2.5);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.maximum, 4.0);
        assert_eq!(stats.minimum, 1.0);
    }

    #[test]
    fn single_value() {
        let stats = Stats::from(std::iter::once(7.0)).unwrap();
        assert_eq!(
            stats,
            Stats {
                maximum: 7.0,
                minimum: 7.0,
                mean: 7.0,
                median: 7.0,
            }
        );
    }
}
