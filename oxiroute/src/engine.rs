//! The evolution engine runs the generational loop over
//! one or several populations, keeping track of the best
//! route found. With several populations, each generation
//! steps them concurrently and periodically migrates
//! their best routes around a ring.
mod config;
mod errors;
mod island;
mod migration;
mod report;

pub use config::EngineConfig;
pub use errors::{ConfigurationError, EngineError, Phase};
pub use island::Champion;
pub use report::{GenerationReport, RunOutcome};

use crate::{rng, DistanceProvider, FitnessEvaluator, Population, Waypoint, WaypointCatalog};
use island::{Island, Operators};

use ahash::AHashSet;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info, warn};

use std::sync::Arc;

/// Lifecycle of an [`EvolutionEngine`].
///
/// `Idle → Initialized → Running → {Completed, Stopped}`;
/// [`EvolutionEngine::reset`] returns to `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// No populations exist yet.
    Idle,
    /// Populations have been generated.
    Initialized,
    /// A run is in progress.
    Running,
    /// All requested generations ran.
    Completed,
    /// The stop predicate ended the run early,
    /// or an error aborted it.
    Stopped,
}

type StopPredicate = Box<dyn FnMut() -> bool + Send>;

/// Evolves depot-anchored routes over a waypoint catalog.
///
/// # Examples
/// ```
/// use oxiroute::{EngineConfig, EngineState, EvolutionEngine, LookupError, SelectionMethod, Waypoint};
/// use std::num::NonZeroUsize;
///
/// // Stops on a line, named by their position.
/// fn distance(from: &str, to: &str) -> Result<f64, LookupError> {
///     let position = |name: &str| name.parse::<f64>().map_err(|_| LookupError::new(from, to));
///     Ok((position(from)? - position(to)?).abs())
/// }
///
/// let catalog: Vec<_> = (0..6).map(|i| Waypoint::new(i, i.to_string())).collect();
/// let config = EngineConfig {
///     population_size: NonZeroUsize::new(20).unwrap(),
///     crossover_rate: 0.9,
///     mutation_rate: 0.1,
///     elitism: 2,
///     selection: SelectionMethod::Tournament,
///     tournament_size: Some(3),
///     ..EngineConfig::zero()
/// };
///
/// let mut engine = EvolutionEngine::new(config, &catalog, distance).unwrap();
/// let outcome = engine.run(50).unwrap();
///
/// assert_eq!(outcome.status, EngineState::Completed);
/// let best = outcome.best.unwrap();
/// assert_eq!(best.route.len(), 7);
/// println!("{} ({})", best.route, engine.evaluator().distance_of(best.score));
/// ```
pub struct EvolutionEngine<D> {
    config: EngineConfig,
    operators: Operators,
    depot: Arc<Waypoint>,
    destinations: Vec<Arc<Waypoint>>,
    provider: D,
    islands: Vec<Island>,
    workers: Option<ThreadPool>,
    global_best: Option<Champion>,
    state: EngineState,
    generation: usize,
    migrations: usize,
    stop: Option<StopPredicate>,
}

impl<D: DistanceProvider> EvolutionEngine<D> {
    /// Creates an idle engine over the catalog's waypoints,
    /// the first of which is taken as the depot.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] if the configuration
    /// is invalid, or the catalog lacks destinations or holds
    /// duplicate ids or names.
    pub fn new<C>(
        config: EngineConfig,
        catalog: &C,
        provider: D,
    ) -> Result<EvolutionEngine<D>, ConfigurationError>
    where
        C: WaypointCatalog + ?Sized,
    {
        config.validate()?;
        let operators = Operators {
            selector: config.selector()?,
            crossover_rate: config.crossover_rate,
            mutation_rate: config.mutation_rate,
            elitism: config.elitism,
        };

        let waypoints = catalog.list_waypoints();
        if waypoints.len() < 2 {
            return Err(ConfigurationError::CatalogTooSmall(waypoints.len()));
        }
        let (mut ids, mut names) = (AHashSet::new(), AHashSet::new());
        for waypoint in &waypoints {
            if !ids.insert(waypoint.id()) {
                return Err(ConfigurationError::DuplicateWaypointId(waypoint.id()));
            }
            if !names.insert(waypoint.name()) {
                return Err(ConfigurationError::DuplicateWaypointName(
                    waypoint.name().to_owned(),
                ));
            }
        }
        let mut waypoints = waypoints.into_iter().map(Arc::new);
        let depot = waypoints
            .next()
            .unwrap_or_else(|| panic!("catalog emptied during validation"));

        Ok(EvolutionEngine {
            config,
            operators,
            depot,
            destinations: waypoints.collect(),
            provider,
            islands: vec![],
            workers: None,
            global_best: None,
            state: EngineState::Idle,
            generation: 0,
            migrations: 0,
            stop: None,
        })
    }

    /// Sets a predicate polled before each generation;
    /// once it returns `true` the run stops.
    ///
    /// # Examples
    /// ```
    /// # use oxiroute::{EngineConfig, EvolutionEngine, LookupError, Waypoint};
    /// use std::sync::atomic::{AtomicBool, Ordering};
    /// use std::sync::Arc;
    ///
    /// # fn distance(_: &str, _: &str) -> Result<f64, LookupError> { Ok(1.0) }
    /// # let catalog = vec![Waypoint::new(0, "Depot"), Waypoint::new(1, "Market")];
    /// let cancelled = Arc::new(AtomicBool::new(false));
    /// let flag = cancelled.clone();
    /// let engine = EvolutionEngine::new(EngineConfig::zero(), &catalog, distance)
    ///     .unwrap()
    ///     .with_stop_predicate(move || flag.load(Ordering::Relaxed));
    ///
    /// // Elsewhere...
    /// cancelled.store(true, Ordering::Relaxed);
    /// ```
    pub fn with_stop_predicate<F>(mut self, stop: F) -> EvolutionEngine<D>
    where
        F: FnMut() -> bool + Send + 'static,
    {
        self.stop = Some(Box::new(stop));
        self
    }

    /// Generates one random population per configured population
    /// count, and starts the worker pool if there are several.
    ///
    /// Called by [`run`](Self::run) if the engine is idle.
    ///
    /// # Errors
    /// Returns an error if the engine isn't idle, or if
    /// the worker threads can't be started.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        if self.state != EngineState::Idle {
            return Err(EngineError::InvalidState(self.state));
        }
        let mut master = rng::master(self.config.seed);
        self.islands = (0..self.config.populations)
            .map(|index| {
                let mut rng = rng::derive(&mut master);
                let population = Population::random(
                    &self.depot,
                    &self.destinations,
                    self.config.population_size,
                    &mut rng,
                );
                Island::new(index, population, rng)
            })
            .collect();
        self.workers = if self.islands.len() > 1 {
            Some(
                ThreadPoolBuilder::new()
                    .num_threads(self.islands.len())
                    .thread_name(|i| format!("population-{}", i))
                    .build()?,
            )
        } else {
            None
        };
        self.global_best = None;
        self.generation = 0;
        self.migrations = 0;
        self.state = EngineState::Initialized;
        info!(
            populations = self.islands.len(),
            population_size = self.config.population_size.get(),
            destinations = self.destinations.len(),
            "initialized populations"
        );
        Ok(())
    }

    /// Runs up to `generations` generations, initializing
    /// the engine first if needed.
    pub fn run(&mut self, generations: usize) -> Result<RunOutcome, EngineError> {
        self.run_with_callback(generations, |_| {})
    }

    /// Runs up to `generations` generations, calling
    /// `on_generation` after each one completes.
    ///
    /// The callback runs synchronously on the calling thread;
    /// a panic inside it unwinds out of the run.
    ///
    /// # Errors
    /// Returns an error if the engine already ran (see [`reset`]),
    /// or if any phase of a generation fails. Failed runs leave
    /// the engine [`Stopped`](EngineState::Stopped).
    ///
    /// [`reset`]: Self::reset
    pub fn run_with_callback<F>(
        &mut self,
        generations: usize,
        mut on_generation: F,
    ) -> Result<RunOutcome, EngineError>
    where
        F: FnMut(&GenerationReport<'_>),
    {
        match self.state {
            EngineState::Idle => self.initialize()?,
            EngineState::Initialized => {}
            state => return Err(EngineError::InvalidState(state)),
        }
        self.state = EngineState::Running;
        info!(generations, "starting run");

        for _ in 0..generations {
            if self.stop.as_mut().map_or(false, |stop| stop()) {
                self.state = EngineState::Stopped;
                info!(generation = self.generation, "run stopped");
                return Ok(self.outcome());
            }

            if let Err(e) = self.step_all() {
                self.state = EngineState::Stopped;
                warn!(generation = self.generation + 1, error = %e, "run aborted");
                return Err(e);
            }
            self.generation += 1;
            self.update_global_best();

            if self.islands.len() > 1 && self.generation % self.config.migration_interval == 0 {
                migration::migrate(&mut self.islands, self.config.migration_count);
                self.migrations += 1;
            }

            if let Some(global_best) = &self.global_best {
                debug!(
                    generation = self.generation,
                    best_score = global_best.score,
                    "generation complete"
                );
                on_generation(&GenerationReport {
                    generation: self.generation,
                    islands: &self.islands,
                    global_best,
                });
            }
        }

        self.state = EngineState::Completed;
        info!(
            generations = self.generation,
            best_score = ?self.global_best.as_ref().map(|c| c.score),
            "run completed"
        );
        Ok(self.outcome())
    }

    /// Steps every island once, concurrently if there is a
    /// worker pool. Returns once all islands are done.
    fn step_all(&mut self) -> Result<(), EngineError> {
        let evaluator = FitnessEvaluator::new(&self.provider, self.config.baseline);
        let operators = &self.operators;
        match &self.workers {
            Some(workers) => {
                let islands = &mut self.islands;
                let results: Vec<Result<(), EngineError>> = workers.install(|| {
                    islands
                        .par_iter_mut()
                        .map(|island| island.step(&evaluator, operators))
                        .collect()
                });
                // Report the lowest-indexed failure.
                results.into_iter().collect()
            }
            None => self
                .islands
                .iter_mut()
                .try_for_each(|island| island.step(&evaluator, operators)),
        }
    }

    /// Replaces the global best with any island champion
    /// that strictly improves on it.
    fn update_global_best(&mut self) {
        for champion in self.islands.iter().filter_map(Island::champion) {
            let improves = match &self.global_best {
                Some(best) => champion.score > best.score,
                None => true,
            };
            if improves {
                self.global_best = Some(champion.clone());
            }
        }
    }

    fn outcome(&self) -> RunOutcome {
        RunOutcome {
            status: self.state,
            generations: self.generation,
            best: self.global_best.clone(),
        }
    }

    /// Discards all populations and records,
    /// returning the engine to [`EngineState::Idle`].
    pub fn reset(&mut self) {
        self.islands.clear();
        self.workers = None;
        self.global_best = None;
        self.generation = 0;
        self.migrations = 0;
        self.state = EngineState::Idle;
    }

    /// Returns the engine's current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the number of generations completed in this run.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the number of migrations performed in this run.
    pub fn migrations(&self) -> usize {
        self.migrations
    }

    pub fn depot(&self) -> &Waypoint {
        &self.depot
    }

    /// Returns the non-depot waypoints, in catalog order.
    pub fn destinations(&self) -> &[Arc<Waypoint>] {
        &self.destinations
    }

    pub fn provider(&self) -> &D {
        &self.provider
    }

    /// Returns an evaluator using the engine's
    /// distance provider and baseline.
    pub fn evaluator(&self) -> FitnessEvaluator<'_, D> {
        FitnessEvaluator::new(&self.provider, self.config.baseline)
    }

    /// Returns an iterator over all current populations.
    pub fn populations(&self) -> impl Iterator<Item = &Population> {
        self.islands.iter().map(Island::population)
    }

    /// Returns each population's best route as of the
    /// last completed generation.
    pub fn champions(&self) -> impl Iterator<Item = &Champion> {
        self.islands.iter().filter_map(Island::champion)
    }

    /// Returns the best route found so far.
    pub fn global_best(&self) -> Option<&Champion> {
        self.global_best.as_ref()
    }
}
