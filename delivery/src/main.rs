use oxiroute::logging::{EvolutionLogger, ReportingLevel};
use oxiroute::{EngineConfig, EvolutionEngine, SelectionMethod};
use oxiroute_matrix::RouteTable;

use clap::Parser;
use tracing::Level;

use std::error::Error;
use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Plans a delivery round visiting every stop in a route table.
#[derive(Parser, Debug)]
#[command(name = "delivery")]
struct Args {
    /// RON file holding the route table; its first waypoint is the depot
    #[arg(short, long, default_value = "delivery/data/stores.ron")]
    table: PathBuf,
    /// RON file holding the engine configuration
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of generations to run
    #[arg(short, long, default_value_t = 200)]
    generations: usize,
    /// Stop early after this many seconds
    #[arg(long)]
    time_limit: Option<f64>,
    /// Overrides the configured seed
    #[arg(long)]
    seed: Option<u64>,
    /// Log per-generation summaries
    #[arg(short, long)]
    verbose: bool,
}

fn default_config() -> EngineConfig {
    EngineConfig {
        population_size: NonZeroUsize::new(100).unwrap(),
        mutation_rate: 0.05,
        crossover_rate: 0.9,
        elitism: 2,
        selection: SelectionMethod::Tournament,
        tournament_size: Some(5),
        populations: 4,
        migration_interval: 10,
        migration_count: 2,
        ..EngineConfig::zero()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let table: RouteTable = ron::from_str(&fs::read_to_string(&args.table)?)?;
    let mut config = match &args.config {
        Some(path) => ron::from_str(&fs::read_to_string(path)?)?,
        None => default_config(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let baseline = config.baseline;
    let matrix = table.to_matrix()?;

    let deadline = args
        .time_limit
        .map(|seconds| Instant::now() + Duration::from_secs_f64(seconds));
    let mut engine = EvolutionEngine::new(config, &table, matrix)?
        .with_stop_predicate(move || deadline.map_or(false, |d| Instant::now() >= d));

    let mut logger = EvolutionLogger::new(ReportingLevel::PopulationChampions);
    let outcome = engine.run_with_callback(args.generations, |report| {
        let distances: Vec<String> = report
            .best_scores()
            .iter()
            .map(|score| format!("{:.2}", baseline - score))
            .collect();
        println!(
            "Generation {:>4} | population bests: [{}] | global best: {:.2}",
            report.generation(),
            distances.join(", "),
            baseline - report.global_best().score
        );
        logger.log(report);
    })?;

    if let Some(log) = logger.last() {
        println!("{}", log);
    }
    match outcome.best {
        Some(best) => {
            println!(
                "{:?} after {} generations ({} migrations)",
                outcome.status,
                outcome.generations,
                engine.migrations()
            );
            println!("Best route: {}", best.route);
            println!("Distance: {:.2}", engine.evaluator().distance_of(best.score));
        }
        None => println!("Stopped before the first generation"),
    }
    Ok(())
}
