mod logging;

use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use std::{fs, path::PathBuf, time::Instant};
use trucker_algorithms::{Annealer, MutationBudget, Optimizer, OptimizerEvent};
use trucker_model::{Constructor, Route, SpatialModel};
use trucker_structs::{
    catalog::parse_catalog,
    config::{OptimizerSettings, SearchStrategy, StartStrategy},
    report::RunSummary,
};
use trucker_utils::{compress_obj, dejsonify, jsonify, read_json_arg};

fn cli() -> Command {
    Command::new("trucker-runtime")
        .about("Plans and improves a route through a set of star systems")
        .arg_required_else_help(true)
        .arg(
            arg!(--"log-level" [LEVEL] "Diagnostic log level (off, error, warn, info, debug, trace)")
                .global(true)
                .default_value("warn")
                .value_parser(clap::value_parser!(String)),
        )
        .subcommand(
            Command::new("optimize")
                .about("Builds a starting route and improves it by random mutation")
                .arg(
                    arg!(<STARS> "Path to the star systems json file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(arg!([SEED] "Random seed (overrides settings)").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!([ITERATIONS] "Number of mutations to attempt (overrides settings)")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(--settings [SETTINGS] "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--route [ROUTE] "Starting route as a json array of system indices, or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the run summary will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress [COMPRESS] "If output file is set, the run summary will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("evaluate")
                .about("Prints the hops and distances of a given route")
                .arg(
                    arg!(<STARS> "Path to the star systems json file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(<ROUTE> "Route as a json array of system indices, or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    let log_level = matches
        .get_one::<String>("log-level")
        .map(|level| level.parse::<LevelFilter>())
        .unwrap_or(Ok(LevelFilter::Warn));
    if let Err(e) = log_level
        .map_err(|e| anyhow!("Invalid log level: {}", e))
        .and_then(logging::init_logger)
    {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = match matches.subcommand() {
        Some(("optimize", sub_m)) => optimize(
            sub_m.get_one::<PathBuf>("STARS").unwrap().clone(),
            sub_m.get_one::<u64>("SEED").cloned(),
            sub_m.get_one::<u64>("ITERATIONS").cloned(),
            sub_m.get_one::<String>("settings").cloned(),
            sub_m.get_one::<String>("route").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_flag("compress"),
        ),
        Some(("evaluate", sub_m)) => evaluate(
            sub_m.get_one::<PathBuf>("STARS").unwrap().clone(),
            sub_m.get_one::<String>("ROUTE").unwrap().clone(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn optimize(
    stars_path: PathBuf,
    seed: Option<u64>,
    iterations: Option<u64>,
    settings: Option<String>,
    route: Option<String>,
    output_file: Option<PathBuf>,
    compress: bool,
) -> Result<()> {
    let start_time = Instant::now();

    let mut settings = match settings {
        Some(settings) => OptimizerSettings::load(&settings)?,
        None => OptimizerSettings::default(),
    };
    if let Some(seed) = seed {
        settings.seed = seed;
    }
    if let Some(iterations) = iterations {
        settings.iterations = iterations;
    }
    if let Some(route) = route {
        settings.route = Some(load_route(&route)?);
    }

    let model = load_model(&stars_path)?;
    let mut rng = SmallRng::seed_from_u64(settings.seed);
    let starting_route = build_starting_route(&model, &settings.start, &mut rng)?;

    let (best_route, attempts, successes, skipped, saturated, best_fitness) =
        match settings.strategy {
            SearchStrategy::LocalSearch => {
                let mut optimizer = Optimizer::new(&model, starting_route, &settings, rng)?;
                if let Some(indices) = settings.route.clone() {
                    optimizer.load_route(indices)?;
                }
                println!("{}", optimizer.best_route().report(&model));

                println!("Starting mutations");
                let budget = MutationBudget::from_settings(&settings);
                println!("Doing {} mutations", budget.desired_count);
                let stats = optimizer.run(&budget, &mut |event| match event {
                    OptimizerEvent::Improved {
                        attempt,
                        fitness,
                        route,
                    } => {
                        log::info!("Mutation {} found a better route ({})", attempt, fitness);
                        log::debug!("New best route:\n{}", route.report(&model));
                    }
                    OptimizerEvent::Progress(report) => println!("{}", report),
                })?;
                println!(
                    "Finished doing {} mutations and {} were successful",
                    stats.attempts, stats.successes
                );
                (
                    optimizer.best_route().clone(),
                    stats.attempts,
                    stats.successes,
                    stats.skipped,
                    stats.saturated,
                    stats.best_fitness,
                )
            }
            SearchStrategy::Annealing => {
                let starting_route = match settings.route.clone() {
                    Some(indices) => Route::from_indices(&model, indices)?,
                    None => starting_route,
                };
                let mut annealer = Annealer::new(&model, starting_route, &settings, rng)?;
                println!("{}", annealer.best_route().report(&model));

                println!("Starting annealing");
                let stats = annealer.run(&mut |report| println!("{}", report))?;
                println!(
                    "Finished annealing after {} steps and {} improved the best route",
                    stats.steps, stats.improvements
                );
                (
                    annealer.best_route().clone(),
                    stats.steps,
                    stats.improvements,
                    0,
                    false,
                    stats.best_fitness,
                )
            }
        };

    let report = best_route.report(&model);
    println!("\n-------------\nFinal route:\n");
    println!("{}", report);
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    println!("Duration: {}", elapsed_secs);

    if let Some(path) = output_file {
        let summary = RunSummary {
            attempts,
            successes,
            skipped,
            saturated,
            best_fitness,
            elapsed_secs,
            route: report,
        };
        write_output(&path, &summary, compress)?;
    }
    Ok(())
}

pub fn evaluate(stars_path: PathBuf, route: String) -> Result<()> {
    let model = load_model(&stars_path)?;
    let route = Route::from_indices(&model, load_route(&route)?)?;
    println!("{}", route.report(&model));
    Ok(())
}

fn load_model(stars_path: &PathBuf) -> Result<SpatialModel> {
    let catalog = fs::read_to_string(stars_path)
        .map_err(|e| anyhow!("Failed to read stars file {:?}: {}", stars_path, e))?;
    let records = parse_catalog(&catalog)?;
    let model = SpatialModel::new(&records)?;
    for system in model.systems() {
        println!("{} : {}", system.index, system.name);
    }
    println!("Total systems imported: {}", model.len());
    Ok(model)
}

fn load_route(route: &str) -> Result<Vec<usize>> {
    let route = read_json_arg(route)?;
    dejsonify::<Vec<usize>>(&route).map_err(|e| anyhow!("Failed to parse route: {}", e))
}

fn build_starting_route(
    model: &SpatialModel,
    start: &StartStrategy,
    rng: &mut SmallRng,
) -> Result<Route> {
    let constructor = Constructor::new(model);
    Ok(match start {
        StartStrategy::Random => constructor.random_route(rng),
        StartStrategy::Greedy => constructor.select_best_start()?,
        StartStrategy::GreedyFrom { index } => constructor.build_greedy_route(*index)?,
    })
}

fn write_output(path: &PathBuf, summary: &RunSummary, compress: bool) -> Result<()> {
    if compress {
        fs::write(path, compress_obj(summary)?)?;
    } else {
        fs::write(path, jsonify(summary)?)?;
    }
    println!("run summary written to: {:?}", path);
    Ok(())
}
