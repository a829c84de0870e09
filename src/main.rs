use campus_search::{
    config::{DEFAULT_HISTORY_FILE, DEFAULT_USER, RunConfig, check_limit},
    error::{GraphError, LoadError},
    fs::{TextHistoryFile, campus_to_json, load_campus, save_campus, update_campus},
    graph::{CampusGraph, Location, random_campus, sample_campus},
    history::{HistoryEntry, HistorySink},
    logging,
    search::{Algorithm, SearchRequest},
    statistics::{ComparisonReport, RunRecord, Stats},
};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use std::{error::Error, path::PathBuf, process::ExitCode};
use tqdm::tqdm;
use tracing::{info, warn};

/// Campus path finder using uninformed graph search
#[derive(Parser, Debug)]
#[command(name = "campus-search")]
#[command(about = "Find and compare campus paths with BFS, DFS and UCS", long_about = None)]
struct Args {
    /// Path to a JSON campus map (the built-in sample campus is used otherwise)
    #[arg(short, long, global = true)]
    map: Option<PathBuf>,

    /// Name recorded in the history log
    #[arg(short, long, global = true, default_value = DEFAULT_USER)]
    user: String,

    /// History log the runs are appended to
    #[arg(long, global = true, env = "CAMPUS_SEARCH_HISTORY", default_value = DEFAULT_HISTORY_FILE)]
    history: PathBuf,

    /// Do not append runs to the history log
    #[arg(long, global = true)]
    no_history: bool,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level or filter directive (e.g. "trace", "campus_search=debug")
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a single algorithm between two locations
    Search {
        /// bfs, dfs or ucs
        #[arg(short, long)]
        algorithm: Algorithm,

        start: String,

        goal: String,

        /// Max edges for dfs, max cumulative cost for ucs, ignored by bfs
        #[arg(short, long)]
        bound: Option<f64>,

        /// Repeat the search this many times and report the average time
        #[arg(long, default_value_t = 1)]
        repeat: usize,
    },

    /// Run BFS, DFS and UCS between two locations and compare them
    Compare {
        start: String,

        goal: String,

        /// Max number of edges for DFS
        #[arg(long)]
        dfs_depth: Option<usize>,

        /// Max cumulative cost for UCS
        #[arg(long)]
        ucs_cost_limit: Option<f64>,

        /// Repeat every search this many times and report average times
        #[arg(long, default_value_t = 1)]
        repeat: usize,
    },

    /// List the locations and connections of the map
    Locations,

    /// Add a location to the --map file, creating the file if needed
    AddLocation { name: String },

    /// Remove a location and all its connections from the --map file
    RemoveLocation { name: String },

    /// Connect two locations of the --map file, replacing any previous weight
    Connect {
        from: String,

        to: String,

        #[arg(allow_negative_numbers = true)]
        weight: f64,
    },

    /// Remove the connection between two locations of the --map file
    Disconnect { from: String, to: String },

    /// Print the history log
    History,

    /// Generate a random campus map as JSON
    Generate {
        #[arg(long, default_value_t = 8)]
        nodes: usize,

        #[arg(long, default_value_t = 0.4)]
        edge_probability: f64,

        #[arg(long, default_value_t = 20)]
        max_weight: u32,

        #[arg(long)]
        seed: Option<u64>,

        /// Write the map here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Args {
    fn run_config(&self, dfs_depth: Option<usize>, ucs_cost_limit: Option<f64>, repeat: usize) -> RunConfig {
        RunConfig {
            user: self.user.clone(),
            history_path: (!self.no_history).then(|| self.history.clone()),
            dfs_depth,
            ucs_cost_limit,
            repeat,
            json: self.json,
        }
    }

    fn campus(&self) -> Result<CampusGraph, Box<dyn Error>> {
        match &self.map {
            Some(path) => Ok(load_campus(path)?),
            None => {
                info!("no map given, using the sample campus");
                Ok(sample_campus())
            }
        }
    }

    /// Applies `edit` to the --map file and saves it.
    fn edit_campus<F>(&self, edit: F) -> Result<CampusGraph, Box<dyn Error>>
    where
        F: FnOnce(&mut CampusGraph) -> Result<(), GraphError>,
    {
        let Some(path) = &self.map else {
            return Err("editing needs a map file, pass --map <FILE>".into());
        };
        match update_campus(path, edit) {
            Ok(graph) => Ok(graph),
            Err(LoadError::Graph(e)) if e.is_not_found() => {
                eprintln!(
                    "hint: `campus-search --map {} locations` lists what the map contains",
                    path.display()
                );
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn join(locations: &[Location]) -> String {
    locations
        .iter()
        .map(Location::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Runs one search `repeat` times; the returned record carries the average time.
fn timed_run(algorithm: Algorithm, graph: &CampusGraph, request: SearchRequest, repeat: usize) -> (RunRecord, Stats) {
    let mut stats = Stats::new();
    let mut record = RunRecord::run(algorithm, graph, request);
    stats.record(&record.result);

    if repeat > 1 {
        for _ in tqdm(1..repeat) {
            let result = algorithm.search(graph, &record.request);
            stats.record(&result);
        }
        record.result.elapsed = stats.average_elapsed();
    }
    (record, stats)
}

/// History failures are reported but never abort the command.
fn save_history(config: &RunConfig, records: &[RunRecord]) {
    let Some(path) = &config.history_path else {
        return;
    };
    let mut sink = TextHistoryFile::new(path);
    let entries: Vec<_> = records
        .iter()
        .map(|record| HistoryEntry::new(config.user.clone(), record.clone()))
        .collect();
    if let Err(e) = sink.record_all(&entries) {
        warn!("could not save history: {e}");
    }
}

fn print_record(record: &RunRecord) {
    let result = &record.result;
    println!("\n{}", record.label());
    println!("  Time: {:.6} seconds", result.elapsed.as_secs_f64());
    println!("  Nodes Visited: {}", result.nodes_visited);
    if result.visited_order.is_empty() {
        println!("  Traversal Order: N/A");
    } else {
        println!("  Traversal Order: {}", join(&result.visited_order));
    }
    match &result.path {
        Some(path) => {
            println!("  Path Found: {}", join(path));
            println!("  Total Cost: {}", result.cost);
            println!("  Path Length: {} edges", path.len() - 1);
        }
        None => println!("  No path found!"),
    }
}

fn print_report(report: &ComparisonReport) {
    println!("\n{}", "=".repeat(72));
    println!(
        "{:<12} {:<15} {:<15} {:<12} {:<10}",
        "Algorithm", "Time (sec)", "Nodes Visited", "Path Found", "Cost"
    );
    println!("{}", "-".repeat(72));
    for row in &report.rows {
        let cost = if row.path_found {
            row.cost.to_string()
        } else {
            "-".to_string()
        };
        println!(
            "{:<12} {:<15.6} {:<15} {:<12} {:<10}",
            row.algorithm,
            row.elapsed.as_secs_f64(),
            row.nodes_visited,
            if row.path_found { "Yes" } else { "No" },
            cost
        );
    }
    println!("{}", "-".repeat(72));
    if let Some(row) = report.fastest_row() {
        println!(
            "Fastest: {} ({:.6} seconds)",
            row.algorithm,
            row.elapsed.as_secs_f64()
        );
    }
    match report.cheapest_row() {
        Some(row) => println!("Cheapest: {} (cost {})", row.algorithm, row.cost),
        None => println!("Cheapest: none of the algorithms found a path"),
    }
    if let Some(row) = report.fewest_visited_row() {
        println!("Fewest visited: {} ({} nodes)", row.algorithm, row.nodes_visited);
    }
    println!("{}", "=".repeat(72));
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    match &args.command {
        Command::Search {
            algorithm,
            start,
            goal,
            bound,
            repeat,
        } => {
            if algorithm.uses_bound() {
                check_limit("bound", *bound)?;
            }
            let config = args.run_config(None, None, *repeat).validate()?;
            let graph = args.campus()?;
            let request = SearchRequest::new(start.as_str(), goal.as_str()).with_bound(*bound);
            let (record, stats) = timed_run(*algorithm, &graph, request, config.repeat);

            if config.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "record": &record,
                        "stats": &stats,
                    }))?
                );
            } else {
                print_record(&record);
                if config.repeat > 1 {
                    println!(
                        "  Averaged over {} runs: {:.2} nodes visited",
                        stats.get_searches(),
                        stats.average_nodes_visited()
                    );
                }
            }
            save_history(&config, std::slice::from_ref(&record));
        }

        Command::Compare {
            start,
            goal,
            dfs_depth,
            ucs_cost_limit,
            repeat,
        } => {
            let config = args
                .run_config(*dfs_depth, *ucs_cost_limit, *repeat)
                .validate()?;
            let graph = args.campus()?;

            let mut records = Vec::with_capacity(Algorithm::ALL.len());
            let mut combined = Stats::new();
            for algorithm in Algorithm::ALL {
                let bound = match algorithm {
                    Algorithm::Bfs => None,
                    Algorithm::Dfs => config.dfs_depth.map(|depth| depth as f64),
                    Algorithm::Ucs => config.ucs_cost_limit,
                };
                let request = SearchRequest::new(start.as_str(), goal.as_str()).with_bound(bound);
                let (record, stats) = timed_run(algorithm, &graph, request, config.repeat);
                combined = combined.merge(&stats);
                records.push(record);
            }
            let report = ComparisonReport::from_records(&records);

            if config.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "records": &records,
                        "report": &report,
                        "stats": &combined,
                    }))?
                );
            } else {
                println!("Start: {start} | Goal: {goal}");
                for record in &records {
                    print_record(record);
                }
                print_report(&report);
            }
            save_history(&config, &records);
        }

        Command::Locations => {
            let graph = args.campus()?;
            if args.json {
                println!("{}", campus_to_json(&graph));
            } else {
                println!("Locations ({}):", graph.len());
                for location in graph.list_locations() {
                    let neighbors = graph
                        .sorted_neighbors(location.as_str())
                        .into_iter()
                        .map(|(neighbor, weight)| format!("{neighbor} ({weight})"))
                        .collect::<Vec<_>>();
                    if neighbors.is_empty() {
                        println!("  {location}: no connections");
                    } else {
                        println!("  {location} -> {}", neighbors.join(", "));
                    }
                }
            }
        }

        Command::AddLocation { name } => {
            let mut added = false;
            let graph = args.edit_campus(|graph| {
                added = graph.add_location(name.as_str());
                Ok(())
            })?;
            if added {
                println!("Location '{name}' added ({} locations).", graph.len());
            } else {
                println!("Location '{name}' already exists.");
            }
        }

        Command::RemoveLocation { name } => {
            let graph = args.edit_campus(|graph| graph.remove_location(name))?;
            println!("Location '{name}' removed ({} locations left).", graph.len());
        }

        Command::Connect { from, to, weight } => {
            args.edit_campus(|graph| graph.add_connection(from, to, *weight))?;
            println!("Connected '{from}' and '{to}' with weight {weight}.");
        }

        Command::Disconnect { from, to } => {
            args.edit_campus(|graph| graph.remove_connection(from, to))?;
            println!("Connection between '{from}' and '{to}' removed.");
        }

        Command::History => match TextHistoryFile::new(&args.history).read_all()? {
            Some(contents) if !contents.trim().is_empty() => print!("{contents}"),
            _ => println!("No traversal history yet!"),
        },

        Command::Generate {
            nodes,
            edge_probability,
            max_weight,
            seed,
            output,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            let mut rng = StdRng::seed_from_u64(seed);
            let graph = random_campus(&mut rng, *nodes, *edge_probability, *max_weight);
            info!(seed, nodes, "random campus generated");

            match output {
                Some(path) => save_campus(path, &graph)?,
                None => println!("{}", campus_to_json(&graph)),
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init_tracing(args.verbose, args.log_level.as_deref()) {
        eprintln!("warning: logging disabled: {e}");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
