use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;
use spdi_reach::model::SpdiSystem;
use spdi_reach::solver::{AmfSearch, SolverConfig};

#[derive(Parser)]
#[command(name = "spdi_reach")]
#[command(about = "Decide interval-to-interval reachability in an SPDI edge graph")]
struct Args {
    /// Path to an SPDI system file (.json)
    #[arg(value_name = "FILE")]
    file: String,

    /// Number of additional worker threads (default: available parallelism minus one)
    #[arg(long, require_equals = true)]
    budget: Option<usize>,

    /// Abort the search once a single cycle needs more than this many direct iterations
    #[arg(long, require_equals = true)]
    max_cycle_iterations: Option<usize>,

    /// Logging verbosity (use -v for info, or -v=LEVEL for specific level)
    #[arg(long, short = 'v', value_name = "LEVEL", num_args = 0..=1, default_missing_value = "info", require_equals = true)]
    verbose: Option<Option<LogLevel>>,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
        }
    }
}

fn main() {
    let args = Args::parse();

    // Configure logging:
    // Handle verbose flag: None = not specified, Some(None) = specified without value (defaults to info), Some(Some(level)) = specified with value
    let log_level = match args.verbose {
        None => LevelFilter::Off,
        Some(None) => LevelFilter::Info, // --verbose or -v without value
        Some(Some(level)) => level.into(), // --verbose=level or -v level
    };
    Builder::from_default_env().filter_level(log_level).init();

    // Load the SPDI system file
    let system = SpdiSystem::try_from_file(&args.file).unwrap_or_else(|e| {
        eprintln!("Failed to load SPDI model {}: {}", args.file, e);
        std::process::exit(1);
    });

    println!(
        "Loaded SPDI model with {} edges ({} start parts, {} final parts).",
        system.graph.num_edges(),
        system.task.start_edge_parts.len(),
        system.task.final_edge_parts.len()
    );

    let mut config = SolverConfig::new(system.graph);
    if let Some(budget) = args.budget {
        config.worker_budget = budget;
    }
    if let Some(limit) = args.max_cycle_iterations {
        config.max_cycle_iterations = limit;
    }

    match AmfSearch::explore(&config, &system.task) {
        Ok(true) => println!("The final region is reachable."),
        Ok(false) => println!("The final region is not reachable."),
        Err(e) => {
            eprintln!("Search canceled: {}", e);
            std::process::exit(1);
        }
    }
}
