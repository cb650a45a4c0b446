use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use health_score::config::{self, Config, OutputFormat};
use health_score::region::{self, RegionTable};
use health_score::scoring::{ScoreEngine, ScoreError};
use health_score::{input, output, telemetry};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the health score for an input file
    Score {
        /// Path to a YAML input file (create one with `init`)
        input: PathBuf,

        /// Output format (defaults to the config file's format, then text)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// List the known regions with their metrics and adjustment window
    Regions {
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Interactively create an input file
    Init {
        /// Where to write the input file
        #[arg(default_value = "health-input.yaml")]
        path: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "health-score")]
#[command(about = "Composite health score with Indian state context", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and score breakdowns
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/health-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let config = match config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let level = telemetry::resolve_level(cli.verbose, config.log_level.as_deref());
    if let Err(e) = telemetry::init(&level) {
        eprintln!("Config error: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    let table = match load_region_table(&config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Region table error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    let engine = ScoreEngine::new(table);

    let code = match cli.command {
        Commands::Score {
            input,
            format,
            no_color,
        } => {
            let format = format.or(config.format).unwrap_or_default();
            run_score(&engine, &input, format, no_color, cli.verbose)
        }
        Commands::Regions { no_color } => {
            let use_colors = !no_color && output::should_use_colors();
            println!("{}", output::format_regions(engine.table(), use_colors));
            EXIT_SUCCESS
        }
        Commands::Init { path } => match input::run_init_wizard(&path, engine.table()) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                eprintln!("Init failed: {:#}", e);
                EXIT_CONFIG
            }
        },
    };

    std::process::exit(code);
}

fn load_region_table(config: &Config) -> anyhow::Result<Arc<RegionTable>> {
    match &config.regions_file {
        Some(path) => {
            let path = config::expand_home(path);
            Ok(Arc::new(region::load_table(&path)?))
        }
        None => Ok(region::builtin_table()),
    }
}

fn run_score(
    engine: &ScoreEngine,
    path: &std::path::Path,
    format: OutputFormat,
    no_color: bool,
    verbose: bool,
) -> i32 {
    let health_input = match input::load_input(path) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    let score = match engine.compute_score(&health_input) {
        Ok(s) => s,
        Err(ScoreError::InvalidRegion(region)) => {
            let known: Vec<&str> = engine.table().names().collect();
            eprintln!("Unknown region '{}'. Known regions: {}", region, known.join(", "));
            return EXIT_INVALID_INPUT;
        }
        Err(ScoreError::InvalidInput(errors)) => {
            eprintln!("Invalid input:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            return EXIT_INVALID_INPUT;
        }
    };

    match format {
        OutputFormat::Text => {
            let use_colors = !no_color && output::should_use_colors();
            println!("{}", output::format_report(&score, use_colors));
            if verbose {
                eprintln!();
                eprintln!("{}", output::format_breakdown(&score));
            }
        }
        OutputFormat::Json => match output::format_json(&score) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize score: {}", e);
                return EXIT_CONFIG;
            }
        },
        OutputFormat::Tsv => println!("{}", output::format_tsv(&score)),
    }

    EXIT_SUCCESS
}
