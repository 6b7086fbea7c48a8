use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pt_score::config::Config;
use pt_score::input::{parse_count, parse_run_time, prompt_until};
use pt_score::output::{self, ScoreReport};
use pt_score::{ExerciseInput, Identifier, RecordStore, StoreError};

const EXIT_SUCCESS: i32 = 0;
const EXIT_VALIDATION: i32 = 1;
const EXIT_STORAGE: i32 = 2;
const EXIT_DUPLICATE: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate a score without recording it
    Score {
        /// Number of pushups completed
        #[arg(short, long, value_parser = parse_count)]
        pushups: u32,

        /// Number of situps completed
        #[arg(short, long, value_parser = parse_count)]
        situps: u32,

        /// Run time as M:SS, seconds, or a duration like 9m12s
        #[arg(short, long, value_parser = parse_run_time)]
        run: u32,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score a test and record it under a DoD ID (prompts for anything missing)
    Submit {
        /// Six-digit DoD ID
        id: Option<String>,

        /// Number of pushups completed
        #[arg(short, long, value_parser = parse_count)]
        pushups: Option<u32>,

        /// Number of situps completed
        #[arg(short, long, value_parser = parse_count)]
        situps: Option<u32>,

        /// Run time as M:SS, seconds, or a duration like 9m12s
        #[arg(short, long, value_parser = parse_run_time)]
        run: Option<u32>,
    },
    /// Check whether a DoD ID has already been recorded
    Check {
        /// DoD ID to look up
        id: String,
    },
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "pt-score")]
#[command(about = "Fitness test scoring and score log CLI", long_about = None)]
#[command(version, arg_required_else_help = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/pt-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to the score log (overrides store_path from config)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "pt_score=debug" } else { "pt_score=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        // Only global flags were given
        let _ = Cli::command().print_help();
        std::process::exit(EXIT_SUCCESS);
    };

    let config_path = cli.config.map(PathBuf::from);

    let code = match command {
        Commands::Init { force } => run_init(config_path, force),
        Commands::Score {
            pushups,
            situps,
            run,
            json,
        } => {
            let config = load_config_or_exit(config_path);
            let input = ExerciseInput {
                pushups,
                situps,
                run_seconds: run,
            };
            print_score(&input, json, output::should_use_colors(config.color));
            EXIT_SUCCESS
        }
        Commands::Submit {
            id,
            pushups,
            situps,
            run,
        } => {
            let config = load_config_or_exit(config_path);
            let store_path = resolve_store_path(cli.store, &config);
            run_submit(
                store_path,
                id,
                pushups,
                situps,
                run,
                output::should_use_colors(config.color),
            )
        }
        Commands::Check { id } => {
            let config = load_config_or_exit(config_path);
            let store_path = resolve_store_path(cli.store, &config);
            run_check(store_path, &id, output::should_use_colors(config.color))
        }
    };

    std::process::exit(code);
}

fn load_config_or_exit(path: Option<PathBuf>) -> Config {
    match pt_score::config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}

fn run_init(path: Option<PathBuf>, force: bool) -> i32 {
    let path = match path {
        Some(p) => p,
        None => match pt_score::config::get_config_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {}", e);
                return EXIT_CONFIG;
            }
        },
    };

    if let Err(e) = pt_score::config::write_default_config(&path, force) {
        eprintln!("Config error: {:#}", e);
        return EXIT_CONFIG;
    }
    println!("Wrote default config to {}", path.display());
    EXIT_SUCCESS
}

/// `--store` wins over the config file, which wins over ./pt_scores.csv
fn resolve_store_path(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    let path = flag
        .or_else(|| config.store_path.clone())
        .unwrap_or_else(pt_score::record::get_default_store_path);
    debug!(path = %path.display(), "Using score log");
    path
}

fn print_score(input: &ExerciseInput, json: bool, use_colors: bool) {
    let breakdown = pt_score::score_breakdown(input);
    if json {
        let report = ScoreReport::new(input, breakdown);
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to serialize score: {}", e),
        }
    } else {
        println!("{}", output::format_total(breakdown.total(), use_colors));
        println!("{}", output::format_breakdown(input, &breakdown, use_colors));
    }
}

fn run_submit(
    store_path: PathBuf,
    id: Option<String>,
    pushups: Option<u32>,
    situps: Option<u32>,
    run: Option<u32>,
    use_colors: bool,
) -> i32 {
    // The ID is checked before anything is scored
    let identifier = match id {
        Some(raw) => match Identifier::parse(&raw) {
            Ok(id) => id,
            Err(e) => {
                debug!(?e, "Rejected DoD ID");
                eprintln!("{}", output::format_error(&e.to_string(), use_colors));
                return EXIT_VALIDATION;
            }
        },
        None => match prompt_until("DoD ID: ", |s| Identifier::parse(s).map_err(Into::into)) {
            Ok(id) => id,
            Err(e) => {
                eprintln!("{}", output::format_error(&e.to_string(), use_colors));
                return EXIT_VALIDATION;
            }
        },
    };

    let input = match collect_input(pushups, situps, run) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("{}", output::format_error(&e.to_string(), use_colors));
            return EXIT_VALIDATION;
        }
    };

    let breakdown = pt_score::score_breakdown(&input);
    let total = breakdown.total();
    println!("{}", output::format_total(total, use_colors));

    let mut store = RecordStore::new(store_path);
    match store.append(&identifier, total) {
        Ok(record) => {
            info!(identifier = %record.identifier, total = record.total_score, "Recorded score");
            println!(
                "{}",
                output::format_success(
                    &format!("Recorded DoD ID {} in {}", identifier, store.path().display()),
                    use_colors
                )
            );
            EXIT_SUCCESS
        }
        Err(e @ StoreError::Duplicate { .. }) => {
            eprintln!("{}", output::format_error(&e.to_string(), use_colors));
            EXIT_DUPLICATE
        }
        Err(e) => {
            eprintln!("{}", output::format_error(&format!("Storage error: {}", e), use_colors));
            EXIT_STORAGE
        }
    }
}

fn collect_input(
    pushups: Option<u32>,
    situps: Option<u32>,
    run: Option<u32>,
) -> anyhow::Result<ExerciseInput> {
    let pushups = match pushups {
        Some(n) => n,
        None => prompt_until("Pushups: ", parse_count)?,
    };
    let situps = match situps {
        Some(n) => n,
        None => prompt_until("Situps: ", parse_count)?,
    };
    let run_seconds = match run {
        Some(n) => n,
        None => prompt_until("Run time (M:SS): ", parse_run_time)?,
    };
    Ok(ExerciseInput {
        pushups,
        situps,
        run_seconds,
    })
}

fn run_check(store_path: PathBuf, id: &str, use_colors: bool) -> i32 {
    let store = RecordStore::new(store_path);
    match store.exists(id) {
        Ok(true) => {
            println!("DoD ID {} has already been recorded.", id);
            EXIT_DUPLICATE
        }
        Ok(false) => {
            println!("DoD ID {} has not been recorded.", id);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("{}", output::format_error(&format!("Storage error: {}", e), use_colors));
            EXIT_STORAGE
        }
    }
}
