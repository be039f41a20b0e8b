//! # resultsgen
//!
//! A CLI tool for publishing results pages from season spreadsheet exports.
//!
//! ## Overview
//!
//! resultsgen is built on top of resultsgenlib. Each named range of the season
//! workbook is exported as `<RangeName>.csv` into one directory; every
//! subcommand reads the tables it needs from there and writes one document
//! into the output directory.
//!
//! ## Usage
//!
//! ```bash
//! # Summary of every event
//! resultsgen events-json --source exports/2024 --out site/
//!
//! # One event with organizers and races
//! resultsgen event-json --source exports/2024 --event-id 10 --event-reference 2024-lisboa
//!
//! # Results files list of an event
//! resultsgen results-files --source exports/2024 --year 2024 --event-id 10 --event-reference 2024-lisboa
//!
//! # Results table of one race, read from a separate results export
//! resultsgen results-table --source exports/2024 --results-source exports/results \
//!     --range R005 --race-reference 2024-lisboa-elite
//!
//! # Live results tabs and EventON resources
//! resultsgen live-results --source exports/2024 --event-reference 2024-lisboa
//! resultsgen event-on --source exports/2024 --year 2024 --event-id 10 --event-reference 2024-lisboa
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use resultsgenlib::{
    generate, Artifact, CsvDirectorySource, DirectorySink, GenerationParams, Presentation, Sources,
};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Arguments every subcommand accepts
fn common_args() -> Vec<Arg> {
    vec![
        Arg::new("source")
            .short('s')
            .long("source")
            .value_parser(clap::value_parser!(PathBuf))
            .default_value(".")
            .help("Directory holding one CSV export per named range"),
        Arg::new("results-source")
            .long("results-source")
            .value_parser(clap::value_parser!(PathBuf))
            .help("Directory holding the results ranges (defaults to --source)"),
        Arg::new("out")
            .short('o')
            .long("out")
            .value_parser(clap::value_parser!(PathBuf))
            .default_value(".")
            .help("Directory the generated file is written to"),
        Arg::new("presentation")
            .short('p')
            .long("presentation")
            .value_parser(clap::value_parser!(PathBuf))
            .help("TOML file with column labels and icons"),
        Arg::new("files-base-url")
            .long("files-base-url")
            .help("Root URL the event files are served from"),
        Arg::new("year")
            .short('y')
            .long("year")
            .help("Season year of the event"),
        Arg::new("event-id")
            .short('e')
            .long("event-id")
            .help("Event id in the Event table"),
        Arg::new("event-reference")
            .short('r')
            .long("event-reference")
            .help("Event reference, used for file names and URLs"),
        Arg::new("race-reference")
            .long("race-reference")
            .help("Race reference, used for the results table file name"),
        Arg::new("range")
            .long("range")
            .help("Named range holding the race results"),
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .help("Increase log verbosity (-v info, -vv debug)"),
    ]
}

fn about(artifact: Artifact) -> &'static str {
    match artifact {
        Artifact::EventsJson => "Write events.json with every event summary",
        Artifact::EventJson => "Write <event-reference>.json with organizers and races",
        Artifact::ResultsFiles => "Write <event-reference>.html listing the results files",
        Artifact::ResultsTable => "Write <race-reference>.html with the race results table",
        Artifact::LiveResults => "Write <event-reference>-LIVE.html with live results tabs",
        Artifact::EventResources => "Write <event-reference>-EventON.html with event resources",
    }
}

/// Build the clap Command structure
fn build_command() -> Command {
    Artifact::ALL.into_iter().fold(
        Command::new("resultsgen")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Generate results-site HTML fragments and JSON documents")
            .subcommand_required(true)
            .arg_required_else_help(true),
        |cmd, artifact| {
            cmd.subcommand(
                Command::new(artifact.name())
                    .about(about(artifact))
                    .args(common_args()),
            )
        },
    )
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("resultsgenlib={level},resultsgen={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Build generation parameters from matches
fn extract_params(matches: &ArgMatches) -> GenerationParams {
    let mut params = GenerationParams::new();
    if let Some(year) = matches.get_one::<String>("year") {
        params = params.event_year(year);
    }
    if let Some(id) = matches.get_one::<String>("event-id") {
        params = params.event_id(id);
    }
    if let Some(reference) = matches.get_one::<String>("event-reference") {
        params = params.event_reference(reference);
    }
    if let Some(reference) = matches.get_one::<String>("race-reference") {
        params = params.race_reference(reference);
    }
    if let Some(range) = matches.get_one::<String>("range") {
        params = params.results_range(range);
    }
    if let Some(url) = matches.get_one::<String>("files-base-url") {
        params = params.files_base_url(url);
    }
    params
}

/// Load the presentation file, or the built-in labels
fn load_presentation(matches: &ArgMatches) -> Result<Presentation, anyhow::Error> {
    match matches.get_one::<PathBuf>("presentation") {
        Some(path) => Ok(Presentation::load(path)?),
        None => Ok(Presentation::default()),
    }
}

/// Handler shared by every subcommand. Returns the file name written.
fn generate_handler(artifact: Artifact, matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let source_dir = matches
        .get_one::<PathBuf>("source")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));
    let results_dir = matches
        .get_one::<PathBuf>("results-source")
        .cloned()
        .unwrap_or_else(|| source_dir.clone());
    let out_dir = matches
        .get_one::<PathBuf>("out")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));

    let database = CsvDirectorySource::new(&source_dir);
    let results = CsvDirectorySource::new(&results_dir);
    let sink = DirectorySink::new(&out_dir);
    let presentation = load_presentation(matches)?;
    let params = extract_params(matches);

    let sources = Sources {
        database: &database,
        results: &results,
    };
    let file_name = generate(artifact, sources, &sink, &params, &presentation)?;
    Ok(file_name)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let Some((name, sub_matches)) = matches.subcommand() else {
        return ExitCode::FAILURE;
    };

    init_logging(sub_matches.get_count("verbose"));

    let artifact = match name.parse::<Artifact>() {
        Ok(artifact) => artifact,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match generate_handler(artifact, sub_matches) {
        Ok(file_name) => {
            println!("{} {}", Style::new().bold().apply_to("Wrote"), file_name);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
