// Enable warnings for all clippy lints.
#![warn(
    clippy::correctness,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::cargo,
    clippy::restriction
)]
// Selectively disable warnings for some lints.
#![allow(
    clippy::indexing_slicing, // Allow `vec[i]` indexing.
    clippy::module_name_repetitions,  // Allow name repetitions in module and type names.
    clippy::use_debug, // Debug formatting is useful.
    clippy::multiple_crate_versions, // Beyond our control.
    clippy::missing_docs_in_private_items, // Disabled.
    clippy::missing_inline_in_public_items, // Not considered for now.
    clippy::implicit_return, // Allow.
    clippy::use_self, // Too pedantic.
    clippy::shadow_same,
    clippy::result_expect_used,
    clippy::unknown_clippy_lints
)]
// Mark some lints as errors.
#![deny(clippy::print_stdout)]

use clap::{arg_enum, value_t, App, Arg, ArgMatches};
use log::{info, Level};
use sccbench::benchmark::report::{GraphSource, ReportCase};
use sccbench::benchmark::{BenchmarkConfig, BenchmarkRequest, BenchmarkTarget};
use sccbench::error::SccError;
use sccbench::graph::loader::{EdgeFileFormat, DEFAULT_SEPARATOR};
use sccbench::util::logger::init_logger_with_level;
use sccbench::util::timer::GsTimer;

const DEFAULT_SEED: u64 = 42;

arg_enum! {
    #[derive(PartialEq, Debug)]
    pub enum LogLevel {
        Error,
        Warn,
        Info,
        Debug,
        Trace,
    }
}

fn main() -> Result<(), SccError> {
    // Parse command line arguments.
    let matches = App::new("sccbench")
        .about("Compares Tarjan, Gabow and Kosaraju-Sharir strongly connected components")
        .arg(
            Arg::from_usage("-l, --loglevel=[LEVEL] 'Set the log level'")
                .possible_values(&LogLevel::variants())
                .case_insensitive(true),
        )
        .arg(
            Arg::from_usage("-c, --case=[CASE] 'Report to run: (a) constant edges, (b) density'")
                .possible_values(&["a", "b"])
                .case_insensitive(true)
                .conflicts_with("graph"),
        )
        .arg(
            Arg::from_usage("-g, --graph=[FILE] 'Benchmark a single edge file'")
                .required_unless("case"),
        )
        .args_from_usage(
            "-n, --vertices=[N] 'Vertex count of the edge file (default: largest id + 1)'
             -d, --dir=[DIR] 'Read report graphs from this directory instead of generating them'
             -s, --seed=[SEED] 'Seed for generated report graphs'
             --separator=[CHAR] 'Field separator of edge files'
             --headers 'Edge files start with a header line'
             -p, --parallel 'Run the three engines on separate threads'
             -v, --verify 'Check that all engines return the same components'
             -o, --output=[FILE] 'Also write the timing tables to this file'",
        )
        .get_matches();

    setup_logger(&matches)?;

    let request = BenchmarkRequest::new(
        parse_target(&matches)?,
        BenchmarkConfig::new(matches.is_present("verify"), matches.is_present("parallel")),
        matches.value_of("output").map(ToString::to_string),
    );

    let timer = GsTimer::now();
    match sccbench::run_benchmark(&request) {
        Ok(summary) => {
            info!("[Success][{}] {}", timer.elapsed().to_seconds_string(), summary);
            Ok(())
        }
        Err(e) => {
            info!("[Error][{}] {}", timer.elapsed().to_seconds_string(), e);
            Err(e)
        }
    }
}

fn parse_target(matches: &ArgMatches) -> Result<BenchmarkTarget, SccError> {
    if let Some(case) = matches.value_of("case") {
        let source = if let Some(dir) = matches.value_of("dir") {
            GraphSource::Directory(dir.to_string())
        } else {
            GraphSource::Generated { seed: parse_number(matches, "seed")?.unwrap_or(DEFAULT_SEED) }
        };
        return Ok(BenchmarkTarget::Report { case: case.parse::<ReportCase>()?, source });
    }

    let path = matches
        .value_of("graph")
        .ok_or_else(|| SccError::Generic("Either a graph file or a case is needed".to_string()))?;
    let separator = match matches.value_of("separator") {
        Some("\\t") | Some("tab") => b'\t',
        Some(value) if value.len() == 1 => value.as_bytes()[0],
        Some(value) => {
            return Err(SccError::Generic(format!("Separator '{}' is not a single byte", value)));
        }
        None => DEFAULT_SEPARATOR,
    };
    let has_headers = matches.is_present("headers");
    Ok(BenchmarkTarget::File {
        path: path.to_string(),
        vertex_count: parse_number(matches, "vertices")?,
        format: EdgeFileFormat::new(separator, has_headers),
    })
}

fn parse_number<T: std::str::FromStr>(
    matches: &ArgMatches,
    name: &str,
) -> Result<Option<T>, SccError> {
    matches
        .value_of(name)
        .map(|value| {
            value.parse::<T>().map_err(|_| {
                SccError::Generic(format!("Invalid value '{}' for '--{}'", value, name))
            })
        })
        .transpose()
}

fn setup_logger(matches: &ArgMatches) -> Result<(), SccError> {
    // Set log level.
    let log_level = match value_t!(matches, "loglevel", LogLevel).unwrap_or(LogLevel::Info) {
        LogLevel::Error => Level::Error,
        LogLevel::Warn => Level::Warn,
        LogLevel::Info => Level::Info,
        LogLevel::Debug => Level::Debug,
        LogLevel::Trace => Level::Trace,
    };
    init_logger_with_level(log_level)
}
