use crate::options::RawOptions;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

const JOB_OPTIONS: &str = "Job options";

/// Resolves simulation job options and derives the gen/sim output file names.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Primary particle: "electron" or "photon".
    #[arg(long, default_value = "electron", help_heading = JOB_OPTIONS)]
    pub particle: String,

    /// Number of particles per event.
    #[arg(
        long,
        default_value_t = 1,
        allow_negative_numbers = true,
        help_heading = JOB_OPTIONS
    )]
    pub mult: i64,

    /// Transverse momentum of each particle.
    #[arg(
        long,
        default_value_t = 1.0,
        allow_negative_numbers = true,
        help_heading = JOB_OPTIONS
    )]
    pub pt: f64,

    /// Simulation engine: "Geant4" or "GeantV".
    #[arg(long, default_value = "Geant4", help_heading = JOB_OPTIONS)]
    pub sim: String,

    /// Worker thread count.
    #[arg(
        long,
        default_value_t = 1,
        allow_negative_numbers = true,
        help_heading = JOB_OPTIONS
    )]
    pub threads: i64,

    /// Concurrent stream count. Defaults to the thread count; 0 means the same.
    #[arg(long, allow_negative_numbers = true, help_heading = JOB_OPTIONS)]
    pub streams: Option<i64>,

    /// Detector geometry year: 2018 or 2023.
    #[arg(
        long,
        default_value_t = 2018,
        allow_negative_numbers = true,
        help_heading = JOB_OPTIONS
    )]
    pub year: i64,

    /// Number of events to simulate (-1 for all).
    #[arg(
        long = "maxEvents",
        visible_alias = "max-events",
        default_value_t = -1,
        allow_negative_numbers = true,
        help_heading = JOB_OPTIONS
    )]
    pub max_events: i64,

    /// Number of input events to generate. Defaults to maxEvents; -1 means the same.
    #[arg(
        long = "maxEventsIn",
        visible_alias = "max-events-in",
        allow_negative_numbers = true,
        help_heading = JOB_OPTIONS
    )]
    pub max_events_in: Option<i64>,

    /// Print the resolved job as JSON.
    #[arg(long)]
    pub json: bool,

    /// CSV table of jobs to resolve; each row overrides the values above.
    #[arg(long)]
    pub sweep: Option<String>,

    /// Output path of the manifest written by --sweep.
    #[arg(long, default_value = "manifest.csv")]
    pub manifest: String,
}

impl Config {
    /// Parses the process arguments, accepting bare `name=value` tokens.
    pub fn from_env() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn raw_options(&self) -> RawOptions {
        RawOptions {
            particle: self.particle.clone(),
            mult: self.mult,
            pt: self.pt,
            sim: self.sim.clone(),
            threads: self.threads,
            streams: self.streams,
            year: self.year,
            max_events: self.max_events,
            max_events_in: self.max_events_in,
        }
    }
}

/// Rewrites `name=value` into `--name=value` when `name` is a job option
/// flag. The first item (the binary name), non-UTF-8 arguments and anything
/// else pass through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Config::command();
    let is_job_option = |name: &str| {
        command
            .get_arguments()
            .filter(|arg| arg.get_help_heading() == Some(JOB_OPTIONS))
            .any(|arg| {
                arg.get_long_and_visible_aliases()
                    .is_some_and(|names| names.contains(&name))
            })
    };

    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    for arg in args {
        let rewritten = arg.to_str().and_then(|text| match text.split_once('=') {
            Some((name, _)) if !text.starts_with('-') && is_job_option(name) => {
                Some(OsString::from(format!("--{}", text)))
            }
            _ => None,
        });
        normalized.push(rewritten.unwrap_or(arg));
    }
    normalized
}
