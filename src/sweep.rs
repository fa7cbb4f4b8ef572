use crate::error::SweepError;
use crate::options::{JobOptions, RawOptions, resolve};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// One row of a sweep table. Empty cells and absent columns are `None` and
/// fall back to the command-line value. Unknown columns are rejected.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SweepRow {
    pub particle: Option<String>,
    pub mult: Option<i64>,
    pub pt: Option<f64>,
    pub sim: Option<String>,
    pub threads: Option<i64>,
    pub streams: Option<i64>,
    pub year: Option<i64>,
    pub max_events: Option<i64>,
    pub max_events_in: Option<i64>,
}

impl SweepRow {
    pub fn apply(&self, base: &RawOptions) -> RawOptions {
        RawOptions {
            particle: self.particle.clone().unwrap_or_else(|| base.particle.clone()),
            mult: self.mult.unwrap_or(base.mult),
            pt: self.pt.unwrap_or(base.pt),
            sim: self.sim.clone().unwrap_or_else(|| base.sim.clone()),
            threads: self.threads.unwrap_or(base.threads),
            streams: self.streams.or(base.streams),
            year: self.year.unwrap_or(base.year),
            max_events: self.max_events.unwrap_or(base.max_events),
            max_events_in: self.max_events_in.or(base.max_events_in),
        }
    }
}

pub fn read_rows<R: Read>(reader: R) -> Result<Vec<SweepRow>, SweepError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: SweepRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Resolves every row against `base` in input order, stopping at the first
/// invalid row (reported 1-based).
pub fn resolve_rows(
    rows: &[SweepRow],
    base: &RawOptions,
) -> Result<Vec<JobOptions>, SweepError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            resolve(&row.apply(base)).map_err(|source| SweepError::Row { row: i + 1, source })
        })
        .collect()
}

pub fn run_sweep<P: AsRef<Path>>(
    path: P,
    base: &RawOptions,
) -> Result<Vec<JobOptions>, SweepError> {
    let rows = read_rows(File::open(path)?)?;
    let jobs = resolve_rows(&rows, base)?;
    info!(jobs = jobs.len(), "sweep resolved");
    Ok(jobs)
}
