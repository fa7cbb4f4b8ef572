use crate::options::JobOptions;
use csv::Writer;
use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes the resolved job as `key: value` lines.
pub fn write_text<W: Write>(out: &mut W, job: &JobOptions) -> std::io::Result<()> {
    writeln!(out, "pdgid: {}", job.pdgid)?;
    writeln!(out, "genname: {}", job.genname)?;
    writeln!(out, "simname: {}", job.simname)?;
    writeln!(out, "streams: {}", job.streams)?;
    writeln!(out, "maxEventsIn: {}", job.max_events_in)?;
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, job: &JobOptions) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut *out, job)?;
    writeln!(out)?;
    Ok(())
}

/// Writes one manifest row per job, creating the parent directory if needed.
pub fn write_manifest<P: AsRef<Path>>(path: P, jobs: &[JobOptions]) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = Writer::from_path(path)?;
    for job in jobs {
        wtr.serialize(job)?;
    }
    wtr.flush()?;
    Ok(())
}
