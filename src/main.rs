mod config;
mod error;
mod naming;
mod options;
mod output;
mod sweep;

use std::io;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    let base = config.raw_options();

    if let Some(table) = &config.sweep {
        let jobs = match sweep::run_sweep(table, &base) {
            Ok(jobs) => jobs,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        output::write_manifest(&config.manifest, &jobs)?;
        println!("Wrote {} jobs to {}", jobs.len(), config.manifest);
        return Ok(());
    }

    let job = match options::resolve(&base) {
        Ok(job) => job,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut stdout = io::stdout().lock();
    if config.json {
        output::write_json(&mut stdout, &job)?;
    } else {
        output::write_text(&mut stdout, &job)?;
    }

    Ok(())
}
