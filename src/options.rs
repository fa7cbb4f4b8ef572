use crate::error::OptionsError;
use crate::naming;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Primary particle fired by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Particle {
    Electron,
    Photon,
}

impl Particle {
    /// Particle Data Group code.
    pub fn pdg_id(self) -> i32 {
        match self {
            Particle::Electron => 11,
            Particle::Photon => 22,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Particle::Electron => "electron",
            Particle::Photon => "photon",
        }
    }
}

impl FromStr for Particle {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electron" => Ok(Particle::Electron),
            "photon" => Ok(Particle::Photon),
            other => Err(OptionsError::UnsupportedParticle(other.to_string())),
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimEngine {
    Geant4,
    GeantV,
}

impl FromStr for SimEngine {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Geant4" => Ok(SimEngine::Geant4),
            "GeantV" => Ok(SimEngine::GeantV),
            other => Err(OptionsError::UnsupportedSimEngine(other.to_string())),
        }
    }
}

impl fmt::Display for SimEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEngine::Geant4 => f.write_str("Geant4"),
            SimEngine::GeantV => f.write_str("GeantV"),
        }
    }
}

/// Detector geometry scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u16")]
pub enum Year {
    Y2018,
    Y2023,
}

impl TryFrom<i64> for Year {
    type Error = OptionsError;

    fn try_from(year: i64) -> Result<Self, Self::Error> {
        match year {
            2018 => Ok(Year::Y2018),
            2023 => Ok(Year::Y2023),
            other => Err(OptionsError::UnsupportedYear(other)),
        }
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> u16 {
        match year {
            Year::Y2018 => 2018,
            Year::Y2023 => 2023,
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u16::from(*self))
    }
}

/// Options as supplied, before validation.
///
/// `streams` and `max_events_in` are unset when the user leaves them to be
/// inherited. The historical sentinels (`0` streams, `-1` input events) are
/// accepted and mean the same thing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawOptions {
    pub particle: String,
    pub mult: i64,
    pub pt: f64,
    pub sim: String,
    pub threads: i64,
    pub streams: Option<i64>,
    pub year: i64,
    pub max_events: i64,
    pub max_events_in: Option<i64>,
}

impl Default for RawOptions {
    fn default() -> Self {
        Self {
            particle: "electron".to_string(),
            mult: 1,
            pt: 1.0,
            sim: "Geant4".to_string(),
            threads: 1,
            streams: None,
            year: 2018,
            max_events: -1,
            max_events_in: None,
        }
    }
}

/// A fully validated job configuration with its derived output names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOptions {
    pub particle: Particle,
    pub pdgid: i32,
    pub mult: i64,
    pub pt: f64,
    pub sim: SimEngine,
    pub threads: i64,
    pub streams: i64,
    pub year: Year,
    pub max_events: i64,
    pub max_events_in: i64,
    pub genname: String,
    pub simname: String,
}

const STREAMS_UNSET: i64 = 0;
const MAX_EVENTS_IN_UNSET: i64 = -1;

/// Validates `raw` and derives every dependent field.
///
/// Checks run in a fixed order (particle, sim, year, pt) and the first
/// failure is returned.
pub fn resolve(raw: &RawOptions) -> Result<JobOptions, OptionsError> {
    let particle: Particle = raw.particle.parse()?;
    let sim: SimEngine = raw.sim.parse()?;
    let year = Year::try_from(raw.year)?;
    if !raw.pt.is_finite() {
        return Err(OptionsError::NonFinitePt(raw.pt));
    }

    let streams = match raw.streams.filter(|&s| s != STREAMS_UNSET) {
        Some(streams) => streams,
        None => {
            debug!(threads = raw.threads, "streams unset, inheriting thread count");
            raw.threads
        }
    };

    let max_events_in = match raw.max_events_in.filter(|&n| n != MAX_EVENTS_IN_UNSET) {
        Some(n) => n,
        None => {
            debug!(max_events = raw.max_events, "maxEventsIn unset, inheriting maxEvents");
            raw.max_events
        }
    };

    let base = naming::base_name(particle, raw.pt, raw.mult);
    let genname = naming::gen_name(&base, max_events_in);
    let simname = naming::sim_name(sim, year, &base, raw.max_events, raw.threads, streams);

    info!(%particle, %sim, %year, %genname, %simname, "resolved job options");

    Ok(JobOptions {
        particle,
        pdgid: particle.pdg_id(),
        mult: raw.mult,
        pt: raw.pt,
        sim,
        threads: raw.threads,
        streams,
        year,
        max_events: raw.max_events,
        max_events_in,
        genname,
        simname,
    })
}
