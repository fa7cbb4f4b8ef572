use crate::options::{Particle, SimEngine, Year};

/// Renders pt without a trailing ".0" for whole values. Magnitudes at or
/// above 1e16 or below 1e-4 switch to exponent form with a signed, two-digit
/// exponent (`1e+20`, `1.5e-05`).
pub fn format_pt(pt: f64) -> String {
    let magnitude = pt.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{:e}", pt);
        if let Some((mantissa, exp)) = sci.split_once('e') {
            if let Ok(exp) = exp.parse::<i32>() {
                let sign = if exp < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exp.abs());
            }
        }
    }
    pt.to_string()
}

pub fn base_name(particle: Particle, pt: f64, mult: i64) -> String {
    format!("{}_pt{}_mult{}", particle, format_pt(pt), mult)
}

/// Output name for the generation stage.
pub fn gen_name(base: &str, max_events_in: i64) -> String {
    format!("gen_{}_n{}", base, max_events_in)
}

/// Output name for the simulation stage.
pub fn sim_name(
    sim: SimEngine,
    year: Year,
    base: &str,
    max_events: i64,
    threads: i64,
    streams: i64,
) -> String {
    format!(
        "sim_{}_year{}_{}_n{}_th{}_st{}",
        sim, year, base, max_events, threads, streams
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_rendering() {
        assert_eq!(base_name(Particle::Electron, 1.0, 1), "electron_pt1_mult1");
        assert_eq!(base_name(Particle::Photon, 2.5, 3), "photon_pt2.5_mult3");
        assert_eq!(base_name(Particle::Photon, 0.1, 10), "photon_pt0.1_mult10");
        assert_eq!(base_name(Particle::Electron, 1.0, -1), "electron_pt1_mult-1");
    }

    #[test]
    fn test_pt_exponent_form() {
        assert_eq!(format_pt(1e20), "1e+20");
        assert_eq!(format_pt(1e16), "1e+16");
        assert_eq!(format_pt(2.5e17), "2.5e+17");
        assert_eq!(format_pt(1.5e-5), "1.5e-05");
        assert_eq!(format_pt(0.0001), "0.0001");
        assert_eq!(format_pt(0.0), "0");
        assert_eq!(format_pt(1e15), "1000000000000000");
        assert_eq!(
            base_name(Particle::Electron, 1e20, 1),
            "electron_pt1e+20_mult1"
        );
    }

    #[test]
    fn test_gen_and_sim_names() {
        let base = base_name(Particle::Electron, 50.0, 2);
        assert_eq!(gen_name(&base, -1), "gen_electron_pt50_mult2_n-1");
        assert_eq!(
            sim_name(SimEngine::GeantV, Year::Y2023, &base, 1000, 8, 16),
            "sim_GeantV_year2023_electron_pt50_mult2_n1000_th8_st16"
        );
    }
}
