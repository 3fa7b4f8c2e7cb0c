//! # Beam CLI
//!
//! Terminal front end for beam_core. Prompts for a beam, runs the engine and
//! prints reactions, peak values and a coarse table of the response curves,
//! followed by the full result as JSON.
//!
//! Set `RUST_LOG=debug` to see the engine's reaction and integration trace.

use std::io::{self, BufRead, Write};

use beam_core::calculations::{analyze, BeamAnalysis, BeamSpec, SupportKind};
use beam_core::loads::Load;
use beam_core::settings::{AnalysisSettings, MAX_SAMPLE_COUNT};
use log::{info, warn};

/// Rows printed in the text table (the JSON carries every sample)
const TABLE_ROWS: usize = 10;

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    read_line(prompt)
        .and_then(|input| input.parse().ok())
        .unwrap_or(default)
}

/// Typed sample count to an interval count the engine can allocate
fn sample_count_from(raw: f64) -> usize {
    if raw.is_nan() {
        return 1;
    }
    raw.clamp(1.0, MAX_SAMPLE_COUNT as f64) as usize
}

fn prompt_support_kind() -> SupportKind {
    println!("Support configuration:");
    for (index, kind) in SupportKind::ALL.iter().enumerate() {
        println!("  {}) {}", index + 1, kind);
    }
    let choice = read_line("Choose [1]: ")
        .and_then(|input| input.parse::<usize>().ok())
        .unwrap_or(1);
    SupportKind::ALL
        .get(choice.saturating_sub(1))
        .copied()
        .unwrap_or_default()
}

fn prompt_beam() -> BeamSpec {
    let kind = prompt_support_kind();
    let length_m = prompt_f64("Span length (m) [10.0]: ", 10.0);

    let mut spec = match kind {
        SupportKind::Simple => {
            let a = prompt_f64("Pin position (m) [0.0]: ", 0.0);
            let b = prompt_f64(&format!("Roller position (m) [{}]: ", length_m), length_m);
            BeamSpec::simple(length_m, a, b)
        }
        SupportKind::CantileverFixedLeft => {
            let a = prompt_f64("Wall position (m) [0.0]: ", 0.0);
            BeamSpec::cantilever_left(length_m, a)
        }
        SupportKind::CantileverFixedRight => BeamSpec::cantilever_right(length_m),
    };

    let e = prompt_f64("Modulus of elasticity E (GPa) [210.0]: ", spec.elastic_modulus_gpa);
    let i = prompt_f64("Second moment of area I (cm^4) [8356.0]: ", spec.second_moment_cm4);
    spec = spec.with_section(e, i);

    println!();
    println!("Loads: (p)oint, (d)istributed, (m)oment, blank to finish");
    while let Some(load) = prompt_load(length_m) {
        info!("added load {}", load);
        spec.add_load(load);
    }
    spec
}

fn prompt_load(length_m: f64) -> Option<Load> {
    let kind = read_line("Load type: ")?;
    match kind.to_ascii_lowercase().as_str() {
        "p" => {
            let magnitude = prompt_f64("  Magnitude (kN, down +) [10.0]: ", 10.0);
            let position = prompt_f64("  Position (m) [0.0]: ", 0.0);
            Some(Load::point(magnitude, position))
        }
        "d" => {
            let intensity = prompt_f64("  Intensity (kN/m, down +) [2.0]: ", 2.0);
            let position = prompt_f64("  Start (m) [0.0]: ", 0.0);
            let span = prompt_f64(
                &format!("  Loaded length (m) [{}]: ", length_m - position),
                length_m - position,
            );
            Some(Load::distributed(intensity, position, span))
        }
        "m" => {
            let magnitude = prompt_f64("  Magnitude (kN·m, CCW +) [10.0]: ", 10.0);
            let position = prompt_f64("  Position (m) [0.0]: ", 0.0);
            Some(Load::moment(magnitude, position))
        }
        "" => None,
        other => {
            warn!("unknown load type '{}'", other);
            println!("  Unknown load type '{}', expected p, d or m", other);
            prompt_load(length_m)
        }
    }
}

fn print_results(spec: &BeamSpec, analysis: &BeamAnalysis) {
    let reactions = &analysis.reactions;
    let summary = &analysis.summary;

    println!("═══════════════════════════════════════════════════");
    println!("  BEAM ANALYSIS RESULTS");
    println!("═══════════════════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Supports: {}", spec.support_kind);
    println!("  Span:     {:.2} m", spec.length_m);
    println!("  EI:       {:.1} kN·m²", spec.flexural_stiffness_knm2());
    for load in &spec.loads {
        println!("  Load:     {}", load);
    }
    println!();
    println!("Reactions:");
    match spec.support_kind {
        SupportKind::Simple => {
            println!("  R_A = {:.3} kN @ {:.2} m", reactions.vertical_a_kn(), spec.support_a_m);
            println!("  R_B = {:.3} kN @ {:.2} m", reactions.vertical_b_kn(), spec.support_b_m);
        }
        SupportKind::CantileverFixedLeft | SupportKind::CantileverFixedRight => {
            let wall = reactions.fixed_end_position_m(spec).unwrap_or_default();
            println!("  R     = {:.3} kN @ {:.2} m", reactions.total_vertical_kn(), wall);
            println!("  M_wall = {:.3} kN·m (CCW +)", reactions.moment_a_knm());
        }
    }
    println!();
    println!("Peaks:");
    println!("  V_max = {:.3} kN @ {:.2} m", summary.shear_kn.value, summary.shear_kn.position_m);
    println!("  M_max = {:.3} kN·m @ {:.2} m", summary.moment_knm.value, summary.moment_knm.position_m);
    println!("  θ_max = {:.6} rad @ {:.2} m", summary.slope_rad.value, summary.slope_rad.position_m);
    println!("  δ_max = {:.3} mm @ {:.2} m", summary.deflection_mm.value, summary.deflection_mm.position_m);
    if let Some(ratio) = summary.span_deflection_ratio(spec.length_m) {
        println!("  L/δ   = {:.0}", ratio);
    }
    println!();
    println!("{:>8} {:>12} {:>12} {:>12} {:>12}", "x (m)", "V (kN)", "M (kN·m)", "θ (rad)", "δ (mm)");
    let step = (analysis.diagrams.len() / TABLE_ROWS).max(1);
    let samples = analysis.diagrams.samples();
    for (index, sample) in samples.iter().enumerate() {
        if index % step == 0 || index + 1 == samples.len() {
            println!(
                "{:>8.3} {:>12.3} {:>12.3} {:>12.6} {:>12.3}",
                sample.position_m, sample.shear_kn, sample.moment_knm, sample.slope_rad, sample.deflection_mm
            );
        }
    }
    println!("═══════════════════════════════════════════════════");
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Beam CLI - Shear, Moment & Deflection");
    println!("=====================================");
    println!();

    let spec = prompt_beam();
    let sample_count = sample_count_from(prompt_f64("Sample count [200]: ", 200.0));
    let settings = AnalysisSettings::default().with_sample_count(sample_count);
    println!();

    if let Err(e) = spec.validate() {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        return;
    }

    let analysis = analyze(&spec, &settings);
    print_results(&spec, &analysis);

    println!();
    println!("JSON Output:");
    match serde_json::to_string_pretty(&analysis) {
        Ok(json) => println!("{}", json),
        Err(e) => warn!("could not serialize results: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_bounds() {
        assert_eq!(sample_count_from(200.0), 200);
        assert_eq!(sample_count_from(0.0), 1);
        assert_eq!(sample_count_from(-5.0), 1);
        assert_eq!(sample_count_from(f64::NAN), 1);
        assert_eq!(sample_count_from(f64::INFINITY), MAX_SAMPLE_COUNT);
        assert_eq!(sample_count_from(1.0e20), MAX_SAMPLE_COUNT);
    }
}
