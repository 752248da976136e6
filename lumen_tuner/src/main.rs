// Lumen parameter tuner — CLI entry point.
//
// Replays the generation contract for a batch of seeds, scores every
// draw, and prints an aggregate health report for the parameter bounds.
// The report is advisory output for design-time tuning; the run always
// exits successfully.
//
// Usage:
//   cargo run -p lumen_tuner -- [--count N] [--prefix STEM] [--targets FILE]
//
// `--targets` points at a TuneTargets JSON; missing or unreadable files
// fall back to the built-in defaults.

use lumen_tuner::{TuneTargets, evaluate_seeds_with_targets};
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let count: usize = parse_flag(&args, "--count").unwrap_or(10);
    let prefix: String = parse_flag(&args, "--prefix").unwrap_or_else(|| "artwork".to_string());
    let targets_path: Option<String> = parse_flag(&args, "--targets");

    println!("=== Lumen Parameter Tuner ===");
    println!("Seeds: {count} ({prefix}-0 .. {prefix}-{})", count.saturating_sub(1));

    let targets = load_targets(targets_path.as_deref());
    println!();

    println!("[1/2] Evaluating {count} seeds...");
    let seeds: Vec<String> = (0..count).map(|i| format!("{prefix}-{i}")).collect();
    let report = evaluate_seeds_with_targets(&seeds, &targets);

    println!("[2/2] Report");
    println!();
    for result in &report.results {
        let p = &result.params;
        println!(
            "  {:16} bursts={} particles={:3} energy={:.3} trails={} density={:.3} asymmetry={:.3} -> {:3} ({})",
            result.seed,
            p.burst_count,
            p.particle_count,
            p.energy_intensity,
            p.trail_length,
            p.connection_density,
            p.asymmetry,
            result.score,
            result.verdict.label()
        );
    }

    println!();
    println!("Mean score: {:.1}", report.mean_score);
    println!(
        "Gallery-worthy: {}  Acceptable: {}  Needs work: {}",
        report.gallery_worthy, report.acceptable, report.needs_work
    );
    let avg = &report.averages;
    println!(
        "Averages: bursts {:.2}, particles {:.1}, energy {:.3}, trails {:.2}, density {:.3}, asymmetry {:.3}",
        avg.burst_count,
        avg.particle_count,
        avg.energy_intensity,
        avg.trail_length,
        avg.connection_density,
        avg.asymmetry
    );

    println!();
    if report.recommendations.is_empty() {
        println!("No tuning changes recommended.");
    } else {
        println!("Recommendations:");
        for rec in &report.recommendations {
            println!("  - {rec}");
        }
    }
}

/// Load targets from a JSON file, falling back to defaults on any failure.
fn load_targets(path: Option<&str>) -> TuneTargets {
    let Some(path) = path else {
        println!("Targets: built-in defaults");
        return TuneTargets::default();
    };
    if !Path::new(path).exists() {
        println!("Targets file {path} not found. Using defaults.");
        return TuneTargets::default();
    }
    match std::fs::read_to_string(path) {
        Ok(json) => match TuneTargets::from_json(&json) {
            Ok(targets) => {
                println!("Targets: loaded from {path}");
                targets
            }
            Err(e) => {
                println!("Failed to parse {path}: {e}. Using defaults.");
                TuneTargets::default()
            }
        },
        Err(e) => {
            println!("Failed to read {path}: {e}. Using defaults.");
            TuneTargets::default()
        }
    }
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
