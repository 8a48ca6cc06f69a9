//! tt — enumerate all valid weekly schedules from a course catalog.
//!
//! Reads a course catalog CSV, searches every combination of `num_courses`
//! offerings, and emits each schedule that survives the blocked-day,
//! overlap, travel-gap, and credit rules: a text block on stdout plus one
//! `schedule_N.svg` in the output directory.
//!
//! ```text
//! tt catalog.csv 4 --block FRI --include Algorithms --out-dir schedules
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tt_catalog::load_courses_csv;
use tt_render::{SearchOutputObserver, SvgRenderer, TextReporter};
use tt_solve::{ConstraintSet, generate};

#[derive(Parser)]
#[command(name = "tt", version, about = "Enumerate all valid weekly course schedules")]
struct Cli {
    /// Course catalog CSV: name,session1,session2,location,credits.
    catalog: PathBuf,

    /// Number of courses in each schedule.
    num_courses: usize,

    /// Day to keep free of sessions (repeatable, e.g. --block FRI).
    #[arg(long = "block", value_name = "DAY")]
    block: Vec<String>,

    /// Course that must appear in every schedule (repeatable).
    #[arg(long = "include", value_name = "NAME")]
    include: Vec<String>,

    /// Directory for the rendered schedule images.
    #[arg(long, value_name = "DIR", default_value = "schedules")]
    out_dir: PathBuf,
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let courses = load_courses_csv(&cli.catalog)
        .with_context(|| format!("failed to load catalog {}", cli.catalog.display()))?;

    // Day matching is exact-string, so normalization happens here at the
    // boundary rather than inside the validator.
    let blocked: Vec<String> = cli.block.iter().map(|d| d.trim().to_ascii_uppercase()).collect();
    let rules = ConstraintSet::with_blocked_days(blocked);

    let renderer = SvgRenderer::new(&cli.out_dir)
        .with_context(|| format!("failed to prepare output directory {}", cli.out_dir.display()))?;
    let reporter = TextReporter::new(io::stdout().lock());
    let mut observer = SearchOutputObserver::new((reporter, renderer));

    let schedules = generate(&courses, cli.num_courses, &rules, &cli.include, &mut observer);

    if let Some(e) = observer.take_error() {
        return Err(e).context("failed to write schedule output");
    }

    println!("Found {} valid schedule(s).", schedules.len());
    Ok(())
}
