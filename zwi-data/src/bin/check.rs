use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use zwi_data::{DirectoryCsvImporter, FixtureSet, validate_fixtures};

/// Parse and validate the bundled site fixtures.
///
/// Loads every fixture file from the given directory, optionally merges a
/// directory CSV export on top, and reports validation findings (duplicate
/// ids, out-of-range coordinates, inconsistent calculator config, events
/// that end before they start).
#[derive(Parser, Debug)]
#[command(name = "zwi-data-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing the JSON fixtures
    #[arg(short, long, default_value = "fixtures")]
    dir: PathBuf,

    /// Optional directory CSV export to merge before validating
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Exit non-zero when any validation issue is found
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut fixtures = FixtureSet::load_dir(&args.dir)
        .with_context(|| format!("failed to load fixtures from: {}", args.dir.display()))?;

    println!(
        "Loaded {} directory entries, {} resources, {} campaigns, {} events.",
        fixtures.directory.len(),
        fixtures.resources.len(),
        fixtures.campaigns.len(),
        fixtures.events.len()
    );

    if let Some(csv_path) = &args.csv {
        let file = File::open(csv_path)
            .with_context(|| format!("failed to open: {}", csv_path.display()))?;
        let imported = DirectoryCsvImporter::parse(file)
            .with_context(|| format!("failed to parse CSV: {}", csv_path.display()))?;

        println!("Merged {} directory entries from CSV.", imported.len());
        fixtures.directory.extend(imported);
    }

    let issues = validate_fixtures(&fixtures);

    if issues.is_empty() {
        println!("No validation issues found.");
        return Ok(());
    }

    println!("Found {} validation issue(s):", issues.len());
    for issue in &issues {
        println!("  {issue}");
    }

    if args.strict {
        bail!("validation failed with {} issue(s)", issues.len());
    }

    Ok(())
}
