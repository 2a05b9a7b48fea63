use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use zwi_core::calculations::ImpactEstimator;
use zwi_core::share::{Snapshot, apply_share_query, share_query};
use zwi_core::{CalculatorConfig, CalculatorInputs, CalculatorResults, MaterialCategory};
use zwi_data::loader;

use crate::utils::{format_number, parse_composition_overrides};

/// tCO2e per car per year, used for the "cars off the road" equivalence.
const CAR_EMISSIONS_TCO2E: f64 = 4.6;

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Population served by the program
    #[arg(long)]
    population: Option<u64>,

    /// Waste generation per capita in kg/day
    #[arg(long)]
    wgp: Option<f64>,

    /// Target diversion rate in percent
    #[arg(long)]
    target: Option<f64>,

    /// Current diversion rate in percent (informational)
    #[arg(long)]
    current: Option<f64>,

    /// Composition overrides, e.g. organics=0.55,paper=0.18
    #[arg(long)]
    composition: Option<String>,

    /// Apply a shared query string, e.g. "?pop=270000000&wgp=0.7&target=30"
    #[arg(long)]
    from_share: Option<String>,

    /// Rescale composition fractions to sum to 1.0 before estimating
    #[arg(long)]
    normalize: bool,

    /// Print the shareable query string for this scenario
    #[arg(long)]
    share: bool,

    /// Write a JSON snapshot of inputs and results to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

pub fn run(fixtures: &Path, args: CalcArgs) -> Result<()> {
    let config: CalculatorConfig = loader::load_file(fixtures, loader::CONFIG_FILE)
        .context("error loading calculator config")?;

    let mut inputs = config.default_inputs();

    // Shared-link values first, explicit flags on top.
    if let Some(query) = &args.from_share {
        apply_share_query(&mut inputs, query);
    }
    if let Some(population) = args.population {
        inputs.population = population;
    }
    if let Some(wgp) = args.wgp {
        inputs.wgp_per_capita = wgp;
    }
    if let Some(target) = args.target {
        inputs.target_diversion_pct = target;
    }
    if let Some(current) = args.current {
        inputs.current_diversion_pct = current;
    }
    if let Some(spec) = &args.composition {
        for (category, fraction) in parse_composition_overrides(spec)? {
            inputs.composition.set_fraction(category, fraction);
        }
    }

    if args.normalize {
        inputs.composition = inputs.composition.normalized();
    }

    inputs.validate()?;

    if !inputs.composition.is_valid() {
        tracing::warn!(
            sum = inputs.composition.sum(),
            "composition does not sum to 1.0; pass --normalize to rescale"
        );
    }

    let results = ImpactEstimator::new(&config).estimate(&inputs);
    render(&inputs, &results);

    if args.share {
        println!();
        println!("Share: {}", share_query(&inputs));
    }

    if let Some(path) = &args.json {
        let snapshot = Snapshot::new(inputs, results);
        let json = snapshot.to_pretty_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write snapshot: {}", path.display()))?;
        println!();
        println!("Wrote snapshot to {}", path.display());
    }

    Ok(())
}

fn render(inputs: &CalculatorInputs, results: &CalculatorResults) {
    println!("Scenario");
    println!("  Population:           {}", format_number(inputs.population as f64, 0));
    println!("  Waste per capita:     {} kg/day", inputs.wgp_per_capita);
    println!("  Current diversion:    {}%", inputs.current_diversion_pct);
    println!("  Target diversion:     {}%", inputs.target_diversion_pct);
    print!("  Composition:          ");
    let fractions: Vec<String> = MaterialCategory::ALL
        .iter()
        .map(|&c| format!("{c} {:.0}%", inputs.composition.fraction(c) * 100.0))
        .collect();
    println!("{}", fractions.join(", "));

    println!();
    println!("Results");
    println!(
        "  Total waste:          {} t/yr",
        format_number(results.total_waste, 0)
    );
    println!(
        "  Diverted:             {} t/yr ({}%)",
        format_number(results.diverted, 0),
        results.diversion_rate_pct
    );
    println!(
        "  Disposed:             {} t/yr",
        format_number(results.disposed, 0)
    );
    println!(
        "  Emissions avoided:    {} tCO2e/yr",
        format_number(results.emissions, 0)
    );
    println!(
        "      equivalent to taking {} cars off the road for a year",
        format_number(results.emissions / CAR_EMISSIONS_TCO2E, 0)
    );
    println!(
        "  Jobs created:         {}",
        format_number(results.jobs as f64, 0)
    );
}
