//! Waste diversion impact estimator.
//!
//! All formulas are straight-line arithmetic over `f64`. Every function here
//! is total over the numeric domain: invalid inputs propagate as NaN or
//! infinity, nothing returns an error. Guard rails live at the API boundary
//! instead (see [`CalculatorInputs::validate`]).
//!
//! # Example
//!
//! ```
//! use zwi_core::calculations::ImpactEstimator;
//! use zwi_core::{
//!     CalculatorConfig, CalculatorInputs, Composition, Defaults, EmissionFactors, Factors,
//!     JobCoefficients,
//! };
//!
//! let composition = Composition {
//!     organics: 0.5,
//!     paper: 0.2,
//!     plastics: 0.15,
//!     metals: 0.05,
//!     glass: 0.1,
//! };
//!
//! let config = CalculatorConfig {
//!     defaults: Defaults {
//!         population: 270_000_000,
//!         wgp_per_capita: 0.7,
//!         baseline_diversion: 0.05,
//!         composition,
//!     },
//!     factors: Factors {
//!         emission_factors: EmissionFactors {
//!             organics_compost: Some(0.25),
//!             paper_recycle: Some(3.5),
//!             plastics_reuse: Some(1.5),
//!             metals_recycle: Some(5.0),
//!             glass_recycle: Some(0.3),
//!         },
//!         job_coefficients: JobCoefficients {
//!             organics: Some(0.0005),
//!             recyclables: Some(0.002),
//!             reuse: Some(0.008),
//!         },
//!     },
//! };
//!
//! let mut inputs = config.default_inputs();
//! inputs.target_diversion_pct = 30.0;
//!
//! let results = ImpactEstimator::new(&config).estimate(&inputs);
//!
//! assert!((results.total_waste - 68_985_000.0).abs() < 1e-6);
//! assert!((results.diverted - 20_695_500.0).abs() < 1e-6);
//! assert_eq!(results.diverted + results.disposed, results.total_waste);
//! assert_eq!(results.jobs, 44_495);
//! ```

use crate::models::{
    CalculatorConfig, CalculatorInputs, CalculatorResults, Composition, EmissionFactors,
    JobBucket, JobCoefficients, MaterialCategory,
};

/// Diverted/disposed split of an annual waste total, in tonnes per year.
///
/// `disposed` is computed as `total - diverted`, never rounded
/// independently, so the two always sum back to the total exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiversionSplit {
    pub diverted: f64,
    pub disposed: f64,
}

/// Annual waste generation in tonnes: `population x kg/day x 365 / 1000`.
pub fn annual_waste_tonnes(population: u64, kg_per_day: f64) -> f64 {
    population as f64 * kg_per_day * 365.0 / 1000.0
}

/// Splits an annual total by a diversion rate given in percent.
pub fn diversion_split(total_waste: f64, rate_pct: f64) -> DiversionSplit {
    let diverted = total_waste * (rate_pct / 100.0);
    DiversionSplit {
        diverted,
        disposed: total_waste - diverted,
    }
}

/// Avoided emissions in tCO2e per year.
///
/// Each stream contributes `diverted x fraction x factor`; streams without a
/// configured factor contribute nothing.
pub fn emissions_avoided(
    total_waste: f64,
    composition: &Composition,
    rate_pct: f64,
    factors: &EmissionFactors,
) -> f64 {
    let diverted = total_waste * (rate_pct / 100.0);

    MaterialCategory::ALL
        .iter()
        .filter_map(|&category| {
            factors
                .for_category(category)
                .map(|factor| diverted * composition.fraction(category) * factor)
        })
        .sum()
}

/// Jobs created by diversion, rounded to the nearest whole job once at the
/// end, not per bucket.
///
/// Stream fractions are pooled into the three employment buckets before the
/// coefficients apply, so paper, metals and glass share the recyclables
/// coefficient.
pub fn jobs_created(
    total_waste: f64,
    composition: &Composition,
    rate_pct: f64,
    coefficients: &JobCoefficients,
) -> i64 {
    let diverted = total_waste * (rate_pct / 100.0);
    let mut jobs = 0.0;

    for bucket in [JobBucket::Organics, JobBucket::Recyclables, JobBucket::Reuse] {
        let Some(coefficient) = coefficients.for_bucket(bucket) else {
            continue;
        };

        let fraction: f64 = MaterialCategory::ALL
            .iter()
            .filter(|c| c.job_bucket() == bucket)
            .map(|c| composition.fraction(*c))
            .sum();

        jobs += diverted * fraction * coefficient;
    }

    jobs.round() as i64
}

/// Estimator bound to one read-only coefficient configuration.
#[derive(Debug, Clone)]
pub struct ImpactEstimator<'a> {
    config: &'a CalculatorConfig,
}

impl<'a> ImpactEstimator<'a> {
    pub fn new(config: &'a CalculatorConfig) -> Self {
        Self { config }
    }

    /// Computes the full results record for one scenario.
    ///
    /// Emissions and jobs use the *target* diversion rate; the current rate
    /// is echoed for display but feeds nothing downstream.
    pub fn estimate(&self, inputs: &CalculatorInputs) -> CalculatorResults {
        let total_waste = annual_waste_tonnes(inputs.population, inputs.wgp_per_capita);
        let split = diversion_split(total_waste, inputs.target_diversion_pct);

        let emissions = emissions_avoided(
            total_waste,
            &inputs.composition,
            inputs.target_diversion_pct,
            &self.config.factors.emission_factors,
        );

        let jobs = jobs_created(
            total_waste,
            &inputs.composition,
            inputs.target_diversion_pct,
            &self.config.factors.job_coefficients,
        );

        CalculatorResults {
            total_waste,
            diverted: split.diverted,
            disposed: split.disposed,
            emissions,
            jobs,
            diversion_rate_pct: inputs.target_diversion_pct,
        }
    }
}
