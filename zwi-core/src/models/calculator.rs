use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::composition::Composition;
use super::material::{JobBucket, MaterialCategory};

/// Errors raised when calculator inputs are rejected at the API boundary.
///
/// The estimator itself is total over floats; this validation exists so the
/// CLI can refuse obviously bad numbers before they propagate as NaN through
/// every derived figure.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("waste generation per capita must be a non-negative finite number, got {0}")]
    InvalidWastePerCapita(f64),

    #[error("{which} diversion rate must be between 0 and 100, got {value}")]
    RateOutOfRange { which: &'static str, value: f64 },

    #[error("composition fraction for {category} must be within [0, 1], got {value}")]
    FractionOutOfRange {
        category: MaterialCategory,
        value: f64,
    },
}

/// User-supplied scenario for the impact calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    /// Population served by the program.
    pub population: u64,

    /// Waste generation per capita, in kg per day.
    pub wgp_per_capita: f64,

    /// Diversion rate achieved today, in percent. Informational only; it
    /// does not feed the emissions or jobs estimates.
    pub current_diversion_pct: f64,

    /// Diversion rate the program aims for, in percent.
    pub target_diversion_pct: f64,

    /// Waste composition of the modeled stream.
    pub composition: Composition,
}

impl CalculatorInputs {
    /// Boundary validation. Rejects non-finite or negative per-capita waste,
    /// diversion rates outside 0–100 and composition fractions outside
    /// [0, 1]. Deliberately does not require the fractions to sum to 1.0;
    /// that check is advisory (see [`Composition::is_valid`]).
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.wgp_per_capita.is_finite() || self.wgp_per_capita < 0.0 {
            return Err(InputError::InvalidWastePerCapita(self.wgp_per_capita));
        }

        for (which, value) in [
            ("current", self.current_diversion_pct),
            ("target", self.target_diversion_pct),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(InputError::RateOutOfRange { which, value });
            }
        }

        for category in MaterialCategory::ALL {
            let value = self.composition.fraction(category);
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(InputError::FractionOutOfRange { category, value });
            }
        }

        Ok(())
    }
}

/// Emission factors in tCO2e avoided per tonne diverted, by treatment path.
///
/// Field names follow the `calculator.config.json` fixture. A missing factor
/// means that stream contributes nothing to the emissions estimate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmissionFactors {
    #[serde(default)]
    pub organics_compost: Option<f64>,
    #[serde(default)]
    pub paper_recycle: Option<f64>,
    #[serde(default)]
    pub plastics_reuse: Option<f64>,
    #[serde(default)]
    pub metals_recycle: Option<f64>,
    #[serde(default)]
    pub glass_recycle: Option<f64>,
}

impl EmissionFactors {
    pub fn for_category(&self, category: MaterialCategory) -> Option<f64> {
        match category {
            MaterialCategory::Organics => self.organics_compost,
            MaterialCategory::Paper => self.paper_recycle,
            MaterialCategory::Plastics => self.plastics_reuse,
            MaterialCategory::Metals => self.metals_recycle,
            MaterialCategory::Glass => self.glass_recycle,
        }
    }
}

/// Jobs per tonne diverted, by employment bucket.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JobCoefficients {
    #[serde(default)]
    pub organics: Option<f64>,
    #[serde(default)]
    pub recyclables: Option<f64>,
    #[serde(default)]
    pub reuse: Option<f64>,
}

impl JobCoefficients {
    pub fn for_bucket(&self, bucket: JobBucket) -> Option<f64> {
        match bucket {
            JobBucket::Organics => self.organics,
            JobBucket::Recyclables => self.recyclables,
            JobBucket::Reuse => self.reuse,
        }
    }
}

/// Default input values shipped with the config fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub population: u64,
    pub wgp_per_capita: f64,
    /// Baseline diversion as a fraction (0.05 = 5%).
    pub baseline_diversion: f64,
    pub composition: Composition,
}

/// Coefficient tables for the calculator, loaded once from
/// `calculator.config.json` and treated as read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub defaults: Defaults,
    pub factors: Factors,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Factors {
    #[serde(rename = "emission_factors_tco2e_per_tonne")]
    pub emission_factors: EmissionFactors,
    #[serde(rename = "job_coeff_per_tonne")]
    pub job_coefficients: JobCoefficients,
}

impl CalculatorConfig {
    /// Seeds a fresh input record from the configured defaults. Both the
    /// current and target rates start at the baseline, mirroring the reset
    /// behavior of the calculator page.
    pub fn default_inputs(&self) -> CalculatorInputs {
        CalculatorInputs {
            population: self.defaults.population,
            wgp_per_capita: self.defaults.wgp_per_capita,
            current_diversion_pct: self.defaults.baseline_diversion * 100.0,
            target_diversion_pct: self.defaults.baseline_diversion * 100.0,
            composition: self.defaults.composition,
        }
    }
}

/// Derived figures for one calculator scenario. Never persisted; recomputed
/// on every input change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResults {
    /// Total waste generated, tonnes per year.
    pub total_waste: f64,
    /// Tonnes per year diverted from disposal.
    pub diverted: f64,
    /// Tonnes per year still disposed. Always `total_waste - diverted`.
    pub disposed: f64,
    /// Avoided emissions, tCO2e per year.
    pub emissions: f64,
    /// Jobs created, rounded to the nearest whole job.
    pub jobs: i64,
    /// Echo of the target diversion rate used, in percent.
    pub diversion_rate_pct: f64,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_inputs() -> CalculatorInputs {
        CalculatorInputs {
            population: 270_000_000,
            wgp_per_capita: 0.7,
            current_diversion_pct: 5.0,
            target_diversion_pct: 30.0,
            composition: Composition {
                organics: 0.5,
                paper: 0.2,
                plastics: 0.15,
                metals: 0.05,
                glass: 0.1,
            },
        }
    }

    #[test]
    fn validate_accepts_baseline_scenario() {
        assert_eq!(valid_inputs().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_waste_per_capita() {
        let mut inputs = valid_inputs();
        inputs.wgp_per_capita = -0.1;

        assert_eq!(
            inputs.validate(),
            Err(InputError::InvalidWastePerCapita(-0.1))
        );
    }

    #[test]
    fn validate_rejects_nan_waste_per_capita() {
        let mut inputs = valid_inputs();
        inputs.wgp_per_capita = f64::NAN;

        assert!(matches!(
            inputs.validate(),
            Err(InputError::InvalidWastePerCapita(_))
        ));
    }

    #[test]
    fn validate_rejects_rate_above_100() {
        let mut inputs = valid_inputs();
        inputs.target_diversion_pct = 130.0;

        assert_eq!(
            inputs.validate(),
            Err(InputError::RateOutOfRange {
                which: "target",
                value: 130.0
            })
        );
    }

    #[test]
    fn validate_rejects_fraction_above_one() {
        let mut inputs = valid_inputs();
        inputs.composition.paper = 1.2;

        assert_eq!(
            inputs.validate(),
            Err(InputError::FractionOutOfRange {
                category: MaterialCategory::Paper,
                value: 1.2
            })
        );
    }

    #[test]
    fn config_fixture_shape_parses() {
        let json = r#"{
            "defaults": {
                "population": 270000000,
                "wgp_per_capita": 0.7,
                "baseline_diversion": 0.05,
                "composition": {
                    "organics": 0.5, "paper": 0.2, "plastics": 0.15,
                    "metals": 0.05, "glass": 0.1
                }
            },
            "factors": {
                "emission_factors_tco2e_per_tonne": {
                    "organics_compost": 0.25,
                    "paper_recycle": 3.5,
                    "plastics_reuse": 1.5,
                    "metals_recycle": 5.0,
                    "glass_recycle": 0.3
                },
                "job_coeff_per_tonne": {
                    "organics": 0.0005,
                    "recyclables": 0.002,
                    "reuse": 0.008
                }
            }
        }"#;

        let config: CalculatorConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.defaults.population, 270_000_000);
        assert_eq!(
            config.factors.emission_factors.paper_recycle,
            Some(3.5)
        );
        assert_eq!(config.factors.job_coefficients.reuse, Some(0.008));

        let inputs = config.default_inputs();
        assert_eq!(inputs.target_diversion_pct, 5.0);
        assert_eq!(inputs.current_diversion_pct, 5.0);
    }

    #[test]
    fn missing_factors_deserialize_as_none() {
        let json = r#"{
            "emission_factors_tco2e_per_tonne": { "organics_compost": 0.25 },
            "job_coeff_per_tonne": { "organics": 0.0005 }
        }"#;

        let factors: Factors = serde_json::from_str(json).unwrap();

        assert_eq!(factors.emission_factors.glass_recycle, None);
        assert_eq!(factors.job_coefficients.recyclables, None);
    }
}
