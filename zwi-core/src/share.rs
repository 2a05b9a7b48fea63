//! Shareable calculator state.
//!
//! Two externally observable artifacts: a URL query string carrying the
//! three scenario parameters (`pop`, `wgp`, `target`), and a downloadable
//! JSON snapshot of `{inputs, results, timestamp}`. The parameter names are
//! a compatibility contract with existing shared links; do not rename them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CalculatorInputs, CalculatorResults};

/// Encodes a scenario as a shareable query string, e.g.
/// `?pop=270000000&wgp=0.7&target=30`.
pub fn share_query(inputs: &CalculatorInputs) -> String {
    format!(
        "?pop={}&wgp={}&target={}",
        inputs.population, inputs.wgp_per_capita, inputs.target_diversion_pct
    )
}

/// Applies the recognized parameters of a shared query string on top of
/// `inputs`. Unknown keys are ignored; unparseable values are skipped with a
/// warning so one bad parameter does not discard the rest of the link.
pub fn apply_share_query(inputs: &mut CalculatorInputs, query: &str) {
    let query = query.trim_start_matches('?');

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };

        match key {
            "pop" => match value.parse::<u64>() {
                Ok(population) => inputs.population = population,
                Err(_) => tracing::warn!(value, "ignoring unparseable pop parameter"),
            },
            "wgp" => match value.parse::<f64>() {
                Ok(wgp) => inputs.wgp_per_capita = wgp,
                Err(_) => tracing::warn!(value, "ignoring unparseable wgp parameter"),
            },
            "target" => match value.parse::<f64>() {
                Ok(target) => inputs.target_diversion_pct = target,
                Err(_) => tracing::warn!(value, "ignoring unparseable target parameter"),
            },
            _ => {}
        }
    }
}

/// The downloadable results record (`waste-calculator-results.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub inputs: CalculatorInputs,
    pub results: CalculatorResults,
    pub timestamp: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(inputs: CalculatorInputs, results: CalculatorResults) -> Self {
        Self {
            inputs,
            results,
            timestamp: Utc::now(),
        }
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::Composition;

    fn test_inputs() -> CalculatorInputs {
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
    fn share_query_names_the_three_parameters() {
        assert_eq!(
            share_query(&test_inputs()),
            "?pop=270000000&wgp=0.7&target=30"
        );
    }

    #[test]
    fn share_query_round_trips() {
        let original = test_inputs();
        let mut restored = test_inputs();
        restored.population = 0;
        restored.wgp_per_capita = 0.0;
        restored.target_diversion_pct = 0.0;

        apply_share_query(&mut restored, &share_query(&original));

        assert_eq!(restored, original);
    }

    #[test]
    fn apply_ignores_unknown_keys_and_bad_values() {
        let mut inputs = test_inputs();

        apply_share_query(&mut inputs, "?pop=abc&lang=id&target=45");

        assert_eq!(inputs.population, 270_000_000); // bad value skipped
        assert_eq!(inputs.target_diversion_pct, 45.0);
    }

    #[test]
    fn apply_accepts_query_without_question_mark() {
        let mut inputs = test_inputs();

        apply_share_query(&mut inputs, "pop=1000000");

        assert_eq!(inputs.population, 1_000_000);
    }

    #[test]
    fn snapshot_serializes_inputs_and_results() {
        let inputs = test_inputs();
        let results = CalculatorResults {
            total_waste: 68_985_000.0,
            diverted: 20_695_500.0,
            disposed: 48_289_500.0,
            emissions: 27_525_015.0,
            jobs: 44_495,
            diversion_rate_pct: 30.0,
        };

        let json = Snapshot::new(inputs, results).to_pretty_json().unwrap();

        assert!(json.contains("\"total_waste\": 68985000.0"));
        assert!(json.contains("\"timestamp\""));
    }
}
