//! Fixture validation.
//!
//! Findings are advisory: a bad record degrades to "does not match" at
//! filter time, so validation reports issues for the data maintainer instead
//! of failing the load. The `zwi-data-check` bin turns findings into a
//! non-zero exit code when run with `--strict`.

use std::collections::HashSet;
use std::fmt;

use zwi_core::MaterialCategory;

use crate::loader::FixtureSet;

/// One validation finding, tied to the record that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// Where the problem is, e.g. `directory.json dir-003`.
    pub location: String,
    pub message: String,
}

impl Issue {
    fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

fn check_duplicate_ids<'a>(
    file: &str,
    ids: impl Iterator<Item = &'a str>,
    issues: &mut Vec<Issue>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(Issue::new(format!("{file} {id}"), "duplicate id"));
        }
    }
}

/// Runs every check over a loaded fixture set and returns the findings.
pub fn validate_fixtures(set: &FixtureSet) -> Vec<Issue> {
    let mut issues = Vec::new();

    check_duplicate_ids(
        "directory.json",
        set.directory.iter().map(|e| e.id.as_str()),
        &mut issues,
    );
    check_duplicate_ids(
        "resources.json",
        set.resources.iter().map(|r| r.id.as_str()),
        &mut issues,
    );
    check_duplicate_ids(
        "campaigns.json",
        set.campaigns.iter().map(|c| c.id.as_str()),
        &mut issues,
    );
    check_duplicate_ids(
        "events.json",
        set.events.iter().map(|e| e.id.as_str()),
        &mut issues,
    );

    for entry in &set.directory {
        if let Some([lng, lat]) = entry.coords {
            if !(-180.0..=180.0).contains(&lng) || !(-90.0..=90.0).contains(&lat) {
                issues.push(Issue::new(
                    format!("directory.json {}", entry.id),
                    format!("coordinates out of range: [{lng}, {lat}]"),
                ));
            }
        }
    }

    for event in &set.events {
        if let Some(end) = event.end {
            if end < event.start {
                issues.push(Issue::new(
                    format!("events.json {}", event.id),
                    format!("end {} is before start {}", end, event.start),
                ));
            }
        }
    }

    let defaults = &set.config.defaults;
    if !defaults.composition.is_valid() {
        issues.push(Issue::new(
            "calculator.config.json defaults.composition",
            format!(
                "fractions sum to {:.3}, expected 1.0 within 1%",
                defaults.composition.sum()
            ),
        ));
    }
    if !(0.0..=1.0).contains(&defaults.baseline_diversion) {
        issues.push(Issue::new(
            "calculator.config.json defaults.baseline_diversion",
            format!("must be a fraction in [0, 1], got {}", defaults.baseline_diversion),
        ));
    }

    for category in MaterialCategory::ALL {
        if let Some(factor) = set.config.factors.emission_factors.for_category(category) {
            if !factor.is_finite() || factor < 0.0 {
                issues.push(Issue::new(
                    "calculator.config.json factors",
                    format!("emission factor for {category} must be non-negative, got {factor}"),
                ));
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use zwi_core::{
        CalculatorConfig, Composition, Defaults, EmissionFactors, Factors, JobCoefficients,
    };

    use super::*;

    fn valid_config() -> CalculatorConfig {
        CalculatorConfig {
            defaults: Defaults {
                population: 270_000_000,
                wgp_per_capita: 0.7,
                baseline_diversion: 0.05,
                composition: Composition {
                    organics: 0.5,
                    paper: 0.2,
                    plastics: 0.15,
                    metals: 0.05,
                    glass: 0.1,
                },
            },
            factors: Factors {
                emission_factors: EmissionFactors::default(),
                job_coefficients: JobCoefficients::default(),
            },
        }
    }

    fn empty_set() -> FixtureSet {
        FixtureSet {
            directory: vec![],
            resources: vec![],
            campaigns: vec![],
            events: vec![],
            config: valid_config(),
        }
    }

    #[test]
    fn clean_set_has_no_issues() {
        assert_eq!(validate_fixtures(&empty_set()), vec![]);
    }

    #[test]
    fn duplicate_directory_ids_are_flagged() {
        let mut set = empty_set();
        let entry: zwi_core::DirectoryEntry = serde_json::from_str(
            r#"{"id": "dir-001", "name": "A", "entry_type": "waste bank"}"#,
        )
        .unwrap();
        set.directory = vec![entry.clone(), entry];

        let issues = validate_fixtures(&set);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "directory.json dir-001");
        assert_eq!(issues[0].message, "duplicate id");
    }

    #[test]
    fn out_of_range_coordinates_are_flagged() {
        let mut set = empty_set();
        set.directory = vec![serde_json::from_str(
            r#"{"id": "dir-099", "name": "Nowhere", "entry_type": "waste bank",
                "coords": [200.0, -6.0]}"#,
        )
        .unwrap()];

        let issues = validate_fixtures(&set);

        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("coordinates out of range"));
    }

    #[test]
    fn event_ending_before_it_starts_is_flagged() {
        let mut set = empty_set();
        set.events = vec![serde_json::from_str(
            r#"{"id": "evt-099", "title": "Backwards", "start": "2026-05-10", "end": "2026-05-08"}"#,
        )
        .unwrap()];

        let issues = validate_fixtures(&set);

        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("before start"));
    }

    #[test]
    fn unbalanced_config_composition_is_flagged() {
        let mut set = empty_set();
        set.config.defaults.composition.organics = 0.8;

        let issues = validate_fixtures(&set);

        assert_eq!(issues.len(), 1);
        assert!(issues[0].location.contains("defaults.composition"));
    }

    #[test]
    fn negative_emission_factor_is_flagged() {
        let mut set = empty_set();
        set.config.factors.emission_factors.paper_recycle = Some(-1.0);

        let issues = validate_fixtures(&set);

        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("paper"));
    }
}
