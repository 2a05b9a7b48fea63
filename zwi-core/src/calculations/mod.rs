//! Impact estimation for waste diversion scenarios.
//!
//! This module turns a [`CalculatorInputs`](crate::CalculatorInputs) record
//! and the coefficient tables from the calculator config into the derived
//! figures shown on the calculator page: total waste, the diverted/disposed
//! split, avoided emissions and jobs created.

pub mod impact;

pub use impact::{
    DiversionSplit, ImpactEstimator, annual_waste_tonnes, diversion_split, emissions_avoided,
    jobs_created,
};
