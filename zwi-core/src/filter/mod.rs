//! Collection filtering shared by the directory, resource, campaign and
//! event listings.
//!
//! Every page used to grow its own chain of ad hoc filter passes; this
//! module consolidates them into one parameterized pipeline of conjunctive
//! predicate stages. Stages are independent, so their order changes only
//! intermediate cost, never the final set.

mod geo;
mod pipeline;

pub use geo::{Bounds, LngLat};
pub use pipeline::{FilterPipeline, by_bounds, by_category, by_search};
