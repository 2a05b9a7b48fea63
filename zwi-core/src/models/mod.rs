mod calculator;
mod composition;
mod filter_state;
mod material;
mod records;

pub use calculator::{
    CalculatorConfig, CalculatorInputs, CalculatorResults, Defaults, EmissionFactors, Factors,
    InputError, JobCoefficients,
};
pub use composition::Composition;
pub use filter_state::FilterState;
pub use material::{JobBucket, MaterialCategory};
pub use records::{CampaignCta, CampaignItem, DirectoryEntry, EventItem, ResourceItem};
