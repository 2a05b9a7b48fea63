pub mod loader;
pub mod validate;

pub use loader::{DirectoryCsvImporter, FixtureError, FixtureSet};
pub use validate::{Issue, validate_fixtures};
