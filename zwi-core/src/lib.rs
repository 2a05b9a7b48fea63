pub mod calculations;
pub mod filter;
pub mod ics;
pub mod models;
pub mod share;

pub use models::*;
