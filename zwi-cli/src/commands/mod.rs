pub mod calc;
pub mod campaigns;
pub mod directory;
pub mod events;
pub mod resources;
