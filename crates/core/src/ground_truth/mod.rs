pub mod store;
pub mod types;

pub use store::GroundTruth;
pub use types::*;
