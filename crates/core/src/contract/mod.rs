pub mod corpus;
pub mod loader;
pub mod types;

pub use corpus::CorpusGenerator;
pub use loader::{count_contracts, discover_contracts};
pub use types::Contract;
