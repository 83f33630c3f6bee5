pub mod parser;
pub mod visitor;

pub use parser::{extract_source_ast, SolcCompiler};
pub use visitor::{
    extract_arithmetic_operations, extract_external_calls, extract_functions, extract_identifiers,
    extract_state_changes, AstSummary,
};
