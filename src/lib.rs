pub mod assemble;
pub mod config;
pub mod dom;
pub mod errors;
pub mod runtime;
pub mod sections;
pub mod types;
