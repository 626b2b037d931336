//! ResultForge Core - Core types for reading optimization result files
//!
//! This crate provides the data model shared by the ResultForge crates:
//! - Problem schemas describing variable kinds and objective counts
//! - Decision variables as a closed set of kinds
//! - Solutions and populations
//! - Entries (a population plus its metadata properties)

pub mod domain;
pub mod entry;
pub mod error;


pub use domain::{
    OpaqueValue, Population, ProblemSchema, Solution, Variable, VariableKind, VariableSpec,
};
pub use entry::{Entry, Properties};
pub use error::SchemaError;
