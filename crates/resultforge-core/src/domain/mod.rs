//! Domain model for result files
//!
//! - `ProblemSchema`: externally supplied variable kinds and objective count
//! - `Variable`: a decoded decision variable
//! - `Solution`: decision variables plus objective values
//! - `Population`: the ordered solutions of one entry

mod schema;
mod solution;
mod variable;

#[cfg(test)]
mod tests;

pub use schema::{ProblemSchema, VariableSpec};
pub use solution::{Population, Solution};
pub use variable::{OpaqueValue, Variable, VariableKind};
