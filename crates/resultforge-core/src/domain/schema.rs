//! Problem schema supplied by the caller.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::domain::variable::{Variable, VariableKind};
use crate::error::{Result, SchemaError};

/// The declared kind of one decision variable position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum VariableSpec {
    /// A real variable within `[lower_bound, upper_bound]`.
    Real { lower_bound: f64, upper_bound: f64 },
    /// A binary variable of `bits` bits.
    Binary { bits: usize },
    /// A permutation of `0..size`.
    Permutation { size: usize },
    /// A variable stored as a serialized payload.
    Opaque {
        #[cfg_attr(feature = "serde", serde(default))]
        type_name: Option<String>,
    },
}

impl VariableSpec {
    pub fn real(lower_bound: f64, upper_bound: f64) -> Self {
        VariableSpec::Real {
            lower_bound,
            upper_bound,
        }
    }

    pub fn binary(bits: usize) -> Self {
        VariableSpec::Binary { bits }
    }

    pub fn permutation(size: usize) -> Self {
        VariableSpec::Permutation { size }
    }

    pub fn opaque() -> Self {
        VariableSpec::Opaque { type_name: None }
    }

    pub fn kind(&self) -> VariableKind {
        match self {
            VariableSpec::Real { .. } => VariableKind::Real,
            VariableSpec::Binary { .. } => VariableKind::Binary,
            VariableSpec::Permutation { .. } => VariableKind::Permutation,
            VariableSpec::Opaque { .. } => VariableKind::Opaque,
        }
    }

    /// Creates a fresh variable slot of this kind, ready to be decoded into.
    ///
    /// Real slots carry the declared bounds.
    pub fn instantiate(&self) -> Variable {
        match self {
            VariableSpec::Real {
                lower_bound,
                upper_bound,
            } => Variable::real(*lower_bound, *upper_bound),
            VariableSpec::Binary { bits } => Variable::binary(*bits),
            VariableSpec::Permutation { size } => Variable::permutation(*size),
            VariableSpec::Opaque { type_name } => Variable::opaque(type_name.clone()),
        }
    }

    fn validate(&self, index: usize) -> Result<()> {
        match self {
            VariableSpec::Real {
                lower_bound,
                upper_bound,
            } => {
                if lower_bound.is_nan() || upper_bound.is_nan() || lower_bound > upper_bound {
                    return Err(SchemaError::InvalidBounds {
                        index,
                        lower_bound: *lower_bound,
                        upper_bound: *upper_bound,
                    });
                }
                Ok(())
            }
            VariableSpec::Binary { bits: 0 } | VariableSpec::Permutation { size: 0 } => {
                Err(SchemaError::EmptyVariable {
                    index,
                    kind: self.kind().name(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Describes the shape of every data line in a result file.
///
/// # Examples
///
/// ```
/// use resultforge_core::{ProblemSchema, VariableSpec};
///
/// let schema = ProblemSchema::new(2)
///     .with_variable(VariableSpec::real(0.0, 1.0))
///     .with_variable(VariableSpec::binary(4));
///
/// assert_eq!(schema.number_of_variables(), 2);
/// assert_eq!(schema.number_of_objectives(), 2);
/// assert!(schema.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProblemSchema {
    /// Number of objective values ending each data line.
    pub objectives: usize,

    /// Declared variable kinds, one per position.
    #[cfg_attr(feature = "serde", serde(default))]
    pub variables: Vec<VariableSpec>,
}

impl ProblemSchema {
    /// Creates a schema with the given objective count and no variables.
    pub fn new(objectives: usize) -> Self {
        Self {
            objectives,
            variables: Vec::new(),
        }
    }

    /// Appends a variable declaration.
    pub fn with_variable(mut self, spec: VariableSpec) -> Self {
        self.variables.push(spec);
        self
    }

    /// Appends several variable declarations.
    pub fn with_variables(mut self, specs: impl IntoIterator<Item = VariableSpec>) -> Self {
        self.variables.extend(specs);
        self
    }

    pub fn number_of_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn number_of_objectives(&self) -> usize {
        self.objectives
    }

    pub fn variable(&self, index: usize) -> Option<&VariableSpec> {
        self.variables.get(index)
    }

    /// Creates one fresh slot per declared variable, in position order.
    pub fn instantiate_variables(&self) -> Vec<Variable> {
        self.variables.iter().map(VariableSpec::instantiate).collect()
    }

    /// Checks that the schema can describe a result file.
    pub fn validate(&self) -> Result<()> {
        if self.objectives == 0 {
            return Err(SchemaError::NoObjectives);
        }
        self.variables
            .iter()
            .enumerate()
            .try_for_each(|(index, spec)| spec.validate(index))
    }
}
