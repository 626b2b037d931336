//! Decision variable definitions

use std::fmt;

/// The kind of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    /// A real-valued variable with declared bounds.
    Real,
    /// A fixed-length bit string.
    Binary,
    /// An ordering of `0..len`.
    Permutation,
    /// A variable the format does not natively understand.
    Opaque,
}

impl VariableKind {
    /// Returns the lowercase name used in schemas and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            VariableKind::Real => "real",
            VariableKind::Binary => "binary",
            VariableKind::Permutation => "permutation",
            VariableKind::Opaque => "opaque",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contents of an opaque variable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OpaqueValue {
    /// Nothing has been decoded into the variable.
    #[default]
    Unset,
    /// A serialized payload handed over by the payload deserializer.
    Bytes(Vec<u8>),
}

/// A decision variable.
///
/// The set of kinds is closed; decoding and encoding dispatch on this enum
/// in exactly one place each.
#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    /// A real value. The bounds are carried but not enforced.
    Real {
        value: f64,
        lower_bound: f64,
        upper_bound: f64,
    },
    /// A bit string, most significant position first.
    Binary { bits: Vec<bool> },
    /// A permutation of `0..order.len()`.
    Permutation { order: Vec<usize> },
    /// An opaque variable with an optional type name from the schema.
    Opaque {
        type_name: Option<String>,
        value: OpaqueValue,
    },
}

impl Variable {
    /// Creates a real variable. The value starts as NaN until decoded.
    pub fn real(lower_bound: f64, upper_bound: f64) -> Self {
        Variable::Real {
            value: f64::NAN,
            lower_bound,
            upper_bound,
        }
    }

    /// Creates a binary variable with all bits cleared.
    pub fn binary(number_of_bits: usize) -> Self {
        Variable::Binary {
            bits: vec![false; number_of_bits],
        }
    }

    /// Creates the identity permutation of the given size.
    pub fn permutation(size: usize) -> Self {
        Variable::Permutation {
            order: (0..size).collect(),
        }
    }

    /// Creates an unset opaque variable.
    pub fn opaque(type_name: Option<String>) -> Self {
        Variable::Opaque {
            type_name,
            value: OpaqueValue::Unset,
        }
    }

    pub fn kind(&self) -> VariableKind {
        match self {
            Variable::Real { .. } => VariableKind::Real,
            Variable::Binary { .. } => VariableKind::Binary,
            Variable::Permutation { .. } => VariableKind::Permutation,
            Variable::Opaque { .. } => VariableKind::Opaque,
        }
    }

    /// Returns the value of a real variable.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Variable::Real { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Returns the bits of a binary variable.
    pub fn as_bits(&self) -> Option<&[bool]> {
        match self {
            Variable::Binary { bits } => Some(bits),
            _ => None,
        }
    }

    /// Returns the order of a permutation variable.
    pub fn as_permutation(&self) -> Option<&[usize]> {
        match self {
            Variable::Permutation { order } => Some(order),
            _ => None,
        }
    }

    /// Returns the contents of an opaque variable.
    pub fn as_opaque(&self) -> Option<&OpaqueValue> {
        match self {
            Variable::Opaque { value, .. } => Some(value),
            _ => None,
        }
    }
}
