//! Token codec for decision variables.
//!
//! Each variable kind has its own token grammar:
//!
//! | kind | token |
//! |---|---|
//! | real | floating-point literal |
//! | binary(n) | exactly `n` characters of `0` or `1` |
//! | permutation(n) | `n` comma-separated integers covering `0..n` |
//! | opaque | `-` (leave unchanged) or base64 of a serialized payload |
//!
//! [`VariableDecoder::decode`] and [`encode`] are the only places that
//! dispatch on the variable kind.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use resultforge_core::{OpaqueValue, Variable};
use tracing::warn;

use crate::error::{BoxError, DecodeError};

/// Token that leaves an opaque variable unchanged.
pub const UNCHANGED_TOKEN: &str = "-";

/// Non-fatal notices raised while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// An opaque variable was left unchanged because the file did not
    /// carry its value.
    UnsupportedVariable { type_name: Option<String> },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::UnsupportedVariable { type_name: Some(name) } => write!(
                f,
                "unsupported decision variable type {name}, values are not restored"
            ),
            Advisory::UnsupportedVariable { type_name: None } => {
                f.write_str("unsupported decision variable type, values are not restored")
            }
        }
    }
}

/// Receives advisories raised by the decoder.
pub trait AdvisorySink: Send {
    fn advise(&mut self, advisory: &Advisory);
}

impl<F> AdvisorySink for F
where
    F: FnMut(&Advisory) + Send,
{
    fn advise(&mut self, advisory: &Advisory) {
        self(advisory)
    }
}

/// Default sink: logs each advisory as a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAdvisory;

impl AdvisorySink for TracingAdvisory {
    fn advise(&mut self, advisory: &Advisory) {
        warn!("{advisory}");
    }
}

/// Turns the bytes of an opaque token into a variable.
///
/// `variable` is the slot being decoded into, so implementations can see the
/// schema's type name.
pub trait PayloadDeserializer: Send + Sync {
    fn deserialize(&self, variable: &Variable, payload: &[u8]) -> Result<Variable, BoxError>;
}

impl<F> PayloadDeserializer for F
where
    F: Fn(&Variable, &[u8]) -> Result<Variable, BoxError> + Send + Sync,
{
    fn deserialize(&self, variable: &Variable, payload: &[u8]) -> Result<Variable, BoxError> {
        self(variable, payload)
    }
}

/// Default deserializer: stores the payload bytes as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawPayload;

impl PayloadDeserializer for RawPayload {
    fn deserialize(&self, variable: &Variable, payload: &[u8]) -> Result<Variable, BoxError> {
        let type_name = match variable {
            Variable::Opaque { type_name, .. } => type_name.clone(),
            _ => None,
        };
        Ok(Variable::Opaque {
            type_name,
            value: OpaqueValue::Bytes(payload.to_vec()),
        })
    }
}

/// Decodes variable tokens into schema-typed slots.
///
/// Holds the one-time flag for the unsupported-variable advisory; a new
/// decoder raises it again.
pub struct VariableDecoder {
    deserializer: Box<dyn PayloadDeserializer>,
    advisory: Box<dyn AdvisorySink>,
    advised: bool,
}

impl VariableDecoder {
    pub fn new() -> Self {
        Self {
            deserializer: Box::new(RawPayload),
            advisory: Box::new(TracingAdvisory),
            advised: false,
        }
    }

    /// Replaces the opaque payload deserializer.
    pub fn with_deserializer(mut self, deserializer: impl PayloadDeserializer + 'static) -> Self {
        self.deserializer = Box::new(deserializer);
        self
    }

    /// Replaces the advisory sink.
    pub fn with_advisory_sink(mut self, sink: impl AdvisorySink + 'static) -> Self {
        self.advisory = Box::new(sink);
        self
    }

    /// Decodes `token` into `variable`, returning the updated variable.
    ///
    /// Real values are stored without checking them against the declared
    /// bounds.
    pub fn decode(&mut self, variable: Variable, token: &str) -> Result<Variable, DecodeError> {
        match variable {
            Variable::Real {
                lower_bound,
                upper_bound,
                ..
            } => {
                let value = token
                    .parse::<f64>()
                    .map_err(|_| DecodeError::NumberFormat {
                        token: token.to_string(),
                    })?;
                Ok(Variable::Real {
                    value,
                    lower_bound,
                    upper_bound,
                })
            }
            Variable::Binary { bits } => Ok(Variable::Binary {
                bits: decode_bits(token, bits.len())?,
            }),
            Variable::Permutation { order } => Ok(Variable::Permutation {
                order: decode_permutation(token, order.len())?,
            }),
            Variable::Opaque { .. } => self.decode_opaque(variable, token),
        }
    }

    fn decode_opaque(&mut self, variable: Variable, token: &str) -> Result<Variable, DecodeError> {
        if token == UNCHANGED_TOKEN {
            if !self.advised {
                let type_name = match &variable {
                    Variable::Opaque { type_name, .. } => type_name.clone(),
                    _ => None,
                };
                self.advisory
                    .advise(&Advisory::UnsupportedVariable { type_name });
                self.advised = true;
            }
            return Ok(variable);
        }

        let payload = STANDARD
            .decode(token)
            .map_err(|e| DecodeError::DeserializationFailed(e.into()))?;
        self.deserializer
            .deserialize(&variable, &payload)
            .map_err(DecodeError::DeserializationFailed)
    }
}

impl Default for VariableDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VariableDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableDecoder")
            .field("advised", &self.advised)
            .finish_non_exhaustive()
    }
}

fn decode_bits(token: &str, number_of_bits: usize) -> Result<Vec<bool>, DecodeError> {
    let invalid = || DecodeError::InvalidBitString {
        token: token.to_string(),
        bits: number_of_bits,
    };

    if token.len() != number_of_bits {
        return Err(invalid());
    }
    token
        .bytes()
        .map(|b| match b {
            b'0' => Ok(false),
            b'1' => Ok(true),
            _ => Err(invalid()),
        })
        .collect()
}

fn decode_permutation(token: &str, size: usize) -> Result<Vec<usize>, DecodeError> {
    let invalid = || DecodeError::InvalidPermutation {
        token: token.to_string(),
        size,
    };

    let mut seen = vec![false; size];
    let mut order = Vec::with_capacity(size);
    for element in token.split(',') {
        let value = element.parse::<usize>().map_err(|_| invalid())?;
        match seen.get_mut(value) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(invalid()),
        }
        order.push(value);
    }

    if order.len() != size {
        return Err(invalid());
    }
    Ok(order)
}

/// Encodes a variable as the token the result file writer emits for it.
///
/// Unset opaque variables encode as `-`.
pub fn encode(variable: &Variable) -> String {
    match variable {
        Variable::Real { value, .. } => format!("{value:?}"),
        Variable::Binary { bits } => bits.iter().map(|&b| if b { '1' } else { '0' }).collect(),
        Variable::Permutation { order } => order
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(","),
        Variable::Opaque { value, .. } => match value {
            OpaqueValue::Unset => UNCHANGED_TOKEN.to_string(),
            OpaqueValue::Bytes(bytes) => STANDARD.encode(bytes),
        },
    }
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
