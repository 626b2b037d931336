//! Data line parsing.

use resultforge_core::{ProblemSchema, Solution};

use crate::decode::VariableDecoder;
use crate::error::LineError;

/// Parses one data line into a solution.
///
/// A line holds either `variables + objectives` tokens, in which case the
/// leading tokens are decoded into schema-typed slots, or any other count of
/// at least `objectives` tokens, in which case only the trailing objective
/// tokens are read and the solution carries no variables.
pub fn parse_solution(
    line: &str,
    schema: &ProblemSchema,
    decoder: &mut VariableDecoder,
) -> Result<Solution, LineError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let number_of_variables = schema.number_of_variables();
    let number_of_objectives = schema.number_of_objectives();

    if tokens.len() < number_of_objectives {
        return Err(LineError::TooFewTokens {
            expected: number_of_objectives,
            found: tokens.len(),
        });
    }

    let variables = if tokens.len() == number_of_variables + number_of_objectives {
        schema
            .instantiate_variables()
            .into_iter()
            .zip(&tokens)
            .enumerate()
            .map(|(index, (slot, token))| {
                let kind = slot.kind();
                decoder
                    .decode(slot, token)
                    .map_err(|source| LineError::Variable {
                        index,
                        kind,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?
    } else {
        Vec::new()
    };

    let objectives = tokens[tokens.len() - number_of_objectives..]
        .iter()
        .enumerate()
        .map(|(index, token)| {
            token.parse::<f64>().map_err(|_| LineError::Objective {
                index,
                token: (*token).to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Solution::new(variables, objectives))
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
