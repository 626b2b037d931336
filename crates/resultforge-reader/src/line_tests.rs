//! Tests for data line parsing.

use resultforge_core::{VariableKind, VariableSpec};
use resultforge_test::schemas;

use super::*;

fn parse(line: &str, schema: &ProblemSchema) -> Result<Solution, LineError> {
    parse_solution(line, schema, &mut VariableDecoder::new())
}

#[test]
fn test_variables_and_objectives() {
    let schema = schemas::two_reals_one_objective();
    let solution = parse("1.0 2.0 5.0", &schema).unwrap();

    let values: Vec<f64> = solution
        .variables()
        .iter()
        .filter_map(|v| v.as_real())
        .collect();
    assert_eq!(values, vec![1.0, 2.0]);
    assert_eq!(solution.objectives(), &[5.0]);
}

#[test]
fn test_objectives_only_schema() {
    let schema = ProblemSchema::new(1);
    let solution = parse("5.0", &schema).unwrap();

    assert!(!solution.has_variables());
    assert_eq!(solution.objectives(), &[5.0]);
}

#[test]
fn test_objectives_only_line_with_variable_schema() {
    let schema = schemas::two_reals_one_objective();
    let solution = parse("5.0", &schema).unwrap();

    assert!(!solution.has_variables());
    assert_eq!(solution.objectives(), &[5.0]);
}

#[test]
fn test_unexpected_token_count_reads_trailing_objectives() {
    let schema = ProblemSchema::new(2).with_variable(VariableSpec::real(0.0, 1.0));

    // four tokens matches neither 2 nor 3; the last two are objectives
    let solution = parse("junk 0.5 7.0 8.0", &schema).unwrap();
    assert!(!solution.has_variables());
    assert_eq!(solution.objectives(), &[7.0, 8.0]);
}

#[test]
fn test_too_few_tokens() {
    let schema = ProblemSchema::new(3);

    assert!(matches!(
        parse("1.0 2.0", &schema),
        Err(LineError::TooFewTokens {
            expected: 3,
            found: 2
        })
    ));
}

#[test]
fn test_whitespace_runs_and_tabs() {
    let schema = schemas::two_reals_one_objective();
    let solution = parse("  1.0\t\t2.0    5.0  ", &schema).unwrap();

    assert_eq!(solution.number_of_variables(), 2);
    assert_eq!(solution.objectives(), &[5.0]);
}

#[test]
fn test_bad_objective() {
    let schema = ProblemSchema::new(2);

    assert!(matches!(
        parse("1.0 nope", &schema),
        Err(LineError::Objective { index: 1, .. })
    ));
}

#[test]
fn test_variable_error_reports_position_and_kind() {
    let schema = schemas::mixed();

    let err = parse("0.5 101 2,0,1 - 1.0 2.0", &schema).unwrap_err();
    match err {
        LineError::Variable { index, kind, .. } => {
            assert_eq!(index, 1);
            assert_eq!(kind, VariableKind::Binary);
        }
        other => panic!("expected variable error, got {other:?}"),
    }
}

#[test]
fn test_mixed_kinds() {
    let schema = schemas::mixed();
    let solution = parse("0.5 1010 2,0,1 - 1.0 2.0", &schema).unwrap();

    let kinds: Vec<VariableKind> = solution.variables().iter().map(|v| v.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            VariableKind::Real,
            VariableKind::Binary,
            VariableKind::Permutation,
            VariableKind::Opaque
        ]
    );
    assert_eq!(solution.variable(2).unwrap().as_permutation(), Some(&[2, 0, 1][..]));
    assert_eq!(solution.objectives(), &[1.0, 2.0]);
}
