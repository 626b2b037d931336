//! Solutions and populations.

use std::ops::Index;
use std::slice;
use std::vec;

use crate::domain::variable::Variable;

/// A candidate solution read from a data line.
///
/// `variables` is either empty (an objectives-only line) or holds one
/// variable per schema position.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    variables: Vec<Variable>,
    objectives: Vec<f64>,
}

impl Solution {
    pub fn new(variables: Vec<Variable>, objectives: Vec<f64>) -> Self {
        Self {
            variables,
            objectives,
        }
    }

    /// Creates a solution that carries no decision variables.
    pub fn objectives_only(objectives: Vec<f64>) -> Self {
        Self {
            variables: Vec::new(),
            objectives,
        }
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, index: usize) -> Option<&Variable> {
        self.variables.get(index)
    }

    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    pub fn objective(&self, index: usize) -> Option<f64> {
        self.objectives.get(index).copied()
    }

    pub fn number_of_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn number_of_objectives(&self) -> usize {
        self.objectives.len()
    }

    /// Returns true if the data line carried decision variables.
    pub fn has_variables(&self) -> bool {
        !self.variables.is_empty()
    }

    /// Splits the solution into its variables and objectives.
    pub fn into_parts(self) -> (Vec<Variable>, Vec<f64>) {
        (self.variables, self.objectives)
    }
}

/// The ordered solutions of one entry.
///
/// Solutions are kept in file order. No dominance filtering happens here;
/// callers that need a non-dominated set filter the population themselves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Population {
    solutions: Vec<Solution>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a solution.
    pub fn add(&mut self, solution: Solution) {
        self.solutions.push(solution);
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Solution> {
        self.solutions.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    pub fn as_slice(&self) -> &[Solution] {
        &self.solutions
    }
}

impl Index<usize> for Population {
    type Output = Solution;

    fn index(&self, index: usize) -> &Solution {
        &self.solutions[index]
    }
}

impl FromIterator<Solution> for Population {
    fn from_iter<I: IntoIterator<Item = Solution>>(iter: I) -> Self {
        Self {
            solutions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Solution> for Population {
    fn extend<I: IntoIterator<Item = Solution>>(&mut self, iter: I) {
        self.solutions.extend(iter);
    }
}

impl IntoIterator for Population {
    type Item = Solution;
    type IntoIter = vec::IntoIter<Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Solution;
    type IntoIter = slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}
