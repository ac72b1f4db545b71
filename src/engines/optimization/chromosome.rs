use crate::error::{EvocastError, Result};
use serde::{Deserialize, Serialize};

/// Candidate solution: a fixed-length vector of real-valued genes.
///
/// Operators never mutate a chromosome in place; they build new ones.
/// Length is pinned by the [`Bounds`] used for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chromosome(Vec<f64>);

impl Chromosome {
    pub fn new(genes: Vec<f64>) -> Self {
        Self(genes)
    }

    pub fn genes(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_genes(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for Chromosome {
    fn from(genes: Vec<f64>) -> Self {
        Self(genes)
    }
}

impl std::ops::Index<usize> for Chromosome {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Per-gene search intervals. One `(lower, upper)` pair per gene position.
///
/// Construction is the only way to obtain a `Bounds`, so every instance
/// satisfies: non-empty, finite endpoints, `lower <= upper`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds(Vec<(f64, f64)>);

impl Bounds {
    pub fn new(intervals: Vec<(f64, f64)>) -> Result<Self> {
        if intervals.is_empty() {
            return Err(EvocastError::Configuration(
                "Bounds must contain at least one interval".to_string(),
            ));
        }

        for (i, &(lower, upper)) in intervals.iter().enumerate() {
            if !lower.is_finite() || !upper.is_finite() {
                return Err(EvocastError::Configuration(format!(
                    "Bound {} must be finite, got ({}, {})",
                    i, lower, upper
                )));
            }
            if lower > upper {
                return Err(EvocastError::Configuration(format!(
                    "Bound {} has lower > upper: ({}, {})",
                    i, lower, upper
                )));
            }
        }

        Ok(Self(intervals))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn intervals(&self) -> &[(f64, f64)] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (f64, f64)> {
        self.0.iter()
    }
}
