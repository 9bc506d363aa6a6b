//! Search configuration.

use crate::error::{Result, SearchError};
use crate::logic::{AxiomSchema, Formula};
use serde::{Deserialize, Serialize};

/// Hard cap on basis size.
///
/// Layer sizes grow combinatorially in the basis, so an oversized basis is
/// a configuration error, not a tuning choice.
pub const MAX_BASIS_SIZE: usize = 64;

/// Immutable configuration for one search run.
///
/// Constructed once and passed by reference; nothing in the engine mutates
/// it. Alternate small bases slot in here for testing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum proof length to search, inclusive.
    ///
    /// Keep this small: the proof count is exponential in it. Length 5 over
    /// the default basis is already a heavy computation, and length 7
    /// exhausts memory.
    pub max_length: usize,
    /// Ground formulas available as substitution material.
    pub basis: Vec<Formula>,
    /// Axiom schemas, instantiated in order.
    pub schemas: Vec<AxiomSchema>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_length: 5,
            basis: default_basis(),
            schemas: AxiomSchema::standard(),
        }
    }
}

impl SearchConfig {
    /// Default configuration with a caller-supplied basis.
    pub fn with_basis(basis: Vec<Formula>) -> Self {
        SearchConfig {
            basis,
            ..SearchConfig::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_length < 1 {
            return Err(SearchError::InvalidConfig(
                "max_length must be at least 1".to_string(),
            ));
        }
        if self.basis.len() > MAX_BASIS_SIZE {
            return Err(SearchError::InvalidConfig(format!(
                "basis has {} formulas, limit is {}",
                self.basis.len(),
                MAX_BASIS_SIZE
            )));
        }
        if self.schemas.is_empty() {
            return Err(SearchError::InvalidConfig(
                "at least one axiom schema is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// The curated nine-formula basis.
///
/// Small by necessity: every additional formula multiplies the axiom
/// instance count across every schema variable.
pub fn default_basis() -> Vec<Formula> {
    [
        "a",
        "b",
        "(¬a)",
        "(¬b)",
        "(a → a)",
        "(a → b)",
        "(¬(¬a))",
        "((¬a) → (¬b))",
        "((¬b) → (¬a))",
    ]
    .into_iter()
    .map(Formula::from)
    .collect()
}

/// Reduced five-formula basis for fast runs and tests.
pub fn small_basis() -> Vec<Formula> {
    ["a", "b", "(¬a)", "(a → a)", "(a → b)"]
        .into_iter()
        .map(Formula::from)
        .collect()
}
