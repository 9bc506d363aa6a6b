//! Ground propositional formulas.
//!
//! A formula is opaque text. Equality, hashing, ordering, substitution and
//! Modus Ponens matching all operate on the rendered string; two formulas
//! are the same formula exactly when their texts are identical. No AST is
//! built anywhere in the crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully parenthesized propositional formula over atoms, `¬` and `→`.
///
/// Immutable once constructed. New formulas are always newly built strings;
/// nothing in the crate mutates a formula in place.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Formula(String);

impl Formula {
    /// Wrap raw formula text.
    pub fn new(text: impl Into<String>) -> Self {
        Formula(text.into())
    }

    /// The textual form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the textual form.
    ///
    /// Counted in code points, so `¬` and `→` contribute one each. This is
    /// the unit used for complexity scores and column alignment.
    pub fn complexity(&self) -> usize {
        self.0.chars().count()
    }

    /// Build the implication `(antecedent → consequent)`.
    pub fn implication(antecedent: &Formula, consequent: &Formula) -> Formula {
        Formula(format!("({} → {})", antecedent.0, consequent.0))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() honors width specifiers, which the report relies on
        f.pad(&self.0)
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl From<&str> for Formula {
    fn from(text: &str) -> Self {
        Formula(text.to_string())
    }
}

impl From<String> for Formula {
    fn from(text: String) -> Self {
        Formula(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textual_identity() {
        assert_eq!(Formula::new("(a → b)"), Formula::new("(a → b)"));
        // Whitespace is significant: these are different formulas
        assert_ne!(Formula::new("(a → b)"), Formula::new("(a →  b)"));
    }

    #[test]
    fn test_complexity_counts_characters() {
        assert_eq!(Formula::new("a").complexity(), 1);
        // `¬` and `→` are multi-byte but single characters
        assert_eq!(Formula::new("(¬a)").complexity(), 4);
        assert_eq!(Formula::new("(a → b)").complexity(), 7);
    }

    #[test]
    fn test_implication_builder() {
        let p = Formula::new("a");
        let q = Formula::new("(¬b)");
        assert_eq!(Formula::implication(&p, &q).as_str(), "(a → (¬b))");
    }

    #[test]
    fn test_display_honors_width() {
        let f = Formula::new("(¬a)");
        assert_eq!(format!("{:<6}", f), "(¬a)  ");
    }
}
