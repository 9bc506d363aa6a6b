//! Modus Ponens as textual extraction.

use super::formula::Formula;

/// If `candidate` is exactly the implication `(p → q)` for the given `p`,
/// return the consequent `q`.
///
/// Matching is pure prefix/suffix text comparison, O(formula length); no
/// parsing happens. A miss is an expected, frequent outcome, not an error.
/// An empty consequent is rejected.
pub fn consequent(p: &Formula, candidate: &Formula) -> Option<Formula> {
    let rest = candidate
        .as_str()
        .strip_prefix('(')
        .and_then(|t| t.strip_prefix(p.as_str()))
        .and_then(|t| t.strip_prefix(" → "))?;
    let q = rest.strip_suffix(')')?;
    if q.is_empty() {
        return None;
    }
    Some(Formula::new(q))
}
