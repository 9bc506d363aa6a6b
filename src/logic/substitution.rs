//! Whole-token substitution of schema variables.

use super::formula::Formula;

/// An ordered variable-to-formula assignment, in schema variable order.
pub type Assignment = Vec<(String, Formula)>;

/// Instantiate `template` by replacing every occurrence of each assigned
/// variable with its formula.
///
/// Matching is token-aware: a variable occurrence is replaced only when it
/// is not flanked by a word character on either side, so a bare letter never
/// matches inside a longer identifier. Longer variable names are substituted
/// first so a short name cannot split a longer name's token. Every variable
/// in the assignment is expected to occur in the template; substitution is
/// total and has no failure path.
pub fn substitute(template: &str, assignment: &[(String, Formula)]) -> Formula {
    let mut order: Vec<usize> = (0..assignment.len()).collect();
    order.sort_by(|&a, &b| assignment[b].0.len().cmp(&assignment[a].0.len()));

    let mut formula = template.to_string();
    for idx in order {
        let (variable, replacement) = &assignment[idx];
        formula = replace_token(&formula, variable, replacement.as_str());
    }
    Formula::new(formula)
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replace whole-token occurrences of `token` in `text`.
fn replace_token(text: &str, token: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut consumed = 0usize;
    while let Some(pos) = rest.find(token) {
        let start = consumed + pos;
        let end = start + token.len();
        let boundary_before = text[..start].chars().next_back().map_or(true, |c| !is_word(c));
        let boundary_after = text[end..].chars().next().map_or(true, |c| !is_word(c));

        out.push_str(&rest[..pos]);
        if boundary_before && boundary_after {
            out.push_str(replacement);
        } else {
            out.push_str(token);
        }
        rest = &rest[pos + token.len()..];
        consumed = end;
    }
    out.push_str(rest);
    out
}
