//! Axiom instantiation: every basis assignment of every schema.

use crate::config::SearchConfig;
use crate::logic::{substitute, Formula};
use crate::proof::{Justification, Proof, ProofStep};
use std::collections::HashSet;

/// Generate all length-1 proofs.
///
/// Schemas are instantiated in configuration order; within a schema the
/// full Cartesian product of basis formulas is enumerated over the variable
/// list with the rightmost position cycling fastest. Each assignment yields
/// one proof, except that assignments reproducing an already-seen formula
/// are dropped: that is the step-sequence dedup policy applied at length 1,
/// where the sequence is a single formula. The surviving order seeds the
/// deterministic iteration order of every later layer.
pub fn axiom_instances(config: &SearchConfig) -> Vec<Proof> {
    let mut proofs = Vec::new();
    let mut seen: HashSet<Formula> = HashSet::new();

    for schema in &config.schemas {
        for combo in CartesianPower::new(config.basis.len(), schema.variables.len()) {
            let assignment: Vec<(String, Formula)> = schema
                .variables
                .iter()
                .zip(&combo)
                .map(|(variable, &idx)| (variable.clone(), config.basis[idx].clone()))
                .collect();
            let formula = substitute(&schema.template, &assignment);
            if seen.insert(formula.clone()) {
                proofs.push(Proof::single(ProofStep {
                    formula,
                    justification: Justification::Axiom {
                        schema: schema.name.clone(),
                        assignment,
                    },
                }));
            }
        }
    }
    proofs
}

/// Odometer over `arity` digits in base `base`, rightmost digit fastest.
struct CartesianPower {
    base: usize,
    digits: Option<Vec<usize>>,
}

impl CartesianPower {
    fn new(base: usize, arity: usize) -> Self {
        // Base 0 with at least one digit has no combinations; arity 0 has
        // exactly one, the empty assignment.
        let digits = if base == 0 && arity > 0 {
            None
        } else {
            Some(vec![0; arity])
        };
        CartesianPower { base, digits }
    }
}

impl Iterator for CartesianPower {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.digits.take()?;
        let mut next = current.clone();
        let mut pos = next.len();
        let mut exhausted = true;
        while pos > 0 {
            pos -= 1;
            next[pos] += 1;
            if next[pos] < self.base {
                exhausted = false;
                break;
            }
            next[pos] = 0;
        }
        if !exhausted {
            self.digits = Some(next);
        }
        Some(current)
    }
}
