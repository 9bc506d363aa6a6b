//! Per-theorem proof minimization.

use crate::logic::Formula;
use crate::proof::Proof;
use indexmap::IndexMap;

/// Keep the best proof of every theorem among `proofs`.
///
/// Only proofs that use Modus Ponens at least once qualify; chains of bare
/// axiom instances prove nothing new. Within a theorem, strictly lower
/// complexity wins, a complexity tie falls to strictly fewer steps, and a
/// full tie keeps the proof encountered first. The map preserves
/// first-discovery order, so the outcome is a pure function of the engine's
/// enumeration order.
pub fn best_proofs_per_theorem<'a, I>(proofs: I) -> IndexMap<Formula, Proof>
where
    I: IntoIterator<Item = &'a Proof>,
{
    let mut best: IndexMap<Formula, Proof> = IndexMap::new();
    for proof in proofs {
        if !proof.uses_modus_ponens() {
            continue;
        }
        match best.get_mut(proof.theorem()) {
            None => {
                best.insert(proof.theorem().clone(), proof.clone());
            }
            Some(current) => {
                if (proof.complexity(), proof.len()) < (current.complexity(), current.len()) {
                    *current = proof.clone();
                }
            }
        }
    }
    best
}

/// Final report order: step count ascending, then theorem text ascending.
pub fn sorted_for_report(best: IndexMap<Formula, Proof>) -> Vec<Proof> {
    let mut proofs: Vec<Proof> = best.into_values().collect();
    proofs.sort_by(|a, b| (a.len(), a.theorem()).cmp(&(b.len(), b.theorem())));
    proofs
}
