//! The proof-growth engine: layered, deduplicated proof search.
//!
//! ## Layers
//!
//! The engine iterates over proof *length*, not over individual proofs.
//! Layer k holds every distinct proof of exactly k steps, and is built
//! exclusively from layer k−1:
//!
//! 1. **Option A (axiom extension)**: append any length-1 axiom instance to
//!    a layer-(k−1) proof.
//! 2. **Option B (Modus Ponens extension)**: for any ordered pair of
//!    distinct steps (i, j) of a layer-(k−1) proof, append the consequent
//!    extracted from step j with step i as antecedent, if it matches.
//!
//! ## Deduplication
//!
//! Identity is the formula sequence: a candidate is accepted only if its
//! sequence has not appeared earlier in the same layer. The seen-set lives
//! only while its layer is under construction and is dropped the moment the
//! layer is complete; no later layer re-derives at that length, and the set
//! is the single largest transient allocation of the run.
//!
//! ## Determinism
//!
//! Layer iteration follows insertion order, Option A runs before Option B
//! for each proof, and (i, j) pairs enumerate with i in the outer loop.
//! This fixes which justification wins when several derivations reach the
//! same step sequence, so runs are reproducible.

use crate::config::SearchConfig;
use crate::error::Result;
use crate::logic::{modus_ponens, Formula};
use crate::proof::{Justification, Proof, ProofStep};
use crate::report::ReportSink;
use crate::search::instantiate::axiom_instances;
use crate::search::stats::SearchStats;
use std::collections::HashSet;
use std::time::Instant;

/// Everything the search discovered, grouped by proof length.
#[derive(Debug)]
pub struct SearchOutcome {
    /// `layers[i]` holds all unique proofs of length i + 1, in discovery
    /// order. Trailing empty layers are not stored.
    pub layers: Vec<Vec<Proof>>,
    /// Accepted proofs across every layer, length 1 included.
    pub total_proofs: usize,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// All proofs of length 3 or more, in engine enumeration order. This is
    /// the population the theorem minimizer works from.
    pub fn reportable_proofs(&self) -> impl Iterator<Item = &Proof> {
        self.layers.iter().skip(2).flatten()
    }
}

/// Run the layered search, writing per-layer progress lines to `sink`.
///
/// The loop covers k = 2..=max_length and stops early when a layer comes up
/// empty; both stops are normal termination. No I/O happens inside a layer,
/// only at layer boundaries.
pub fn search(config: &SearchConfig, sink: &mut dyn ReportSink) -> Result<SearchOutcome> {
    config.validate()?;
    let started = Instant::now();
    let mut stats = SearchStats::default();

    sink.write_text("--- Generating all Axiom instances (Length 1) ---\n")?;
    sink.write_text(&format!(
        "Using WFF Basis (size {}): {:?}\n\n",
        config.basis.len(),
        config.basis
    ))?;

    let layer_started = Instant::now();
    let axioms = axiom_instances(config);
    stats.record_layer(1, axioms.len(), layer_started.elapsed());
    let mut total_proofs = axioms.len();

    sink.write_text(&format!(
        "Found {} unique length-1 proofs.\n\n",
        axioms.len()
    ))?;
    sink.write_text(&format!(
        "--- Searching for proofs up to length {} ---\n",
        config.max_length
    ))?;

    let mut layers = vec![axioms];
    for k in 2..=config.max_length {
        let previous = &layers[k - 2];
        if previous.is_empty() {
            sink.write_text(&format!(
                "No proofs of length {} found, stopping search.\n",
                k - 1
            ))?;
            break;
        }
        sink.write_text(&format!(
            "Generating proofs of length {} from {} proofs of length {}...\n",
            k,
            previous.len(),
            k - 1
        ))?;

        let layer_started = Instant::now();
        let layer = grow_layer(previous, &layers[0]);
        stats.record_layer(k, layer.len(), layer_started.elapsed());
        total_proofs += layer.len();

        sink.write_text(&format!(
            "Found {} new unique proofs of length {}.\n",
            layer.len(),
            k
        ))?;
        if layer.is_empty() {
            sink.write_text(&format!(
                "No new proofs of length {} found, stopping search.\n",
                k
            ))?;
            break;
        }
        layers.push(layer);
    }

    stats.total_proofs = total_proofs;
    stats.total_time = started.elapsed();
    Ok(SearchOutcome {
        layers,
        total_proofs,
        stats,
    })
}

/// Build one layer from the previous one.
///
/// The seen-set is scoped to this call: dropping it on return releases the
/// layer's dedup record.
fn grow_layer(previous: &[Proof], axioms: &[Proof]) -> Vec<Proof> {
    let mut layer = Vec::new();
    let mut seen: HashSet<Vec<Formula>> = HashSet::new();

    for proof in previous {
        let prefix = proof.formulas();

        // Option A: append a fresh axiom instance. Runs before Option B so
        // axiom justifications win step-sequence collisions.
        for axiom in axioms {
            let step = &axiom.steps()[0];
            let mut sequence = prefix.clone();
            sequence.push(step.formula.clone());
            if seen.insert(sequence) {
                layer.push(proof.extended(step.clone()));
            }
        }

        // Option B: append the Modus Ponens consequence of two distinct
        // earlier steps.
        for i in 0..proof.len() {
            for j in 0..proof.len() {
                if i == j {
                    continue;
                }
                let p = &proof.steps()[i].formula;
                let implication = &proof.steps()[j].formula;
                if let Some(q) = modus_ponens::consequent(p, implication) {
                    let mut sequence = prefix.clone();
                    sequence.push(q.clone());
                    if seen.insert(sequence) {
                        layer.push(proof.extended(ProofStep {
                            formula: q,
                            justification: Justification::ModusPonens {
                                premise: i,
                                implication: j,
                            },
                        }));
                    }
                }
            }
        }
    }
    layer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axiom_proof(formula: &str) -> Proof {
        Proof::single(ProofStep {
            formula: Formula::new(formula),
            justification: Justification::Axiom {
                schema: "A1".to_string(),
                assignment: vec![("A".to_string(), Formula::new("a"))],
            },
        })
    }

    #[test]
    fn test_no_modus_ponens_from_single_step() {
        // A one-step proof has no ordered pair of distinct steps
        let axioms = vec![axiom_proof("a"), axiom_proof("(a → b)")];
        let layer = grow_layer(&axioms, &axioms);
        assert_eq!(layer.len(), 4);
        assert!(layer.iter().all(|p| !p.uses_modus_ponens()));
    }

    #[test]
    fn test_modus_ponens_extension() {
        let axioms = vec![axiom_proof("a"), axiom_proof("(a → b)")];
        let two_step = axioms[0].extended(axioms[1].steps()[0].clone());
        let layer = grow_layer(&[two_step], &[]);
        assert_eq!(layer.len(), 1);
        let last = &layer[0].steps()[2];
        assert_eq!(last.formula, Formula::new("b"));
        assert_eq!(
            last.justification,
            Justification::ModusPonens {
                premise: 0,
                implication: 1
            }
        );
    }

    #[test]
    fn test_duplicate_sequences_keep_first_justification() {
        // The axiom extension and the MP extension both reach [a, (a → b), b];
        // Option A runs first, so the axiom justification survives
        let axioms = vec![axiom_proof("a"), axiom_proof("(a → b)"), axiom_proof("b")];
        let two_step = axioms[0].extended(axioms[1].steps()[0].clone());
        let layer = grow_layer(&[two_step], &axioms);
        assert_eq!(layer.len(), 3);
        let b_proof = layer
            .iter()
            .find(|p| p.theorem() == &Formula::new("b"))
            .expect("proof ending in b");
        assert!(!b_proof.uses_modus_ponens());
    }

    #[test]
    fn test_dedup_is_idempotent_within_a_layer() {
        let axioms = vec![axiom_proof("a"), axiom_proof("a"), axiom_proof("(¬a)")];
        // Duplicate inputs in the previous layer cannot inflate the next one
        let layer = grow_layer(&axioms, &axioms);
        let sequences: HashSet<Vec<Formula>> = layer.iter().map(|p| p.formulas()).collect();
        assert_eq!(sequences.len(), layer.len());
    }

    #[test]
    fn test_search_stops_on_empty_basis() {
        let config = SearchConfig::with_basis(Vec::new());
        let mut out: Vec<u8> = Vec::new();
        let outcome = search(&config, &mut out).unwrap();
        assert_eq!(outcome.total_proofs, 0);
        assert_eq!(outcome.layers.len(), 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No proofs of length 1 found, stopping search."));
    }

    #[test]
    fn test_search_records_layer_stats() {
        let config = SearchConfig::with_basis(vec![Formula::new("a")]);
        let mut out: Vec<u8> = Vec::new();
        let outcome = search(&config, &mut out).unwrap();
        assert_eq!(outcome.stats.layers[0].length, 1);
        assert_eq!(outcome.stats.layers[0].accepted, 3);
        assert_eq!(outcome.stats.total_proofs, outcome.total_proofs);
    }
}
