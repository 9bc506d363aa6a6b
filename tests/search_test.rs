//! Integration tests for the layered proof search

use std::collections::HashSet;

use axiomatlas::{
    search, AxiomAtlas, Formula, Justification, SearchConfig, SearchSummary,
};

fn config_with_basis(basis: &[&str], max_length: usize) -> SearchConfig {
    let mut config = SearchConfig::with_basis(basis.iter().map(|s| Formula::new(*s)).collect());
    config.max_length = max_length;
    config
}

fn run_atlas(basis: &[&str], max_length: usize) -> (SearchSummary, String) {
    let mut out: Vec<u8> = Vec::new();
    let summary = AxiomAtlas::new(config_with_basis(basis, max_length))
        .run(&mut out)
        .expect("search should succeed");
    (summary, String::from_utf8(out).expect("report is UTF-8"))
}

#[test]
fn test_classical_derivation_over_single_atom() {
    // Over basis {a}: A1 [A=a, B=a] gives (a → (a → a)), A2 [A=a, B=a, C=a]
    // is its implication form, and one Modus Ponens step closes the proof.
    let (summary, report) = run_atlas(&["a"], 3);

    assert_eq!(summary.theorems.len(), 1);
    let proof = &summary.theorems[0];
    assert_eq!(proof.theorem(), &Formula::new("((a → a) → (a → a))"));
    assert_eq!(proof.len(), 3);

    let steps = proof.steps();
    assert_eq!(steps[0].formula, Formula::new("(a → (a → a))"));
    assert_eq!(steps[0].justification.to_string(), "A1 [A=a, B=a]");
    assert_eq!(
        steps[1].formula,
        Formula::new("((a → (a → a)) → ((a → a) → (a → a)))")
    );
    assert_eq!(steps[1].justification.to_string(), "A2 [A=a, B=a, C=a]");
    assert_eq!(
        steps[2].justification,
        Justification::ModusPonens {
            premise: 0,
            implication: 1
        }
    );
    assert_eq!(steps[2].justification.to_string(), "MP (1,2)");

    // 3 axiom instances, 9 two-step proofs, 27 axiom extensions plus the
    // two orderings of the Modus Ponens proof at length 3
    assert!(report.contains("Found 3 unique length-1 proofs."));
    assert!(report.contains("Found 9 new unique proofs of length 2."));
    assert!(report.contains("Found 29 new unique proofs of length 3."));
    assert!(report.contains("Found a total of 41 proofs (including non-minimal)."));
    assert!(report.contains("Found 2 proofs of length 3 or more that use Modus Ponens."));
    assert!(report.contains("Filtering down to the simplest proof for each of 1 unique theorems..."));
}

#[test]
fn test_modus_ponens_requires_two_distinct_prior_lines() {
    // A single axiom instance cannot self-apply: length-2 proofs only ever
    // append axiom instances.
    let config = config_with_basis(&["a", "b"], 2);
    let mut out: Vec<u8> = Vec::new();
    let outcome = search(&config, &mut out).unwrap();

    assert_eq!(outcome.layers[0].len(), 16);
    assert_eq!(outcome.layers[1].len(), 256);
    assert!(outcome.layers[1].iter().all(|p| !p.uses_modus_ponens()));
}

#[test]
fn test_prefix_invariant() {
    let config = config_with_basis(&["a"], 4);
    let mut out: Vec<u8> = Vec::new();
    let outcome = search(&config, &mut out).unwrap();

    for window in outcome.layers.windows(2) {
        let previous: HashSet<Vec<Formula>> =
            window[0].iter().map(|p| p.formulas()).collect();
        for proof in &window[1] {
            let mut prefix = proof.formulas();
            prefix.pop();
            assert!(
                previous.contains(&prefix),
                "proof {:?} does not extend an accepted shorter proof",
                proof.formulas()
            );
        }
    }
}

#[test]
fn test_step_sequences_unique_within_each_layer() {
    let config = config_with_basis(&["a", "b"], 3);
    let mut out: Vec<u8> = Vec::new();
    let outcome = search(&config, &mut out).unwrap();

    for layer in &outcome.layers {
        let sequences: HashSet<Vec<Formula>> = layer.iter().map(|p| p.formulas()).collect();
        assert_eq!(sequences.len(), layer.len());
    }
}

#[test]
fn test_theorems_over_two_atoms() {
    // Every Modus Ponens opportunity at length 3 pairs A1 [A=x, B=y] with
    // A2 [A=x, B=y, C=x], proving ((x → y) → (x → x)).
    let (summary, report) = run_atlas(&["a", "b"], 3);

    let theorems: Vec<&str> = summary
        .theorems
        .iter()
        .map(|p| p.theorem().as_str())
        .collect();
    assert_eq!(
        theorems,
        vec![
            "((a → a) → (a → a))",
            "((a → b) → (a → a))",
            "((b → a) → (b → b))",
            "((b → b) → (b → b))",
        ]
    );

    // Two step orderings per theorem reach the same conclusion; the first
    // one enumerated wins and uses MP (1,2)
    for proof in &summary.theorems {
        assert_eq!(proof.len(), 3);
        assert_eq!(proof.steps()[2].justification.to_string(), "MP (1,2)");
    }

    assert!(report.contains("Found 8 proofs of length 3 or more that use Modus Ponens."));
    assert!(report.contains("Filtering down to the simplest proof for each of 4 unique theorems..."));
}

#[test]
fn test_report_lists_proofs_sorted_by_length_then_theorem() {
    let (summary, _) = run_atlas(&["a", "b"], 3);
    let keys: Vec<(usize, String)> = summary
        .theorems
        .iter()
        .map(|p| (p.len(), p.theorem().as_str().to_string()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn test_rendered_proofs_are_aligned() {
    let (summary, report) = run_atlas(&["a"], 3);
    let proof = &summary.theorems[0];
    let width = proof
        .steps()
        .iter()
        .map(|s| s.formula.complexity())
        .max()
        .unwrap();

    // Each numbered line pads its formula to the widest step
    for (idx, step) in proof.steps().iter().enumerate() {
        let line = format!(
            "  {}. {:<width$}   {}",
            idx + 1,
            step.formula,
            step.justification,
            width = width
        );
        assert!(report.contains(&line), "missing line {:?}", line);
    }
    assert!(report.contains(&"-".repeat(20)));
}

#[test]
fn test_empty_basis_terminates_immediately() {
    let (summary, report) = run_atlas(&[], 5);
    assert_eq!(summary.total_proofs, 0);
    assert!(summary.theorems.is_empty());
    assert!(report.contains("Found 0 unique length-1 proofs."));
    assert!(report.contains("No proofs of length 1 found, stopping search."));
    assert!(report.contains("--- Search Complete ---"));
}

#[test]
fn test_invalid_configuration_is_rejected_before_writing_progress() {
    let config = config_with_basis(&["a"], 0);
    let mut out: Vec<u8> = Vec::new();
    let result = search(&config, &mut out);
    assert!(result.is_err());
    assert!(out.is_empty());
}
