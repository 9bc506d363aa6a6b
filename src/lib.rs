//! AxiomAtlas: exhaustive proof search for a Hilbert-style propositional
//! calculus
//!
//! This library enumerates every derivation up to a configured length over
//! a small basis of ground formulas and the three standard axiom schemas,
//! deduplicates proofs by their step sequence, keeps the simplest proof of
//! every theorem reached, and writes a human-readable report.
//!
//! Formulas are treated as opaque text throughout: substitution, Modus
//! Ponens matching and proof identity are all character-exact string
//! operations.

pub mod atlas;
pub mod config;
pub mod error;
pub mod json;
pub mod logic;
pub mod proof;
pub mod report;
pub mod search;

// Re-export commonly used types
pub use atlas::{AxiomAtlas, SearchSummary};
pub use config::{default_basis, small_basis, SearchConfig, MAX_BASIS_SIZE};
pub use error::{Result, SearchError};
pub use logic::{consequent, substitute, Assignment, AxiomSchema, Formula};
pub use proof::{Justification, Proof, ProofStep};
pub use report::{render_proof, ReportSink};
pub use search::{
    axiom_instances, best_proofs_per_theorem, search, sorted_for_report, LayerStats, SearchOutcome,
    SearchStats,
};
