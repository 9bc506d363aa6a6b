//! Layered proof search: instantiation, growth, minimization, statistics.

pub mod engine;
pub mod instantiate;
pub mod minimize;
pub mod stats;

pub use engine::{search, SearchOutcome};
pub use instantiate::axiom_instances;
pub use minimize::{best_proofs_per_theorem, sorted_for_report};
pub use stats::{LayerStats, SearchStats};
