//! Textual propositional logic: formulas, axiom schemas, substitution, and
//! Modus Ponens.
//!
//! Everything here treats formulas as text. That discipline is load-bearing:
//! substitution, implication matching and proof deduplication all agree on
//! character-identical equality, and no module may introduce a structural
//! notion of sameness.

pub mod formula;
pub mod modus_ponens;
pub mod schema;
pub mod substitution;


pub use formula::Formula;
pub use modus_ponens::consequent;
pub use schema::AxiomSchema;
pub use substitution::{substitute, Assignment};
