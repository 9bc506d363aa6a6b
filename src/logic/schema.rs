//! Axiom schemas of the Hilbert system.

use serde::{Deserialize, Serialize};

/// A named axiom template over schema variables.
///
/// The template is formula-shaped text containing variable tokens; the
/// variable list fixes both the instantiation order and the order in which
/// assignments are reported in justifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxiomSchema {
    pub name: String,
    pub template: String,
    pub variables: Vec<String>,
}

impl AxiomSchema {
    pub fn new(name: &str, template: &str, variables: &[&str]) -> Self {
        AxiomSchema {
            name: name.to_string(),
            template: template.to_string(),
            variables: variables.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// The three standard schemas, in instantiation order.
    ///
    /// Fixed for the lifetime of a search: every length-1 proof is an
    /// instance of one of these.
    pub fn standard() -> Vec<AxiomSchema> {
        vec![
            AxiomSchema::new("A1", "(A → (B → A))", &["A", "B"]),
            AxiomSchema::new(
                "A2",
                "((A → (B → C)) → ((A → B) → (A → C)))",
                &["A", "B", "C"],
            ),
            AxiomSchema::new("A3", "((¬B → ¬A) → (A → B))", &["A", "B"]),
        ]
    }
}
