//! JSON mirror types for summaries and proofs.

use crate::atlas::SearchSummary;
use crate::proof::{Justification, Proof, ProofStep};
use crate::search::stats::LayerStats;
use serde::{Deserialize, Serialize};

/// JSON representation of a justification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum JustificationJson {
    Axiom {
        schema: String,
        assignment: Vec<(String, String)>,
    },
    /// Step positions, 0-indexed as stored
    ModusPonens { premise: usize, implication: usize },
}

impl From<&Justification> for JustificationJson {
    fn from(justification: &Justification) -> Self {
        match justification {
            Justification::Axiom { schema, assignment } => JustificationJson::Axiom {
                schema: schema.clone(),
                assignment: assignment
                    .iter()
                    .map(|(v, f)| (v.clone(), f.as_str().to_string()))
                    .collect(),
            },
            Justification::ModusPonens {
                premise,
                implication,
            } => JustificationJson::ModusPonens {
                premise: *premise,
                implication: *implication,
            },
        }
    }
}

/// JSON representation of a proof step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofStepJson {
    pub formula: String,
    pub justification: JustificationJson,
}

impl From<&ProofStep> for ProofStepJson {
    fn from(step: &ProofStep) -> Self {
        ProofStepJson {
            formula: step.formula.as_str().to_string(),
            justification: (&step.justification).into(),
        }
    }
}

/// JSON representation of a proof
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofJson {
    pub theorem: String,
    pub complexity: usize,
    pub steps: Vec<ProofStepJson>,
}

impl From<&Proof> for ProofJson {
    fn from(proof: &Proof) -> Self {
        ProofJson {
            theorem: proof.theorem().as_str().to_string(),
            complexity: proof.complexity(),
            steps: proof.steps().iter().map(|s| s.into()).collect(),
        }
    }
}

/// JSON representation of one layer's counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerJson {
    pub length: usize,
    pub proofs: usize,
    pub time_seconds: f64,
}

impl From<&LayerStats> for LayerJson {
    fn from(layer: &LayerStats) -> Self {
        LayerJson {
            length: layer.length,
            proofs: layer.accepted,
            time_seconds: layer.time.as_secs_f64(),
        }
    }
}

/// JSON representation of a whole run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryJson {
    pub max_length: usize,
    pub basis: Vec<String>,
    pub total_proofs: usize,
    pub modus_ponens_proofs: usize,
    pub unique_theorems: usize,
    pub layers: Vec<LayerJson>,
    pub time_seconds: f64,
    pub theorems: Vec<ProofJson>,
}

impl From<&SearchSummary> for SummaryJson {
    fn from(summary: &SearchSummary) -> Self {
        SummaryJson {
            max_length: summary.max_length,
            basis: summary
                .basis
                .iter()
                .map(|f| f.as_str().to_string())
                .collect(),
            total_proofs: summary.total_proofs,
            modus_ponens_proofs: summary.modus_ponens_proofs,
            unique_theorems: summary.theorems.len(),
            layers: summary.stats.layers.iter().map(|l| l.into()).collect(),
            time_seconds: summary.stats.total_time.as_secs_f64(),
            theorems: summary.theorems.iter().map(|p| p.into()).collect(),
        }
    }
}
