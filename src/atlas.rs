//! AxiomAtlas orchestrator: one complete search, minimize, report pass.
//!
//! ```ignore
//! let atlas = AxiomAtlas::new(SearchConfig::default());
//! let mut sink = BufWriter::new(File::create("proof_output.txt")?);
//! let summary = atlas.run(&mut sink)?;
//! ```

use crate::config::SearchConfig;
use crate::error::Result;
use crate::json::SummaryJson;
use crate::logic::Formula;
use crate::proof::Proof;
use crate::report::{render_proof, ReportSink};
use crate::search::engine::{search, SearchOutcome};
use crate::search::minimize::{best_proofs_per_theorem, sorted_for_report};
use crate::search::stats::SearchStats;
use chrono::Local;
use std::time::Instant;

/// Drives the full pipeline against a sink.
///
/// Holds the immutable configuration; reusable across runs.
pub struct AxiomAtlas {
    config: SearchConfig,
}

/// Final counts and results of a completed run.
#[derive(Debug)]
pub struct SearchSummary {
    pub max_length: usize,
    pub basis: Vec<Formula>,
    /// Accepted proofs across every layer, length 1 included.
    pub total_proofs: usize,
    /// Proofs of length 3 or more that use Modus Ponens.
    pub modus_ponens_proofs: usize,
    /// Best proof per theorem, in report order.
    pub theorems: Vec<Proof>,
    pub stats: SearchStats,
}

impl SearchSummary {
    pub fn to_json(&self) -> SummaryJson {
        self.into()
    }
}

impl AxiomAtlas {
    pub fn new(config: SearchConfig) -> Self {
        AxiomAtlas { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the search, minimize per theorem, and write the full report.
    ///
    /// Everything lands in `sink` in report order: header, progress lines,
    /// summary counts, the sorted proof listing, the elapsed-time trailer.
    /// On an error nothing more is written; whatever the sink already
    /// received stays as is.
    pub fn run(&self, sink: &mut dyn ReportSink) -> Result<SearchSummary> {
        let started = Instant::now();
        self.write_header(sink)?;

        let outcome = search(&self.config, sink)?;

        sink.write_text("\n--- Search Complete ---\n")?;
        sink.write_text(&format!(
            "Found a total of {} proofs (including non-minimal).\n",
            outcome.total_proofs
        ))?;

        let modus_ponens_proofs = outcome
            .reportable_proofs()
            .filter(|p| p.uses_modus_ponens())
            .count();
        sink.write_text(&format!(
            "Found {} proofs of length 3 or more that use Modus Ponens.\n",
            modus_ponens_proofs
        ))?;

        let theorems = if modus_ponens_proofs == 0 {
            sink.write_text("No proofs found with length 3 or more that use MP.\n")?;
            Vec::new()
        } else {
            let best = best_proofs_per_theorem(outcome.reportable_proofs());
            sink.write_text(&format!(
                "Filtering down to the simplest proof for each of {} unique theorems...\n\n",
                best.len()
            ))?;
            let ordered = sorted_for_report(best);
            for proof in &ordered {
                sink.write_text(&render_proof(proof))?;
            }
            ordered
        };

        let elapsed = started.elapsed();
        sink.write_text(&format!(
            "\nTotal execution time: {:.4} seconds.\n",
            elapsed.as_secs_f64()
        ))?;

        let SearchOutcome {
            total_proofs,
            mut stats,
            ..
        } = outcome;
        stats.total_time = elapsed;

        Ok(SearchSummary {
            max_length: self.config.max_length,
            basis: self.config.basis.clone(),
            total_proofs,
            modus_ponens_proofs,
            theorems,
            stats,
        })
    }

    fn write_header(&self, sink: &mut dyn ReportSink) -> Result<()> {
        sink.write_text(&format!(
            "Starting proof generation at {}\n",
            Local::now().format("%a %b %e %H:%M:%S %Y")
        ))?;
        sink.write_text(&format!("Max Length: {}\n", self.config.max_length))?;
        sink.write_text(&format!("Basis Size: {}\n", self.config.basis.len()))?;
        sink.write_text(&format!("{}\n\n", "=".repeat(30)))?;
        Ok(())
    }
}
