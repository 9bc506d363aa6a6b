//! Report rendering and the sink seam.
//!
//! The engine owns ordering and formatting; a sink only writes bytes.
//! Progress lines and the final proof listing go through the same sink, in
//! the order the run produces them.

use crate::proof::Proof;
use std::io;

/// Receives report text.
///
/// Implemented for every `io::Write`, so a `File`, a `BufWriter` or a plain
/// `Vec<u8>` in tests all work unchanged.
pub trait ReportSink {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

impl<W: io::Write> ReportSink for W {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.write_all(text.as_bytes())
    }
}

/// Width of the dashed separator line between proofs.
const SEPARATOR_WIDTH: usize = 20;

/// Render one proof as a numbered, aligned step list plus separator.
///
/// The formula column pads every step to the longest formula in this proof,
/// measured in characters, with three spaces before the justification.
pub fn render_proof(proof: &Proof) -> String {
    let width = proof
        .steps()
        .iter()
        .map(|s| s.formula.complexity())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (idx, step) in proof.steps().iter().enumerate() {
        out.push_str(&format!(
            "  {}. {:<width$}   {}\n",
            idx + 1,
            step.formula,
            step.justification,
            width = width
        ));
    }
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    out
}
