//! Run statistics for the layered search.
//!
//! All `Duration` fields are serialized as `f64` seconds.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::time::Duration;

fn secs(d: &Duration) -> f64 {
    d.as_secs_f64()
}

/// Counters for one completed layer.
#[derive(Debug, Clone, Default)]
pub struct LayerStats {
    /// Proof length of this layer.
    pub length: usize,
    /// Unique proofs accepted into the layer.
    pub accepted: usize,
    /// Time spent constructing the layer.
    pub time: Duration,
}

impl Serialize for LayerStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("LayerStats", 3)?;
        s.serialize_field("length", &self.length)?;
        s.serialize_field("accepted", &self.accepted)?;
        s.serialize_field("time", &secs(&self.time))?;
        s.end()
    }
}

/// Aggregate statistics for a whole search run.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Per-layer counters, in layer order starting at length 1.
    pub layers: Vec<LayerStats>,
    /// Accepted proofs across every layer, length 1 included.
    pub total_proofs: usize,
    /// Wall-clock time for the whole run.
    pub total_time: Duration,
}

impl SearchStats {
    /// Record a completed layer.
    pub fn record_layer(&mut self, length: usize, accepted: usize, time: Duration) {
        self.layers.push(LayerStats {
            length,
            accepted,
            time,
        });
    }
}

impl Serialize for SearchStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SearchStats", 3)?;
        s.serialize_field("layers", &self.layers)?;
        s.serialize_field("total_proofs", &self.total_proofs)?;
        s.serialize_field("total_time", &secs(&self.total_time))?;
        s.end()
    }
}
