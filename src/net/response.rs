//! Normalization of the loosely-shaped generation response.
//!
//! Precedence rules live here rather than in display code: `leather_cut`
//! wins over a synthesized `width x height` label, `hubs` wins over
//! `spine_hubs`, and each hub entry is interpreted on its own shape —
//! a structured `{index, position}` object or a bare number/string.

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use crate::net::types::{Materials, Measure, RawMeasurements};

/// Measurements in canonical display form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalMeasurements {
    /// Leather cut dimensions; empty when the response carried neither a
    /// `leather_cut` label nor a width/height pair.
    pub cut_label: String,
    pub materials: Option<Materials>,
    pub hubs: Vec<Hub>,
}

/// One spine-hub reference point.
#[derive(Debug, Clone, PartialEq)]
pub struct Hub {
    pub index: Option<u32>,
    /// Distance from the top of the board (mm).
    pub position: Measure,
}

impl Hub {
    /// Display line for the measurements panel.
    #[must_use]
    pub fn label(&self) -> String {
        match self.index {
            Some(i) => format!("Hub {i}: {p} mm", p = self.position),
            None => format!("Hub: {} mm", self.position),
        }
    }
}

/// Normalize raw measurements into their canonical display form.
#[must_use]
pub fn normalize(raw: &RawMeasurements) -> CanonicalMeasurements {
    let cut_label = match (&raw.leather_cut, &raw.width, &raw.height) {
        (Some(cut), _, _) => cut.clone(),
        (None, Some(w), Some(h)) => format!("{w} x {h}"),
        _ => String::new(),
    };

    let entries = raw.hubs.as_ref().or(raw.spine_hubs.as_ref());
    let hubs = entries.map_or_else(Vec::new, |entries| {
        entries.iter().filter_map(normalize_hub).collect()
    });

    CanonicalMeasurements {
        cut_label,
        materials: raw.materials.clone(),
        hubs,
    }
}

/// Interpret one hub entry. Objects yield an indexed hub, bare numbers and
/// strings an index-less one; anything else is dropped.
fn normalize_hub(entry: &serde_json::Value) -> Option<Hub> {
    match entry {
        serde_json::Value::Object(fields) => {
            let index = fields
                .get("index")
                .and_then(serde_json::Value::as_u64)
                .and_then(|i| u32::try_from(i).ok());
            let position = fields
                .get("position")
                .and_then(measure_from_value)
                .unwrap_or(Measure::Number(0.0));
            Some(Hub { index, position })
        }
        serde_json::Value::Number(_) | serde_json::Value::String(_) => Some(Hub {
            index: None,
            position: measure_from_value(entry)?,
        }),
        _ => None,
    }
}

fn measure_from_value(value: &serde_json::Value) -> Option<Measure> {
    match value {
        serde_json::Value::Number(n) => n.as_f64().map(Measure::Number),
        serde_json::Value::String(s) => Some(Measure::Text(s.clone())),
        _ => None,
    }
}
