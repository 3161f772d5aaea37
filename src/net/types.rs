//! Wire types for the generation protocol.
//!
//! The request shape is rigid: every form field is carried under its exact
//! name, with the serialized design collection under `design_elements`. The
//! response shape is not: the service has shipped two measurement layouts
//! and formats numbers either as JSON numbers or as pre-formatted strings,
//! so everything on the inbound side is optional and scalar fields come in
//! through [`Measure`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::design::{DesignElement, DesignState};
use crate::state::template::TemplateParams;

/// Request payload for `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub book_w: String,
    pub book_h: String,
    pub book_t: String,
    pub board_thickness: String,
    pub turn_in: String,
    pub hinge_gap: String,
    pub square: String,
    pub num_hubs: String,
    pub border_inset: String,
    pub design_elements: Vec<DesignElement>,
}

impl GenerateRequest {
    /// Merge the form fields and the design state into one payload.
    ///
    /// `border_inset` lives with the design tooling rather than the
    /// parameter form, so it is pulled in here explicitly; nothing is
    /// dropped or renamed.
    #[must_use]
    pub fn build(params: &TemplateParams, design: &DesignState) -> Self {
        Self {
            book_w: params.book_w.clone(),
            book_h: params.book_h.clone(),
            book_t: params.book_t.clone(),
            board_thickness: params.board_thickness.clone(),
            turn_in: params.turn_in.clone(),
            hinge_gap: params.hinge_gap.clone(),
            square: params.square.clone(),
            num_hubs: params.num_hubs.clone(),
            border_inset: design.border_inset.clone(),
            design_elements: design.elements.clone(),
        }
    }
}

/// A measurement scalar, sent by the service either as a JSON number or as
/// a pre-formatted string depending on server version.
///
/// Numbers display through `f64` formatting (`300.0` renders as `300`),
/// strings display verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Text(String),
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Number(n) => write!(f, "{n}"),
            Measure::Text(s) => f.write_str(s),
        }
    }
}

/// Response body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub measurements: Option<RawMeasurements>,
}

impl GenerateResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Measurements as they arrive, before normalization.
///
/// Hub entries stay as raw JSON values because their shape varies per
/// element; `net::response::normalize` sorts them out.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawMeasurements {
    #[serde(default)]
    pub leather_cut: Option<String>,
    #[serde(default)]
    pub width: Option<Measure>,
    #[serde(default)]
    pub height: Option<Measure>,
    #[serde(default)]
    pub materials: Option<Materials>,
    #[serde(default)]
    pub hubs: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub spine_hubs: Option<Vec<serde_json::Value>>,
}

/// Material usage figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Materials {
    #[serde(default)]
    pub leather_area_cm2: Option<Measure>,
    #[serde(default)]
    pub leather_area_sqft: Option<Measure>,
    #[serde(default)]
    pub boards_area_cm2: Option<Measure>,
}
