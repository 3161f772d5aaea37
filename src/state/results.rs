//! Generation results: the last received drawing and its measurements.

#[cfg(test)]
#[path = "results_test.rs"]
mod results_test;

use crate::net::response::{CanonicalMeasurements, Hub};

/// Display state for the most recent generation call.
///
/// Replaced piecewise by [`ResultsState::absorb`] on each success and left
/// untouched on failure, so a failed call never clears what the user is
/// looking at. Not persisted across reloads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultsState {
    /// A generation request is in flight; the generate control is disabled.
    pub generating: bool,
    /// Verbatim SVG markup of the last generated drawing.
    pub artifact: Option<String>,
    /// Leather cut dimensions, e.g. `"331.0 x 309.0"`.
    pub cut_label: String,
    pub leather_area_cm2: String,
    pub leather_area_sqft: String,
    pub boards_area_cm2: String,
    /// Spine hub reference points, in server order.
    pub hubs: Vec<Hub>,
    /// The measurements panel has something to show.
    pub revealed: bool,
}

impl ResultsState {
    /// Whether the download control is usable.
    #[must_use]
    pub fn can_export(&self) -> bool {
        self.artifact.is_some()
    }

    /// Take in a successful generation response.
    ///
    /// Missing pieces degrade field by field: an absent `svg` keeps the
    /// previous artifact, an empty cut label keeps the previous label, and
    /// absent material figures keep their previous values. Hubs are replaced
    /// wholesale. The measurements panel is revealed either way.
    pub fn absorb(&mut self, svg: Option<String>, measurements: CanonicalMeasurements) {
        if let Some(svg) = svg {
            self.artifact = Some(svg);
        }
        if !measurements.cut_label.is_empty() {
            self.cut_label = measurements.cut_label;
        }
        if let Some(materials) = measurements.materials {
            if let Some(v) = materials.leather_area_cm2 {
                self.leather_area_cm2 = v.to_string();
            }
            if let Some(v) = materials.leather_area_sqft {
                self.leather_area_sqft = v.to_string();
            }
            if let Some(v) = materials.boards_area_cm2 {
                self.boards_area_cm2 = v.to_string();
            }
        }
        self.hubs = measurements.hubs;
        self.revealed = true;
    }
}
