//! Design overlay model: the ordered collection of decorative elements the
//! user places on the cover template.
//!
//! This module defines the element variants (`DesignElement`), the edit
//! commands that mutate the collection (`DesignOp`), and the state struct
//! that owns it (`DesignState`). Elements have no identity beyond their
//! position in the sequence — every mutation addresses an element by index,
//! and a removal invalidates any index held across it. The design panel
//! re-renders all rows from scratch after each mutation, so nothing else
//! ever holds an index long enough to go stale.
//!
//! Data flows out of this layer into the request payload: the collection is
//! serialized in order, each element as its tagged shape (`{"type": "text",
//! ...}` / `{"type": "stamp", ...}`).

#[cfg(test)]
#[path = "design_test.rs"]
mod design_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decorative motif available for stamp elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motif {
    #[default]
    Acorn,
    Fleuron,
    Corner,
}

impl Motif {
    /// All motifs, in picker order.
    pub const ALL: [Motif; 3] = [Motif::Acorn, Motif::Fleuron, Motif::Corner];

    /// Wire name, as serialized into the request payload and used as the
    /// `<option>` value in the motif picker.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Motif::Acorn => "acorn",
            Motif::Fleuron => "fleuron",
            Motif::Corner => "corner",
        }
    }

    /// Human-readable label for the motif picker.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Motif::Acorn => "Acorn",
            Motif::Fleuron => "Fleuron",
            Motif::Corner => "Corner",
        }
    }

    /// Parse a wire name back into a motif.
    #[must_use]
    pub fn parse(value: &str) -> Option<Motif> {
        match value {
            "acorn" => Some(Motif::Acorn),
            "fleuron" => Some(Motif::Fleuron),
            "corner" => Some(Motif::Corner),
            _ => None,
        }
    }
}

/// One decorative element placed on the template.
///
/// Serialized with a `type` tag so the payload shape matches what the
/// generation service expects. Coordinates are millimeters on the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DesignElement {
    /// A text label drawn at `(x, y)`.
    Text {
        content: String,
        x: f64,
        y: f64,
        font_size: f64,
    },
    /// A decorative stamp drawn at `(x, y)`, scaled by `scale`.
    Stamp {
        motif: Motif,
        x: f64,
        y: f64,
        scale: f64,
    },
}

impl DesignElement {
    /// New text label with the standard placement defaults.
    #[must_use]
    pub fn new_text() -> Self {
        DesignElement::Text {
            content: "Label".to_owned(),
            x: 50.0,
            y: 50.0,
            font_size: 12.0,
        }
    }

    /// New stamp with the standard placement defaults.
    #[must_use]
    pub fn new_stamp() -> Self {
        DesignElement::Stamp {
            motif: Motif::Acorn,
            x: 50.0,
            y: 50.0,
            scale: 1.0,
        }
    }

    /// Wire name of the variant, matching the serialized `type` tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            DesignElement::Text { .. } => "text",
            DesignElement::Stamp { .. } => "stamp",
        }
    }

    /// Apply a single field edit to this element.
    ///
    /// Numeric fields coerce unparseable or non-finite input to `0.0` so an
    /// element never holds an invalid number. `Content` stores the raw value
    /// verbatim. `Motif` only accepts the three wire names.
    fn set(&mut self, field: Field, value: &str) -> Result<(), DesignError> {
        match (self, field) {
            (DesignElement::Text { content, .. }, Field::Content) => {
                *content = value.to_owned();
            }
            (DesignElement::Stamp { motif, .. }, Field::Motif) => {
                *motif = Motif::parse(value)
                    .ok_or_else(|| DesignError::UnknownMotif(value.to_owned()))?;
            }
            (DesignElement::Text { x, .. } | DesignElement::Stamp { x, .. }, Field::X) => {
                *x = coerce_number(value);
            }
            (DesignElement::Text { y, .. } | DesignElement::Stamp { y, .. }, Field::Y) => {
                *y = coerce_number(value);
            }
            (DesignElement::Text { font_size, .. }, Field::FontSize) => {
                *font_size = coerce_number(value);
            }
            (DesignElement::Stamp { scale, .. }, Field::Scale) => {
                *scale = coerce_number(value);
            }
            (elem, field) => {
                return Err(DesignError::FieldMismatch {
                    field,
                    kind: elem.kind(),
                });
            }
        }
        Ok(())
    }
}

/// Editable fields across both element variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Content,
    Motif,
    X,
    Y,
    FontSize,
    Scale,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Content => "content",
            Field::Motif => "motif",
            Field::X => "x",
            Field::Y => "y",
            Field::FontSize => "font_size",
            Field::Scale => "scale",
        };
        f.write_str(name)
    }
}

/// A single user edit applied to the design collection.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignOp {
    /// Append a text label with default placement.
    AddText,
    /// Append a stamp with default placement.
    AddStamp,
    /// Overwrite one field of the element at `index`.
    Update {
        index: usize,
        field: Field,
        value: String,
    },
    /// Delete the element at `index`, shifting later elements down by one.
    Remove { index: usize },
}

/// Rejected design edit. None of these mutate the collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesignError {
    #[error("design element index {index} is out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("field {field} does not apply to a {kind} element")]
    FieldMismatch { field: Field, kind: &'static str },
    #[error("unknown stamp motif {0:?}")]
    UnknownMotif(String),
}

/// Design overlay state: the ordered element collection plus the
/// border-inset field.
///
/// `border_inset` belongs to the design tooling rather than the dimension
/// form, so it is kept here as the raw input string and merged into the
/// request payload explicitly by the request builder.
#[derive(Clone, Debug, PartialEq)]
pub struct DesignState {
    pub elements: Vec<DesignElement>,
    pub border_inset: String,
}

impl Default for DesignState {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            border_inset: "0".to_owned(),
        }
    }
}

impl DesignState {
    /// Apply one edit command to the collection.
    ///
    /// Out-of-range indices and variant/field mismatches are rejected with
    /// an error and leave the collection untouched; they are not reachable
    /// through the panel UI, which rebuilds its rows after every mutation.
    pub fn apply(&mut self, op: DesignOp) -> Result<(), DesignError> {
        match op {
            DesignOp::AddText => {
                self.elements.push(DesignElement::new_text());
                Ok(())
            }
            DesignOp::AddStamp => {
                self.elements.push(DesignElement::new_stamp());
                Ok(())
            }
            DesignOp::Update {
                index,
                field,
                value,
            } => {
                let len = self.elements.len();
                let Some(elem) = self.elements.get_mut(index) else {
                    return Err(DesignError::IndexOutOfRange { index, len });
                };
                elem.set(field, &value)
            }
            DesignOp::Remove { index } => {
                if index >= self.elements.len() {
                    return Err(DesignError::IndexOutOfRange {
                        index,
                        len: self.elements.len(),
                    });
                }
                self.elements.remove(index);
                Ok(())
            }
        }
    }
}

/// Parse a numeric input value, substituting `0.0` for anything that is not
/// a finite number. Keeps the editor state valid under arbitrary typing.
fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}
