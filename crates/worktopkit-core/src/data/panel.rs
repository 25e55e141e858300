//! Panel (worktop) data model
//!
//! A `PanelSpec` is one priceable item: an outer rectangle, an optional
//! centered cut-out for a sink or hob, and the perimeter source used for
//! edge finishing.

use crate::units::to_number;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable panel identifier, assigned once and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(pub u64);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PanelId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(PanelId)
    }
}

/// One worktop panel as entered by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub id: PanelId,
    /// Outer length in centimeters (raw text)
    #[serde(default)]
    pub length_cm: String,
    /// Outer width in centimeters (raw text)
    #[serde(default)]
    pub width_cm: String,
    /// Take the perimeter from `custom_perimeter_m` instead of the outline
    #[serde(default)]
    pub use_custom_perimeter: bool,
    /// Custom perimeter in meters (raw text)
    #[serde(default)]
    pub custom_perimeter_m: String,
    /// Cut-out length in centimeters (raw text, empty means no cut-out)
    #[serde(default)]
    pub inner_length_cm: String,
    /// Cut-out width in centimeters (raw text, empty means no cut-out)
    #[serde(default)]
    pub inner_width_cm: String,
    /// Edging requested on the cut-out; recorded but not priced
    #[serde(default)]
    pub has_inner_edging: bool,
}

impl PanelSpec {
    /// Create a panel with all fields empty
    pub fn new(id: PanelId) -> Self {
        Self {
            id,
            length_cm: String::new(),
            width_cm: String::new(),
            use_custom_perimeter: false,
            custom_perimeter_m: String::new(),
            inner_length_cm: String::new(),
            inner_width_cm: String::new(),
            has_inner_edging: false,
        }
    }

    /// Builder-style helper setting the outer dimensions
    pub fn with_size(mut self, length_cm: impl Into<String>, width_cm: impl Into<String>) -> Self {
        self.length_cm = length_cm.into();
        self.width_cm = width_cm.into();
        self
    }

    /// Builder-style helper setting the cut-out dimensions
    pub fn with_inner_cut(
        mut self,
        inner_length_cm: impl Into<String>,
        inner_width_cm: impl Into<String>,
    ) -> Self {
        self.inner_length_cm = inner_length_cm.into();
        self.inner_width_cm = inner_width_cm.into();
        self
    }

    /// Builder-style helper switching to a custom perimeter
    pub fn with_custom_perimeter(mut self, perimeter_m: impl Into<String>) -> Self {
        self.use_custom_perimeter = true;
        self.custom_perimeter_m = perimeter_m.into();
        self
    }

    /// Replace one field in place
    pub fn apply(&mut self, field: PanelField) {
        match field {
            PanelField::LengthCm(v) => self.length_cm = v,
            PanelField::WidthCm(v) => self.width_cm = v,
            PanelField::UseCustomPerimeter(v) => self.use_custom_perimeter = v,
            PanelField::CustomPerimeterM(v) => self.custom_perimeter_m = v,
            PanelField::InnerLengthCm(v) => self.inner_length_cm = v,
            PanelField::InnerWidthCm(v) => self.inner_width_cm = v,
            PanelField::HasInnerEdging(v) => self.has_inner_edging = v,
        }
    }

    /// Parse every dimension field (malformed text becomes 0)
    pub fn dimensions(&self) -> PanelDimensions {
        PanelDimensions {
            length_cm: to_number(&self.length_cm),
            width_cm: to_number(&self.width_cm),
            inner_length_cm: to_number(&self.inner_length_cm),
            inner_width_cm: to_number(&self.inner_width_cm),
        }
    }
}

/// Parsed numeric view of a panel's dimensions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelDimensions {
    pub length_cm: f64,
    pub width_cm: f64,
    pub inner_length_cm: f64,
    pub inner_width_cm: f64,
}

impl PanelDimensions {
    /// Both outer dimensions are non-zero
    pub fn is_renderable(&self) -> bool {
        self.length_cm != 0.0 && self.width_cm != 0.0
    }

    /// Both cut-out dimensions are non-zero
    pub fn has_inner_cut(&self) -> bool {
        self.inner_length_cm != 0.0 && self.inner_width_cm != 0.0
    }
}

/// A single field edit, carrying the new value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum PanelField {
    LengthCm(String),
    WidthCm(String),
    UseCustomPerimeter(bool),
    CustomPerimeterM(String),
    InnerLengthCm(String),
    InnerWidthCm(String),
    HasInnerEdging(bool),
}

impl PanelField {
    /// Build an edit from a field key and its textual value.
    ///
    /// Keys accept the snake_case names (`length_cm`) and the short form
    /// (`length`). Boolean fields read `true`/`1`/`yes`/`on` as set and
    /// anything else as cleared.
    pub fn from_key(key: &str, value: &str) -> Option<Self> {
        let text = value.to_string();
        let field = match key.trim() {
            "length" | "length_cm" => Self::LengthCm(text),
            "width" | "width_cm" => Self::WidthCm(text),
            "custom_perimeter" | "custom_perimeter_m" => Self::CustomPerimeterM(text),
            "inner_length" | "inner_length_cm" => Self::InnerLengthCm(text),
            "inner_width" | "inner_width_cm" => Self::InnerWidthCm(text),
            "use_custom_perimeter" => Self::UseCustomPerimeter(parse_flag(value)),
            "inner_edging" | "has_inner_edging" => Self::HasInnerEdging(parse_flag(value)),
            _ => return None,
        };
        Some(field)
    }

    /// Snake_case name of the field
    pub fn key(&self) -> &'static str {
        match self {
            Self::LengthCm(_) => "length_cm",
            Self::WidthCm(_) => "width_cm",
            Self::UseCustomPerimeter(_) => "use_custom_perimeter",
            Self::CustomPerimeterM(_) => "custom_perimeter_m",
            Self::InnerLengthCm(_) => "inner_length_cm",
            Self::InnerWidthCm(_) => "inner_width_cm",
            Self::HasInnerEdging(_) => "has_inner_edging",
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
