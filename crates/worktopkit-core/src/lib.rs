//! # WorktopKit Core
//!
//! Core types and rules for WorktopKit.
//! Provides lenient unit parsing, the panel data model, panel geometry and
//! the pricing rules that turn geometry into costs.

pub mod data;
pub mod error;
pub mod geometry;
pub mod pricing;
pub mod units;

pub use data::{PanelDimensions, PanelField, PanelId, PanelSpec};

pub use error::RuleError;

pub use geometry::{area_m2, auto_perimeter_m, perimeter_m};

pub use pricing::{PricedPanel, PricingRules};

pub use units::{format_money, to_number, MeasurementUnit};
