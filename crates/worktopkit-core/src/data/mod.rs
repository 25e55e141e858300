//! Data models for quotation items
//!
//! Panels are stored exactly as entered: every dimension is raw text and is
//! only interpreted when a derived figure is requested.

pub mod panel;

pub use panel::{PanelDimensions, PanelField, PanelId, PanelSpec};
