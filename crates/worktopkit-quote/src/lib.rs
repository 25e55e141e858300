//! # WorktopKit Quote
//!
//! Quotation aggregation and export for WorktopKit.
//!
//! - **Quotation**: ordered panels, field edits, grand totals
//! - **Export**: CSV tables and paginated PDF text built from a snapshot
//! - **Document**: versioned JSON persistence of a quotation

pub mod document;
pub mod error;
pub mod export;
pub mod quotation;

pub use document::{QuoteDocument, DOCUMENT_VERSION};
pub use error::{QuoteError, QuoteResult};
pub use export::{
    CsvTable, ExportMode, GrandTotalRecord, PanelRecord, PdfLayout, PdfPage, PdfTextLine,
    QuoteExport,
};
pub use quotation::{GrandTotals, QuoteLine, Quotation, MAX_PANEL_ID};
