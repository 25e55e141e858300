//! # WorktopKit
//!
//! A quotation calculator for custom-cut kitchen worktops:
//! - Lenient dimension entry in centimetres, sink and hob cut-outs
//! - Panel and edge-finish pricing with VAT
//! - Isometric SVG preview with dimension labels
//! - CSV and paginated PDF text exports
//!
//! ## Architecture
//!
//! WorktopKit is organized as a workspace with multiple crates:
//!
//! 1. **worktopkit-core** - Number parsing, panel data model, geometry, pricing
//! 2. **worktopkit-quote** - Quotation aggregation, exports, documents
//! 3. **worktopkit-visualizer** - Isometric projection and SVG preview
//! 4. **worktopkit-settings** - Configuration persistence
//! 5. **worktopkit** - Command-line front end that integrates all crates

pub mod cli;
pub mod types;

pub use types::ActivePanel;

pub use worktopkit_core::{
    to_number, PanelDimensions, PanelField, PanelId, PanelSpec, PricedPanel, PricingRules,
    RuleError,
};

pub use worktopkit_quote::{
    CsvTable, ExportMode, GrandTotals, PdfLayout, QuoteDocument, QuoteExport, QuoteLine, Quotation,
};

pub use worktopkit_visualizer::{IsometricProjector, Preview, PreviewPalette, ProjectedGeometry};

pub use worktopkit_settings::{Config, ExportSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - stderr output, so command output on stdout stays clean
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
