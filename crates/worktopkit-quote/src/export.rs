//! Export records
//!
//! Structured data handed to the CSV and PDF writers. Building the records
//! reads a snapshot of the quotation; mutating the quotation afterwards does
//! not affect records already built.
//!
//! The PDF side produces positioned text lines on A4 pages (millimeter
//! coordinates, origin top-left). Turning them into a PDF file belongs to the
//! writer.

use crate::quotation::{export_id_for, heading_for, GrandTotals, Quotation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use worktopkit_core::units::{format_measure, format_money, MeasurementUnit};

/// Which columns the export carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Id, outer size and totals
    #[default]
    Basic,
    /// Basic plus area, perimeter and cut-out details
    Detailed,
}

impl std::fmt::Display for ExportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Detailed => write!(f, "detailed"),
        }
    }
}

impl std::str::FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "detailed" => Ok(Self::Detailed),
            _ => Err(format!("Unknown export mode: {}", s)),
        }
    }
}

/// Per-panel export record; amounts are already formatted to 2 decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelRecord {
    /// 1-based position
    pub position: usize,
    /// `worktopN`
    pub label: String,
    /// Raw length text as entered
    pub length_cm: String,
    /// Raw width text as entered
    pub width_cm: String,
    pub total_excl_tax: String,
    pub total_incl_tax: String,
    /// Extra columns present in detailed mode, in column order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

/// Grand total record, formatted to 2 decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrandTotalRecord {
    pub excl_tax: String,
    pub incl_tax: String,
}

impl From<GrandTotals> for GrandTotalRecord {
    fn from(totals: GrandTotals) -> Self {
        Self {
            excl_tax: format_money(totals.excl_tax),
            incl_tax: format_money(totals.incl_tax),
        }
    }
}

/// Everything an exporter needs, captured at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteExport {
    pub mode: ExportMode,
    pub currency_symbol: String,
    pub panels: Vec<PanelRecord>,
    pub grand_total: GrandTotalRecord,
}

impl QuoteExport {
    /// Capture the quotation's current state
    pub fn capture(quotation: &Quotation, mode: ExportMode) -> Self {
        let panels: Vec<PanelRecord> = quotation
            .lines()
            .into_iter()
            .map(|line| {
                let extra = match mode {
                    ExportMode::Basic => Vec::new(),
                    ExportMode::Detailed => vec![
                        ("Area(m²)".to_string(), format!("{:.2}", line.priced.area_m2)),
                        (
                            "Perimeter(m)".to_string(),
                            format!("{:.2}", line.priced.perimeter_m),
                        ),
                        (
                            "Custom perimeter".to_string(),
                            yes_no(line.panel.use_custom_perimeter).to_string(),
                        ),
                        (
                            "Cut length(cm)".to_string(),
                            line.panel.inner_length_cm.clone(),
                        ),
                        (
                            "Cut width(cm)".to_string(),
                            line.panel.inner_width_cm.clone(),
                        ),
                        (
                            "Cut edging".to_string(),
                            yes_no(line.panel.has_inner_edging).to_string(),
                        ),
                    ],
                };
                PanelRecord {
                    position: line.position,
                    label: line.export_id(),
                    length_cm: line.panel.length_cm.clone(),
                    width_cm: line.panel.width_cm.clone(),
                    total_excl_tax: format_money(line.priced.total_excl_tax),
                    total_incl_tax: format_money(line.priced.total_incl_tax),
                    extra,
                }
            })
            .collect();

        debug!(panels = panels.len(), %mode, "captured quotation export");

        Self {
            mode,
            currency_symbol: quotation.rules().currency_symbol.clone(),
            panels,
            grand_total: quotation.grand_totals().into(),
        }
    }

    /// Tabular form for CSV writers
    pub fn csv_table(&self) -> CsvTable {
        let sym = &self.currency_symbol;
        let mut header = vec![
            "Worktop ID".to_string(),
            "Length(cm)".to_string(),
            "Width(cm)".to_string(),
            format!("Price excl. VAT({})", sym),
            format!("Price incl. VAT({})", sym),
        ];
        if let Some(first) = self.panels.first() {
            header.extend(first.extra.iter().map(|(name, _)| name.clone()));
        }

        let mut rows: Vec<Vec<String>> = self
            .panels
            .iter()
            .map(|record| {
                let mut row = vec![
                    record.label.clone(),
                    record.length_cm.clone(),
                    record.width_cm.clone(),
                    record.total_excl_tax.clone(),
                    record.total_incl_tax.clone(),
                ];
                row.extend(record.extra.iter().map(|(_, value)| value.clone()));
                row
            })
            .collect();

        rows.push(vec![
            "Grand total".to_string(),
            String::new(),
            String::new(),
            self.grand_total.excl_tax.clone(),
            self.grand_total.incl_tax.clone(),
        ]);

        CsvTable { header, rows }
    }

    /// Positioned text lines for PDF writers
    pub fn pdf_layout(&self) -> PdfLayout {
        let mut layout = PdfLayout::new(PDF_TITLE);
        let sym = &self.currency_symbol;

        for record in &self.panels {
            layout.push_block(&[
                format!(
                    "{} (ID:{})",
                    heading_for(record.position),
                    export_id_for(record.position)
                ),
                format!("  Length (cm): {}", record.length_cm),
                format!("  Width (cm): {}", record.width_cm),
                format!("  Price excl. VAT ({}): {}", sym, record.total_excl_tax),
                format!("  Price incl. VAT ({}): {}", sym, record.total_incl_tax),
            ]);
        }

        layout.push_block(&[
            "Grand Total".to_string(),
            format!("  Excl. VAT ({}): {}", sym, self.grand_total.excl_tax),
            format!("  Incl. VAT ({}): {}", sym, self.grand_total.incl_tax),
        ]);

        layout
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Header plus rows, all cells as text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Join the table into CSV text (comma separated, `\n` line ends).
    ///
    /// Cells containing a comma, quote or newline are quoted.
    pub fn to_csv_string(&self) -> String {
        std::iter::once(&self.header)
            .chain(self.rows.iter())
            .map(|row| {
                row.iter()
                    .map(|cell| escape_cell(cell))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn escape_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

pub const PDF_TITLE: &str = "Worktop Quotations";
pub const PDF_MARGIN_X: f64 = 10.0;
pub const PDF_TITLE_Y: f64 = 20.0;
pub const PDF_TITLE_FONT_SIZE: f64 = 16.0;
pub const PDF_BODY_FONT_SIZE: f64 = 12.0;
pub const PDF_BODY_START_Y: f64 = 30.0;
pub const PDF_LINE_HEIGHT: f64 = 8.0;
/// Past this y a new page is started
pub const PDF_PAGE_BREAK_Y: f64 = 270.0;
/// First line on continuation pages
pub const PDF_CONTINUATION_Y: f64 = 20.0;

/// One text line at a fixed position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfTextLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
}

/// One page of text lines
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PdfPage {
    pub lines: Vec<PdfTextLine>,
}

/// Paginated text layout of a quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfLayout {
    pub pages: Vec<PdfPage>,
    #[serde(skip)]
    cursor_y: f64,
}

impl PdfLayout {
    fn new(title: &str) -> Self {
        let first = PdfPage {
            lines: vec![PdfTextLine {
                text: title.to_string(),
                x: PDF_MARGIN_X,
                y: PDF_TITLE_Y,
                font_size: PDF_TITLE_FONT_SIZE,
            }],
        };
        Self {
            pages: vec![first],
            cursor_y: PDF_BODY_START_Y,
        }
    }

    /// Add a block of lines followed by a blank line.
    ///
    /// A new page is started only when a block is about to be written past
    /// the break line, so blocks are never split and no page stays empty.
    fn push_block(&mut self, lines: &[String]) {
        if self.cursor_y > PDF_PAGE_BREAK_Y {
            self.pages.push(PdfPage::default());
            self.cursor_y = PDF_CONTINUATION_Y;
        }
        for text in lines {
            let line = PdfTextLine {
                text: text.clone(),
                x: PDF_MARGIN_X,
                y: self.cursor_y,
                font_size: PDF_BODY_FONT_SIZE,
            };
            if let Some(page) = self.pages.last_mut() {
                page.lines.push(line);
            }
            self.cursor_y += PDF_LINE_HEIGHT;
        }
        self.cursor_y += PDF_LINE_HEIGHT;
    }

    /// All lines in reading order
    pub fn lines(&self) -> impl Iterator<Item = &PdfTextLine> {
        self.pages.iter().flat_map(|p| p.lines.iter())
    }

    /// Plain text rendering, pages separated by a form feed
    pub fn to_plain_text(&self) -> String {
        self.pages
            .iter()
            .filter(|p| !p.lines.is_empty())
            .map(|p| {
                p.lines
                    .iter()
                    .map(|l| l.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\u{c}\n")
    }
}

/// Short summary lines for a panel, used by text front ends
pub fn describe_line(priced: &worktopkit_core::PricedPanel, currency: &str) -> Vec<String> {
    vec![
        format!("Area: {}", format_measure(priced.area_m2, MeasurementUnit::SquareMeter)),
        format!("Perimeter: {}", format_measure(priced.perimeter_m, MeasurementUnit::Meter)),
        format!(
            "Panel cost: {} {} excl. / {} {} incl.",
            currency,
            format_money(priced.panel_cost_excl_tax),
            currency,
            format_money(priced.panel_cost_incl_tax)
        ),
        format!(
            "Edge finish cost: {} {} excl. / {} {} incl.",
            currency,
            format_money(priced.edge_cost_excl_tax),
            currency,
            format_money(priced.edge_cost_incl_tax)
        ),
        format!(
            "Total: {} {} excl. / {} {} incl.",
            currency,
            format_money(priced.total_excl_tax),
            currency,
            format_money(priced.total_incl_tax)
        ),
    ]
}
