//! Command-line front end over quotation documents

use crate::types::ActivePanel;
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;
use worktopkit_core::units::format_money;
use worktopkit_core::{PanelField, PanelId, PanelSpec};
use worktopkit_quote::export::describe_line;
use worktopkit_quote::quotation::heading_for;
use worktopkit_quote::{ExportMode, QuoteDocument, QuoteExport, Quotation};
use worktopkit_settings::Config;
use worktopkit_visualizer::{IsometricProjector, Preview, PreviewPalette};

#[derive(Debug, Parser)]
#[command(
    name = "worktopkit",
    about = "Quotation calculator for custom-cut kitchen worktops",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")")
)]
pub struct Cli {
    /// Configuration file (.toml or .json). Defaults to the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a quotation document holding one empty worktop.
    New(NewArgs),

    /// Append a worktop.
    Add(AddArgs),

    /// Change one field of a worktop.
    Set(SetArgs),

    /// Remove a worktop.
    Remove(RemoveArgs),

    /// Print every worktop with its costs and the grand total.
    Summary(SummaryArgs),

    /// Write the quotation as a CSV table.
    #[command(name = "export-csv")]
    ExportCsv(ExportCsvArgs),

    /// Print the positioned text lines of the PDF quotation.
    #[command(name = "export-pdf-text")]
    ExportPdfText(ExportPdfTextArgs),

    /// Render the isometric preview of one worktop as SVG.
    Preview(PreviewArgs),
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Quotation document (.json)
    pub file: PathBuf,

    /// Start without the initial worktop
    #[arg(long)]
    pub empty: bool,

    #[arg(long)]
    pub customer: Option<String>,

    /// Overwrite an existing document
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Quotation document (.json)
    pub file: PathBuf,

    #[arg(long, default_value = "")]
    pub length: String,

    #[arg(long, default_value = "")]
    pub width: String,

    /// Cut-out length in cm
    #[arg(long, default_value = "")]
    pub inner_length: String,

    /// Cut-out width in cm
    #[arg(long, default_value = "")]
    pub inner_width: String,

    /// Record edge finishing around the cut-out
    #[arg(long)]
    pub inner_edging: bool,

    /// Use this perimeter in metres instead of the one derived from the size
    #[arg(long)]
    pub perimeter: Option<String>,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Quotation document (.json)
    pub file: PathBuf,

    /// 1-based worktop position
    pub position: usize,

    /// length, width, custom_perimeter, use_custom_perimeter, inner_length,
    /// inner_width or inner_edging
    pub field: String,

    pub value: String,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Quotation document (.json)
    pub file: PathBuf,

    /// 1-based worktop position
    pub position: usize,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Quotation document (.json)
    pub file: PathBuf,

    /// Emit the export snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ExportCsvArgs {
    /// Quotation document (.json)
    pub file: PathBuf,

    /// Output path; defaults to the configured CSV file name
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Column set; defaults to the configured mode
    #[arg(long)]
    pub mode: Option<ExportMode>,
}

#[derive(Debug, Args)]
pub struct ExportPdfTextArgs {
    /// Quotation document (.json)
    pub file: PathBuf,

    /// Emit positioned lines as JSON for a PDF renderer
    #[arg(long)]
    pub json: bool,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Quotation document (.json)
    pub file: PathBuf,

    /// 1-based worktop position; defaults to the first worktop
    #[arg(long)]
    pub position: Option<usize>,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}

/// Run a parsed command, writing its report to `out`
pub fn execute(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::New(args) => run_new(args, &config, out),
        Commands::Add(args) => run_add(args, &config, out),
        Commands::Set(args) => run_set(args, &config, out),
        Commands::Remove(args) => run_remove(args, &config, out),
        Commands::Summary(args) => run_summary(args, &config, out),
        Commands::ExportCsv(args) => run_export_csv(args, &config, out),
        Commands::ExportPdfText(args) => run_export_pdf_text(args, &config, out),
        Commands::Preview(args) => run_preview(args, &config, out),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => match Config::default_path() {
            Ok(path) => Config::load_or_default(&path)
                .with_context(|| format!("loading config {}", path.display())),
            Err(e) => {
                debug!("{}, using default config", e);
                Ok(Config::default())
            }
        },
    }
}

fn open(path: &Path, config: &Config) -> Result<QuoteDocument> {
    QuoteDocument::load_from_file(path, config.pricing.clone())
        .with_context(|| format!("opening {}", path.display()))
}

fn save(doc: &QuoteDocument, path: &Path) -> Result<()> {
    doc.save_to_file(path).with_context(|| format!("saving {}", path.display()))
}

fn panel_id_at(quotation: &Quotation, position: usize) -> Result<PanelId> {
    match quotation.panel_at(position) {
        Some(panel) => Ok(panel.id),
        None => bail!(
            "no worktop at position {} (quotation has {})",
            position,
            quotation.len()
        ),
    }
}

fn write_output(out: &mut impl Write, output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("writing {}", path.display()))?,
        None => out.write_all(content.as_bytes())?,
    }
    Ok(())
}

fn run_new(args: NewArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    if args.file.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.file.display()
        );
    }

    let mut quotation = Quotation::with_rules(config.pricing.clone());
    if !args.empty {
        quotation.add_panel();
    }
    let mut doc = QuoteDocument::new(quotation);
    doc.customer = args.customer;
    save(&doc, &args.file)?;

    writeln!(
        out,
        "Created {} with {} worktop(s)",
        args.file.display(),
        doc.quotation.len()
    )?;
    Ok(())
}

fn run_add(args: AddArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let mut doc = open(&args.file, config)?;

    let mut panel = PanelSpec::new(PanelId(0))
        .with_size(args.length, args.width)
        .with_inner_cut(args.inner_length, args.inner_width);
    panel.apply(PanelField::HasInnerEdging(args.inner_edging));
    if let Some(perimeter) = args.perimeter {
        panel = panel.with_custom_perimeter(perimeter);
    }

    let id = doc.quotation.add_panel_from(panel);
    save(&doc, &args.file)?;

    let position = doc.quotation.len();
    let total = doc.quotation.price(id).map(|p| p.total_incl_tax).unwrap_or(0.0);
    writeln!(
        out,
        "Added {}: {} {} incl. VAT",
        heading_for(position),
        config.pricing.currency_symbol,
        format_money(total)
    )?;
    Ok(())
}

fn run_set(args: SetArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let Some(field) = PanelField::from_key(&args.field, &args.value) else {
        bail!("unknown field '{}'", args.field);
    };

    let mut doc = open(&args.file, config)?;
    let id = panel_id_at(&doc.quotation, args.position)?;
    doc.quotation.update_field(id, field);
    save(&doc, &args.file)?;

    let total = doc.quotation.price(id).map(|p| p.total_incl_tax).unwrap_or(0.0);
    writeln!(
        out,
        "Updated {}: {} {} incl. VAT",
        heading_for(args.position),
        config.pricing.currency_symbol,
        format_money(total)
    )?;
    Ok(())
}

fn run_remove(args: RemoveArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let mut doc = open(&args.file, config)?;
    let id = panel_id_at(&doc.quotation, args.position)?;

    let mut active = ActivePanel::default();
    active.select(&doc.quotation, id);
    active.remove_from(&mut doc.quotation, id);
    save(&doc, &args.file)?;

    writeln!(out, "Removed {}", heading_for(args.position))?;
    match active.id().and_then(|id| doc.quotation.position_of(id)) {
        Some(position) => writeln!(out, "Active: {}", heading_for(position))?,
        None => writeln!(out, "No worktops left")?,
    }
    Ok(())
}

fn run_summary(args: SummaryArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let doc = open(&args.file, config)?;

    if args.json {
        let snapshot = QuoteExport::capture(&doc.quotation, config.export.mode);
        writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
        return Ok(());
    }

    let currency = &config.pricing.currency_symbol;
    writeln!(out, "Quotation {}", doc.quotation.id)?;
    if let Some(customer) = &doc.customer {
        writeln!(out, "Customer: {}", customer)?;
    }
    for line in doc.quotation.lines() {
        writeln!(out)?;
        writeln!(
            out,
            "{} ({} x {} cm)",
            line.heading(),
            line.panel.length_cm,
            line.panel.width_cm
        )?;
        for text in describe_line(&line.priced, currency) {
            writeln!(out, "  {}", text)?;
        }
    }

    let totals = doc.quotation.grand_totals();
    writeln!(out)?;
    writeln!(
        out,
        "Grand total: {} {} excl. / {} {} incl. VAT ({}%)",
        currency,
        format_money(totals.excl_tax),
        currency,
        format_money(totals.incl_tax),
        config.pricing.tax_percent()
    )?;
    Ok(())
}

fn run_export_csv(args: ExportCsvArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let doc = open(&args.file, config)?;
    let mode = args.mode.unwrap_or(config.export.mode);
    let table = QuoteExport::capture(&doc.quotation, mode).csv_table();

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.export.csv_file_name));
    std::fs::write(&path, table.to_csv_string())
        .with_context(|| format!("writing {}", path.display()))?;

    writeln!(
        out,
        "Wrote {} row(s) to {}",
        table.rows.len(),
        path.display()
    )?;
    Ok(())
}

#[derive(serde::Serialize)]
struct PdfJob<'a> {
    file_name: &'a str,
    layout: &'a worktopkit_quote::PdfLayout,
}

fn run_export_pdf_text(
    args: ExportPdfTextArgs,
    config: &Config,
    out: &mut impl Write,
) -> Result<()> {
    let doc = open(&args.file, config)?;
    let layout = QuoteExport::capture(&doc.quotation, config.export.mode).pdf_layout();

    let content = if args.json {
        let job = PdfJob {
            file_name: &config.export.pdf_file_name,
            layout: &layout,
        };
        let mut json = serde_json::to_string_pretty(&job)?;
        json.push('\n');
        json
    } else {
        let mut text = layout.to_plain_text();
        text.push('\n');
        text
    };

    write_output(out, args.output.as_deref(), &content)
}

fn run_preview(args: PreviewArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let doc = open(&args.file, config)?;

    let mut active = ActivePanel::first_of(&doc.quotation);
    if let Some(position) = args.position {
        if !active.select_position(&doc.quotation, position) {
            active = ActivePanel::default();
        }
    }

    let projector = IsometricProjector::new(config.preview.clone());
    let preview = Preview::for_panel(&projector, active.resolve(&doc.quotation));
    let svg = preview.to_svg(&PreviewPalette::default());

    write_output(out, args.output.as_deref(), &svg)
}
