use clap::Parser;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use worktopkit::cli::{execute, Cli};
use worktopkit::QuoteDocument;
use worktopkit_core::PricingRules;

struct Workspace {
    dir: TempDir,
    config: PathBuf,
    doc: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "[pricing]\ntax_rate = 0.19\n").unwrap();
        let doc = dir.path().join("quote.json");
        Self { dir, config, doc }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let mut argv = vec![
            "worktopkit".to_string(),
            "--config".to_string(),
            self.config.display().to_string(),
        ];
        argv.extend(args.iter().map(|a| a.to_string()));
        let cli = Cli::try_parse_from(argv)?;
        let mut out = Vec::new();
        execute(cli, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn doc_arg(&self) -> String {
        self.doc.display().to_string()
    }

    fn load(&self) -> QuoteDocument {
        QuoteDocument::load_from_file(Path::new(&self.doc), PricingRules::default()).unwrap()
    }
}

#[test]
fn test_new_creates_starter_document() {
    let ws = Workspace::new();
    let out = ws.run(&["new", &ws.doc_arg()]).unwrap();
    assert!(out.contains("with 1 worktop(s)"));
    assert_eq!(ws.load().quotation.len(), 1);

    // refuses to overwrite
    assert!(ws.run(&["new", &ws.doc_arg()]).is_err());
    assert!(ws.run(&["new", &ws.doc_arg(), "--empty", "--force"]).is_ok());
    assert!(ws.load().quotation.is_empty());
}

#[test]
fn test_set_updates_and_prices() {
    let ws = Workspace::new();
    ws.run(&["new", &ws.doc_arg()]).unwrap();
    ws.run(&["set", &ws.doc_arg(), "1", "length", "200"]).unwrap();
    let out = ws.run(&["set", &ws.doc_arg(), "1", "width", "60"]).unwrap();
    assert_eq!(out.trim(), "Updated Worktop #1: € 177.02 incl. VAT");

    let doc = ws.load();
    assert_eq!(doc.quotation.panels()[0].length_cm, "200");
}

#[test]
fn test_set_rejects_unknown_field_and_position() {
    let ws = Workspace::new();
    ws.run(&["new", &ws.doc_arg()]).unwrap();
    assert!(ws.run(&["set", &ws.doc_arg(), "1", "colour", "red"]).is_err());
    assert!(ws.run(&["set", &ws.doc_arg(), "2", "length", "100"]).is_err());
}

#[test]
fn test_add_and_remove() {
    let ws = Workspace::new();
    ws.run(&["new", &ws.doc_arg(), "--empty"]).unwrap();

    let out = ws
        .run(&["add", &ws.doc_arg(), "--length", "200", "--width", "60"])
        .unwrap();
    assert_eq!(out.trim(), "Added Worktop #1: € 177.02 incl. VAT");
    ws.run(&["add", &ws.doc_arg(), "--length", "100", "--width", "50"])
        .unwrap();

    let out = ws.run(&["remove", &ws.doc_arg(), "1"]).unwrap();
    assert!(out.contains("Removed Worktop #1"));
    assert!(out.contains("Active: Worktop #1"));

    let doc = ws.load();
    assert_eq!(doc.quotation.len(), 1);
    assert_eq!(doc.quotation.panels()[0].length_cm, "100");

    let out = ws.run(&["remove", &ws.doc_arg(), "1"]).unwrap();
    assert!(out.contains("No worktops left"));
}

#[test]
fn test_summary_lists_panels_and_grand_total() {
    let ws = Workspace::new();
    ws.run(&["new", &ws.doc_arg(), "--empty", "--customer", "Dana"])
        .unwrap();
    ws.run(&["add", &ws.doc_arg(), "--length", "200", "--width", "60"])
        .unwrap();

    let out = ws.run(&["summary", &ws.doc_arg()]).unwrap();
    assert!(out.contains("Customer: Dana"));
    assert!(out.contains("Worktop #1 (200 x 60 cm)"));
    assert!(out.contains("  Area: 1.20 m²"));
    assert!(out.contains("Grand total: € 148.76 excl. / € 177.02 incl. VAT (19%)"));
}

#[test]
fn test_export_csv_writes_file() {
    let ws = Workspace::new();
    ws.run(&["new", &ws.doc_arg(), "--empty"]).unwrap();
    ws.run(&["add", &ws.doc_arg(), "--length", "200", "--width", "60"])
        .unwrap();

    let csv_path = ws.path("out.csv");
    let out = ws
        .run(&[
            "export-csv",
            &ws.doc_arg(),
            "--output",
            &csv_path.display().to_string(),
        ])
        .unwrap();
    assert!(out.contains("Wrote 2 row(s)"));

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Worktop ID,Length(cm),Width(cm),Price excl. VAT(€),Price incl. VAT(€)")
    );
    assert_eq!(lines.next(), Some("worktop1,200,60,148.76,177.02"));
}

#[test]
fn test_export_pdf_text_to_stdout() {
    let ws = Workspace::new();
    ws.run(&["new", &ws.doc_arg()]).unwrap();
    let out = ws.run(&["export-pdf-text", &ws.doc_arg()]).unwrap();
    assert!(out.contains("Worktop Quotations"));
    assert!(out.contains("Worktop #1 (ID:worktop1)"));

    let json = ws
        .run(&["export-pdf-text", &ws.doc_arg(), "--json"])
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["file_name"], "worktop_quotes.pdf");
    assert!(value["layout"]["pages"].is_array());
}

#[test]
fn test_preview_states() {
    let ws = Workspace::new();
    ws.run(&["new", &ws.doc_arg()]).unwrap();

    let out = ws.run(&["preview", &ws.doc_arg()]).unwrap();
    assert!(out.contains("No dimensions"));

    let out = ws
        .run(&["preview", &ws.doc_arg(), "--position", "5"])
        .unwrap();
    assert!(out.contains("Select a worktop"));

    ws.run(&["set", &ws.doc_arg(), "1", "length", "200"]).unwrap();
    ws.run(&["set", &ws.doc_arg(), "1", "width", "100"]).unwrap();
    let out = ws.run(&["preview", &ws.doc_arg()]).unwrap();
    assert!(out.contains("<polygon"));
    assert!(out.contains(">200 cm</text>"));
}

#[test]
fn test_bad_config_extension_fails() {
    let ws = Workspace::new();
    let bad = ws.path("config.ini");
    std::fs::write(&bad, "").unwrap();
    let cli = Cli::try_parse_from([
        "worktopkit",
        "--config",
        &bad.display().to_string(),
        "summary",
        &ws.doc_arg(),
    ])
    .unwrap();
    let mut out = Vec::new();
    assert!(execute(cli, &mut out).is_err());
}
