use tempfile::tempdir;
use worktopkit_core::{PanelField, PanelId, PricingRules};
use worktopkit_quote::{QuoteDocument, QuoteError, Quotation};

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("kitchen.json");

    let mut q = Quotation::new();
    let id = q.add_panel();
    q.update_field(id, PanelField::LengthCm("200".to_string()));
    q.update_field(id, PanelField::UseCustomPerimeter(true));
    let doc = QuoteDocument::new(q.clone());
    doc.save_to_file(&path).unwrap();

    let loaded = QuoteDocument::load_from_file(&path, PricingRules::default()).unwrap();
    assert_eq!(loaded.quotation.id, q.id);
    assert_eq!(loaded.quotation.panels(), q.panels());
    assert_eq!(loaded.created_at, doc.created_at);
}

#[test]
fn test_loaded_quotation_never_reuses_ids() {
    let json = r#"{
        "version": 1,
        "created_at": "2026-01-05T10:00:00Z",
        "quotation": {
            "id": "7f1c7c2e-2f55-4a8e-9d39-0c0c1d4b1f10",
            "panels": [{"id": 9, "length_cm": "200", "width_cm": "60"}],
            "next_id": 3
        }
    }"#;
    let mut doc = QuoteDocument::from_json(json).unwrap();
    let id = doc.quotation.add_panel();
    assert_eq!(id, PanelId(10));
}

#[test]
fn test_rejects_future_version() {
    let json = r#"{
        "version": 99,
        "created_at": "2026-01-05T10:00:00Z",
        "quotation": {"id": "7f1c7c2e-2f55-4a8e-9d39-0c0c1d4b1f10", "panels": [], "next_id": 1}
    }"#;
    assert!(matches!(
        QuoteDocument::from_json(json),
        Err(QuoteError::FutureVersion { found: 99, .. })
    ));
}

#[test]
fn test_rejects_non_json_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("kitchen.xml");
    let doc = QuoteDocument::new(Quotation::starter());
    assert!(matches!(
        doc.save_to_file(&path),
        Err(QuoteError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_load_attaches_rules() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("kitchen.json");
    QuoteDocument::new(Quotation::starter())
        .save_to_file(&path)
        .unwrap();

    let rules = PricingRules {
        tax_rate: 0.2,
        ..PricingRules::default()
    };
    let loaded = QuoteDocument::load_from_file(&path, rules.clone()).unwrap();
    assert_eq!(loaded.quotation.rules(), &rules);
}

#[test]
fn test_rejects_panel_id_without_successor() {
    let json = r#"{
        "version": 1,
        "created_at": "2026-01-05T10:00:00Z",
        "quotation": {
            "id": "7f1c7c2e-2f55-4a8e-9d39-0c0c1d4b1f10",
            "panels": [{"id": 18446744073709551615}],
            "next_id": 1
        }
    }"#;
    assert!(matches!(
        QuoteDocument::from_json(json),
        Err(QuoteError::IdCounterExhausted {
            highest: u64::MAX,
            ..
        })
    ));
}

#[test]
fn test_rejects_exhausted_counter() {
    let json = r#"{
        "version": 1,
        "created_at": "2026-01-05T10:00:00Z",
        "quotation": {
            "id": "7f1c7c2e-2f55-4a8e-9d39-0c0c1d4b1f10",
            "panels": [],
            "next_id": 18446744073709551615
        }
    }"#;
    assert!(matches!(
        QuoteDocument::from_json(json),
        Err(QuoteError::IdCounterExhausted { .. })
    ));
}
