//! Quotation documents
//!
//! A quotation is saved as a versioned JSON document carrying its reference
//! id, creation time, panels and id counter. Pricing rules are not stored;
//! they come from configuration when the document is opened.

use crate::error::{QuoteError, QuoteResult};
use crate::quotation::Quotation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use worktopkit_core::PricingRules;

/// Current document format version
pub const DOCUMENT_VERSION: u32 = 1;

/// On-disk form of a quotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteDocument {
    pub version: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub customer: Option<String>,
    pub quotation: Quotation,
}

impl QuoteDocument {
    /// Wrap a quotation for saving
    pub fn new(quotation: Quotation) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            created_at: Utc::now(),
            customer: None,
            quotation,
        }
    }

    /// Load a document and attach `rules` to its quotation
    pub fn load_from_file(path: &Path, rules: PricingRules) -> QuoteResult<Self> {
        ensure_json(path)?;
        let content = std::fs::read_to_string(path)?;
        let mut doc = Self::from_json(&content)?;
        doc.quotation.set_rules(rules);
        info!(
            path = %path.display(),
            panels = doc.quotation.len(),
            "loaded quotation"
        );
        Ok(doc)
    }

    /// Parse a document from JSON text
    pub fn from_json(content: &str) -> QuoteResult<Self> {
        let mut doc: Self = serde_json::from_str(content)?;
        if doc.version > DOCUMENT_VERSION {
            return Err(QuoteError::FutureVersion {
                found: doc.version,
                supported: DOCUMENT_VERSION,
            });
        }
        doc.quotation.reseat_id_counter()?;
        Ok(doc)
    }

    /// Save the document as pretty-printed JSON
    pub fn save_to_file(&self, path: &Path) -> QuoteResult<()> {
        ensure_json(path)?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!(
            path = %path.display(),
            panels = self.quotation.len(),
            "saved quotation"
        );
        Ok(())
    }
}

fn ensure_json(path: &Path) -> QuoteResult<()> {
    if path.extension().is_some_and(|ext| ext == "json") {
        Ok(())
    } else {
        Err(QuoteError::UnsupportedFormat(path.display().to_string()))
    }
}
