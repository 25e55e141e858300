//! Quotation aggregator
//!
//! Owns the ordered collection of panels. Panels are shown by position
//! ("Worktop #N") and addressed by their `PanelId`, which comes from a
//! strictly increasing counter and is never handed out twice, even after
//! removals or a reload from disk.

use crate::error::{QuoteError, QuoteResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;
use worktopkit_core::{PanelField, PanelId, PanelSpec, PricedPanel, PricingRules};

/// Highest id a quotation accepts from stored data
///
/// Leaves half of the `u64` range for ids handed out after loading.
pub const MAX_PANEL_ID: u64 = u64::MAX / 2;

/// Sum of every panel's totals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GrandTotals {
    pub excl_tax: f64,
    pub incl_tax: f64,
}

/// A panel together with its position and freshly computed prices
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteLine {
    /// 1-based position in the quotation
    pub position: usize,
    pub panel: PanelSpec,
    pub priced: PricedPanel,
}

impl QuoteLine {
    /// Heading shown above the panel, e.g. `"Worktop #2"`
    pub fn heading(&self) -> String {
        heading_for(self.position)
    }

    /// Identifier used in exports, e.g. `"worktop2"`
    pub fn export_id(&self) -> String {
        export_id_for(self.position)
    }
}

/// Heading for a 1-based position
pub fn heading_for(position: usize) -> String {
    format!("Worktop #{}", position)
}

/// Export identifier for a 1-based position
pub fn export_id_for(position: usize) -> String {
    format!("worktop{}", position)
}

/// Ordered set of panels being quoted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotation {
    /// Reference printed on exported documents
    pub id: Uuid,
    panels: Vec<PanelSpec>,
    next_id: u64,
    #[serde(skip)]
    rules: PricingRules,
}

impl Default for Quotation {
    fn default() -> Self {
        Self::new()
    }
}

impl Quotation {
    /// Create an empty quotation with the default pricing rules
    pub fn new() -> Self {
        Self::with_rules(PricingRules::default())
    }

    /// Create an empty quotation priced with `rules`
    pub fn with_rules(rules: PricingRules) -> Self {
        Self {
            id: Uuid::new_v4(),
            panels: Vec::new(),
            next_id: 1,
            rules,
        }
    }

    /// Create a quotation holding one empty panel, the calculator's opening state
    pub fn starter() -> Self {
        let mut quotation = Self::new();
        quotation.add_panel();
        quotation
    }

    /// Pricing rules in effect
    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    /// Replace the pricing rules; every later read uses the new rates
    pub fn set_rules(&mut self, rules: PricingRules) {
        self.rules = rules;
    }

    /// Generates a new unique ID.
    fn generate_id(&mut self) -> PanelId {
        let id = PanelId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Raise the id counter above every stored panel id.
    ///
    /// Needed after deserializing data whose counter may be stale. Fails when
    /// a stored id or the stored counter is above [`MAX_PANEL_ID`].
    pub fn reseat_id_counter(&mut self) -> QuoteResult<()> {
        let max_id = self.panels.iter().map(|p| p.id.0).max().unwrap_or(0);
        let highest = max_id.max(self.next_id);
        if highest > MAX_PANEL_ID {
            return Err(QuoteError::IdCounterExhausted {
                highest,
                limit: MAX_PANEL_ID,
            });
        }
        // max_id <= MAX_PANEL_ID, so this cannot overflow
        self.next_id = self.next_id.max(max_id + 1);
        Ok(())
    }

    /// Append a panel with empty fields and return its id
    pub fn add_panel(&mut self) -> PanelId {
        let id = self.generate_id();
        self.panels.push(PanelSpec::new(id));
        info!(panel = %id, position = self.panels.len(), "added panel");
        id
    }

    /// Append an already filled-in panel, assigning it a fresh id
    pub fn add_panel_from(&mut self, mut panel: PanelSpec) -> PanelId {
        let id = self.generate_id();
        panel.id = id;
        self.panels.push(panel);
        info!(panel = %id, position = self.panels.len(), "added panel");
        id
    }

    /// Remove a panel. Unknown ids are ignored.
    ///
    /// Returns the removed panel so the caller can pick a new active one.
    pub fn remove_panel(&mut self, id: PanelId) -> Option<PanelSpec> {
        match self.index_of(id) {
            Some(index) => {
                let removed = self.panels.remove(index);
                info!(panel = %id, remaining = self.panels.len(), "removed panel");
                Some(removed)
            }
            None => {
                debug!(panel = %id, "remove ignored: unknown panel");
                None
            }
        }
    }

    /// Replace one field of a panel. Unknown ids are ignored.
    ///
    /// Returns whether a panel was updated.
    pub fn update_field(&mut self, id: PanelId, field: PanelField) -> bool {
        match self.panels.iter_mut().find(|p| p.id == id) {
            Some(panel) => {
                debug!(panel = %id, field = field.key(), "updated field");
                panel.apply(field);
                true
            }
            None => {
                debug!(panel = %id, field = field.key(), "update ignored: unknown panel");
                false
            }
        }
    }

    /// Panels in insertion order
    pub fn panels(&self) -> &[PanelSpec] {
        &self.panels
    }

    /// Look up a panel by id
    pub fn panel(&self, id: PanelId) -> Option<&PanelSpec> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// Panel at a 1-based position
    pub fn panel_at(&self, position: usize) -> Option<&PanelSpec> {
        position.checked_sub(1).and_then(|i| self.panels.get(i))
    }

    /// 1-based position of a panel
    pub fn position_of(&self, id: PanelId) -> Option<usize> {
        self.index_of(id).map(|i| i + 1)
    }

    fn index_of(&self, id: PanelId) -> Option<usize> {
        self.panels.iter().position(|p| p.id == id)
    }

    /// Id of the first panel, if any
    pub fn first_id(&self) -> Option<PanelId> {
        self.panels.first().map(|p| p.id)
    }

    /// Returns the number of panels.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Price one panel from its current fields
    pub fn price(&self, id: PanelId) -> Option<PricedPanel> {
        self.panel(id).map(|p| self.rules.price(p))
    }

    /// Every panel with its position and prices, in insertion order
    pub fn lines(&self) -> Vec<QuoteLine> {
        self.panels
            .iter()
            .enumerate()
            .map(|(i, panel)| QuoteLine {
                position: i + 1,
                panel: panel.clone(),
                priced: self.rules.price(panel),
            })
            .collect()
    }

    /// Sum the full-precision totals of every panel
    pub fn grand_totals(&self) -> GrandTotals {
        self.panels
            .iter()
            .map(|p| self.rules.price(p))
            .fold(GrandTotals::default(), |acc, priced| GrandTotals {
                excl_tax: acc.excl_tax + priced.total_excl_tax,
                incl_tax: acc.incl_tax + priced.total_incl_tax,
            })
    }
}
