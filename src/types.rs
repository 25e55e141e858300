//! Application-level types for the root crate

use tracing::debug;
use worktopkit_core::{PanelId, PanelSpec};
use worktopkit_quote::Quotation;

/// Which panel the preview and edit views follow
///
/// Owned by the front end, not the quotation. After the active panel is
/// removed the selection moves to the first remaining panel, or to nothing
/// when the quotation is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivePanel(Option<PanelId>);

impl ActivePanel {
    /// Start on the first panel of `quotation`
    pub fn first_of(quotation: &Quotation) -> Self {
        Self(quotation.first_id())
    }

    pub fn id(&self) -> Option<PanelId> {
        self.0
    }

    /// Select a panel; ids unknown to `quotation` leave the selection as is
    pub fn select(&mut self, quotation: &Quotation, id: PanelId) -> bool {
        if quotation.panel(id).is_some() {
            self.0 = Some(id);
            true
        } else {
            debug!(panel = %id, "select ignored: unknown panel");
            false
        }
    }

    /// Select by 1-based position
    pub fn select_position(&mut self, quotation: &Quotation, position: usize) -> bool {
        match quotation.panel_at(position) {
            Some(panel) => {
                self.0 = Some(panel.id);
                true
            }
            None => false,
        }
    }

    /// Remove `id` from `quotation` and move the selection if it pointed there
    pub fn remove_from(&mut self, quotation: &mut Quotation, id: PanelId) -> Option<PanelSpec> {
        let removed = quotation.remove_panel(id)?;
        if self.0 == Some(id) || self.0.is_some_and(|active| quotation.panel(active).is_none()) {
            self.0 = quotation.first_id();
        }
        Some(removed)
    }

    /// The active panel, if it still exists
    pub fn resolve<'a>(&self, quotation: &'a Quotation) -> Option<&'a PanelSpec> {
        self.0.and_then(|id| quotation.panel(id))
    }
}
