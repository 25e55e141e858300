//! Pricing rules
//!
//! Converts panel geometry into cost figures. The default rule set is the
//! workshop's current tariff:
//!
//! - panel material: `68 * 1.6` per m² of outer area
//! - edge finishing: `3.5` per m of perimeter
//! - tax: flat 19%, applied after summing
//!
//! Every panel, however degenerate, prices to a number. Amounts are kept at
//! full precision; rounding only happens when they are formatted for display.

use crate::data::PanelSpec;
use crate::error::RuleError;
use crate::geometry::{area_m2, perimeter_m};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Rates used to price a panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRules {
    /// Board price per m² before the material factor
    pub panel_base_rate: f64,
    /// Multiplier applied to the board price
    pub material_factor: f64,
    /// Edge finishing price per meter
    pub edge_rate_per_m: f64,
    /// Tax rate as a fraction (0.19 = 19%)
    pub tax_rate: f64,
    /// Symbol shown next to amounts
    pub currency_symbol: String,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            panel_base_rate: 68.0,
            material_factor: 1.6,
            edge_rate_per_m: 3.5,
            tax_rate: 0.19,
            currency_symbol: "€".to_string(),
        }
    }
}

impl PricingRules {
    /// Material cost for an area in m²
    pub fn panel_cost(&self, area_m2: f64) -> f64 {
        self.panel_base_rate * self.material_factor * area_m2
    }

    /// Edge finishing cost for a perimeter in m
    pub fn edge_cost(&self, perimeter_m: f64) -> f64 {
        perimeter_m * self.edge_rate_per_m
    }

    /// Multiplier turning a net amount into a gross amount
    pub fn tax_multiplier(&self) -> f64 {
        1.0 + self.tax_rate
    }

    /// Apply tax to a net amount
    pub fn with_tax(&self, amount: f64) -> f64 {
        amount * self.tax_multiplier()
    }

    /// Tax rate as a whole percentage for labels (19.0 for 0.19)
    pub fn tax_percent(&self) -> f64 {
        self.tax_rate * 100.0
    }

    /// Price one panel from its current fields
    pub fn price(&self, panel: &PanelSpec) -> PricedPanel {
        let area = area_m2(panel);
        let perimeter = perimeter_m(panel);
        let panel_cost = self.panel_cost(area);
        let edge_cost = self.edge_cost(perimeter);
        let total_excl_tax = panel_cost + edge_cost;

        trace!(
            panel = %panel.id,
            area,
            perimeter,
            total_excl_tax,
            "priced panel"
        );

        PricedPanel {
            area_m2: area,
            perimeter_m: perimeter,
            panel_cost_excl_tax: panel_cost,
            panel_cost_incl_tax: self.with_tax(panel_cost),
            edge_cost_excl_tax: edge_cost,
            edge_cost_incl_tax: self.with_tax(edge_cost),
            total_excl_tax,
            total_incl_tax: self.with_tax(total_excl_tax),
            has_inner_cut: panel.dimensions().has_inner_cut(),
            has_inner_edging: panel.has_inner_edging,
        }
    }

    /// Check that every rate is finite and non-negative
    pub fn validate(&self) -> Result<(), RuleError> {
        let rates = [
            ("panel_base_rate", self.panel_base_rate),
            ("material_factor", self.material_factor),
            ("edge_rate_per_m", self.edge_rate_per_m),
            ("tax_rate", self.tax_rate),
        ];
        for (name, value) in rates {
            if !value.is_finite() {
                return Err(RuleError::NotFinite {
                    name: name.to_string(),
                    value,
                });
            }
            if value < 0.0 {
                return Err(RuleError::Negative {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Derived figures for one panel; never stored, always recomputed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricedPanel {
    pub area_m2: f64,
    pub perimeter_m: f64,
    pub panel_cost_excl_tax: f64,
    pub panel_cost_incl_tax: f64,
    pub edge_cost_excl_tax: f64,
    pub edge_cost_incl_tax: f64,
    pub total_excl_tax: f64,
    pub total_incl_tax: f64,
    /// Both cut-out dimensions are non-zero
    pub has_inner_cut: bool,
    /// Inner edging was requested. No rule prices it yet.
    pub has_inner_edging: bool,
}
