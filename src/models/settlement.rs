//! Settlement models for the commission calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Figures entered for one settlement period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementInput {
    /// Total sales for the period.
    pub total_sales: Decimal,
    /// Staff share of sales after commission, in percent.
    pub incentive_rate_percent: Decimal,
    /// Fixed fee deducted for a trainee.
    pub intern_fee: Decimal,
}

impl Default for SettlementInput {
    fn default() -> Self {
        Self {
            total_sales: Decimal::ZERO,
            incentive_rate_percent: Decimal::new(70, 0),
            intern_fee: Decimal::new(1_000_000, 0),
        }
    }
}

/// Each stage of a settlement, with the running amount after it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Commission taken from total sales.
    pub commission: Decimal,
    /// Sales left after commission.
    pub after_commission: Decimal,
    /// Staff incentive on sales after commission.
    pub incentive: Decimal,
    /// Running amount after the incentive stage (sales after commission).
    pub after_incentive: Decimal,
    /// Material cost on sales after commission.
    pub material_cost: Decimal,
    /// Incentive minus material cost.
    pub after_material_cost: Decimal,
    /// The intern fee that was deducted.
    pub intern_fee: Decimal,
    /// Amount left after the intern fee.
    pub after_intern_fee: Decimal,
    /// Withholding tax.
    pub tax: Decimal,
    /// Amount paid out. Negative when costs exceed the incentive.
    pub settlement_amount: Decimal,
}
