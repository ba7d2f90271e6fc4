//! Investment models for the savings growth and real rate calculators.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters for a savings growth projection.
///
/// Rates are percentages as entered on a form (9.0 means 9%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthInput {
    /// Amount invested at the start.
    pub initial_principal: Decimal,
    /// Amount added at the end of every month.
    pub monthly_contribution: Decimal,
    /// Length of the projection in years.
    pub years: u32,
    /// Expected annual return, compounded monthly.
    pub annual_rate_percent: Decimal,
    /// Expected annual inflation, used only when `apply_inflation` is set.
    pub inflation_rate_percent: Decimal,
    /// Withhold interest tax from accumulated interest.
    pub apply_interest_tax: bool,
    /// Report amounts in today's purchasing power.
    pub apply_inflation: bool,
}

impl Default for GrowthInput {
    fn default() -> Self {
        Self {
            initial_principal: Decimal::new(10_000_000, 0),
            monthly_contribution: Decimal::new(500_000, 0),
            years: 10,
            annual_rate_percent: Decimal::new(90, 1),
            inflation_rate_percent: Decimal::new(23, 1),
            apply_interest_tax: true,
            apply_inflation: false,
        }
    }
}

/// Account position at the end of a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlySnapshot {
    /// Years elapsed; 0 is the starting position.
    pub year: u32,
    /// Money paid in so far.
    pub principal: Decimal,
    /// Interest earned so far, after tax if applied.
    pub interest: Decimal,
    /// Principal plus interest.
    pub total: Decimal,
}

/// A complete growth projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthProjection {
    /// One snapshot per year, starting with year 0.
    pub yearly: Vec<YearlySnapshot>,
    /// Principal at the end of the projection.
    pub total_principal: Decimal,
    /// Interest at the end of the projection.
    pub final_interest: Decimal,
    /// Balance at the end of the projection.
    pub final_amount: Decimal,
    /// Final interest as a percentage of final principal.
    pub yield_percent: Decimal,
}

/// Nominal return converted to a real return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealRateResult {
    /// Nominal annual rate, in percent.
    pub nominal_rate: Decimal,
    /// Annual inflation, in percent.
    pub inflation_rate: Decimal,
    /// Inflation-adjusted rate from the Fisher equation, in percent.
    pub real_rate: Decimal,
    /// Nominal minus inflation, for comparison.
    pub simple_difference: Decimal,
    /// Purchasing power of 100 after one year of inflation.
    pub purchasing_power_retained: Decimal,
    /// Share of the nominal return eaten by inflation, capped at 100.
    /// `None` when the nominal rate is not positive.
    pub inflation_erosion_percent: Option<Decimal>,
}

impl RealRateResult {
    /// Returns true if money grows in real terms.
    pub fn is_real_gain(&self) -> bool {
        self.real_rate > Decimal::ZERO
    }
}
