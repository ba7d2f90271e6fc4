//! Simplified income tax withholding.
//!
//! The bracket is chosen by the annualised taxable base, and the bracket's
//! rate is applied flat to the monthly taxable base. This is not a marginal
//! schedule: crossing a bracket bound raises the tax on the whole base, so net
//! pay drops at every bound.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::IncomeTaxTable;

/// Number of pay periods in a year.
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// The result of an income tax calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeTaxResult {
    /// Monthly taxable base multiplied by twelve.
    pub annual_taxable_base: Decimal,
    /// Position of the selected bracket in the table.
    pub bracket_index: Option<usize>,
    /// The rate applied to the monthly base.
    pub rate: Decimal,
    /// Tax before the dependent discount.
    pub tax_before_discount: Decimal,
    /// Tax after the dependent discount, never negative.
    pub income_tax: Decimal,
}

/// Finds the bracket covering an annual taxable income.
///
/// Returns `None` only for a table without an unbounded top bracket when the
/// income is above every bound.
pub fn bracket_index(table: &IncomeTaxTable, annual_taxable: Decimal) -> Option<usize> {
    table
        .brackets
        .iter()
        .position(|bracket| bracket.contains(annual_taxable))
}

/// Multiplier applied to income tax for the given number of dependents.
///
/// One dependent (the employee) gives 1. Each additional dependent takes
/// `dependent_discount_rate` off, and the factor never goes below zero.
///
/// # Examples
///
/// ```
/// use pay_calculator::calculation::dependent_discount_factor;
/// use pay_calculator::config::IncomeTaxTable;
/// use rust_decimal::Decimal;
///
/// let table = IncomeTaxTable::default();
/// assert_eq!(dependent_discount_factor(&table, 1), Decimal::ONE);
/// assert_eq!(dependent_discount_factor(&table, 3), Decimal::new(90, 2));
/// assert_eq!(dependent_discount_factor(&table, 40), Decimal::ZERO);
/// ```
pub fn dependent_discount_factor(table: &IncomeTaxTable, dependent_count: u32) -> Decimal {
    if dependent_count <= 1 {
        return Decimal::ONE;
    }
    let extra = Decimal::from(dependent_count - 1);
    (Decimal::ONE - extra * table.dependent_discount_rate).max(Decimal::ZERO)
}

/// Calculates monthly income tax withholding.
///
/// # Arguments
///
/// * `monthly_taxable_base` - Monthly gross minus the non-taxable allowance
/// * `dependent_count` - Number of dependents, counting the employee
/// * `table` - The withholding table
pub fn calculate_income_tax(
    monthly_taxable_base: Decimal,
    dependent_count: u32,
    table: &IncomeTaxTable,
) -> IncomeTaxResult {
    let annual_taxable_base = monthly_taxable_base * MONTHS_PER_YEAR;
    let index = bracket_index(table, annual_taxable_base);

    // An unvalidated table may lack the unbounded bracket; the top rate still applies.
    let rate = index
        .or_else(|| table.brackets.len().checked_sub(1))
        .map(|i| table.brackets[i].rate)
        .unwrap_or(Decimal::ZERO);

    let tax_before_discount = monthly_taxable_base * rate;
    let income_tax = (tax_before_discount * dependent_discount_factor(table, dependent_count))
        .max(Decimal::ZERO);

    IncomeTaxResult {
        annual_taxable_base,
        bracket_index: index,
        rate,
        tax_before_discount,
        income_tax,
    }
}
