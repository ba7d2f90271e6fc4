//! Gross-to-net lookup table.

use rust_decimal::Decimal;

use crate::config::SalaryTableSettings;
use crate::error::CalculatorResult;
use crate::models::SalaryTableRow;

use super::net_pay::NetPayCalculator;

/// Builds a table of net pay over a sweep of yearly gross salaries.
///
/// The sweep starts at `settings.start` and advances by `settings.step` while
/// the gross is below `settings.wide_step_from`, then by `settings.wide_step`,
/// stopping after the last gross not above `settings.end`.
///
/// # Errors
///
/// Returns `InvalidConfig` if a step is not positive or the range is inverted.
///
/// # Examples
///
/// ```
/// use pay_calculator::calculation::{NetPayCalculator, build_salary_table};
/// use pay_calculator::config::SalaryTableSettings;
/// use rust_decimal::Decimal;
///
/// let rows = build_salary_table(
///     &NetPayCalculator::default(),
///     Decimal::from(200_000),
///     1,
///     &SalaryTableSettings::default(),
/// )
/// .unwrap();
/// assert_eq!(rows.first().unwrap().yearly_gross, Decimal::from(24_000_000));
/// assert_eq!(rows.last().unwrap().yearly_gross, Decimal::from(150_000_000));
/// ```
pub fn build_salary_table(
    calculator: &NetPayCalculator,
    non_taxable_monthly: Decimal,
    dependent_count: u32,
    settings: &SalaryTableSettings,
) -> CalculatorResult<Vec<SalaryTableRow>> {
    settings.validate()?;

    let mut rows = Vec::new();
    let mut yearly_gross = settings.start;

    while yearly_gross <= settings.end {
        rows.push(SalaryTableRow {
            yearly_gross,
            result: calculator.compute_net_pay(yearly_gross, non_taxable_monthly, dependent_count),
        });

        yearly_gross += if yearly_gross < settings.wide_step_from {
            settings.step
        } else {
            settings.wide_step
        };
    }

    Ok(rows)
}
