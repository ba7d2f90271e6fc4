//! Salary models: inputs and results of the gross-to-net calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, CalculatorResult};

/// Parameters for a gross-to-net calculation.
///
/// The calculators do not validate these values; callers that accept user
/// input should run [`SalaryInput::validate`] first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Pre-deduction yearly salary.
    pub yearly_gross: Decimal,
    /// Portion of monthly pay excluded from the taxable base (e.g., meal allowance).
    pub non_taxable_monthly: Decimal,
    /// Number of dependents, counting the employee.
    pub dependent_count: u32,
}

impl Default for SalaryInput {
    fn default() -> Self {
        Self {
            yearly_gross: Decimal::new(60_000_000, 0),
            non_taxable_monthly: Decimal::new(200_000, 0),
            dependent_count: 1,
        }
    }
}

impl SalaryInput {
    /// Rejects negative amounts and a dependent count below one.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_calculator::models::SalaryInput;
    ///
    /// let input = SalaryInput { dependent_count: 0, ..SalaryInput::default() };
    /// assert!(input.validate().is_err());
    /// assert!(SalaryInput::default().validate().is_ok());
    /// ```
    pub fn validate(&self) -> CalculatorResult<()> {
        if self.yearly_gross < Decimal::ZERO {
            return Err(CalculatorError::invalid_input(
                "yearly_gross",
                "must not be negative",
            ));
        }
        if self.non_taxable_monthly < Decimal::ZERO {
            return Err(CalculatorError::invalid_input(
                "non_taxable_monthly",
                "must not be negative",
            ));
        }
        if self.dependent_count == 0 {
            return Err(CalculatorError::invalid_input(
                "dependent_count",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// A statutory deduction category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionKind {
    /// National pension.
    Pension,
    /// National health insurance.
    HealthInsurance,
    /// Long-term care insurance, levied on the health insurance amount.
    LongTermCare,
    /// Employment insurance.
    EmploymentInsurance,
    /// Income tax withholding.
    IncomeTax,
    /// Local income tax, levied on the income tax amount.
    LocalIncomeTax,
}

impl DeductionKind {
    /// All categories in the order they appear on a payslip.
    pub const ALL: [DeductionKind; 6] = [
        DeductionKind::Pension,
        DeductionKind::HealthInsurance,
        DeductionKind::LongTermCare,
        DeductionKind::EmploymentInsurance,
        DeductionKind::IncomeTax,
        DeductionKind::LocalIncomeTax,
    ];
}

/// One itemised deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// The deduction category.
    pub kind: DeductionKind,
    /// The monthly amount deducted.
    pub amount: Decimal,
}

/// Monthly net pay and its itemised deductions.
///
/// Produced fresh by every call to the net pay calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetPayResult {
    /// Yearly gross divided by twelve.
    pub monthly_gross: Decimal,
    /// Monthly gross minus the non-taxable allowance, never below zero.
    pub monthly_taxable_base: Decimal,
    /// National pension amount.
    pub pension: Decimal,
    /// Health insurance amount.
    pub health_insurance: Decimal,
    /// Long-term care amount.
    pub long_term_care: Decimal,
    /// Employment insurance amount.
    pub employment_insurance: Decimal,
    /// Income tax amount after the dependent discount.
    pub income_tax: Decimal,
    /// Local income tax amount.
    pub local_income_tax: Decimal,
    /// Sum of the six deductions.
    pub total_deduction: Decimal,
    /// Monthly gross minus the total deduction.
    pub net_pay: Decimal,
}

impl NetPayResult {
    /// A result with no deductions, for salaries with no taxable base.
    pub fn pass_through(monthly_gross: Decimal) -> Self {
        Self {
            monthly_gross,
            monthly_taxable_base: Decimal::ZERO,
            pension: Decimal::ZERO,
            health_insurance: Decimal::ZERO,
            long_term_care: Decimal::ZERO,
            employment_insurance: Decimal::ZERO,
            income_tax: Decimal::ZERO,
            local_income_tax: Decimal::ZERO,
            total_deduction: Decimal::ZERO,
            net_pay: monthly_gross,
        }
    }

    /// Returns true if the salary was too low for any deduction to apply.
    pub fn is_pass_through(&self) -> bool {
        self.monthly_taxable_base.is_zero()
    }

    /// Returns the amount deducted for one category.
    pub fn deduction(&self, kind: DeductionKind) -> Decimal {
        match kind {
            DeductionKind::Pension => self.pension,
            DeductionKind::HealthInsurance => self.health_insurance,
            DeductionKind::LongTermCare => self.long_term_care,
            DeductionKind::EmploymentInsurance => self.employment_insurance,
            DeductionKind::IncomeTax => self.income_tax,
            DeductionKind::LocalIncomeTax => self.local_income_tax,
        }
    }

    /// Returns the itemised deductions in payslip order.
    pub fn deductions(&self) -> Vec<DeductionLine> {
        DeductionKind::ALL
            .iter()
            .map(|&kind| DeductionLine {
                kind,
                amount: self.deduction(kind),
            })
            .collect()
    }
}

/// The outcome of a gross-from-net search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossSolveResult {
    /// The monthly net pay that was asked for.
    pub target_monthly_net: Decimal,
    /// The yearly gross chosen by the search.
    pub estimated_yearly_gross: Decimal,
    /// The net pay breakdown recomputed at the chosen gross.
    pub final_net_pay_result: NetPayResult,
    /// Number of probes the search made.
    pub iterations: u32,
    /// Whether a probe landed within tolerance of the target.
    pub converged: bool,
}

impl GrossSolveResult {
    /// Net pay at the chosen gross minus the target.
    ///
    /// Callers that need an exact inverse should check this, since an
    /// unreachable target still produces a best-effort result.
    pub fn residual(&self) -> Decimal {
        self.final_net_pay_result.net_pay - self.target_monthly_net
    }
}

/// One row of the gross-to-net lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTableRow {
    /// The yearly gross for this row.
    pub yearly_gross: Decimal,
    /// The net pay breakdown at that gross.
    pub result: NetPayResult,
}

impl SalaryTableRow {
    /// Returns true if `yearly_gross` lies strictly within `window` of this row.
    pub fn is_near(&self, yearly_gross: Decimal, window: Decimal) -> bool {
        (self.yearly_gross - yearly_gross).abs() < window
    }
}
