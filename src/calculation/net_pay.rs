//! Gross-to-net salary calculation.
//!
//! This module computes monthly net pay from a yearly gross salary by
//! deducting national pension, health insurance, long-term care, employment
//! insurance, income tax and local income tax. Each deduction is computed
//! independently from the taxable base so it can be shown as its own line.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::DeductionSchedule;
use crate::models::{NetPayResult, SalaryInput};

use super::income_tax::{MONTHS_PER_YEAR, calculate_income_tax};

/// Computes net pay under one deduction schedule.
///
/// The calculator is an immutable value; clone it or share it across threads
/// freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetPayCalculator {
    schedule: DeductionSchedule,
}

impl NetPayCalculator {
    /// Creates a calculator for the given schedule.
    pub fn new(schedule: DeductionSchedule) -> Self {
        Self { schedule }
    }

    /// Returns the deduction schedule in use.
    pub fn schedule(&self) -> &DeductionSchedule {
        &self.schedule
    }

    /// Computes monthly net pay for a yearly gross salary.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_calculator::calculation::NetPayCalculator;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let calculator = NetPayCalculator::default();
    /// let result = calculator.compute_net_pay(
    ///     Decimal::from(60_000_000),
    ///     Decimal::from(200_000),
    ///     1,
    /// );
    /// assert_eq!(result.net_pay, Decimal::from_str("4231804.28").unwrap());
    /// ```
    pub fn compute_net_pay(
        &self,
        yearly_gross: Decimal,
        non_taxable_monthly: Decimal,
        dependent_count: u32,
    ) -> NetPayResult {
        calculate_net_pay(
            yearly_gross,
            non_taxable_monthly,
            dependent_count,
            &self.schedule,
        )
    }

    /// Computes monthly net pay for a [`SalaryInput`].
    pub fn compute(&self, input: &SalaryInput) -> NetPayResult {
        self.compute_net_pay(
            input.yearly_gross,
            input.non_taxable_monthly,
            input.dependent_count,
        )
    }
}

/// Calculates monthly net pay and the deduction breakdown.
///
/// Total over non-negative inputs. When the non-taxable allowance covers the
/// whole monthly gross, nothing is deducted and net pay equals monthly gross.
///
/// # Arguments
///
/// * `yearly_gross` - Pre-deduction yearly salary
/// * `non_taxable_monthly` - Monthly allowance excluded from the taxable base
/// * `dependent_count` - Number of dependents, counting the employee
/// * `schedule` - The deduction rates to apply
pub fn calculate_net_pay(
    yearly_gross: Decimal,
    non_taxable_monthly: Decimal,
    dependent_count: u32,
    schedule: &DeductionSchedule,
) -> NetPayResult {
    let monthly_gross = yearly_gross / MONTHS_PER_YEAR;
    let monthly_taxable_base = monthly_gross - non_taxable_monthly;

    if monthly_taxable_base <= Decimal::ZERO {
        debug!(
            monthly_gross = %monthly_gross,
            non_taxable_monthly = %non_taxable_monthly,
            "No taxable base, passing gross through"
        );
        return NetPayResult::pass_through(monthly_gross);
    }

    let pension = (monthly_taxable_base * schedule.pension_rate).min(schedule.pension_cap);
    let health_insurance = monthly_taxable_base * schedule.health_insurance_rate;
    let long_term_care = health_insurance * schedule.long_term_care_rate;
    let employment_insurance = monthly_taxable_base * schedule.employment_insurance_rate;

    let income_tax =
        calculate_income_tax(monthly_taxable_base, dependent_count, &schedule.income_tax)
            .income_tax;
    let local_income_tax = income_tax * schedule.local_income_tax_rate;

    let total_deduction = pension
        + health_insurance
        + long_term_care
        + employment_insurance
        + income_tax
        + local_income_tax;

    NetPayResult {
        monthly_gross,
        monthly_taxable_base,
        pension,
        health_insurance,
        long_term_care,
        employment_insurance,
        income_tax,
        local_income_tax,
        total_deduction,
        net_pay: monthly_gross - total_deduction,
    }
}
