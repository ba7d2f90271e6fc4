//! Savings growth projection.
//!
//! Compounds monthly at one twelfth of the annual rate and adds the monthly
//! contribution after each month's interest. At the end of every year the
//! projection records a snapshot, optionally net of interest tax and
//! optionally discounted to today's purchasing power.

use rust_decimal::Decimal;

use crate::config::InvestmentSettings;
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::{GrowthInput, GrowthProjection, YearlySnapshot};

use super::income_tax::MONTHS_PER_YEAR;

/// Projects the growth of a savings plan year by year.
///
/// # Errors
///
/// Returns `InvalidConfig` if `settings` fails validation, and `InvalidInput`
/// if an amount is negative, the horizon exceeds `settings.max_years`, a rate
/// is -100% or lower, or the balance grows past what a `Decimal` can hold.
///
/// # Examples
///
/// ```
/// use pay_calculator::calculation::project_growth;
/// use pay_calculator::config::InvestmentSettings;
/// use pay_calculator::models::GrowthInput;
/// use rust_decimal::Decimal;
///
/// let input = GrowthInput {
///     annual_rate_percent: Decimal::ZERO,
///     ..GrowthInput::default()
/// };
/// let projection = project_growth(&input, &InvestmentSettings::default()).unwrap();
///
/// assert_eq!(projection.yearly.len(), 11);
/// assert_eq!(projection.final_amount, Decimal::from(70_000_000));
/// ```
pub fn project_growth(
    input: &GrowthInput,
    settings: &InvestmentSettings,
) -> CalculatorResult<GrowthProjection> {
    validate_growth_input(input, settings)?;

    let monthly_rate = input.annual_rate_percent / Decimal::ONE_HUNDRED / MONTHS_PER_YEAR;
    let yearly_inflation = Decimal::ONE + input.inflation_rate_percent / Decimal::ONE_HUNDRED;

    let mut balance = input.initial_principal;
    let mut principal = input.initial_principal;
    let mut discount_factor = Decimal::ONE;

    let mut yearly = Vec::with_capacity(input.years as usize + 1);
    yearly.push(YearlySnapshot {
        year: 0,
        principal,
        interest: Decimal::ZERO,
        total: principal,
    });

    for year in 1..=input.years {
        for _ in 0..12 {
            let interest = overflow_checked(balance.checked_mul(monthly_rate))?;
            balance = overflow_checked(
                balance
                    .checked_add(interest)
                    .and_then(|b| b.checked_add(input.monthly_contribution)),
            )?;
            principal = overflow_checked(principal.checked_add(input.monthly_contribution))?;
        }

        let raw_interest = balance - principal;
        let tax = if input.apply_interest_tax {
            raw_interest.max(Decimal::ZERO) * settings.interest_tax_rate
        } else {
            Decimal::ZERO
        };

        let mut snapshot = YearlySnapshot {
            year,
            principal,
            interest: raw_interest - tax,
            total: balance - tax,
        };

        if input.apply_inflation {
            discount_factor = overflow_checked(discount_factor.checked_mul(yearly_inflation))?;
            snapshot.total = overflow_checked(snapshot.total.checked_div(discount_factor))?;
            snapshot.principal = overflow_checked(principal.checked_div(discount_factor))?;
            snapshot.interest = snapshot.total - snapshot.principal;
        }

        yearly.push(snapshot);
    }

    let last = yearly[yearly.len() - 1].clone();
    let yield_percent = if last.principal.is_zero() {
        Decimal::ZERO
    } else {
        (last.total - last.principal) / last.principal * Decimal::ONE_HUNDRED
    };

    Ok(GrowthProjection {
        yearly,
        total_principal: last.principal,
        final_interest: last.interest,
        final_amount: last.total,
        yield_percent,
    })
}

fn validate_growth_input(input: &GrowthInput, settings: &InvestmentSettings) -> CalculatorResult<()> {
    settings.validate()?;

    if input.initial_principal < Decimal::ZERO {
        return Err(CalculatorError::invalid_input(
            "initial_principal",
            "must not be negative",
        ));
    }
    if input.monthly_contribution < Decimal::ZERO {
        return Err(CalculatorError::invalid_input(
            "monthly_contribution",
            "must not be negative",
        ));
    }
    if input.years > settings.max_years {
        return Err(CalculatorError::invalid_input(
            "years",
            format!("must be at most {}", settings.max_years),
        ));
    }
    if input.annual_rate_percent <= -Decimal::ONE_HUNDRED {
        return Err(CalculatorError::invalid_input(
            "annual_rate_percent",
            "must be above -100",
        ));
    }
    if input.inflation_rate_percent <= -Decimal::ONE_HUNDRED {
        return Err(CalculatorError::invalid_input(
            "inflation_rate_percent",
            "must be above -100",
        ));
    }
    Ok(())
}

fn overflow_checked(value: Option<Decimal>) -> CalculatorResult<Decimal> {
    value.ok_or_else(|| {
        CalculatorError::invalid_input("projection", "balance exceeds the supported range")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn assert_close(actual: Decimal, expected: &str) {
        let diff = (actual - dec(expected)).abs();
        assert!(
            diff < dec("0.01"),
            "expected {} but got {} (diff {})",
            expected,
            actual,
            diff
        );
    }

    fn project(input: &GrowthInput) -> GrowthProjection {
        project_growth(input, &InvestmentSettings::default()).unwrap()
    }

    #[test]
    fn test_default_plan_after_ten_years() {
        let projection = project(&GrowthInput::default());

        assert_eq!(projection.yearly.len(), 11);
        assert_eq!(projection.total_principal, dec("70000000"));
        assert_close(projection.final_amount, "113375020.09");
        assert_close(projection.final_interest, "43375020.09");
        assert_close(projection.yield_percent, "61.96");
    }

    #[test]
    fn test_year_zero_is_starting_position() {
        let projection = project(&GrowthInput::default());
        let start = &projection.yearly[0];

        assert_eq!(start.year, 0);
        assert_eq!(start.principal, dec("10000000"));
        assert_eq!(start.interest, Decimal::ZERO);
        assert_eq!(start.total, dec("10000000"));
    }

    #[test]
    fn test_one_year_monthly_compounding_without_tax() {
        let input = GrowthInput {
            initial_principal: dec("12000000"),
            monthly_contribution: Decimal::ZERO,
            years: 1,
            annual_rate_percent: dec("12"),
            apply_interest_tax: false,
            ..GrowthInput::default()
        };

        let projection = project(&input);

        // 12,000,000 x 1.01^12
        assert_close(projection.final_amount, "13521900.36");
        assert_close(projection.final_interest, "1521900.36");
    }

    #[test]
    fn test_interest_tax_takes_fifteen_point_four_percent() {
        let untaxed = project(&GrowthInput {
            apply_interest_tax: false,
            ..GrowthInput::default()
        });
        let taxed = project(&GrowthInput::default());

        let expected = untaxed.final_interest * (Decimal::ONE - dec("0.154"));
        assert_close(taxed.final_interest, &expected.round_dp(6).to_string());
        assert_eq!(taxed.total_principal, untaxed.total_principal);
    }

    #[test]
    fn test_inflation_discounts_principal_and_total() {
        let input = GrowthInput {
            monthly_contribution: dec("500000"),
            years: 1,
            annual_rate_percent: Decimal::ZERO,
            inflation_rate_percent: dec("10"),
            apply_inflation: true,
            ..GrowthInput::default()
        };

        let projection = project(&input);

        // 16,000,000 paid in, worth 16,000,000 / 1.1 in today's money.
        assert_close(projection.final_amount, "14545454.55");
        assert_close(projection.total_principal, "14545454.55");
        assert_close(projection.final_interest, "0");
    }

    #[test]
    fn test_default_plan_in_todays_money() {
        let projection = project(&GrowthInput {
            apply_inflation: true,
            ..GrowthInput::default()
        });

        assert_close(projection.final_amount, "90315239.91");
        assert_close(projection.total_principal, "55762431.52");
    }

    #[test]
    fn test_zero_years_has_only_start() {
        let projection = project(&GrowthInput {
            years: 0,
            ..GrowthInput::default()
        });

        assert_eq!(projection.yearly.len(), 1);
        assert_eq!(projection.final_amount, dec("10000000"));
        assert_eq!(projection.yield_percent, Decimal::ZERO);
    }

    #[test]
    fn test_empty_plan_has_zero_yield() {
        let projection = project(&GrowthInput {
            initial_principal: Decimal::ZERO,
            monthly_contribution: Decimal::ZERO,
            ..GrowthInput::default()
        });

        assert_eq!(projection.final_amount, Decimal::ZERO);
        assert_eq!(projection.yield_percent, Decimal::ZERO);
    }

    #[test]
    fn test_too_many_years_rejected() {
        let result = project_growth(
            &GrowthInput {
                years: 101,
                ..GrowthInput::default()
            },
            &InvestmentSettings::default(),
        );

        match result {
            Err(CalculatorError::InvalidInput { field, .. }) => assert_eq!(field, "years"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_contribution_rejected() {
        let result = project_growth(
            &GrowthInput {
                monthly_contribution: dec("-1"),
                ..GrowthInput::default()
            },
            &InvestmentSettings::default(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_total_deflation_rejected() {
        let result = project_growth(
            &GrowthInput {
                inflation_rate_percent: dec("-100"),
                apply_inflation: true,
                ..GrowthInput::default()
            },
            &InvestmentSettings::default(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_loss_is_not_taxed() {
        let base = GrowthInput {
            initial_principal: dec("10000000"),
            monthly_contribution: Decimal::ZERO,
            years: 1,
            annual_rate_percent: dec("-12"),
            ..GrowthInput::default()
        };
        let taxed = project(&base);
        let untaxed = project(&GrowthInput {
            apply_interest_tax: false,
            ..base
        });

        // 10,000,000 x 0.99^12
        assert_close(taxed.final_amount, "8863848.72");
        assert!(taxed.final_interest < Decimal::ZERO);
        assert_eq!(taxed.final_amount, untaxed.final_amount);
        assert_eq!(taxed.final_interest, untaxed.final_interest);
    }

    #[test]
    fn test_unvalidated_horizon_limit_rejected() {
        let settings = InvestmentSettings {
            max_years: u32::MAX,
            ..InvestmentSettings::default()
        };

        let result = project_growth(&GrowthInput::default(), &settings);

        assert!(matches!(result, Err(CalculatorError::InvalidConfig { .. })));
    }

    #[test]
    fn test_oversized_balance_reported_against_projection() {
        let result = project_growth(
            &GrowthInput {
                initial_principal: Decimal::MAX / dec("2"),
                monthly_contribution: Decimal::MAX / dec("4"),
                annual_rate_percent: Decimal::ZERO,
                ..GrowthInput::default()
            },
            &InvestmentSettings::default(),
        );

        match result {
            Err(CalculatorError::InvalidInput { field, .. }) => assert_eq!(field, "projection"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_runaway_growth_reports_error_instead_of_panicking() {
        let result = project_growth(
            &GrowthInput {
                years: 100,
                annual_rate_percent: dec("10000"),
                ..GrowthInput::default()
            },
            &InvestmentSettings::default(),
        );

        assert!(matches!(result, Err(CalculatorError::InvalidInput { .. })));
    }
}
