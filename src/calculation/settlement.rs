//! Commission settlement.
//!
//! Walks total sales down to the amount paid out: platform commission, the
//! staff incentive share, material cost, the intern fee and finally
//! withholding tax.

use rust_decimal::Decimal;

use crate::config::SettlementRates;
use crate::models::{SettlementInput, SettlementResult};

/// Calculates a commission settlement.
///
/// Zero sales yields an all-zero result, intern fee included. Otherwise the
/// settlement is not clamped and goes negative when material cost and the
/// intern fee exceed the incentive.
///
/// # Examples
///
/// ```
/// use pay_calculator::calculation::calculate_settlement;
/// use pay_calculator::config::SettlementRates;
/// use pay_calculator::models::SettlementInput;
/// use rust_decimal::Decimal;
///
/// let input = SettlementInput {
///     total_sales: Decimal::from(10_000_000),
///     ..SettlementInput::default()
/// };
/// let result = calculate_settlement(&input, &SettlementRates::default());
/// assert_eq!(result.settlement_amount, Decimal::from(3_964_700));
/// ```
pub fn calculate_settlement(input: &SettlementInput, rates: &SettlementRates) -> SettlementResult {
    if input.total_sales.is_zero() {
        return SettlementResult::default();
    }

    let after_commission = input.total_sales * (Decimal::ONE - rates.commission_rate);
    let commission = input.total_sales - after_commission;

    let incentive = after_commission * input.incentive_rate_percent / Decimal::ONE_HUNDRED;
    let material_cost = after_commission * rates.material_cost_rate;
    let after_material_cost = incentive - material_cost;

    let after_intern_fee = after_material_cost - input.intern_fee;
    let tax = after_intern_fee * rates.withholding_rate;

    SettlementResult {
        commission,
        after_commission,
        incentive,
        after_incentive: after_commission,
        material_cost,
        after_material_cost,
        intern_fee: input.intern_fee,
        after_intern_fee,
        tax,
        settlement_amount: after_intern_fee - tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn settle(sales: &str, rate: &str, intern_fee: &str) -> SettlementResult {
        let input = SettlementInput {
            total_sales: dec(sales),
            incentive_rate_percent: dec(rate),
            intern_fee: dec(intern_fee),
        };
        calculate_settlement(&input, &SettlementRates::default())
    }

    #[test]
    fn test_ten_million_sales() {
        let result = settle("10000000", "70", "1000000");

        assert_eq!(result.commission, dec("1500000"));
        assert_eq!(result.after_commission, dec("8500000"));
        assert_eq!(result.incentive, dec("5950000"));
        assert_eq!(result.after_incentive, dec("8500000"));
        assert_eq!(result.material_cost, dec("850000"));
        assert_eq!(result.after_material_cost, dec("5100000"));
        assert_eq!(result.intern_fee, dec("1000000"));
        assert_eq!(result.after_intern_fee, dec("4100000"));
        assert_eq!(result.tax, dec("135300"));
        assert_eq!(result.settlement_amount, dec("3964700"));
    }

    #[test]
    fn test_zero_sales_is_all_zero() {
        let result = settle("0", "70", "1000000");

        assert_eq!(result, SettlementResult::default());
        assert_eq!(result.intern_fee, Decimal::ZERO);
    }

    #[test]
    fn test_small_sales_settle_negative() {
        let result = settle("1000000", "70", "1000000");

        // 595,000 incentive - 85,000 material - 1,000,000 fee
        assert_eq!(result.after_intern_fee, dec("-490000"));
        assert_eq!(result.tax, dec("-16170"));
        assert_eq!(result.settlement_amount, dec("-473830"));
    }

    #[test]
    fn test_without_intern_fee() {
        let result = settle("10000000", "70", "0");

        assert_eq!(result.after_intern_fee, result.after_material_cost);
        assert_eq!(result.settlement_amount, dec("4931700"));
    }

    #[test]
    fn test_custom_rates() {
        let rates = SettlementRates {
            commission_rate: dec("0.2"),
            material_cost_rate: Decimal::ZERO,
            withholding_rate: Decimal::ZERO,
        };
        let input = SettlementInput {
            total_sales: dec("1000000"),
            incentive_rate_percent: dec("50"),
            intern_fee: Decimal::ZERO,
        };

        let result = calculate_settlement(&input, &rates);

        assert_eq!(result.after_commission, dec("800000"));
        assert_eq!(result.settlement_amount, dec("400000"));
    }
}
