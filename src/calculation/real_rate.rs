//! Nominal-to-real return conversion.

use rust_decimal::Decimal;

use crate::error::{CalculatorError, CalculatorResult};
use crate::models::RealRateResult;

/// Converts a nominal annual return into a real one with the Fisher equation.
///
/// Both rates are in percent. The inflation erosion share is clamped to
/// `0..=100` and is only reported for a positive nominal rate.
///
/// # Errors
///
/// Returns `InvalidInput` if inflation is -100% or lower.
///
/// # Examples
///
/// ```
/// use pay_calculator::calculation::calculate_real_rate;
/// use rust_decimal::Decimal;
///
/// let result = calculate_real_rate(Decimal::from(5), Decimal::from(3)).unwrap();
/// assert_eq!(result.real_rate.round_dp(2), Decimal::new(194, 2));
/// assert_eq!(result.simple_difference, Decimal::from(2));
/// ```
pub fn calculate_real_rate(
    nominal_rate: Decimal,
    inflation_rate: Decimal,
) -> CalculatorResult<RealRateResult> {
    if inflation_rate <= -Decimal::ONE_HUNDRED {
        return Err(CalculatorError::invalid_input(
            "inflation_rate",
            "must be above -100",
        ));
    }

    let nominal_factor = Decimal::ONE + nominal_rate / Decimal::ONE_HUNDRED;
    let inflation_factor = Decimal::ONE + inflation_rate / Decimal::ONE_HUNDRED;

    let real_rate = (nominal_factor / inflation_factor - Decimal::ONE) * Decimal::ONE_HUNDRED;
    let purchasing_power_retained = Decimal::ONE_HUNDRED / inflation_factor;

    let inflation_erosion_percent = (nominal_rate > Decimal::ZERO).then(|| {
        (inflation_rate / nominal_rate * Decimal::ONE_HUNDRED)
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    });

    Ok(RealRateResult {
        nominal_rate,
        inflation_rate,
        real_rate,
        simple_difference: nominal_rate - inflation_rate,
        purchasing_power_retained,
        inflation_erosion_percent,
    })
}
