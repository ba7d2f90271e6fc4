//! Gross-from-net salary search.
//!
//! Finds the yearly gross salary that produces a desired monthly net pay by
//! binary search over whole-won salaries, using [`NetPayCalculator`] as the
//! oracle.
//!
//! Net pay only ever jumps *down* as gross rises (at the pass-through edge and
//! at every withholding bracket bound) and is otherwise increasing. Every
//! point where net pay rises through the target is therefore continuous, and
//! the search lands within tolerance of any target between the net pay at the
//! lower and upper bounds. Targets outside that range yield the nearest bound
//! with `converged == false`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, trace, warn};

use crate::config::SolverSettings;
use crate::models::GrossSolveResult;

use super::net_pay::NetPayCalculator;

const TWO: Decimal = dec!(2);

/// Solves for the yearly gross that yields a target monthly net pay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrossFromNetSolver {
    calculator: NetPayCalculator,
    settings: SolverSettings,
}

impl GrossFromNetSolver {
    /// Creates a solver around a net pay calculator.
    pub fn new(calculator: NetPayCalculator, settings: SolverSettings) -> Self {
        Self {
            calculator,
            settings,
        }
    }

    /// Returns the calculator used as the search oracle.
    pub fn calculator(&self) -> &NetPayCalculator {
        &self.calculator
    }

    /// Returns the search settings.
    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Finds the yearly gross whose monthly net pay is closest to `target_monthly_net`.
    ///
    /// Probes the midpoint of the remaining range and stops as soon as a probe's
    /// net pay is within `tolerance` of the target. If the range empties or the
    /// iteration cap is reached first, the last probed gross is returned with
    /// `converged` set to false. The breakdown in the result is always the one
    /// at the returned gross.
    ///
    /// # Examples
    ///
    /// ```
    /// use pay_calculator::calculation::GrossFromNetSolver;
    /// use rust_decimal::Decimal;
    ///
    /// let solver = GrossFromNetSolver::default();
    /// let result = solver.solve_gross_from_net(
    ///     Decimal::from(4_000_000),
    ///     Decimal::from(200_000),
    ///     1,
    /// );
    /// assert!(result.converged);
    /// assert!(result.residual().abs() < Decimal::from(100));
    /// ```
    pub fn solve_gross_from_net(
        &self,
        target_monthly_net: Decimal,
        non_taxable_monthly: Decimal,
        dependent_count: u32,
    ) -> GrossSolveResult {
        let mut low = self.settings.lower_bound.floor();
        let mut high = self.settings.upper_bound.floor();
        let mut estimated_yearly_gross = low;
        let mut iterations = 0;

        while low <= high && iterations < self.settings.max_iterations {
            let mid = low + ((high - low) / TWO).floor();
            let probe =
                self.calculator
                    .compute_net_pay(mid, non_taxable_monthly, dependent_count);
            iterations += 1;

            trace!(
                iteration = iterations,
                gross = %mid,
                net_pay = %probe.net_pay,
                "Probed gross salary"
            );

            if (probe.net_pay - target_monthly_net).abs() < self.settings.tolerance {
                debug!(
                    target = %target_monthly_net,
                    gross = %mid,
                    iterations,
                    "Gross salary found"
                );
                return GrossSolveResult {
                    target_monthly_net,
                    estimated_yearly_gross: mid,
                    final_net_pay_result: probe,
                    iterations,
                    converged: true,
                };
            }

            if probe.net_pay < target_monthly_net {
                low = mid + Decimal::ONE;
            } else {
                high = mid - Decimal::ONE;
            }
            estimated_yearly_gross = mid;
        }

        let final_net_pay_result = self.calculator.compute_net_pay(
            estimated_yearly_gross,
            non_taxable_monthly,
            dependent_count,
        );

        warn!(
            target = %target_monthly_net,
            gross = %estimated_yearly_gross,
            net_pay = %final_net_pay_result.net_pay,
            iterations,
            "Gross salary search did not converge, returning closest probe"
        );

        GrossSolveResult {
            target_monthly_net,
            estimated_yearly_gross,
            final_net_pay_result,
            iterations,
            converged: false,
        }
    }
}
