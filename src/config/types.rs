//! Configuration types for the pay calculators.
//!
//! Every regulatory constant used by a calculator is a field on one of these
//! structures. The `Default` impls carry the 2025 Korean payroll values so the
//! calculators can run without any configuration files; the same structures
//! are deserialized from YAML by [`ConfigLoader`](super::ConfigLoader).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, CalculatorResult};

/// National pension contribution rate (4.5%).
pub const PENSION_RATE: Decimal = dec!(0.045);
/// Monthly ceiling on the national pension contribution, in won.
pub const PENSION_CAP: Decimal = dec!(277650);
/// Health insurance contribution rate (3.545%).
pub const HEALTH_INSURANCE_RATE: Decimal = dec!(0.03545);
/// Long-term care rate, applied to the health insurance amount (12.95%).
pub const LONG_TERM_CARE_RATE: Decimal = dec!(0.1295);
/// Employment insurance contribution rate (0.9%).
pub const EMPLOYMENT_INSURANCE_RATE: Decimal = dec!(0.009);
/// Income tax reduction per dependent beyond the first (5%).
pub const DEPENDENT_DISCOUNT_RATE: Decimal = dec!(0.05);
/// Local income tax, applied to the income tax amount (10%).
pub const LOCAL_INCOME_TAX_RATE: Decimal = dec!(0.1);

/// Tax withheld on investment interest (15.4%).
pub const INTEREST_TAX_RATE: Decimal = dec!(0.154);

/// Share of sales kept by the shop as commission (15%).
pub const COMMISSION_RATE: Decimal = dec!(0.15);
/// Material cost, as a share of sales after commission (10%).
pub const MATERIAL_COST_RATE: Decimal = dec!(0.10);
/// Withholding on freelance settlements (3.3%).
pub const SETTLEMENT_WITHHOLDING_RATE: Decimal = dec!(0.033);

/// Metadata identifying a payroll configuration set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleMetadata {
    /// Short identifier for the configuration set (e.g., "KR-2025").
    pub code: String,
    /// The human-readable name of the configuration set.
    pub name: String,
    /// The version or effective date of the configuration set.
    pub version: String,
    /// Where the figures were taken from.
    #[serde(default)]
    pub source_url: String,
}

impl Default for ScheduleMetadata {
    fn default() -> Self {
        Self {
            code: "KR-2025".to_string(),
            name: "Korean payroll withholding (simplified)".to_string(),
            version: "2025-01-01".to_string(),
            source_url: String::new(),
        }
    }
}

/// One withholding bracket.
///
/// A bracket applies when the annualised taxable base is at most `up_to`.
/// The last bracket of a table has no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive upper bound on annual taxable income, or `None` for the top bracket.
    #[serde(default)]
    pub up_to: Option<Decimal>,
    /// The flat rate applied to the monthly taxable base.
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bracket with an inclusive upper bound.
    pub fn up_to(limit: i64, rate: Decimal) -> Self {
        Self {
            up_to: Some(Decimal::from(limit)),
            rate,
        }
    }

    /// Creates the unbounded top bracket.
    pub fn unbounded(rate: Decimal) -> Self {
        Self { up_to: None, rate }
    }

    /// Returns true if the bracket covers the given annual taxable income.
    pub fn contains(&self, annual_taxable: Decimal) -> bool {
        self.up_to.is_none_or(|limit| annual_taxable <= limit)
    }
}

/// The simplified income tax withholding table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxTable {
    /// Brackets in ascending order of `up_to`.
    pub brackets: Vec<TaxBracket>,
    /// Reduction of income tax per dependent beyond the first.
    pub dependent_discount_rate: Decimal,
}

impl Default for IncomeTaxTable {
    fn default() -> Self {
        Self {
            brackets: vec![
                TaxBracket::up_to(14_000_000, Decimal::new(5, 3)),
                TaxBracket::up_to(50_000_000, Decimal::new(3, 2)),
                TaxBracket::up_to(88_000_000, Decimal::new(6, 2)),
                TaxBracket::up_to(150_000_000, Decimal::new(15, 2)),
                TaxBracket::unbounded(Decimal::new(22, 2)),
            ],
            dependent_discount_rate: DEPENDENT_DISCOUNT_RATE,
        }
    }
}

/// Statutory deduction rates effective from a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSchedule {
    /// The first date these rates apply to.
    pub effective_date: NaiveDate,
    /// National pension rate.
    pub pension_rate: Decimal,
    /// Monthly ceiling on the pension amount.
    pub pension_cap: Decimal,
    /// Health insurance rate.
    pub health_insurance_rate: Decimal,
    /// Long-term care rate, applied to the health insurance amount.
    pub long_term_care_rate: Decimal,
    /// Employment insurance rate.
    pub employment_insurance_rate: Decimal,
    /// Income tax withholding table.
    pub income_tax: IncomeTaxTable,
    /// Local income tax rate, applied to the income tax amount.
    pub local_income_tax_rate: Decimal,
}

impl Default for DeductionSchedule {
    fn default() -> Self {
        Self {
            effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            pension_rate: PENSION_RATE,
            pension_cap: PENSION_CAP,
            health_insurance_rate: HEALTH_INSURANCE_RATE,
            long_term_care_rate: LONG_TERM_CARE_RATE,
            employment_insurance_rate: EMPLOYMENT_INSURANCE_RATE,
            income_tax: IncomeTaxTable::default(),
            local_income_tax_rate: LOCAL_INCOME_TAX_RATE,
        }
    }
}

impl DeductionSchedule {
    /// Checks that every rate is a fraction and the bracket table is well formed.
    ///
    /// A well-formed table is non-empty, has strictly ascending bounds and ends
    /// with exactly one unbounded bracket.
    pub fn validate(&self) -> CalculatorResult<()> {
        check_fraction("pension_rate", self.pension_rate)?;
        check_fraction("health_insurance_rate", self.health_insurance_rate)?;
        check_fraction("long_term_care_rate", self.long_term_care_rate)?;
        check_fraction("employment_insurance_rate", self.employment_insurance_rate)?;
        check_fraction("local_income_tax_rate", self.local_income_tax_rate)?;
        check_fraction(
            "income_tax.dependent_discount_rate",
            self.income_tax.dependent_discount_rate,
        )?;

        if self.pension_cap.is_sign_negative() {
            return Err(CalculatorError::invalid_config(
                "pension_cap",
                "must not be negative",
            ));
        }

        let brackets = &self.income_tax.brackets;
        let Some((last, bounded)) = brackets.split_last() else {
            return Err(CalculatorError::invalid_config(
                "income_tax.brackets",
                "at least one bracket is required",
            ));
        };

        if last.up_to.is_some() {
            return Err(CalculatorError::invalid_config(
                "income_tax.brackets",
                "the last bracket must have no upper bound",
            ));
        }

        let mut previous: Option<Decimal> = None;
        for bracket in bounded {
            let Some(limit) = bracket.up_to else {
                return Err(CalculatorError::invalid_config(
                    "income_tax.brackets",
                    "only the last bracket may be unbounded",
                ));
            };
            if let Some(p) = previous {
                if limit <= p {
                    return Err(CalculatorError::invalid_config(
                        "income_tax.brackets",
                        format!("bounds must be strictly ascending ({} follows {})", limit, p),
                    ));
                }
            }
            previous = Some(limit);
        }

        for bracket in brackets {
            check_fraction("income_tax.brackets.rate", bracket.rate)?;
        }

        Ok(())
    }
}

/// Highest yearly gross a validated search range may reach.
pub const MAX_SEARCH_GROSS: Decimal = dec!(1000000000000000);

/// Longest savings projection a validated configuration may allow, in years.
pub const MAX_PROJECTION_YEARS: u32 = 1000;

/// Settings for the gross-from-net binary search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Lowest yearly gross the search will consider.
    pub lower_bound: Decimal,
    /// Highest yearly gross the search will consider.
    pub upper_bound: Decimal,
    /// Absolute net pay difference accepted as a match.
    pub tolerance: Decimal,
    /// Hard limit on the number of probes.
    pub max_iterations: u32,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            lower_bound: Decimal::new(10_000_000, 0),
            upper_bound: Decimal::new(500_000_000, 0),
            tolerance: Decimal::ONE_HUNDRED,
            max_iterations: 50,
        }
    }
}

impl SolverSettings {
    /// Checks the search range and stopping rules.
    pub fn validate(&self) -> CalculatorResult<()> {
        if self.lower_bound.is_sign_negative() {
            return Err(CalculatorError::invalid_config(
                "solver.lower_bound",
                "must not be negative",
            ));
        }
        if self.lower_bound > self.upper_bound {
            return Err(CalculatorError::invalid_config(
                "solver.upper_bound",
                "must not be below lower_bound",
            ));
        }
        if self.upper_bound > MAX_SEARCH_GROSS {
            return Err(CalculatorError::invalid_config(
                "solver.upper_bound",
                format!("must be at most {}", MAX_SEARCH_GROSS),
            ));
        }
        if self.tolerance <= Decimal::ZERO {
            return Err(CalculatorError::invalid_config(
                "solver.tolerance",
                "must be positive",
            ));
        }
        if self.max_iterations == 0 {
            return Err(CalculatorError::invalid_config(
                "solver.max_iterations",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Settings for the gross-to-net lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTableSettings {
    /// First yearly gross in the table.
    pub start: Decimal,
    /// Last yearly gross in the table (inclusive).
    pub end: Decimal,
    /// Increment used below `wide_step_from`.
    pub step: Decimal,
    /// Increment used from `wide_step_from` upwards.
    pub wide_step: Decimal,
    /// Gross at which the table switches to `wide_step`.
    pub wide_step_from: Decimal,
    /// Rows within this distance of a gross are considered near it.
    pub highlight_window: Decimal,
}

impl Default for SalaryTableSettings {
    fn default() -> Self {
        Self {
            start: Decimal::new(24_000_000, 0),
            end: Decimal::new(150_000_000, 0),
            step: Decimal::new(2_000_000, 0),
            wide_step: Decimal::new(5_000_000, 0),
            wide_step_from: Decimal::new(100_000_000, 0),
            highlight_window: Decimal::new(1_500_000, 0),
        }
    }
}

impl SalaryTableSettings {
    /// Checks that the sweep terminates.
    pub fn validate(&self) -> CalculatorResult<()> {
        if self.step <= Decimal::ZERO {
            return Err(CalculatorError::invalid_config(
                "salary_table.step",
                "must be positive",
            ));
        }
        if self.wide_step <= Decimal::ZERO {
            return Err(CalculatorError::invalid_config(
                "salary_table.wide_step",
                "must be positive",
            ));
        }
        if self.start > self.end {
            return Err(CalculatorError::invalid_config(
                "salary_table.end",
                "must not be below start",
            ));
        }
        Ok(())
    }
}

/// Settings for the savings growth projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentSettings {
    /// Tax withheld on interest when the caller opts in.
    pub interest_tax_rate: Decimal,
    /// Longest projection accepted, in years.
    pub max_years: u32,
}

impl Default for InvestmentSettings {
    fn default() -> Self {
        Self {
            interest_tax_rate: INTEREST_TAX_RATE,
            max_years: 100,
        }
    }
}

impl InvestmentSettings {
    /// Checks the interest tax rate and the projection horizon.
    pub fn validate(&self) -> CalculatorResult<()> {
        check_fraction("investment.interest_tax_rate", self.interest_tax_rate)?;
        if self.max_years > MAX_PROJECTION_YEARS {
            return Err(CalculatorError::invalid_config(
                "investment.max_years",
                format!("must be at most {}", MAX_PROJECTION_YEARS),
            ));
        }
        Ok(())
    }
}

/// Rates used by the commission settlement calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRates {
    /// Share of total sales taken as commission.
    pub commission_rate: Decimal,
    /// Material cost as a share of sales after commission.
    pub material_cost_rate: Decimal,
    /// Withholding tax on the settlement.
    pub withholding_rate: Decimal,
}

impl Default for SettlementRates {
    fn default() -> Self {
        Self {
            commission_rate: COMMISSION_RATE,
            material_cost_rate: MATERIAL_COST_RATE,
            withholding_rate: SETTLEMENT_WITHHOLDING_RATE,
        }
    }
}

/// Calculator settings file structure (`calculators.yaml`).
///
/// Any section left out of the file falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorSettings {
    /// Gross-from-net search settings.
    #[serde(default)]
    pub solver: SolverSettings,
    /// Salary table sweep settings.
    #[serde(default)]
    pub salary_table: SalaryTableSettings,
    /// Growth projection settings.
    #[serde(default)]
    pub investment: InvestmentSettings,
    /// Settlement rates.
    #[serde(default)]
    pub settlement: SettlementRates,
}

impl CalculatorSettings {
    /// Validates every section.
    pub fn validate(&self) -> CalculatorResult<()> {
        self.solver.validate()?;
        self.salary_table.validate()?;
        self.investment.validate()?;
        check_fraction("settlement.commission_rate", self.settlement.commission_rate)?;
        check_fraction("settlement.material_cost_rate", self.settlement.material_cost_rate)?;
        check_fraction("settlement.withholding_rate", self.settlement.withholding_rate)?;
        Ok(())
    }
}

/// The complete calculator configuration.
///
/// Aggregates the metadata, every deduction schedule and the calculator
/// settings loaded from a configuration directory.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    metadata: ScheduleMetadata,
    /// Deduction schedules by effective date (sorted oldest first).
    schedules: Vec<DeductionSchedule>,
    settings: CalculatorSettings,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new(
            ScheduleMetadata::default(),
            vec![DeductionSchedule::default()],
            CalculatorSettings::default(),
        )
    }
}

impl CalculatorConfig {
    /// Creates a new CalculatorConfig from its component parts.
    pub fn new(
        metadata: ScheduleMetadata,
        schedules: Vec<DeductionSchedule>,
        settings: CalculatorSettings,
    ) -> Self {
        let mut sorted_schedules = schedules;
        sorted_schedules.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            schedules: sorted_schedules,
            settings,
        }
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns all deduction schedules, oldest first.
    pub fn schedules(&self) -> &[DeductionSchedule] {
        &self.schedules
    }

    /// Returns the calculator settings.
    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }
}

fn check_fraction(field: &str, value: Decimal) -> CalculatorResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(CalculatorError::invalid_config(
            field,
            format!("must be between 0 and 1, got {}", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_constants_match_published_rates() {
        assert_eq!(PENSION_RATE, dec("0.045"));
        assert_eq!(PENSION_CAP, dec("277650"));
        assert_eq!(HEALTH_INSURANCE_RATE, dec("0.03545"));
        assert_eq!(LONG_TERM_CARE_RATE, dec("0.1295"));
        assert_eq!(EMPLOYMENT_INSURANCE_RATE, dec("0.009"));
        assert_eq!(LOCAL_INCOME_TAX_RATE, dec("0.1"));
        assert_eq!(INTEREST_TAX_RATE, dec("0.154"));
        assert_eq!(SETTLEMENT_WITHHOLDING_RATE, dec("0.033"));
        assert_eq!(DEPENDENT_DISCOUNT_RATE, dec("0.05"));
        assert_eq!(COMMISSION_RATE, dec("0.15"));
        assert_eq!(MATERIAL_COST_RATE, dec("0.10"));
        assert_eq!(MAX_SEARCH_GROSS, dec("1000000000000000"));
    }

    #[test]
    fn test_constants_usable_in_const_context() {
        const MONTHLY_PENSION_LIMIT: Decimal = PENSION_CAP;
        const RATES: [Decimal; 2] = [PENSION_RATE, HEALTH_INSURANCE_RATE];

        assert_eq!(MONTHLY_PENSION_LIMIT, dec("277650"));
        assert_eq!(RATES[1], dec("0.03545"));
    }

    #[test]
    fn test_default_schedule_is_valid() {
        assert!(DeductionSchedule::default().validate().is_ok());
        assert!(CalculatorSettings::default().validate().is_ok());
    }

    #[test]
    fn test_default_income_tax_table() {
        let table = IncomeTaxTable::default();
        assert_eq!(table.brackets.len(), 5);
        assert_eq!(table.brackets[0].up_to, Some(dec("14000000")));
        assert_eq!(table.brackets[0].rate, dec("0.005"));
        assert_eq!(table.brackets[2].rate, dec("0.06"));
        assert_eq!(table.brackets[4].up_to, None);
        assert_eq!(table.brackets[4].rate, dec("0.22"));
    }

    #[test]
    fn test_bracket_bound_is_inclusive() {
        let bracket = TaxBracket::up_to(50_000_000, dec("0.03"));
        assert!(bracket.contains(dec("50000000")));
        assert!(!bracket.contains(dec("50000000.01")));
        assert!(TaxBracket::unbounded(dec("0.22")).contains(dec("999999999999")));
    }

    #[test]
    fn test_validate_rejects_bounded_last_bracket() {
        let mut schedule = DeductionSchedule::default();
        schedule.income_tax.brackets.pop();

        match schedule.validate() {
            Err(CalculatorError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "income_tax.brackets");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_descending_brackets() {
        let mut schedule = DeductionSchedule::default();
        schedule.income_tax.brackets.swap(0, 1);

        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_brackets() {
        let mut schedule = DeductionSchedule::default();
        schedule.income_tax.brackets.clear();

        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_rate_above_one() {
        let schedule = DeductionSchedule {
            pension_rate: dec("4.5"),
            ..DeductionSchedule::default()
        };

        match schedule.validate() {
            Err(CalculatorError::InvalidConfig { field, message }) => {
                assert_eq!(field, "pension_rate");
                assert!(message.contains("4.5"));
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_solver_settings_reject_inverted_range() {
        let settings = SolverSettings {
            lower_bound: dec("500000000"),
            upper_bound: dec("10000000"),
            ..SolverSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_solver_settings_reject_unbounded_upper_bound() {
        let settings = SolverSettings {
            upper_bound: Decimal::MAX,
            ..SolverSettings::default()
        };

        match settings.validate() {
            Err(CalculatorError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "solver.upper_bound")
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_solver_settings_accept_upper_bound_at_limit() {
        let settings = SolverSettings {
            upper_bound: MAX_SEARCH_GROSS,
            ..SolverSettings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_investment_settings_reject_huge_horizon() {
        let settings = CalculatorSettings {
            investment: InvestmentSettings {
                max_years: u32::MAX,
                ..InvestmentSettings::default()
            },
            ..CalculatorSettings::default()
        };

        match settings.validate() {
            Err(CalculatorError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "investment.max_years")
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_investment_settings_reject_tax_rate_above_one() {
        let settings = InvestmentSettings {
            interest_tax_rate: dec("1.54"),
            ..InvestmentSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_solver_settings_reject_zero_tolerance() {
        let settings = SolverSettings {
            tolerance: Decimal::ZERO,
            ..SolverSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_salary_table_settings_reject_zero_step() {
        let settings = SalaryTableSettings {
            step: Decimal::ZERO,
            ..SalaryTableSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_config_sorts_schedules_by_effective_date() {
        let newer = DeductionSchedule {
            effective_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            ..DeductionSchedule::default()
        };
        let older = DeductionSchedule::default();

        let config = CalculatorConfig::new(
            ScheduleMetadata::default(),
            vec![newer, older],
            CalculatorSettings::default(),
        );

        assert_eq!(
            config.schedules()[0].effective_date,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
        assert_eq!(
            config.schedules()[1].effective_date,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_settings_sections_default_when_missing() {
        let settings: CalculatorSettings = serde_yaml::from_str(
            "solver:\n  lower_bound: \"20000000\"\n  upper_bound: \"300000000\"\n  tolerance: \"50\"\n  max_iterations: 40\n",
        )
        .unwrap();

        assert_eq!(settings.solver.lower_bound, dec("20000000"));
        assert_eq!(settings.solver.max_iterations, 40);
        assert_eq!(settings.salary_table, SalaryTableSettings::default());
        assert_eq!(settings.settlement, SettlementRates::default());
    }
}
