//! Configuration loading and management for the pay calculators.
//!
//! This module holds every regulatory constant the calculators use, with
//! named defaults, and loads replacement values from YAML files so that a
//! new tax year is a data change rather than a code change.
//!
//! # Example
//!
//! ```no_run
//! use pay_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/kr_2025").unwrap();
//! println!("Loaded configuration: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    COMMISSION_RATE, CalculatorConfig, CalculatorSettings, DEPENDENT_DISCOUNT_RATE,
    DeductionSchedule, EMPLOYMENT_INSURANCE_RATE, HEALTH_INSURANCE_RATE, INTEREST_TAX_RATE,
    IncomeTaxTable, InvestmentSettings, LOCAL_INCOME_TAX_RATE, LONG_TERM_CARE_RATE,
    MATERIAL_COST_RATE, MAX_PROJECTION_YEARS, MAX_SEARCH_GROSS, PENSION_CAP, PENSION_RATE,
    SETTLEMENT_WITHHOLDING_RATE, SalaryTableSettings, ScheduleMetadata, SettlementRates,
    SolverSettings, TaxBracket,
};
