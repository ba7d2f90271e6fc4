//! Calculation logic for the pay calculators.
//!
//! This module contains the salary calculations (net pay from gross, the
//! gross-from-net search and the salary table built on them) together with
//! the savings growth projection, real return conversion and commission
//! settlement.

mod compound_growth;
mod gross_from_net;
mod income_tax;
mod net_pay;
mod real_rate;
mod salary_table;
mod settlement;

pub use compound_growth::project_growth;
pub use gross_from_net::GrossFromNetSolver;
pub use income_tax::{
    IncomeTaxResult, MONTHS_PER_YEAR, bracket_index, calculate_income_tax,
    dependent_discount_factor,
};
pub use net_pay::{NetPayCalculator, calculate_net_pay};
pub use real_rate::calculate_real_rate;
pub use salary_table::build_salary_table;
pub use settlement::calculate_settlement;
