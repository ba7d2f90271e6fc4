//! Core data models for the pay calculators.
//!
//! This module contains the inputs and results exchanged with every
//! calculator. All results serialize to snake_case JSON for display layers.

mod investment;
mod salary;
mod settlement;

pub use investment::{GrowthInput, GrowthProjection, RealRateResult, YearlySnapshot};
pub use salary::{
    DeductionKind, DeductionLine, GrossSolveResult, NetPayResult, SalaryInput, SalaryTableRow,
};
pub use settlement::{SettlementInput, SettlementResult};
