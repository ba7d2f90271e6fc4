//! Korean salary and personal finance calculators
//!
//! This crate computes monthly take-home pay from a yearly gross salary under
//! the 2025 Korean payroll deductions, searches for the gross salary that
//! yields a desired net pay, and provides a few related calculators: a
//! gross-to-net salary table, savings growth projection, real return
//! conversion and commission settlement.
//!
//! Deduction rates and calculator settings are loaded from a YAML
//! configuration directory with [`config::ConfigLoader`], or taken from the
//! built-in 2025 defaults.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
