//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configurations from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::calculation::{GrossFromNetSolver, NetPayCalculator};
use crate::error::{CalculatorError, CalculatorResult};

use super::types::{CalculatorConfig, CalculatorSettings, DeductionSchedule, ScheduleMetadata};

/// Loads and provides access to calculator configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// hands out calculators built from the schedule in force on a given date.
///
/// # Directory Structure
///
/// ```text
/// config/kr_2025/
/// ├── schedule.yaml        # Configuration metadata
/// ├── calculators.yaml     # Solver, salary table, investment and settlement settings
/// └── deductions/
///     └── 2025-01-01.yaml  # Deduction rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use pay_calculator::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/kr_2025").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let calculator = loader.net_pay_calculator_for(date).unwrap();
/// let result = calculator.compute_net_pay(60_000_000.into(), 200_000.into(), 1);
/// println!("Net pay: {}", result.net_pay);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any schedule or setting fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> CalculatorResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ScheduleMetadata>(&path.join("schedule.yaml"))?;

        let settings = Self::load_yaml::<CalculatorSettings>(&path.join("calculators.yaml"))?;
        settings.validate()?;

        let schedules = Self::load_schedules(&path.join("deductions"))?;

        info!(
            code = %metadata.code,
            version = %metadata.version,
            schedules = schedules.len(),
            "Loaded calculator configuration"
        );

        Ok(Self {
            config: CalculatorConfig::new(metadata, schedules, settings),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> CalculatorResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalculatorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| CalculatorError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and validates every schedule in the deductions directory.
    fn load_schedules(dir: &Path) -> CalculatorResult<Vec<DeductionSchedule>> {
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| CalculatorError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut schedules: Vec<DeductionSchedule> = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| CalculatorError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let schedule = Self::load_yaml::<DeductionSchedule>(&path)?;
                schedule.validate()?;

                if schedules
                    .iter()
                    .any(|s| s.effective_date == schedule.effective_date)
                {
                    return Err(CalculatorError::invalid_config(
                        "effective_date",
                        format!("duplicate schedule for {}", schedule.effective_date),
                    ));
                }
                schedules.push(schedule);
            }
        }

        if schedules.is_empty() {
            return Err(CalculatorError::ConfigNotFound {
                path: format!("{} (no schedule files found)", dir_str),
            });
        }

        Ok(schedules)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the configuration metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        self.config.metadata()
    }

    /// Returns the calculator settings.
    pub fn settings(&self) -> &CalculatorSettings {
        self.config.settings()
    }

    /// Gets the deduction schedule in force on a given date.
    ///
    /// Finds the most recent schedule effective on or before `date`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pay_calculator::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/kr_2025")?;
    /// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    /// let schedule = loader.schedule_for(date)?;
    /// println!("Pension cap: {}", schedule.pension_cap);
    /// # Ok::<(), pay_calculator::error::CalculatorError>(())
    /// ```
    pub fn schedule_for(&self, date: NaiveDate) -> CalculatorResult<&DeductionSchedule> {
        self.config
            .schedules()
            .iter()
            .rfind(|s| s.effective_date <= date)
            .ok_or(CalculatorError::ScheduleNotFound { date })
    }

    /// Returns the newest deduction schedule.
    pub fn latest_schedule(&self) -> Option<&DeductionSchedule> {
        self.config.schedules().last()
    }

    /// Builds a net pay calculator for the schedule in force on `date`.
    pub fn net_pay_calculator_for(&self, date: NaiveDate) -> CalculatorResult<NetPayCalculator> {
        Ok(NetPayCalculator::new(self.schedule_for(date)?.clone()))
    }

    /// Builds a gross-from-net solver for the schedule in force on `date`.
    pub fn gross_solver_for(&self, date: NaiveDate) -> CalculatorResult<GrossFromNetSolver> {
        Ok(GrossFromNetSolver::new(
            self.net_pay_calculator_for(date)?,
            self.settings().solver.clone(),
        ))
    }
}
