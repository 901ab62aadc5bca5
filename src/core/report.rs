use std::fmt;

use chrono::{DateTime, Local};

use crate::core::ballistics::{LaunchParameters, TrajectoryResult};

pub const MISS_WARNING: &str = "Missile may not hit target accurately!";
pub const NO_ACCURACY_WARNING: &str =
    "Target distance is zero or invalid, cannot calculate accuracy.";

/// Human-readable summary of one simulation run.
#[derive(Clone, Debug)]
pub struct TrajectoryReport<'a> {
    pub name: &'a str,
    pub params: LaunchParameters,
    pub result: &'a TrajectoryResult,
    pub launched_at: DateTime<Local>,
}

impl<'a> TrajectoryReport<'a> {
    pub fn new(name: &'a str, params: LaunchParameters, result: &'a TrajectoryResult) -> Self {
        Self {
            name,
            params,
            result,
            launched_at: Local::now(),
        }
    }

    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Calculated range: {:.2} m", self.result.calculated_range_m),
            format!("Target distance: {:.2} m", self.params.target_distance_m),
            format!("Max height: {:.2} m", self.result.max_height_m),
            format!("Time of flight: {:.2} s", self.result.time_of_flight_s),
        ]
    }

    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.result.likely_miss {
            warnings.push(MISS_WARNING);
        }
        if self.result.accuracy_percent.is_none() {
            warnings.push(NO_ACCURACY_WARNING);
        }
        warnings
    }

    pub fn accuracy_line(&self) -> Option<String> {
        self.result
            .accuracy_percent
            .map(|accuracy| format!("Accuracy: {accuracy:.1}%"))
    }
}

impl fmt::Display for TrajectoryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} launched at {}",
            self.name,
            self.launched_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        for line in self.summary_lines() {
            writeln!(f, "{line}")?;
        }
        for warning in self.warnings() {
            writeln!(f, "Warning: {warning}")?;
        }
        if let Some(line) = self.accuracy_line() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
