use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::ballistics::{
    DEFAULT_TIME_STEP_S, LaunchParameters, MAX_SAMPLES, TrajectoryResult, sampling_steps,
    simulate_with_step, time_of_flight,
};
use crate::error::SimError;

pub const DEFAULT_MISSILE_NAME: &str = "Falcon";
pub const UNKNOWN_PLACE: &str = "Unknown";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn validate(&self, label: &'static str) -> Result<(), SimError> {
        if !(self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat)) {
            return Err(SimError::invalid(
                label,
                format!("latitude {} is outside [-90, 90]", self.lat),
            ));
        }
        if !(self.lon.is_finite() && (-180.0..=180.0).contains(&self.lon)) {
            return Err(SimError::invalid(
                label,
                format!("longitude {} is outside [-180, 180]", self.lon),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchSite {
    #[serde(flatten)]
    pub location: GeoPoint,
    #[serde(default = "unknown_place")]
    pub city: String,
    #[serde(default = "unknown_place")]
    pub region: String,
}

impl LaunchSite {
    pub fn new(location: GeoPoint) -> Self {
        Self {
            location,
            city: unknown_place(),
            region: unknown_place(),
        }
    }

    pub fn label(&self) -> String {
        format!("Launch Site: {}, {}", self.city, self.region)
    }
}

fn unknown_place() -> String {
    UNKNOWN_PLACE.to_string()
}

/// One launch scenario as entered on the form or read from a YAML file.
///
/// Every field is optional in the file; missing ones take the form defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Missile {
    pub name: String,
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub target_distance_m: f64,
    pub target: GeoPoint,
    pub launch_site: Option<LaunchSite>,
    pub time_step_s: f64,
}

impl Default for Missile {
    fn default() -> Self {
        Self {
            name: DEFAULT_MISSILE_NAME.to_string(),
            speed_mps: 100.0,
            angle_deg: 45.0,
            target_distance_m: 1000.0,
            target: GeoPoint {
                lat: 40.7128,
                lon: -74.0060,
            },
            launch_site: None,
            time_step_s: DEFAULT_TIME_STEP_S,
        }
    }
}

impl Missile {
    pub fn from_yaml_str(source: &str) -> Result<Self, SimError> {
        let missile: Self = serde_yaml::from_str(source)?;
        Ok(missile)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let missile = Self::from_yaml_str(&source)?;
        tracing::debug!(path = %path.display(), name = %missile.name, "loaded scenario");
        Ok(missile)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.name.trim().is_empty() {
            return Err(SimError::invalid("name", "must not be empty"));
        }
        require_non_negative("speed", self.speed_mps)?;
        if !(self.angle_deg.is_finite() && (0.0..=90.0).contains(&self.angle_deg)) {
            return Err(SimError::invalid(
                "angle",
                format!("{} degrees is outside [0, 90]", self.angle_deg),
            ));
        }
        require_non_negative("target distance", self.target_distance_m)?;
        if !(self.time_step_s.is_finite() && self.time_step_s > 0.0) {
            return Err(SimError::invalid(
                "time step",
                format!("{} s must be a positive number", self.time_step_s),
            ));
        }
        let steps = sampling_steps(time_of_flight(self.launch_parameters()), self.time_step_s);
        if steps > MAX_SAMPLES as f64 {
            return Err(SimError::invalid(
                "speed or time step",
                format!("trajectory needs {steps:.0} samples, more than the {MAX_SAMPLES} allowed"),
            ));
        }
        self.target.validate("target coordinates")?;
        if let Some(site) = &self.launch_site {
            site.location.validate("launch site coordinates")?;
        }
        Ok(())
    }

    pub fn launch_parameters(&self) -> LaunchParameters {
        LaunchParameters {
            speed_mps: self.speed_mps,
            angle_deg: self.angle_deg,
            target_distance_m: self.target_distance_m,
        }
    }

    pub fn simulate(&self) -> Result<TrajectoryResult, SimError> {
        self.validate()?;
        let result = simulate_with_step(self.launch_parameters(), self.time_step_s);
        tracing::debug!(
            name = %self.name,
            range_m = result.calculated_range_m,
            samples = result.samples.len(),
            likely_miss = result.likely_miss,
            "simulated trajectory"
        );
        Ok(result)
    }
}

fn require_non_negative(name: &'static str, value: f64) -> Result<(), SimError> {
    if !value.is_finite() {
        return Err(SimError::invalid(name, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(SimError::invalid(name, format!("{value} cannot be negative")));
    }
    Ok(())
}
