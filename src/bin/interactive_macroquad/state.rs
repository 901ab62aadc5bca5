use missile_sim::core::window::AxisWindow;
use missile_sim::{Missile, TrajectoryResult};

/// Values currently entered on the launch form.
pub(crate) struct FormState {
    pub(crate) name: String,
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
    pub(crate) target_distance_m: f32,
}

impl FormState {
    fn from_missile(missile: &Missile) -> Self {
        Self {
            name: missile.name.clone(),
            speed_mps: missile.speed_mps as f32,
            angle_deg: missile.angle_deg as f32,
            target_distance_m: missile.target_distance_m as f32,
        }
    }

    pub(crate) fn to_missile(&self) -> Missile {
        Missile {
            name: self.name.trim().to_string(),
            speed_mps: f64::from(self.speed_mps),
            angle_deg: f64::from(self.angle_deg.round()),
            target_distance_m: f64::from(self.target_distance_m),
            ..Missile::default()
        }
    }
}

/// A submitted launch and its computed trajectory.
pub(crate) struct Launch {
    pub(crate) missile: Missile,
    pub(crate) result: TrajectoryResult,
}

pub(crate) struct AppRuntime {
    pub(crate) form: FormState,
    pub(crate) launch: Option<Launch>,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        Self {
            form: FormState::from_missile(&Missile::default()),
            launch: None,
            status_line: "Set the launch parameters and press Launch Missile".to_string(),
        }
    }

    pub(crate) fn submit(&mut self) {
        let missile = self.form.to_missile();
        match missile.simulate() {
            Ok(result) => {
                tracing::info!(
                    name = %missile.name,
                    range_m = result.calculated_range_m,
                    "launched"
                );
                self.status_line = format!("Launched {}", missile.name);
                self.launch = Some(Launch { missile, result });
            }
            Err(err) => {
                tracing::warn!(%err, "launch rejected");
                self.status_line = format!("Error: {err}");
            }
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }

    /// Axis spans for the last launch, or for the form's target before any launch.
    pub(crate) fn axis_window(&self) -> AxisWindow {
        match &self.launch {
            Some(launch) => {
                let raw_max_x = launch
                    .result
                    .calculated_range_m
                    .max(launch.missile.target_distance_m);
                AxisWindow::fit(raw_max_x, launch.result.max_height_m)
            }
            None => AxisWindow::fit(f64::from(self.form.target_distance_m), 0.0),
        }
    }
}
