use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{FORM_POSITION, FORM_SIZE, SPEED_RANGE_MPS, TARGET_RANGE_M};
use crate::state::AppRuntime;

/// Hotkeys must not produce text, so they never fire while the name field is being edited.
pub(crate) const LAUNCH_KEY: KeyCode = KeyCode::F5;
pub(crate) const RESET_KEY: KeyCode = KeyCode::Escape;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) launch: bool,
    pub(crate) reset: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            launch: self.launch || other.launch,
            reset: self.reset || other.reset,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        launch: is_key_pressed(LAUNCH_KEY),
        reset: is_key_pressed(RESET_KEY),
    }
}

pub(crate) fn draw_launch_form(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    widgets::Window::new(
        hash!(),
        vec2(FORM_POSITION.0, FORM_POSITION.1),
        vec2(FORM_SIZE.0, FORM_SIZE.1),
    )
    .label("Launch Parameters")
    .ui(&mut *root_ui(), |ui| {
        ui.input_text(hash!(), "Missile Name", &mut state.form.name);
        ui.separator();
        ui.slider(
            hash!(),
            "Speed (m/s)",
            SPEED_RANGE_MPS.0..SPEED_RANGE_MPS.1,
            &mut state.form.speed_mps,
        );
        ui.slider(
            hash!(),
            "Launch Angle (deg)",
            0.0..90.0,
            &mut state.form.angle_deg,
        );
        ui.slider(
            hash!(),
            "Target Distance (m)",
            TARGET_RANGE_M.0..TARGET_RANGE_M.1,
            &mut state.form.target_distance_m,
        );
        ui.separator();
        if ui.button(None, "Launch Missile (F5)") {
            actions.launch = true;
        }
        if ui.button(None, "Reset (Esc)") {
            actions.reset = true;
        }
    });

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn produces_text(key: KeyCode) -> bool {
        !matches!(
            key,
            KeyCode::F1
                | KeyCode::F2
                | KeyCode::F3
                | KeyCode::F4
                | KeyCode::F5
                | KeyCode::F6
                | KeyCode::F7
                | KeyCode::F8
                | KeyCode::F9
                | KeyCode::F10
                | KeyCode::F11
                | KeyCode::F12
                | KeyCode::Escape
        )
    }

    #[test]
    fn hotkeys_do_not_collide_with_name_entry() {
        assert!(!produces_text(LAUNCH_KEY));
        assert!(!produces_text(RESET_KEY));
        assert!(!produces_text(KeyCode::F5));
        assert!(produces_text(KeyCode::Enter));
        assert!(produces_text(KeyCode::Space));
    }

    #[test]
    fn merged_actions_keep_either_request() {
        let typed = FrameActions {
            launch: false,
            reset: true,
        };
        let clicked = FrameActions {
            launch: true,
            reset: false,
        };

        let merged = typed.merge(clicked);
        assert!(merged.launch);
        assert!(merged.reset);
    }
}
