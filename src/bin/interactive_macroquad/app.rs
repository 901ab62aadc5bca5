use macroquad::prelude::*;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, GRID_COLOR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    LEFT_MARGIN, MSAA_SAMPLES, RIGHT_MARGIN, TOP_MARGIN, TRAJECTORY_COLOR, UI_FONT_PATH,
};
use crate::controls::{draw_launch_form, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::{
    PlotArea, draw_axis_tick_labels, draw_grid, draw_impact_marker, draw_path, draw_target_line,
};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Missile Launch Simulator".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            tracing::warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();

        let actions = hotkey_actions().merge(draw_launch_form(&mut state));
        if actions.reset {
            state.reset();
        }
        if actions.launch {
            state.submit();
        }

        let (world_max_x, world_max_y) = state.axis_window().as_f32();
        let area = PlotArea {
            left: LEFT_MARGIN,
            right: (screen_w - RIGHT_MARGIN).max(LEFT_MARGIN + 1.0),
            top: TOP_MARGIN,
            bottom: (screen_h - BOTTOM_MARGIN).max(TOP_MARGIN + 1.0),
            world_max_x,
            world_max_y,
        };

        clear_background(BACKGROUND);
        draw_grid(&area, GRID_COLOR);
        draw_axis_tick_labels(&area, ui_font.as_ref());

        if let Some(launch) = &state.launch {
            draw_target_line(
                &area,
                launch.missile.target_distance_m as f32,
                ui_font.as_ref(),
            );
            draw_path(&area, &launch.result.samples, 3.0, TRAJECTORY_COLOR);
            draw_impact_marker(&area, launch.result.calculated_range_m as f32);
        } else {
            draw_target_line(&area, state.form.target_distance_m, ui_font.as_ref());
        }

        draw_hud(&state, &area, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
