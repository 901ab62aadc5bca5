use macroquad::prelude::*;

use missile_sim::core::report::TrajectoryReport;

use crate::constants::{IMPACT_COLOR, SUBTITLE_Y, TITLE_Y, WARNING_COLOR};
use crate::render::{PlotArea, draw_ui_text};
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, area: &PlotArea, screen_h: f32, font: Option<&Font>) {
    draw_header_block(state, area, font);
    if let Some(launch) = &state.launch {
        draw_range_label(area, launch.result.calculated_range_m as f32, font);
        let report = TrajectoryReport::new(
            &launch.missile.name,
            launch.missile.launch_parameters(),
            &launch.result,
        );
        draw_report_block(&report, screen_h, font);
    }
}

fn draw_header_block(state: &AppRuntime, area: &PlotArea, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_ui_text("Missile Launch Simulator", area.left, TITLE_Y, 30, header_color, font);
    draw_ui_text(
        &state.status_line,
        area.left,
        SUBTITLE_Y,
        18,
        Color::from_rgba(80, 86, 96, 255),
        font,
    );
}

fn draw_range_label(area: &PlotArea, range_m: f32, font: Option<&Font>) {
    let label = format!("{:.2} m", range_m.max(0.0));
    let size = measure_text(&label, font, 18, 1.0);
    let impact = area.world_to_screen(vec2(range_m.max(0.0), 0.0));
    let label_x = (impact.x - (size.width * 0.5))
        .clamp(area.left + 4.0, (area.right - size.width - 4.0).max(area.left + 4.0));
    let label_y = (area.bottom - 14.0).max(area.top + 20.0);
    draw_ui_text(&label, label_x, label_y, 18, DARKGRAY, font);
}

fn draw_report_block(report: &TrajectoryReport<'_>, screen_h: f32, font: Option<&Font>) {
    let x = 24.0;
    let mut y = (screen_h * 0.55).max(440.0);
    let line_h = 24.0;
    let text_color = Color::from_rgba(40, 44, 52, 255);

    draw_ui_text(report.name, x, y, 22, text_color, font);
    y += line_h + 4.0;
    for line in report.summary_lines() {
        draw_ui_text(&line, x, y, 18, text_color, font);
        y += line_h;
    }
    for warning in report.warnings() {
        draw_ui_text(warning, x, y, 18, WARNING_COLOR, font);
        y += line_h;
    }
    if let Some(line) = report.accuracy_line() {
        draw_ui_text(&line, x, y, 18, IMPACT_COLOR, font);
    }
}
