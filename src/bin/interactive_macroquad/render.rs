use macroquad::prelude::*;

use missile_sim::TrajectorySample;

use crate::constants::{
    DASH_GAP_PX, DASH_LENGTH_PX, IMPACT_COLOR, IMPACT_RADIUS_PX, TARGET_COLOR, X_GRID_LINES,
    Y_GRID_LINES,
};

/// Screen rectangle the chart is drawn into, paired with the world spans it shows.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
    pub(crate) world_max_x: f32,
    pub(crate) world_max_y: f32,
}

impl PlotArea {
    pub(crate) fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let plot_w = (self.right - self.left).max(1.0);
        let plot_h = (self.bottom - self.top).max(1.0);
        let x = self.left + (world.x / self.world_max_x.max(1.0)) * plot_w;
        let y = self.bottom - (world.y / self.world_max_y.max(1.0)) * plot_h;
        vec2(x, y)
    }

    fn sample_to_screen(&self, sample: TrajectorySample) -> Vec2 {
        self.world_to_screen(vec2(sample.distance_m as f32, sample.altitude_m as f32))
    }
}

fn format_axis_value(value: f32, axis_max: f32) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(area: &PlotArea, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        draw_line(x, area.top, x, area.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        draw_line(area.left, y, area.right, y, 1.0, color);
    }
    draw_line(area.left, area.bottom, area.right, area.bottom, 2.0, DARKGRAY);
    draw_line(area.left, area.top, area.left, area.bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(area: &PlotArea, font: Option<&Font>) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * (area.right - area.left);
        let label = format_axis_value(t * area.world_max_x, area.world_max_x);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * (area.bottom - area.top);
        let label = format_axis_value(t * area.world_max_y, area.world_max_y);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    draw_ui_text(
        "Distance (m)",
        area.right - 130.0,
        area.bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text(
        "Altitude (m)",
        area.left + 10.0,
        area.top - 8.0,
        18,
        label_color,
        font,
    );
}

pub(crate) fn draw_path(
    area: &PlotArea,
    samples: &[TrajectorySample],
    thickness: f32,
    color: Color,
) {
    for pair in samples.windows(2) {
        let a = area.sample_to_screen(pair[0]);
        let b = area.sample_to_screen(pair[1]);
        draw_line(a.x, a.y, b.x, b.y, thickness, color);
    }
}

fn draw_dashed_line(from: Vec2, to: Vec2, thickness: f32, color: Color) {
    let length = from.distance(to);
    let dir = (to - from).normalize_or_zero();
    let mut travelled = 0.0;
    while travelled < length {
        let start = from + dir * travelled;
        let end = from + dir * (travelled + DASH_LENGTH_PX).min(length);
        draw_line(start.x, start.y, end.x, end.y, thickness, color);
        travelled += DASH_LENGTH_PX + DASH_GAP_PX;
    }
}

pub(crate) fn draw_target_line(area: &PlotArea, target_distance_m: f32, font: Option<&Font>) {
    let base = area.world_to_screen(vec2(target_distance_m, 0.0));
    let top = vec2(base.x, area.top);
    draw_dashed_line(base, top, 2.0, TARGET_COLOR);
    draw_ui_text("Target", base.x + 6.0, area.top + 18.0, 16, TARGET_COLOR, font);
}

pub(crate) fn draw_impact_marker(area: &PlotArea, range_m: f32) {
    let p = area.world_to_screen(vec2(range_m.max(0.0), 0.0));
    draw_circle(p.x, p.y, IMPACT_RADIUS_PX, IMPACT_COLOR);
    draw_circle_lines(p.x, p.y, IMPACT_RADIUS_PX, 2.0, DARKGREEN);
}
