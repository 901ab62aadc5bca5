use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 420.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 140.0;
pub const BOTTOM_MARGIN: f32 = 110.0;

pub const TITLE_Y: f32 = 46.0;
pub const SUBTITLE_Y: f32 = 84.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

pub const FORM_POSITION: (f32, f32) = (18.0, 120.0);
pub const FORM_SIZE: (f32, f32) = (370.0, 280.0);
pub const SPEED_RANGE_MPS: (f32, f32) = (1.0, 1000.0);
pub const TARGET_RANGE_M: (f32, f32) = (1.0, 100_000.0);

pub const BACKGROUND: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.91, 0.93, 1.0);
pub const TRAJECTORY_COLOR: Color = Color::new(0.21, 0.48, 0.96, 1.0);
pub const TARGET_COLOR: Color = Color::new(0.86, 0.15, 0.15, 1.0);
pub const IMPACT_COLOR: Color = Color::new(0.09, 0.64, 0.29, 1.0);
pub const WARNING_COLOR: Color = Color::new(0.85, 0.47, 0.02, 1.0);
pub const IMPACT_RADIUS_PX: f32 = 8.0;
pub const DASH_LENGTH_PX: f32 = 10.0;
pub const DASH_GAP_PX: f32 = 6.0;
