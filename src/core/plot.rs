use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::core::ballistics::{LaunchParameters, TrajectoryResult};
use crate::core::window::AxisWindow;
use crate::error::SimError;

pub const CHART_SIZE: (u32, u32) = (1000, 600);

const TRAJECTORY_COLOR: RGBColor = RGBColor(54, 123, 245);
const TARGET_COLOR: RGBColor = RGBColor(220, 38, 38);
const IMPACT_COLOR: RGBColor = RGBColor(22, 163, 74);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// `.svg` selects the vector backend; anything else is rasterized.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Self::Svg,
            _ => Self::Png,
        }
    }
}

/// Everything the trajectory chart draws, in world coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    pub path: Vec<(f64, f64)>,
    pub target_x: f64,
    pub impact: (f64, f64),
    pub window: AxisWindow,
}

impl ChartLayout {
    pub fn new(name: &str, params: LaunchParameters, result: &TrajectoryResult) -> Self {
        let path: Vec<(f64, f64)> = result
            .samples
            .iter()
            .map(|sample| (sample.distance_m, sample.altitude_m))
            .collect();
        let furthest_sample = path.iter().fold(0.0f64, |acc, p| acc.max(p.0));
        let raw_max_x = result
            .calculated_range_m
            .max(params.target_distance_m)
            .max(furthest_sample);

        Self {
            title: format!("{name} Trajectory Simulation"),
            path,
            target_x: params.target_distance_m,
            impact: (result.calculated_range_m, 0.0),
            window: AxisWindow::fit(raw_max_x, result.max_height_m),
        }
    }

    fn target_line(&self) -> [(f64, f64); 2] {
        [(self.target_x, 0.0), (self.target_x, self.window.y_span)]
    }
}

pub fn render_chart(layout: &ChartLayout, path: &Path) -> Result<(), SimError> {
    let drawn = match ImageFormat::from_path(path) {
        ImageFormat::Svg => {
            draw_chart(SVGBackend::new(path, CHART_SIZE).into_drawing_area(), layout)
        }
        ImageFormat::Png => {
            draw_chart(BitMapBackend::new(path, CHART_SIZE).into_drawing_area(), layout)
        }
    };
    drawn.map_err(|reason| SimError::Render {
        path: path.to_path_buf(),
        reason,
    })?;
    tracing::info!(path = %path.display(), "wrote trajectory chart");
    Ok(())
}

fn draw_chart<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    layout: &ChartLayout,
) -> Result<(), String> {
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&layout.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..layout.window.x_span, 0f64..layout.window.y_span)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Altitude (m)")
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(LineSeries::new(
            layout.path.iter().copied(),
            TRAJECTORY_COLOR.stroke_width(2),
        ))
        .map_err(|e| e.to_string())?
        .label("Trajectory")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], TRAJECTORY_COLOR));

    chart
        .draw_series(DashedLineSeries::new(
            layout.target_line(),
            10,
            6,
            TARGET_COLOR.stroke_width(2),
        ))
        .map_err(|e| e.to_string())?
        .label("Target")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], TARGET_COLOR));

    chart
        .draw_series(std::iter::once(Circle::new(
            layout.impact,
            8,
            IMPACT_COLOR.filled(),
        )))
        .map_err(|e| e.to_string())?
        .label("Impact")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, IMPACT_COLOR.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ballistics::simulate;

    fn layout_for(target_distance_m: f64) -> ChartLayout {
        let params = LaunchParameters {
            speed_mps: 100.0,
            angle_deg: 45.0,
            target_distance_m,
        };
        ChartLayout::new("Falcon", params, &simulate(params))
    }

    #[test]
    fn picks_backend_from_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("out.SVG")), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path(Path::new("out.png")), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path(Path::new("out")), ImageFormat::Png);
    }

    #[test]
    fn layout_contains_path_target_and_impact() {
        let layout = layout_for(1000.0);

        assert_eq!(layout.title, "Falcon Trajectory Simulation");
        assert_eq!(layout.path.len(), 145);
        assert_eq!(layout.target_x, 1000.0);
        assert!((layout.impact.0 - 1019.37).abs() < 0.01);
        assert!(layout.window.contains(layout.impact.0, 0.0));
        assert!(layout.path.iter().all(|&(x, y)| layout.window.contains(x, y)));
        assert_eq!(layout.target_line()[1].1, layout.window.y_span);
    }

    #[test]
    fn window_reaches_distant_target() {
        let layout = layout_for(5000.0);
        assert!(layout.window.x_span > 5000.0);
    }

    #[test]
    fn renders_svg_chart_with_title() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("falcon.svg");

        render_chart(&layout_for(1000.0), &path).expect("svg chart renders");

        let svg = std::fs::read_to_string(&path).expect("svg written");
        assert!(svg.contains("Falcon Trajectory Simulation"));
        assert!(svg.contains("Distance (m)"));
    }

    #[test]
    fn renders_png_chart() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("falcon.png");

        render_chart(&layout_for(100.0), &path).expect("png chart renders");

        let bytes = std::fs::read(&path).expect("png written");
        assert!(bytes.starts_with(b"\x89PNG"));
    }

    #[test]
    fn unwritable_chart_path_is_a_render_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("falcon.svg");

        let err = render_chart(&layout_for(1000.0), &path).expect_err("directory is absent");
        assert!(matches!(err, SimError::Render { .. }));
    }
}
