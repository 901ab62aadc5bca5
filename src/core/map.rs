use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::core::plot::ImageFormat;
use crate::core::scenario::{GeoPoint, LaunchSite};
use crate::error::SimError;

pub const MAP_SIZE: (u32, u32) = (700, 500);
pub const TARGET_LABEL: &str = "Target Location";

const MIN_HALF_EXTENT_DEG: f64 = 0.5;
const PADDING_RATIO: f64 = 0.2;

const LAUNCH_COLOR: RGBColor = RGBColor(37, 99, 235);
const TARGET_COLOR: RGBColor = RGBColor(220, 38, 38);
const ROUTE_COLOR: RGBColor = RGBColor(22, 163, 74);

/// Launch and target markers on plain lon/lat axes.
#[derive(Clone, Debug, PartialEq)]
pub struct MapLayout {
    pub launch: (f64, f64),
    pub launch_label: String,
    pub target: (f64, f64),
    pub lon_range: Range<f64>,
    pub lat_range: Range<f64>,
}

impl MapLayout {
    pub fn new(site: &LaunchSite, target: GeoPoint) -> Self {
        let launch = (site.location.lon, site.location.lat);
        let target_xy = (target.lon, target.lat);

        Self {
            launch,
            launch_label: site.label(),
            target: target_xy,
            lon_range: padded_range(launch.0, target_xy.0, -180.0, 180.0),
            lat_range: padded_range(launch.1, target_xy.1, -90.0, 90.0),
        }
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, point: (f64, f64)) -> bool {
        (self.lon_range.start..=self.lon_range.end).contains(&point.0)
            && (self.lat_range.start..=self.lat_range.end).contains(&point.1)
    }
}

fn padded_range(a: f64, b: f64, floor: f64, ceil: f64) -> Range<f64> {
    let center = (a + b) * 0.5;
    let half = ((a - b).abs() * 0.5 * (1.0 + PADDING_RATIO)).max(MIN_HALF_EXTENT_DEG);
    (center - half).max(floor)..(center + half).min(ceil)
}

pub fn render_map(layout: &MapLayout, path: &Path) -> Result<(), SimError> {
    let drawn = match ImageFormat::from_path(path) {
        ImageFormat::Svg => draw_map(SVGBackend::new(path, MAP_SIZE).into_drawing_area(), layout),
        ImageFormat::Png => draw_map(BitMapBackend::new(path, MAP_SIZE).into_drawing_area(), layout),
    };
    drawn.map_err(|reason| SimError::Render {
        path: path.to_path_buf(),
        reason,
    })?;
    tracing::info!(path = %path.display(), "wrote launch map");
    Ok(())
}

fn draw_map<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    layout: &MapLayout,
) -> Result<(), String> {
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Launch Map", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(50)
        .build_cartesian_2d(layout.lon_range.clone(), layout.lat_range.clone())
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc("Longitude (deg)")
        .y_desc("Latitude (deg)")
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(LineSeries::new(
            [layout.launch, layout.target],
            ROUTE_COLOR.stroke_width(3),
        ))
        .map_err(|e| e.to_string())?;

    let markers = [
        (layout.launch, layout.launch_label.as_str(), LAUNCH_COLOR),
        (layout.target, TARGET_LABEL, TARGET_COLOR),
    ];
    chart
        .draw_series(markers.iter().map(|&(point, label, color)| {
            EmptyElement::at(point)
                + Circle::new((0, 0), 7, color.filled())
                + Text::new(label.to_string(), (10, -12), ("sans-serif", 15).into_font())
        }))
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(lat: f64, lon: f64) -> LaunchSite {
        LaunchSite {
            location: GeoPoint { lat, lon },
            city: "Chicago".to_string(),
            region: "Illinois".to_string(),
        }
    }

    #[test]
    fn bounds_contain_both_markers() {
        let target = GeoPoint {
            lat: 40.7128,
            lon: -74.0060,
        };
        let layout = MapLayout::new(&site(41.88, -87.63), target);

        assert!(layout.contains(layout.launch));
        assert!(layout.contains(layout.target));
        assert_eq!(layout.launch_label, "Launch Site: Chicago, Illinois");
    }

    #[test]
    fn coincident_points_get_minimum_extent() {
        let target = GeoPoint { lat: 10.0, lon: 20.0 };
        let layout = MapLayout::new(&site(10.0, 20.0), target);

        assert!((layout.lon_range.end - layout.lon_range.start - 1.0).abs() < 1e-9);
        assert!((layout.lat_range.end - layout.lat_range.start - 1.0).abs() < 1e-9);
    }

    #[test]
    fn renders_svg_map_with_labels() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("map.svg");
        let target = GeoPoint {
            lat: 40.7128,
            lon: -74.0060,
        };

        let layout = MapLayout::new(&site(41.88, -87.63), target);
        render_map(&layout, &path).expect("svg map renders");

        let svg = std::fs::read_to_string(&path).expect("svg written");
        assert!(svg.contains(TARGET_LABEL));
        assert!(svg.contains("Launch Site: Chicago, Illinois"));
    }

    #[test]
    fn renders_png_map() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("map.png");
        let target = GeoPoint { lat: 10.0, lon: 20.0 };

        let layout = MapLayout::new(&site(11.0, 21.0), target);
        render_map(&layout, &path).expect("png map renders");

        let bytes = std::fs::read(&path).expect("png written");
        assert!(bytes.starts_with(b"\x89PNG"));
    }

    #[test]
    fn bounds_are_clamped_to_globe() {
        let target = GeoPoint {
            lat: -89.9,
            lon: -179.9,
        };
        let layout = MapLayout::new(&site(89.9, 179.9), target);

        assert_eq!(layout.lon_range, -180.0..180.0);
        assert_eq!(layout.lat_range, -90.0..90.0);
    }
}
