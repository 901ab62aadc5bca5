use serde::Serialize;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Axis extents anchored at the origin, padded and stretched to a fixed aspect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AxisWindow {
    pub x_span: f64,
    pub y_span: f64,
}

impl AxisWindow {
    pub fn fit(raw_max_x: f64, raw_max_y: f64) -> Self {
        Self::fit_with_ratio(raw_max_x, raw_max_y, DISTANCE_TO_HEIGHT_RATIO)
    }

    pub fn fit_with_ratio(raw_max_x: f64, raw_max_y: f64, x_to_y_ratio: f64) -> Self {
        let raw_max_x = finite_or_zero(raw_max_x);
        let raw_max_y = finite_or_zero(raw_max_y);
        let x_pad = raw_max_x.max(1.0) * X_PADDING_RATIO;
        let y_pad = raw_max_y.max(1.0) * Y_PADDING_RATIO;

        let mut x_span = (raw_max_x + x_pad).max(1.0);
        let mut y_span = (raw_max_y + y_pad).max(1.0);

        if x_span / y_span < x_to_y_ratio {
            x_span = y_span * x_to_y_ratio;
        } else {
            y_span = x_span / x_to_y_ratio;
        }

        Self { x_span, y_span }
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.x_span).contains(&x) && (0.0..=self.y_span).contains(&y)
    }

    /// Single-precision spans for screen-space drawing.
    pub fn as_f32(&self) -> (f32, f32) {
        (self.x_span as f32, self.y_span as f32)
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_data_stretches_height() {
        let window = AxisWindow::fit(1000.0, 100.0);

        assert!((window.x_span - 1060.0).abs() < 1e-9);
        assert!((window.y_span - 530.0).abs() < 1e-9);
        assert!(window.contains(1000.0, 100.0));
    }

    #[test]
    fn tall_data_stretches_distance() {
        let window = AxisWindow::fit(100.0, 250.0);

        assert!((window.y_span - 275.0).abs() < 1e-9);
        assert!((window.x_span - 550.0).abs() < 1e-9);
    }

    #[test]
    fn empty_data_keeps_unit_floor() {
        let window = AxisWindow::fit(0.0, f64::NAN);

        assert!((window.x_span / window.y_span - DISTANCE_TO_HEIGHT_RATIO).abs() < 1e-9);
        assert!(window.y_span >= 1.0);
    }

    #[test]
    fn custom_ratio_is_respected() {
        let window = AxisWindow::fit_with_ratio(10.0, 10.0, 1.0);
        assert!((window.x_span - window.y_span).abs() < 1e-9);
    }
}
