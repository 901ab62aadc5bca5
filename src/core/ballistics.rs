use serde::Serialize;

pub const EARTH_GRAVITY_MPS2: f64 = 9.81;
pub const DEFAULT_TIME_STEP_S: f64 = 0.1;

/// Relative range error above which a shot is flagged as a likely miss.
pub const MISS_TOLERANCE_RATIO: f64 = 0.1;

/// Upper bound on sampling steps per trajectory.
pub const MAX_SAMPLES: usize = 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LaunchParameters {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub target_distance_m: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub distance_m: f64,
    pub altitude_m: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrajectoryResult {
    pub time_of_flight_s: f64,
    pub max_height_m: f64,
    pub calculated_range_m: f64,
    /// `None` when the target distance is zero.
    pub accuracy_percent: Option<f64>,
    pub likely_miss: bool,
    pub samples: Vec<TrajectorySample>,
}

pub fn velocity_components(params: LaunchParameters) -> (f64, f64) {
    let theta = params.angle_deg.to_radians();
    let vx = params.speed_mps * theta.cos();
    let vy = params.speed_mps * theta.sin();
    (vx, vy)
}

pub fn trajectory_at_time(params: LaunchParameters, time_s: f64) -> TrajectorySample {
    let (vx, vy) = velocity_components(params);
    TrajectorySample {
        distance_m: vx * time_s,
        altitude_m: (vy * time_s) - (0.5 * EARTH_GRAVITY_MPS2 * time_s * time_s),
    }
}

pub fn time_of_flight(params: LaunchParameters) -> f64 {
    let (_, vy) = velocity_components(params);
    if vy > 0.0 {
        (2.0 * vy) / EARTH_GRAVITY_MPS2
    } else {
        0.0
    }
}

pub fn max_height(params: LaunchParameters) -> f64 {
    let (_, vy) = velocity_components(params);
    if vy > 0.0 {
        (vy * vy) / (2.0 * EARTH_GRAVITY_MPS2)
    } else {
        0.0
    }
}

pub fn calculated_range(params: LaunchParameters) -> f64 {
    if params.speed_mps > 0.0 {
        let theta = params.angle_deg.to_radians();
        (params.speed_mps * params.speed_mps * (2.0 * theta).sin()) / EARTH_GRAVITY_MPS2
    } else {
        0.0
    }
}

pub fn accuracy_percent(calculated_range_m: f64, target_distance_m: f64) -> Option<f64> {
    if target_distance_m > 0.0 {
        let error_pct = (calculated_range_m - target_distance_m).abs() / target_distance_m * 100.0;
        Some(100.0 - error_pct)
    } else {
        None
    }
}

pub fn is_likely_miss(calculated_range_m: f64, target_distance_m: f64) -> bool {
    target_distance_m > 0.0
        && (calculated_range_m - target_distance_m).abs() > target_distance_m * MISS_TOLERANCE_RATIO
}

/// Number of steps `floor(time_of_flight / time_step)` the sampler would take.
pub fn sampling_steps(time_of_flight_s: f64, time_step_s: f64) -> f64 {
    (time_of_flight_s / time_step_s).floor()
}

/// Samples `t = i * time_step` up to and including `time_of_flight_s`, stopping
/// before the first point below ground. The last point is not interpolated to
/// the exact impact. At most `MAX_SAMPLES + 1` points are produced.
pub fn sample_trajectory(
    params: LaunchParameters,
    time_of_flight_s: f64,
    time_step_s: f64,
) -> Vec<TrajectorySample> {
    if !(time_of_flight_s.is_finite() && time_of_flight_s > 0.0) {
        return Vec::new();
    }

    let last_step =
        sampling_steps(time_of_flight_s, time_step_s).min(MAX_SAMPLES as f64) as usize;
    (0..=last_step)
        .map(|i| trajectory_at_time(params, i as f64 * time_step_s))
        .take_while(|sample| sample.altitude_m >= 0.0)
        .collect()
}

pub fn simulate(params: LaunchParameters) -> TrajectoryResult {
    simulate_with_step(params, DEFAULT_TIME_STEP_S)
}

/// A non-positive or non-finite `time_step_s` falls back to [`DEFAULT_TIME_STEP_S`].
pub fn simulate_with_step(params: LaunchParameters, time_step_s: f64) -> TrajectoryResult {
    let time_step_s = if time_step_s.is_finite() && time_step_s > 0.0 {
        time_step_s
    } else {
        DEFAULT_TIME_STEP_S
    };

    let time_of_flight_s = time_of_flight(params);
    let calculated_range_m = calculated_range(params);

    TrajectoryResult {
        time_of_flight_s,
        max_height_m: max_height(params),
        calculated_range_m,
        accuracy_percent: accuracy_percent(calculated_range_m, params.target_distance_m),
        likely_miss: is_likely_miss(calculated_range_m, params.target_distance_m),
        samples: sample_trajectory(params, time_of_flight_s, time_step_s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    fn launch(speed_mps: f64, angle_deg: f64, target_distance_m: f64) -> LaunchParameters {
        LaunchParameters {
            speed_mps,
            angle_deg,
            target_distance_m,
        }
    }

    #[test]
    fn computes_known_values_at_forty_five_degrees() {
        let result = simulate(launch(100.0, 45.0, 1000.0));

        assert_close(result.calculated_range_m, 1019.37, 0.01);
        assert_close(result.max_height_m, 254.84, 0.01);
        assert_close(result.time_of_flight_s, 14.416, 0.001);
    }

    #[test]
    fn flat_launch_has_no_flight() {
        let result = simulate(launch(100.0, 0.0, 500.0));

        assert_eq!(result.time_of_flight_s, 0.0);
        assert_eq!(result.max_height_m, 0.0);
        assert_close(result.calculated_range_m, 0.0, 1e-9);
        assert!(result.samples.is_empty());
    }

    #[test]
    fn zero_speed_yields_zeroed_result() {
        let result = simulate(launch(0.0, 30.0, 100.0));

        assert_eq!(result.calculated_range_m, 0.0);
        assert_eq!(result.time_of_flight_s, 0.0);
        assert_eq!(result.max_height_m, 0.0);
        assert!(result.samples.is_empty());
        assert_eq!(result.accuracy_percent, Some(0.0));
    }

    #[test]
    fn negative_speed_is_treated_as_degenerate() {
        let result = simulate(launch(-50.0, 45.0, 100.0));

        assert_eq!(result.calculated_range_m, 0.0);
        assert_eq!(result.time_of_flight_s, 0.0);
        assert!(result.samples.is_empty());
    }

    #[test]
    fn zero_target_distance_skips_accuracy() {
        let result = simulate(launch(100.0, 45.0, 0.0));

        assert_eq!(result.accuracy_percent, None);
        assert!(!result.likely_miss);
    }

    #[test]
    fn flags_miss_beyond_ten_percent() {
        let near = simulate(launch(100.0, 45.0, 1000.0));
        assert!(!near.likely_miss);
        assert_close(near.accuracy_percent.unwrap_or_default(), 98.06, 0.01);

        let far = simulate(launch(100.0, 45.0, 100.0));
        assert!(far.likely_miss);
        assert_close(far.accuracy_percent.unwrap_or_default(), -819.37, 0.01);
    }

    #[test]
    fn miss_threshold_is_exclusive() {
        assert!(!is_likely_miss(110.0, 100.0));
        assert!(is_likely_miss(110.5, 100.0));
        assert!(is_likely_miss(89.5, 100.0));
    }

    #[test]
    fn samples_start_at_origin_and_stay_above_ground() {
        let result = simulate(launch(100.0, 45.0, 1000.0));

        assert_eq!(result.samples.len(), 145);
        let first = result.samples[0];
        assert_eq!(first.distance_m, 0.0);
        assert_eq!(first.altitude_m, 0.0);
        assert!(result.samples.iter().all(|s| s.altitude_m >= 0.0));

        let last = result.samples[result.samples.len() - 1];
        assert!(last.distance_m < result.calculated_range_m);
        assert!(last.altitude_m > 0.0);
    }

    #[test]
    fn samples_advance_by_fixed_distance() {
        let params = launch(60.0, 30.0, 300.0);
        let result = simulate_with_step(params, 0.25);
        let (vx, _) = velocity_components(params);

        for pair in result.samples.windows(2) {
            assert_close(pair[1].distance_m - pair[0].distance_m, 0.25 * vx, 1e-9);
        }
    }

    #[test]
    fn invalid_time_step_uses_default() {
        let params = launch(100.0, 45.0, 1000.0);

        assert_eq!(simulate_with_step(params, 0.0), simulate(params));
        assert_eq!(simulate_with_step(params, -1.0), simulate(params));
        assert_eq!(simulate_with_step(params, f64::NAN), simulate(params));
    }

    #[test]
    fn non_finite_speed_produces_no_samples() {
        let result = simulate(launch(f64::NAN, 45.0, 100.0));
        assert!(result.samples.is_empty());
        assert_eq!(result.time_of_flight_s, 0.0);

        let samples = sample_trajectory(launch(10.0, 45.0, 0.0), f64::INFINITY, 0.1);
        assert!(samples.is_empty());
    }

    #[test]
    fn sampling_is_capped_for_extreme_inputs() {
        let params = launch(1e200, 45.0, 0.0);
        let samples = sample_trajectory(params, time_of_flight(params), 0.1);
        assert!(samples.len() <= MAX_SAMPLES + 1);

        let params = launch(100.0, 45.0, 0.0);
        let samples = sample_trajectory(params, time_of_flight(params), 1e-9);
        assert_eq!(samples.len(), MAX_SAMPLES + 1);
    }

    #[test]
    fn peak_sample_is_near_max_height() {
        let result = simulate(launch(100.0, 45.0, 1000.0));
        let peak = result
            .samples
            .iter()
            .copied()
            .max_by(|a, b| a.altitude_m.total_cmp(&b.altitude_m))
            .expect("trajectory has samples");

        assert!(peak.altitude_m <= result.max_height_m);
        assert_close(peak.altitude_m, result.max_height_m, 0.1);
    }
}
