use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use missile_sim::core::map::{MapLayout, render_map};
use missile_sim::core::plot::{ChartLayout, render_chart};
use missile_sim::core::report::TrajectoryReport;
use missile_sim::{GeoPoint, LaunchSite, Missile, SimError, TrajectoryResult};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "missile_sim")]
#[command(version)]
#[command(about = "Simulates a ballistic launch and reports range, apex and accuracy", long_about = None)]
struct Cli {
    /// YAML scenario file; command-line values override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Missile name
    #[arg(short, long)]
    name: Option<String>,

    /// Launch speed (m/s)
    #[arg(short = 'v', long)]
    speed: Option<f64>,

    /// Launch angle (degrees, 0-90)
    #[arg(short, long)]
    angle: Option<f64>,

    /// Target distance (m)
    #[arg(short, long)]
    target_distance: Option<f64>,

    /// Target latitude (degrees)
    #[arg(long, allow_hyphen_values = true)]
    target_lat: Option<f64>,

    /// Target longitude (degrees)
    #[arg(long, allow_hyphen_values = true)]
    target_lon: Option<f64>,

    /// Launch site latitude (degrees)
    #[arg(long, allow_hyphen_values = true, requires = "launch_lon")]
    launch_lat: Option<f64>,

    /// Launch site longitude (degrees)
    #[arg(long, allow_hyphen_values = true, requires = "launch_lat")]
    launch_lon: Option<f64>,

    /// Launch site city
    #[arg(long)]
    launch_city: Option<String>,

    /// Launch site region
    #[arg(long)]
    launch_region: Option<String>,

    /// Sampling time step (s)
    #[arg(long)]
    time_step: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Write the trajectory chart (.png or .svg); a timestamped name is used when no path is given
    #[arg(long)]
    plot: Option<Option<PathBuf>>,

    /// Write the launch map (.png or .svg); a timestamped name is used when no path is given
    #[arg(long)]
    map: Option<Option<PathBuf>>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn build_missile(&self) -> Result<Missile, SimError> {
        let mut missile = match &self.config {
            Some(path) => Missile::load(path)?,
            None => Missile::default(),
        };

        if let Some(name) = &self.name {
            missile.name = name.clone();
        }
        if let Some(speed) = self.speed {
            missile.speed_mps = speed;
        }
        if let Some(angle) = self.angle {
            missile.angle_deg = angle;
        }
        if let Some(distance) = self.target_distance {
            missile.target_distance_m = distance;
        }
        if let Some(lat) = self.target_lat {
            missile.target.lat = lat;
        }
        if let Some(lon) = self.target_lon {
            missile.target.lon = lon;
        }
        if let Some(step) = self.time_step {
            missile.time_step_s = step;
        }
        if let (Some(lat), Some(lon)) = (self.launch_lat, self.launch_lon) {
            missile.launch_site = Some(LaunchSite::new(GeoPoint { lat, lon }));
        }
        if let Some(site) = missile.launch_site.as_mut() {
            if let Some(city) = &self.launch_city {
                site.city = city.clone();
            }
            if let Some(region) = &self.launch_region {
                site.region = region.clone();
            }
        }

        Ok(missile)
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    missile: &'a Missile,
    result: &'a TrajectoryResult,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn timestamped_path(missile: &Missile, kind: &str) -> PathBuf {
    let slug: String = missile
        .name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    PathBuf::from(format!(
        "{slug}_{kind}_{}.png",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

fn write_result<W: Write>(
    out: &mut W,
    missile: &Missile,
    result: &TrajectoryResult,
    format: OutputFormat,
) -> Result<(), SimError> {
    let written = match format {
        OutputFormat::Table => {
            let report = TrajectoryReport::new(&missile.name, missile.launch_parameters(), result);
            write!(out, "{report}")
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonOutput { missile, result })?;
            writeln!(out, "{json}")
        }
        OutputFormat::Csv => {
            let mut rows = String::from("distance_m,altitude_m\n");
            for sample in &result.samples {
                rows.push_str(&format!("{:.4},{:.4}\n", sample.distance_m, sample.altitude_m));
            }
            out.write_all(rows.as_bytes())
        }
    };
    written
        .and_then(|()| out.flush())
        .map_err(|source| SimError::Output {
            target: "stdout",
            source,
        })
}

fn run(cli: Cli) -> Result<(), SimError> {
    let missile = cli.build_missile()?;
    tracing::info!(
        name = %missile.name,
        speed_mps = missile.speed_mps,
        angle_deg = missile.angle_deg,
        target_distance_m = missile.target_distance_m,
        "launching"
    );

    let result = missile.simulate()?;
    if result.likely_miss {
        tracing::warn!(
            range_m = result.calculated_range_m,
            target_distance_m = missile.target_distance_m,
            "range misses target by more than 10%"
        );
    }

    write_result(&mut io::stdout().lock(), &missile, &result, cli.output)?;

    if let Some(plot) = &cli.plot {
        let path = plot
            .clone()
            .unwrap_or_else(|| timestamped_path(&missile, "trajectory"));
        let layout = ChartLayout::new(&missile.name, missile.launch_parameters(), &result);
        render_chart(&layout, &path)?;
    }

    if let Some(map) = &cli.map {
        match &missile.launch_site {
            Some(site) => {
                let path = map.clone().unwrap_or_else(|| timestamped_path(&missile, "map"));
                render_map(&MapLayout::new(site, missile.target), &path)?;
            }
            None => tracing::warn!(
                "Could not get launch site coordinates: no launch site configured, skipping map"
            ),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
