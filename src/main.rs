//! tracklog cli - FlightAware KML track log reader

use std::fs;
use std::io::{self, BufWriter};

use argopt::{cmd_group, subcmd};
use csv::Writer;
use log::{debug, info};
use serde::Deserialize;

use tracklog::{GpxGenerator, Namespaces, TrackLog, TrackSegmentOptions};

/// CLI of tracklog - Read a FlightAware track log KML file
#[cmd_group(commands = [show, export, samples])]
fn main() -> Result<(), String> {}

/// Print the flight summary and the whole record as YAML
#[subcmd]
fn show(
    /// FlightAware KML track log
    kml_path: String,
    /// Namespaces and segments configuration. Default: .tracklog.yaml, ~/.tracklog.yaml
    #[opt(long)]
    config: Option<String>,
) -> Result<(), String> {
    let (log, _) = open(&kml_path, config)?;

    println!("{}", log);
    let yaml = serde_yaml::to_string(&log)
        .map_err(|e| format!("Failed on serialize the track log: {}", e))?;
    print!("{}", yaml);

    Ok(())
}

/// Write the flight as GPX to stdout
#[subcmd]
fn export(
    /// FlightAware KML track log
    kml_path: String,
    /// Namespaces and segments configuration. Default: .tracklog.yaml, ~/.tracklog.yaml
    #[opt(long)]
    config: Option<String>,
) -> Result<(), String> {
    let (log, op) = open(&kml_path, config)?;

    let doc = GpxGenerator::from_tracklog(&log, &op)
        .and_then(|g| g.generate())
        .map_err(|e| e.to_string())?;

    let writer = BufWriter::new(io::stdout().lock());
    gpx::write(&doc, writer).map_err(|e| e.to_string())?;

    Ok(())
}

/// Write the track samples as CSV to stdout
#[subcmd]
fn samples(
    /// FlightAware KML track log
    kml_path: String,
    /// Namespaces and segments configuration. Default: .tracklog.yaml, ~/.tracklog.yaml
    #[opt(long)]
    config: Option<String>,
) -> Result<(), String> {
    let (log, _) = open(&kml_path, config)?;
    let positions = log.positions().map_err(|e| e.to_string())?;

    let mut wtr = Writer::from_writer(io::stdout().lock());
    wtr.write_record(["time", "longitude", "latitude", "altitude"])
        .map_err(|e| format!("Failed on write the header: {}", e))?;

    for (sample, pos) in log.samples().zip(positions) {
        let altitude = pos.altitude.map(|a| a.to_string()).unwrap_or_default();
        wtr.write_record([
            sample.time.to_string(),
            pos.coordinates.x().to_string(),
            pos.coordinates.y().to_string(),
            altitude,
        ])
        .map_err(|e| format!("Failed on write some row: {}", e))?;
    }
    wtr.flush().map_err(|e| e.to_string())?;

    Ok(())
}

/// Set up logging and read the track log with the current config
fn open(kml_path: &str, config: Option<String>) -> Result<(TrackLog, TrackSegmentOptions), String> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let conf = load_configs(config);
    debug!("using {:?}", conf);

    let log = TrackLog::open_with(kml_path, &conf.namespaces).map_err(|e| e.to_string())?;
    info!("{} read from {}", log, kml_path);

    Ok((log, conf.segments))
}

/// Load the current config
fn load_configs(provided: Option<String>) -> Configs {
    let mut options = vec![];

    if let Some(sprovided) = provided {
        options.push(sprovided);
    }

    options.push(".tracklog.yaml".to_string());

    if let Some(home) = dirs::home_dir() {
        if let Some(shome) = home.to_str() {
            options.push(format!("{}/.tracklog.yaml", shome));
        }
    }

    let mut yaml: Option<String> = None;
    for fi in options {
        if let Ok(s) = fs::read_to_string(&fi) {
            debug!("config found at {}", fi);
            yaml = Some(s);
            break;
        }
    }

    if let Some(s) = yaml {
        match serde_yaml::from_str::<Configs>(&s) {
            Ok(conf) => return conf,
            Err(e) => log::warn!("Ignoring invalid config: {}", e),
        }
    }

    Configs::default()
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct Configs {
    pub namespaces: Namespaces,
    pub segments: TrackSegmentOptions,
}

#[test]
fn parse_configs() -> Result<(), String> {
    let yaml = "\nnamespaces: {}\nsegments: {}";

    let conf: Configs = serde_yaml::from_str(&yaml).map_err(|e| e.to_string())?;

    assert_eq!(
        Configs {
            namespaces: Namespaces::default(),
            segments: TrackSegmentOptions {
                max_duration: 300,
                vw_tolerance: None
            }
        },
        conf
    );

    let yaml = "\nnamespaces:\n  default: http://earth.google.com/kml/2.1\nsegments:\n  max_duration: 600\n  vw_tolerance: 0.0001";

    let conf: Configs = serde_yaml::from_str(&yaml).map_err(|e| e.to_string())?;

    assert_eq!(
        Configs {
            namespaces: Namespaces::default().with("default", "http://earth.google.com/kml/2.1"),
            segments: TrackSegmentOptions {
                max_duration: 600,
                vw_tolerance: Some(0.0001)
            }
        },
        conf
    );

    let conf: Configs = serde_yaml::from_str("segments:\n  max_duration: 60").map_err(|e| e.to_string())?;
    assert_eq!(Namespaces::default(), conf.namespaces);
    assert_eq!(60, conf.segments.max_duration);

    Ok(())
}
