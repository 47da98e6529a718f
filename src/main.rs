//! Pan/tilt face tracking daemon.

use anyhow::Result;
use clap::Parser;
use face_tracker::{
    app::TrackerApp,
    config::Config,
    detection::{SyntheticTarget, TargetSource},
    servo::{Actuator, PwmServo, ServoLimits, SimulatedServo},
};
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Force the simulated servo backend
    #[arg(long)]
    sim: bool,

    /// Stop after this many frames (default: run until interrupted)
    #[arg(long)]
    frames: Option<u64>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Pan/Tilt Face Tracker");

    // Load configuration if provided
    let config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    config.validate()?;

    let servo = build_servo(&config, args.sim);
    let source: Box<dyn TargetSource> =
        Box::new(SyntheticTarget::new(config.camera.width, config.camera.height));

    let mut app = TrackerApp::new(config, source, servo);
    app.run(args.frames)?;

    Ok(())
}

/// Select the servo backend, falling back to simulation when no PWM chip is
/// reachable
fn build_servo(config: &Config, force_sim: bool) -> Box<dyn Actuator> {
    if !force_sim {
        match PwmServo::open(&config.servo) {
            Ok(servo) => {
                info!("PWM servo backend ready");
                return Box::new(servo);
            }
            Err(e) => warn!("PWM backend unavailable: {e}"),
        }
    }

    warn!("Running with the simulated servo; no hardware will move");
    Box::new(SimulatedServo::new(ServoLimits::from_config(&config.servo)))
}
