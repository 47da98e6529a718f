//! Interactive servo calibration.
//!
//! Drives each axis manually so the mechanical range can be verified before
//! running the tracker.

use anyhow::Result;
use clap::Parser;
use face_tracker::{
    config::Config,
    servo::{Actuator, PwmServo, ServoLimits, SimulatedServo},
};
use log::{info, warn};
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive pan/tilt servo calibration")]
struct Args {
    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Force the simulated servo backend
    #[arg(long)]
    sim: bool,
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let args = Args::parse();

    let config = if let Some(config_path) = &args.config {
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

    let mut servo = build_servo(&config, args.sim);
    servo.center()?;
    info!("Servo at rest pose");

    println!("Commands:");
    println!("  p <angle>  set pan ({:.0}-{:.0})", config.servo.pan_min, config.servo.pan_max);
    println!("  t <angle>  set tilt ({:.0}-{:.0})", config.servo.tilt_min, config.servo.tilt_max);
    println!("  c          return to center");
    println!("  q          quit");

    let stdin = io::stdin();
    print_prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let cmd = line.trim();

        if cmd == "q" {
            break;
        } else if cmd == "c" {
            servo.center()?;
            println!("Centered");
        } else if let Some(value) = cmd.strip_prefix("p ") {
            match value.trim().parse::<f64>() {
                Ok(angle) => {
                    let (_, tilt) = servo.get_position();
                    servo.set_position(angle, tilt)?;
                    println!("Pan: {:.1}°", servo.get_position().0);
                }
                Err(_) => println!("Invalid angle"),
            }
        } else if let Some(value) = cmd.strip_prefix("t ") {
            match value.trim().parse::<f64>() {
                Ok(angle) => {
                    let (pan, _) = servo.get_position();
                    servo.set_position(pan, angle)?;
                    println!("Tilt: {:.1}°", servo.get_position().1);
                }
                Err(_) => println!("Invalid angle"),
            }
        } else {
            let (pan, tilt) = servo.get_position();
            println!("Position: pan={pan:.1}°, tilt={tilt:.1}°");
        }

        print_prompt()?;
    }

    servo.center()?;
    info!("Calibration finished");
    Ok(())
}

fn print_prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn build_servo(config: &Config, force_sim: bool) -> Box<dyn Actuator> {
    if !force_sim {
        match PwmServo::open(&config.servo) {
            Ok(servo) => return Box::new(servo),
            Err(e) => warn!("PWM backend unavailable: {e}"),
        }
    }

    warn!("Running with the simulated servo; no hardware will move");
    Box::new(SimulatedServo::new(ServoLimits::from_config(&config.servo)))
}
