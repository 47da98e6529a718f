//! Frame loop wiring the target source, tracker, and servo backend.

use crate::{
    config::Config,
    detection::TargetSource,
    error::Result,
    servo::Actuator,
    tracker::FaceTracker,
};
use log::info;
use std::time::{Duration, Instant};

/// Top-level application state
pub struct TrackerApp {
    config: Config,
    source: Box<dyn TargetSource>,
    tracker: FaceTracker<Box<dyn Actuator>>,
}

impl TrackerApp {
    /// Wire a target source and servo backend into a tracker
    pub fn new(config: Config, source: Box<dyn TargetSource>, servo: Box<dyn Actuator>) -> Self {
        let tracker = FaceTracker::new(servo, &config);
        Self {
            config,
            source,
            tracker,
        }
    }

    /// Run the control loop, forever or for a bounded number of frames
    pub fn run(&mut self, max_frames: Option<u64>) -> Result<()> {
        let frame_interval = Duration::from_secs_f64(1.0 / f64::from(self.config.camera.fps));
        let start = Instant::now();
        let mut frame_count: u64 = 0;
        let mut was_tracking = self.tracker.is_tracking();

        info!("Tracking started ({} fps target)", self.config.camera.fps);
        loop {
            let frame_start = Instant::now();

            let target = self.source.next_target();
            self.tracker.update(target)?;

            // Report phase transitions as they happen
            let tracking = self.tracker.is_tracking();
            if tracking != was_tracking {
                let status = self.tracker.status();
                if tracking {
                    info!("Target acquired at pan={:.1}°, tilt={:.1}°", status.pan, status.tilt);
                } else {
                    info!("Searching for target");
                }
                was_tracking = tracking;
            }

            frame_count += 1;
            if frame_count % u64::from(self.config.camera.fps) == 0 {
                let status = self.tracker.status();
                let fps = frame_count as f64 / start.elapsed().as_secs_f64();
                info!(
                    "frame {frame_count}: {} pan={:.1}° tilt={:.1}° ({fps:.1} fps)",
                    if status.tracking { "TRACKING" } else { "SEARCHING" },
                    status.pan,
                    status.tilt,
                );
            }

            if let Some(max) = max_frames {
                if frame_count >= max {
                    info!("Frame budget reached ({max} frames)");
                    break;
                }
            }

            // Pace to the configured frame rate
            let elapsed = frame_start.elapsed();
            if elapsed < frame_interval {
                std::thread::sleep(frame_interval - elapsed);
            }
        }

        info!("Tracking stopped after {frame_count} frames");
        Ok(())
    }

    /// The tracker driving the loop
    pub fn tracker(&self) -> &FaceTracker<Box<dyn Actuator>> {
        &self.tracker
    }
}
