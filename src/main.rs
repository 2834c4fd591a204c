//! Overlay demo - replays a scripted measurement over a synthetic feed
//!
//! Two aircraft fly east while the operator snaps to the first, holds the
//! measurement button and drags onto the second. Each frame is printed as
//! text or JSON.

use braa_overlay::algorithms::destination;
use braa_overlay::utils::config::ConfigurationManager;
use braa_overlay::{
    FeedSnapshot, FrameOutput, GeoPoint, OverlayController, PointerButton, SnapshotProvider,
    TrackedObject,
};
use clap::Parser;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "braa-overlay")]
#[command(about = "Replay a bearing/range measurement over a synthetic object feed", long_about = None)]
struct Args {
    /// Overlay configuration file (JSON); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    dump_config: bool,

    /// Number of feed updates to replay
    #[arg(long, default_value = "6")]
    steps: u32,

    /// Emit frames as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

/// Aircraft ground speed in the synthetic feed (m/s)
const GROUND_SPEED_MS: f64 = 220.0;

/// Seconds between synthetic feed updates
const FEED_INTERVAL_S: f64 = 5.0;

fn synthetic_feed(step: u32) -> FeedSnapshot {
    let travelled = f64::from(step) * FEED_INTERVAL_S * GROUND_SPEED_MS;
    let lead = destination(GeoPoint::new(33.50, 36.30), 90.0, travelled);
    let wing = destination(GeoPoint::new(33.52, 36.35), 90.0, travelled);

    FeedSnapshot::from_objects(vec![
        TrackedObject::new(101, lead)
            .with_types(["Air", "FixedWing"])
            .with_heading(90.0)
            .with_altitude(7600.0)
            .with_name("F-16C_50")
            .with_group("Viper 1")
            .with_pilot("Viper 1-1")
            .with_coalition("Allies"),
        TrackedObject::new(102, wing)
            .with_types(["Air", "FixedWing"])
            .with_heading(90.0)
            .with_altitude(8200.0)
            .with_name("F-16C_50")
            .with_group("Viper 1")
            .with_pilot("Maverick")
            .with_coalition("Allies"),
        TrackedObject::new(900, GeoPoint::new(34.0, 36.0))
            .with_types(["Navaid", "Static", "Bullseye"])
            .with_coalition("Allies"),
        TrackedObject::new(300, GeoPoint::new(33.45, 36.25)).with_types(["Ground"]),
    ])
}

fn print_frame(step: u32, frame: &FrameOutput, json: bool) {
    if json {
        match serde_json::to_string(frame) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::error!(error = %e, "failed to serialize frame"),
        }
        return;
    }

    println!("--- frame {} (zoom {}, drag {}) ---", step, frame.zoom, frame.map_drag_enabled);
    for object in &frame.objects {
        let label = object
            .label
            .as_ref()
            .map(|l| l.to_string())
            .unwrap_or_default();
        println!(
            "  #{:<4} {:>9.5},{:>9.5}  {}{}",
            object.id,
            object.position.lat,
            object.position.lon,
            label,
            if object.active { "  [active]" } else { "" }
        );
    }
    if let Some(cursor) = frame.cursor {
        println!("  cursor {:.5},{:.5}", cursor.lat, cursor.lon);
    }
    match &frame.measurement {
        Some(m) => println!("  BRAA {}", m.label),
        None => println!("  BRAA -"),
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = braa_overlay::logging::init_logging(braa_overlay::logging::default_log_level()) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let manager = match &args.config {
        Some(path) => match ConfigurationManager::from_file(path) {
            Ok(manager) => manager,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => ConfigurationManager::new(),
    };

    if args.dump_config {
        match manager.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let mut controller = match OverlayController::new(manager.config().clone()) {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    tracing::info!(region = %manager.config().region.name, steps = args.steps, "replaying scenario");

    let press_step = 1;
    let release_step = args.steps.saturating_sub(1).max(press_step + 1);

    for step in 0..args.steps {
        let feed = synthetic_feed(step);
        let lead = feed.get(101).map(|o| o.position);
        let wing = feed.get(102).map(|o| o.position);

        match step {
            0 => {
                // Hover near the lead with the snap modifier held
                if let Some(lead) = lead {
                    controller.pointer_move(destination(lead, 45.0, 150.0), true, &feed);
                }
                controller.toggle_active(102);
            }
            s if s == press_step => {
                if let Some(lead) = lead {
                    controller.pointer_down(PointerButton::Secondary, lead, true, &feed);
                }
            }
            s if s == release_step => {
                controller.pointer_up(PointerButton::Secondary);
            }
            _ => {
                if let Some(wing) = wing {
                    controller.pointer_move(destination(wing, 200.0, 300.0), true, &feed);
                }
                controller.zoom_changed(controller.viewport().zoom().saturating_add(1));
            }
        }

        print_frame(step, &controller.frame(&feed), args.json);
    }
}
