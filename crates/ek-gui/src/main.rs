//! Windowed animation for Elektron — macroquad entry point.
//!
//! Each frame steps the simulation once, then draws every particle as a
//! filled point, a circular outline, and its letter label. The trace sink
//! keeps recording on the same frame cadence as the headless runner.

use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::prelude::*;

use ek_sim::{MotionSystem, SimConfig, Simulation, TraceSystem};

/// Window width in pixels (also the viewport width in position units).
const WINDOW_W: f64 = 800.0;
/// Window height in pixels (also the viewport height in position units).
const WINDOW_H: f64 = 600.0;
/// Radius of the outline drawn around each particle.
const ELECTRON_RADIUS: f32 = 10.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "Elektron".to_owned(),
        window_width: WINDOW_W as i32,
        window_height: WINDOW_H as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Find the value following `--flag` in the raw argument list.
fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].clone())
}

/// Seed for runs without `--seed`: varies per launch, purely cosmetic.
fn launch_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

#[macroquad::main(window_conf)]
async fn main() {
    // Parse CLI args: --seed <n>, --trace <path>
    let args: Vec<String> = std::env::args().collect();
    let seed = match arg_value(&args, "--seed").map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("error: bad --seed value: {e}");
            return;
        }
        None => launch_seed(),
    };
    let trace_path =
        arg_value(&args, "--trace").unwrap_or_else(|| "electron_data.txt".to_owned());

    let config = SimConfig::default()
        .with_bounds(WINDOW_W, WINDOW_H)
        .with_seed(seed)
        .with_max_events(1000);
    let every = config.trace_every;
    let viewport = match config.viewport() {
        Ok(vp) => vp,
        Err(e) => {
            eprintln!("error: {e}");
            return;
        }
    };

    let mut sim = match Simulation::new(config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("error: {e}");
            return;
        }
    };
    sim.add_system(MotionSystem::new(viewport));
    match TraceSystem::create(&trace_path, every) {
        Ok(tracer) => sim.add_system(tracer),
        Err(e) => {
            eprintln!("error: cannot open trace destination {trace_path}: {e}");
            return;
        }
    }

    let mut paused = false;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Space) {
            paused = !paused;
        }

        if !paused && let Err(e) = sim.step() {
            eprintln!("error: {e}");
            break;
        }

        clear_background(BLACK);

        for p in sim.swarm().iter() {
            let (x, y) = (p.position.x as f32, p.position.y as f32);
            draw_circle(x, y, 2.0, BLUE);
            draw_circle_lines(x, y, ELECTRON_RADIUS, 1.0, BLUE);
            draw_text(&p.label.to_string(), x - 4.0, y + 4.0, 16.0, SKYBLUE);
        }

        // Status bar
        let status = format!(
            "frame {}  bounces {}  seed {}  [space] pause  [esc] quit",
            sim.current_frame(),
            sim.events().len(),
            seed
        );
        draw_text(&status, 8.0, WINDOW_H as f32 - 10.0, 16.0, GRAY);

        next_frame().await;
    }
}
