use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use ek_sim::{MotionSystem, SimConfig, SimEventKind, Simulation, TraceSystem};

pub fn run(config: SimConfig, frames: u64, trace: &Path, verbose: bool) -> Result<(), String> {
    let viewport = config.viewport().map_err(|e| e.to_string())?;
    let every = config.trace_every;
    let (width, height) = (config.width, config.height);
    let (seed, particles) = (config.seed, config.particles);

    let mut sim =
        Simulation::new(config).map_err(|e| format!("simulation setup failed: {e}"))?;
    sim.add_system(MotionSystem::new(viewport));
    sim.add_system(TraceSystem::create(trace, every).map_err(|e| {
        format!("cannot open trace destination {}: {e}", trace.display())
    })?);

    sim.run(frames)
        .map_err(|e| format!("simulation error: {e}"))?;

    let written = match sim.get_system_mut::<TraceSystem>() {
        Some(tracer) => {
            tracer
                .flush()
                .map_err(|e| format!("flushing trace failed: {e}"))?;
            tracer.records_written()
        }
        None => 0,
    };

    // Header
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({frames} frames, seed={seed}, {particles} particles, {width}x{height})")
            .dimmed()
    );
    println!(
        "  {} bounces recorded, {} trace records -> {}",
        sim.events().len(),
        written,
        trace.display()
    );
    println!();

    if verbose {
        println!("  {}", "Bounce Log".bold().underline());
        println!();
        for event in sim.events().events() {
            let frame_label = format!("[frame {:>4}]", event.frame).dimmed();
            let desc = colorize_event(&event.kind, &event.description);
            println!("  {frame_label} {desc}");
        }
        if sim.events().is_empty() {
            println!("  {}", "(no bounces)".dimmed());
        }
        println!();
    }

    // Final particle state
    println!("  {}", "Final State".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Particle", "X", "Y", "Vx", "Vy", "Speed", "Bounces"]);

    for p in sim.swarm().iter() {
        table.add_row(vec![
            p.label.to_string(),
            format!("{:.2}", p.position.x),
            format!("{:.2}", p.position.y),
            format!("{:.2}", p.velocity.x),
            format!("{:.2}", p.velocity.y),
            format!("{:.2}", p.speed()),
            sim.events().events_for(p.label).len().to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn colorize_event(kind: &SimEventKind, description: &str) -> colored::ColoredString {
    match kind {
        SimEventKind::WallBounce { .. } => description.blue(),
        SimEventKind::CornerBounce { .. } => description.yellow().bold(),
    }
}
