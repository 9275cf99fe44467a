use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use ek_sim::analysis::summarize;
use ek_sim::trace::read_records;

pub fn run(trace: &Path, particles: usize, json: bool) -> Result<(), String> {
    let records = read_records(trace)
        .map_err(|e| format!("cannot read trace {}: {e}", trace.display()))?;
    let summary = summarize(&records, particles).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Trace".bold(),
        format!(
            "{} ({} records, stride {})",
            trace.display(),
            summary.records,
            summary.particles
        )
        .dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Logged frames".to_string(), summary.frames.to_string()]);
    table.add_row(vec!["Mean vx".to_string(), format!("{:.4}", summary.mean_vx)]);
    table.add_row(vec!["Mean vy".to_string(), format!("{:.4}", summary.mean_vy)]);
    table.add_row(vec![
        "Mean speed".to_string(),
        format!("{:.4}", summary.mean_speed),
    ]);
    table.add_row(vec![
        "Total distance".to_string(),
        format!("{:.2}", summary.total_distance),
    ]);

    println!("{table}");
    Ok(())
}
