//! Cost estimate reporting
//!
//! Pure rendering of a `CostBreakdown` into the text report, plus the
//! json-vs-text dispatch used by the `estimate` command. Formatting is
//! cosmetic; all numbers come straight from the breakdown.

use crate::error::Result;
use crate::estimator::CostBreakdown;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use console::style;
use std::fmt::Write;

/// Print an estimate in the requested output format
pub fn print_estimate(breakdown: &CostBreakdown, output_format: &str) -> Result<()> {
    if output_format == "json" {
        println!("{}", serde_json::to_string_pretty(breakdown)?);
        return Ok(());
    }

    println!("{}", render(breakdown));

    let savings = &breakdown.savings_vs_onpremise;
    if savings.monthly < 0.0 {
        println!(
            "{} workload costs ${:.2}/month more than the on-premise baseline",
            style("NOTE:").yellow().bold(),
            -savings.monthly
        );
    }

    Ok(())
}

/// Render the full text report
pub fn render(breakdown: &CostBreakdown) -> String {
    let mut out = String::new();
    let cfg = &breakdown.configuration;

    let _ = writeln!(out, "{}", "=".repeat(70));
    let _ = writeln!(out, "AWS BATCH COST ESTIMATE");
    let _ = writeln!(out, "{}", "=".repeat(70));
    let _ = writeln!(out);

    let _ = writeln!(out, "CONFIGURATION:");
    let _ = writeln!(out, "  instance type:  {}", cfg.instance_type);
    let _ = writeln!(out, "  vcpu:           {}", cfg.vcpu);
    let _ = writeln!(out, "  memory:         {} MB", cfg.memory_mb);
    let _ = writeln!(out, "  jobs per day:   {}", cfg.jobs_per_day);
    let _ = writeln!(out, "  duration:       {} minutes", cfg.duration_minutes);
    let _ = writeln!(out, "  spot instances: {}", if cfg.use_spot { "yes" } else { "no" });
    let _ = writeln!(out, "  vpc endpoints:  {}", if cfg.use_vpc_endpoints { "yes" } else { "no" });
    let _ = writeln!(out);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Component", "Monthly", "Annual"]);
    for (name, pair) in [
        ("Compute", &breakdown.compute),
        ("Storage", &breakdown.storage),
        ("Network", &breakdown.network),
        ("TOTAL", &breakdown.total),
    ] {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("${:.2}", pair.monthly)),
            Cell::new(format!("${:.2}", pair.annual)),
        ]);
    }
    let _ = writeln!(out, "{}", table);
    let _ = writeln!(out);

    let savings = &breakdown.savings_vs_onpremise;
    let _ = writeln!(out, "SAVINGS vs ON-PREMISE:");
    let _ = writeln!(out, "  monthly:    ${:.2}", savings.monthly);
    let _ = writeln!(out, "  annual:     ${:.2}", savings.annual);
    let _ = writeln!(out, "  percentage: {:.1}%", savings.percentage);

    out
}
