//! Check command implementation
//!
//! Reports the effective configuration after file loading, environment
//! overrides and validation.

use std::path::Path;

use tracing::info;

use crate::config::LabConfig;
use crate::presenter::{Cell, Report};
use crate::Result;

/// Run the check command
pub fn run(config: &LabConfig, source: Option<&Path>) -> Result<Vec<Report>> {
    info!("Checking configuration...");

    let source = source.map_or_else(
        || "built-in defaults".to_string(),
        |path| path.display().to_string(),
    );
    let d = &config.derivative;
    let i = &config.integral;
    let h = &config.harmonic;
    let s = &config.series;

    let entries: Vec<(&str, String)> = vec![
        ("source", source),
        ("log_level", config.log_level.clone()),
        ("format", format!("{:?}", config.format).to_lowercase()),
        ("derivative.function", format!("{:?}", d.function).to_lowercase()),
        ("derivative.point", d.point.to_string()),
        (
            "derivative.steps",
            format!("1e{} .. 1e{} ({} points)", d.start_exp, d.end_exp, d.count),
        ),
        ("integral.function", format!("{:?}", i.function).to_lowercase()),
        ("integral.interval", format!("[{}, {}]", i.lower, i.upper)),
        ("integral.counts", format!("{:?}", i.counts)),
        ("integral.time_budget_ms", i.time_budget_ms.to_string()),
        ("harmonic.precision", format!("{:?}", h.precision).to_lowercase()),
        ("harmonic.counts", format!("{:?}", h.counts)),
        (
            "harmonic.grid",
            format!("1e{} .. 1e{} ({} points)", h.grid.start_exp, h.grid.end_exp, h.grid.count),
        ),
        ("series.counts", format!("{:?}", s.counts)),
        (
            "series.grid",
            format!("1e{} .. 1e{} ({} points)", s.grid.start_exp, s.grid.end_exp, s.grid.count),
        ),
    ];

    let mut report = Report::new("configuration", &["key", "value"]);
    for (key, value) in entries {
        report.push_row(vec![Cell::text(key), Cell::Text(value)]);
    }

    info!("Configuration is valid");
    Ok(vec![report])
}
