//! Output formatting: table, JSON, plain.
//!
//! Table uses `tabled`, structured formats use serde, plain emits one
//! hostname per line.

use std::io::{self, Write};
use std::time::Duration;

use tabled::{Table, Tabled, settings::Style};

use uispond_core::AccessPoint;

use crate::cli::OutputFormat;

// ── Table row ────────────────────────────────────────────────────────

/// Table projection of an `AccessPoint`.
#[derive(Tabled)]
pub struct ApRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "NEIGHBOUR")]
    neighbour: String,
    #[tabled(rename = "LAT")]
    latitude: String,
    #[tabled(rename = "LON")]
    longitude: String,
    #[tabled(rename = "MODEL")]
    model: String,
    #[tabled(rename = "FIRMWARE")]
    firmware: String,
    #[tabled(rename = "UPTIME")]
    uptime: String,
}

impl From<&AccessPoint> for ApRow {
    fn from(ap: &AccessPoint) -> Self {
        Self {
            name: ap.name.clone(),
            mac: ap.mac.to_string(),
            neighbour: ap.neighbour.clone(),
            latitude: format!("{:.5}", ap.latitude),
            longitude: format!("{:.5}", ap.longitude),
            model: ap.model.clone(),
            firmware: ap.firmware.clone(),
            uptime: format_uptime(ap.uptime_secs),
        }
    }
}

fn format_uptime(secs: u64) -> String {
    if secs == 0 {
        "-".into()
    } else {
        humantime::format_duration(Duration::from_secs(secs)).to_string()
    }
}

// ── Renderers ────────────────────────────────────────────────────────

/// Render the collection in the chosen format.
pub fn render(format: OutputFormat, access_points: &[AccessPoint]) -> String {
    match format {
        OutputFormat::Table => {
            let rows: Vec<ApRow> = access_points.iter().map(ApRow::from).collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(access_points).expect("serialization should not fail")
        }
        OutputFormat::JsonCompact => {
            serde_json::to_string(access_points).expect("serialization should not fail")
        }
        OutputFormat::Plain => access_points
            .iter()
            .map(|ap| ap.name.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Print rendered output to stdout.
pub fn print_output(output: &str) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}
