use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::host::Host;
use crate::model::HealthError;

use super::component::HealthComponent;

const COLUMNS: [&str; 5] = ["name", "alive", "health", "minHealth", "maxHealth"];

/// Point-in-time view of one entity's health, for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    pub name: String,
    pub alive: bool,
    pub health: f64,
    #[serde(with = "crate::model::bound::lower")]
    pub min_health: f64,
    #[serde(with = "crate::model::bound::upper")]
    pub max_health: f64,
}

impl HealthSnapshot {
    pub fn capture<H: Host + ?Sized>(host: &H) -> Result<Self, HealthError> {
        Ok(Self {
            name: host.name().into_owned(),
            alive: host.is_alive()?,
            health: host.health()?,
            min_health: host.min_health()?,
            max_health: host.max_health()?,
        })
    }

    fn cells(&self) -> [String; 5] {
        [
            self.name.clone(),
            self.alive.to_string(),
            self.health.to_string(),
            self.min_health.to_string(),
            self.max_health.to_string(),
        ]
    }
}

/// Snapshot every entity, in order.
pub fn dump<H: Host>(objs: &[H]) -> Result<Vec<HealthSnapshot>, HealthError> {
    objs.iter().map(HealthSnapshot::capture).collect()
}

/// Render snapshots as an aligned text table with a header row.
pub fn render_table(snapshots: &[HealthSnapshot]) -> String {
    let rows: Vec<[String; 5]> = snapshots.iter().map(HealthSnapshot::cells).collect();
    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let header = COLUMNS.map(str::to_string);
    for row in std::iter::once(&header).chain(&rows) {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join(" | ").trim_end());
        out.push('\n');
    }
    out
}

/// Snapshot `objs` and log the table at info level.
pub fn log_dump<H: Host>(objs: &[H]) -> Result<(), HealthError> {
    let snapshots = dump(objs)?;
    tracing::info!(entities = snapshots.len(), "health dump\n{}", render_table(&snapshots));
    Ok(())
}

/// Write snapshots one JSON object per line. Unbounded (infinite) limits are
/// written as `null`.
pub fn write_jsonl<W: Write>(mut writer: W, snapshots: &[HealthSnapshot]) -> io::Result<()> {
    for snapshot in snapshots {
        serde_json::to_writer(&mut writer, snapshot)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Write snapshots to a JSONL file at `path`, replacing any existing file.
pub fn write_jsonl_file(path: &Path, snapshots: &[HealthSnapshot]) -> io::Result<()> {
    write_jsonl(BufWriter::new(File::create(path)?), snapshots)
}
