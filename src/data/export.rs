use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::aggregate::PieData;
use super::filter::ScatterData;

/// Snapshot of both charts as currently shown.
#[derive(Debug, Serialize)]
pub struct ChartExport<'a> {
    pub site: &'a str,
    pub pie: &'a PieData,
    pub scatter: &'a ScatterData,
}

impl ChartExport<'_> {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialising chart data")
    }

    /// Write the snapshot as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("writing chart data to {}", path.display()))
    }
}
