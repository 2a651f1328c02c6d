use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::{LoadError, LoadResult};
use super::model::{LaunchRecord, LaunchTable};

/// Columns every dataset must carry, in the spelling of the CSV header.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS,
    COL_CLASS,
    COL_BOOSTER_CATEGORY,
];

const COL_LAUNCH_SITE: &str = "Launch Site";
const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
const COL_CLASS: &str = "class";
const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// Where the launch CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    Path(PathBuf),
}

impl DataSource {
    /// `http(s)://…` is fetched over the network, everything else is a file path.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            DataSource::Url(raw.to_string())
        } else {
            DataSource::Path(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the launch table from a URL or a local file.
pub fn load(source: &DataSource) -> LoadResult<LaunchTable> {
    let table = match source {
        DataSource::Url(url) => load_url(url)?,
        DataSource::Path(path) => load_path(path)?,
    };
    log::info!(
        "Loaded {} launches from {source} (payload {}..={} kg, sites {:?})",
        table.len(),
        table.min_payload(),
        table.max_payload(),
        table.sites()
    );
    Ok(table)
}

/// Parse a launch CSV from any reader.
///
/// The header must name every column in [`REQUIRED_COLUMNS`]; order is free
/// and additional columns are ignored.
pub fn load_from_reader<R: Read>(reader: R) -> LoadResult<LaunchTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawLaunchRow>().enumerate() {
        let row = i + 1;
        let raw = result.map_err(|e| {
            if let csv::ErrorKind::Deserialize { err, .. } = e.kind() {
                return LoadError::Malformed {
                    row,
                    reason: err.to_string(),
                };
            }
            LoadError::Csv(e)
        })?;
        records.push(raw.into_record(row)?);
    }

    Ok(LaunchTable::from_records(records))
}

// ---------------------------------------------------------------------------
// Source readers
// ---------------------------------------------------------------------------

fn load_url(url: &str) -> LoadResult<LaunchTable> {
    let fetch_err = |source| LoadError::Fetch {
        url: url.to_string(),
        source,
    };
    log::debug!("Fetching dataset from {url}");
    let body = reqwest::blocking::get(url)
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.bytes())
        .map_err(fetch_err)?;
    load_from_reader(body.as_ref())
}

fn load_path(path: &Path) -> LoadResult<LaunchTable> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file)
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    /// Pandas exports sometimes write the flag as `1.0`.
    #[serde(rename = "class")]
    class: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

impl RawLaunchRow {
    fn into_record(self, row: usize) -> LoadResult<LaunchRecord> {
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(LoadError::Malformed {
                row,
                reason: format!("invalid payload mass {}", self.payload_mass_kg),
            });
        }
        let outcome_class = if self.class == 0.0 {
            0
        } else if self.class == 1.0 {
            1
        } else {
            return Err(LoadError::Malformed {
                row,
                reason: format!("class must be 0 or 1, got {}", self.class),
            });
        };

        Ok(LaunchRecord {
            launch_site: self.launch_site,
            payload_mass_kg: self.payload_mass_kg,
            outcome_class,
            booster_version_category: self.booster_version_category,
        })
    }
}
