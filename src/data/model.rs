use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Sentinel dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    /// 1 = success, 0 = failure.
    pub outcome_class: u8,
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.outcome_class == 1
    }
}

// ---------------------------------------------------------------------------
// LaunchTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Immutable table of launches with bounds computed once at construction.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    sites: BTreeSet<String>,
}

impl LaunchTable {
    /// Build the table and its derived payload bounds from records in source order.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let (min_payload, max_payload) = if records.is_empty() {
            (0.0, 0.0)
        } else {
            records.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r.payload_mass_kg), hi.max(r.payload_mass_kg))
            })
        };
        let sites = records.iter().map(|r| r.launch_site.clone()).collect();

        LaunchTable {
            records,
            min_payload,
            max_payload,
            sites,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Smallest payload mass in the table (0 when empty).
    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    /// Largest payload mass in the table (0 when empty).
    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Distinct launch sites, sorted.
    pub fn sites(&self) -> &BTreeSet<String> {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Selection – the transient input to the chart transformations
// ---------------------------------------------------------------------------

/// Dropdown value: every site, or one site code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a raw dropdown value; `"ALL"` is the only sentinel.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(s) => s,
        }
    }

    /// Whether a record launched from a site passes this selection.
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => s == launch_site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive payload mass bounds in kilograms.
///
/// `min_kg > max_kg` is allowed and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    pub min_kg: f64,
    pub max_kg: f64,
}

impl PayloadRange {
    pub fn new(min_kg: f64, max_kg: f64) -> Self {
        PayloadRange { min_kg, max_kg }
    }

    /// The full observed range of a table.
    pub fn of_table(table: &LaunchTable) -> Self {
        PayloadRange::new(table.min_payload(), table.max_payload())
    }

    pub fn is_inverted(&self) -> bool {
        self.min_kg > self.max_kg
    }

    pub fn contains(&self, mass_kg: f64) -> bool {
        self.min_kg <= mass_kg && mass_kg <= self.max_kg
    }
}

/// Current dropdown and slider values.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl Selection {
    /// `ALL` sites over the table's full payload range.
    pub fn initial(table: &LaunchTable) -> Self {
        Selection {
            site: SiteSelection::All,
            payload_range: PayloadRange::of_table(table),
        }
    }
}

#[cfg(test)]
pub(crate) fn record(site: &str, mass: f64, class: u8, booster: &str) -> LaunchRecord {
    LaunchRecord {
        launch_site: site.to_string(),
        payload_mass_kg: mass,
        outcome_class: class,
        booster_version_category: booster.to_string(),
    }
}

/// The three-launch table used throughout the unit tests.
#[cfg(test)]
pub(crate) fn scenario_table() -> LaunchTable {
    LaunchTable::from_records(vec![
        record("KSC LC-39A", 500.0, 1, "v1"),
        record("KSC LC-39A", 9000.0, 0, "v2"),
        record("CCAFS LC-40", 3000.0, 1, "v1"),
    ])
}
