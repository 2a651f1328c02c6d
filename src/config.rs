use crate::data::loader::DataSource;
use crate::data::model::ALL_SITES;

/// Published dataset the dashboard reads by default.
pub const DEFAULT_DATASET_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

/// Environment variable overriding the dataset location.
pub const SOURCE_ENV_VAR: &str = "SPACEX_DASH_SOURCE";

/// One dropdown entry: display label and the site code it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteOption {
    pub label: &'static str,
    pub value: &'static str,
}

pub const SITE_OPTIONS: [SiteOption; 5] = [
    SiteOption { label: "All sites", value: ALL_SITES },
    SiteOption { label: "CCAFS LC-40(Florida)", value: "CCAFS LC-40" },
    SiteOption { label: "Vandenberg SLC(California)", value: "VAFB SLC-4E" },
    SiteOption { label: "Kennedy space center LC(Florida)", value: "KSC LC-39A" },
    SiteOption { label: "CCAFS SLC-40(Florida)", value: "CCAFS SLC-40" },
];

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Everything the dashboard needs before it opens its window.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub source: DataSource,
    pub site_options: &'static [SiteOption],
    /// Payload slider track, in kg.
    pub slider_min: f64,
    pub slider_max: f64,
    pub slider_step: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: DataSource::Url(DEFAULT_DATASET_URL.to_string()),
            site_options: &SITE_OPTIONS,
            slider_min: 0.0,
            slider_max: 10_000.0,
            slider_step: 1_000.0,
        }
    }
}

impl DashboardConfig {
    /// Defaults, with the data source taken from the first argument or
    /// `SPACEX_DASH_SOURCE` (argument wins).
    pub fn from_env() -> Self {
        let arg = std::env::args().nth(1);
        let env = std::env::var(SOURCE_ENV_VAR).ok();
        Self::with_overrides(arg, env)
    }

    fn with_overrides(arg: Option<String>, env: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = arg.or(env).filter(|s| !s.trim().is_empty()) {
            config.source = DataSource::parse(&raw);
        }
        config
    }

    /// Dropdown label for a site code, falling back to the code itself.
    pub fn label_for<'a>(&self, value: &'a str) -> &'a str {
        self.site_options
            .iter()
            .find(|o| o.value == value)
            .map_or(value, |o| o.label)
    }
}
