use serde::{Deserialize, Serialize};

/// Sentinel dropdown value meaning "no site filter".
pub const ALL_SITES: &str = "ALL";

/// Payload slider domain, kilograms.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Maps the CSV `class` column (0/1) to an outcome.
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn as_class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// One launch row. Immutable for the process lifetime once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version: String,
}

/// Dropdown state: either every site or one specific site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Parses the dropdown wire value. Anything other than the "ALL"
    /// sentinel is taken as a site name, even if it matches no record;
    /// an unknown site simply yields empty charts downstream.
    pub fn from_param(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

impl Default for SiteSelection {
    fn default() -> Self {
        SiteSelection::All
    }
}

/// Slider state, kilograms. The filter keeps records with
/// `low < mass <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn is_valid(&self) -> bool {
        self.low <= self.high
    }

    pub fn contains(&self, mass_kg: f64) -> bool {
        self.low < mass_kg && mass_kg <= self.high
    }
}

impl Default for PayloadRange {
    fn default() -> Self {
        Self {
            low: PAYLOAD_SLIDER_MIN,
            high: PAYLOAD_SLIDER_MAX,
        }
    }
}
