use std::{collections::BTreeMap, fs::File, io::Read, path::Path};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use shared::domain::{LaunchRecord, Outcome, PayloadRange, SiteSelection};

/// CSV row as it appears on disk. Column names match the source file;
/// conversion into a `LaunchRecord` is where validation happens.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

/// The launch record table, loaded once at startup and read-only after.
/// Distinct sites and observed payload bounds are precomputed so the
/// widgets can be populated without rescanning.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_min: f64,
    payload_max: f64,
}

impl Dataset {
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open launch CSV '{}'", path.display()))?;
        Self::from_reader(file)
            .with_context(|| format!("failed to parse launch CSV '{}'", path.display()))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<RawRow>().enumerate() {
            let row = row.with_context(|| format!("bad CSV row {}", index + 2))?;
            let record = convert_row(row)
                .with_context(|| format!("invalid launch record at CSV row {}", index + 2))?;
            records.push(record);
        }
        Ok(Self::from_records(records))
    }

    /// Builds a dataset from already-validated records. Test seam; also
    /// the tail of CSV loading.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = records.iter().map(|r| r.site.clone()).collect();
        sites.sort();
        sites.dedup();

        let payload_min = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let payload_max = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        Self {
            records,
            sites,
            payload_min,
            payload_max,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct launch sites; populates the dropdown.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Observed payload bounds, or `None` for an empty dataset.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        if self.records.is_empty() {
            None
        } else {
            Some((self.payload_min, self.payload_max))
        }
    }

    /// Success count per site, ordered by site name.
    pub fn success_count_by_site(&self) -> Vec<(String, u64)> {
        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
        for record in &self.records {
            let entry = counts.entry(record.site.as_str()).or_default();
            if record.outcome.is_success() {
                *entry += 1;
            }
        }
        counts
            .into_iter()
            .map(|(site, count)| (site.to_string(), count))
            .collect()
    }

    /// (successes, failures) for one site. A site matching no record
    /// yields (0, 0).
    pub fn outcome_counts_for_site(&self, site: &str) -> (u64, u64) {
        let mut successes = 0;
        let mut failures = 0;
        for record in self.records.iter().filter(|r| r.site == site) {
            if record.outcome.is_success() {
                successes += 1;
            } else {
                failures += 1;
            }
        }
        (successes, failures)
    }

    /// Records passing the site filter and the payload range predicate
    /// (`low < mass <= high`).
    pub fn records_matching(
        &self,
        selection: &SiteSelection,
        range: &PayloadRange,
    ) -> Vec<&LaunchRecord> {
        self.records
            .iter()
            .filter(|record| selection.matches(&record.site) && range.contains(record.payload_mass_kg))
            .collect()
    }
}

fn convert_row(row: RawRow) -> Result<LaunchRecord> {
    if row.payload_mass_kg < 0.0 {
        bail!("negative payload mass {}", row.payload_mass_kg);
    }
    let Some(outcome) = Outcome::from_class(row.class) else {
        bail!("class column must be 0 or 1, got {}", row.class);
    };
    Ok(LaunchRecord {
        site: row.launch_site,
        payload_mass_kg: row.payload_mass_kg,
        outcome,
        booster_version: row.booster_version_category,
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
