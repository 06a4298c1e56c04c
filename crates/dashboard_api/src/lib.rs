use std::{collections::BTreeMap, sync::Arc};

use dataset::Dataset;
use shared::{
    domain::{
        PayloadRange, SiteSelection, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP,
    },
    error::{ApiError, ErrorCode},
    protocol::{
        DashboardMeta, PieFigure, PieSlice, ScatterFigure, ScatterPoint, ScatterSeries, SliderSpec,
    },
};
use tracing::debug;

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

/// Shared handler context: the immutable dataset behind an `Arc`.
/// Every figure function is a pure map from (selection, dataset) to a
/// figure payload; nothing here mutates after startup.
#[derive(Clone)]
pub struct ApiContext {
    pub dataset: Arc<Dataset>,
}

impl ApiContext {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

/// Widget metadata for the page: dropdown options from the dataset's
/// distinct sites, slider spec with handles seeded from the observed
/// payload bounds (the full domain when the dataset is empty).
pub fn dashboard_meta(ctx: &ApiContext) -> DashboardMeta {
    let (initial_low, initial_high) = ctx
        .dataset
        .payload_bounds()
        .unwrap_or((PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX));
    DashboardMeta {
        title: DASHBOARD_TITLE.to_string(),
        sites: ctx.dataset.sites().to_vec(),
        payload_slider: SliderSpec {
            min: PAYLOAD_SLIDER_MIN,
            max: PAYLOAD_SLIDER_MAX,
            step: PAYLOAD_SLIDER_STEP,
            initial_low,
            initial_high,
        },
    }
}

/// Pie figure for the site dropdown. "ALL" sums successes per site;
/// a specific site partitions its records by outcome. A site matching
/// no record yields an empty figure rather than an error.
pub fn pie_figure(ctx: &ApiContext, selection: &SiteSelection) -> PieFigure {
    match selection {
        SiteSelection::All => {
            let slices = ctx
                .dataset
                .success_count_by_site()
                .into_iter()
                .map(|(site, count)| PieSlice {
                    label: site,
                    value: count,
                })
                .collect();
            PieFigure {
                title: "Total Success Launches By Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(site) => {
            let (successes, failures) = ctx.dataset.outcome_counts_for_site(site);
            debug!(%site, successes, failures, "pie partition");
            let mut slices = Vec::new();
            if successes > 0 {
                slices.push(PieSlice {
                    label: "success".to_string(),
                    value: successes,
                });
            }
            if failures > 0 {
                slices.push(PieSlice {
                    label: "failure".to_string(),
                    value: failures,
                });
            }
            PieFigure {
                title: format!("Total Success/Failure Launches Rate for site {site}"),
                slices,
            }
        }
    }
}

/// Scatter figure for the payload/outcome correlation panel. Records
/// are filtered to the selection and range, then grouped into one
/// series per booster version category, series ordered by name.
pub fn scatter_figure(
    ctx: &ApiContext,
    selection: &SiteSelection,
    range: &PayloadRange,
) -> Result<ScatterFigure, ApiError> {
    if !range.is_valid() {
        return Err(ApiError::new(
            ErrorCode::Validation,
            format!("payload range low {} exceeds high {}", range.low, range.high),
        ));
    }

    let mut by_booster: BTreeMap<&str, Vec<ScatterPoint>> = BTreeMap::new();
    for record in ctx.dataset.records_matching(selection, range) {
        by_booster
            .entry(record.booster_version.as_str())
            .or_default()
            .push(ScatterPoint {
                payload_mass_kg: record.payload_mass_kg,
                class: record.outcome.as_class(),
            });
    }

    let title = match selection {
        SiteSelection::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteSelection::Site(site) => {
            format!("Correlation between Payload and Success for site {site}")
        }
    };

    Ok(ScatterFigure {
        title,
        series: by_booster
            .into_iter()
            .map(|(booster_version, points)| ScatterSeries {
                booster_version: booster_version.to_string(),
                points,
            })
            .collect(),
    })
}
