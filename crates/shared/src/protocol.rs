use serde::{Deserialize, Serialize};

/// One pie slice: a label and its count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// Figure payload for the success pie panel. The front end turns this
/// into a single plotly pie trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    /// Outcome as the original 0/1 `class` value; the scatter y axis.
    pub class: u8,
}

/// One scatter trace: all points sharing a booster version category.
/// Color and marker symbol are assigned per series by the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub booster_version: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterFigure {
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

/// Payload slider widget spec plus the observed bounds that seed the
/// initial handle positions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub initial_low: f64,
    pub initial_high: f64,
}

/// Everything the page needs to build its widgets: dropdown options and
/// the slider spec, both derived from the loaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMeta {
    pub title: String,
    pub sites: Vec<String>,
    pub payload_slider: SliderSpec,
}
