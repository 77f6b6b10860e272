use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartsViewModel {
    pub distribution: DistributionChartViewModel,
    pub industries: IndustryChartViewModel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionChartViewModel {
    pub title: String,
    pub total: f64,
    pub slices: Vec<SliceViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliceViewModel {
    pub label: String,
    pub value: f64,
    /// Share of the total in `[0, 1]`
    pub share: f64,
    pub color: RgbColor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryChartViewModel {
    pub title: String,
    pub max: f64,
    pub fill: RgbColor,
    pub bars: Vec<IndustryBarViewModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryBarViewModel {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
