use sentiview_store::ChartSource;

use crate::presentation::formatters::parse_hex_color;
use crate::presentation::view_models::{
    ChartsViewModel, DistributionChartViewModel, IndustryBarViewModel, IndustryChartViewModel,
    RgbColor, SliceViewModel,
};

const FALLBACK_COLOR: RgbColor = RgbColor::new(0x9c, 0xa3, 0xaf);
const INDUSTRY_FILL: RgbColor = RgbColor::new(0x3b, 0x82, 0xf6);

pub fn present_charts(source: &dyn ChartSource) -> ChartsViewModel {
    let distribution = source.sentiment_distribution();
    let total: f64 = distribution.iter().map(|d| d.value).sum();

    let slices = distribution
        .into_iter()
        .map(|datum| SliceViewModel {
            share: if total > 0.0 { datum.value / total } else { 0.0 },
            color: parse_hex_color(&datum.color).unwrap_or(FALLBACK_COLOR),
            label: datum.name,
            value: datum.value,
        })
        .collect();

    let bars: Vec<IndustryBarViewModel> = source
        .industry_scores()
        .into_iter()
        .map(|datum| IndustryBarViewModel {
            label: datum.industry,
            value: datum.score,
        })
        .collect();
    let max = bars.iter().map(|b| b.value).fold(100.0, f64::max);

    ChartsViewModel {
        distribution: DistributionChartViewModel {
            title: "Market Sentiment Distribution".to_string(),
            total,
            slices,
        },
        industries: IndustryChartViewModel {
            title: "Industry Sentiment Scores".to_string(),
            max,
            fill: INDUSTRY_FILL,
            bars,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiview_store::StaticStore;

    #[test]
    fn test_distribution_slices() {
        let vm = present_charts(&StaticStore::builtin());
        let dist = &vm.distribution;

        assert_eq!(dist.total, 100.0);
        assert_eq!(dist.slices.len(), 3);
        assert_eq!(dist.slices[0].label, "Positive");
        assert_eq!(dist.slices[0].share, 0.45);
        assert_eq!(dist.slices[0].color, RgbColor::new(0x10, 0xb9, 0x81));
        assert_ne!(dist.slices[0].color, dist.slices[1].color);
        assert_ne!(dist.slices[1].color, dist.slices[2].color);
    }

    #[test]
    fn test_industry_bars_keep_order() {
        let vm = present_charts(&StaticStore::builtin());
        let labels: Vec<_> = vm.industries.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Technology", "Healthcare", "Finance", "Energy", "Retail"]
        );
        assert_eq!(vm.industries.bars[0].value, 85.0);
        assert_eq!(vm.industries.max, 100.0);
    }
}
