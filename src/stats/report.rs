use serde::Serialize;

use super::summary::StatisticsSummary;

/// A titled block of the text report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// Build the text report shown next to the charts.
///
/// `multipliers` selects which `±k SD` price bands are listed.
pub fn report_sections(summary: &StatisticsSummary, multipliers: &[f64]) -> Vec<ReportSection> {
    let vol = &summary.volatility;
    let price = &summary.price;
    let (vol_low, vol_high) = summary.volatility_band();

    let volatility = ReportSection {
        title: "Volatility Statistics",
        lines: vec![
            format!("Average Volatility: {:.2}%", vol.mean),
            format!("+1 SD Volatility: {vol_high:.2}%"),
            format!("-1 SD Volatility: {vol_low:.2}%"),
        ],
    };

    let mut price_lines = vec![
        format!("Average Price: {:.2}", price.mean),
        format!("Median Price: {:.2}", price.median),
        format!("Mode Price: {:.2}", price.mode),
    ];
    for &k in multipliers {
        let (low, high) = summary.price_band(k);
        price_lines.push(format!("±{k} SD Price: {low:.2} to {high:.2}"));
    }

    vec![
        volatility,
        ReportSection {
            title: "Price Statistics",
            lines: price_lines,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::summary::{PriceStats, VolatilityStats};

    fn summary() -> StatisticsSummary {
        StatisticsSummary {
            volatility: VolatilityStats { mean: 1.5, sd: 0.25 },
            price: PriceStats {
                mean: 100.0,
                median: 99.5,
                mode: 98.0,
                sd: 2.0,
            },
        }
    }

    #[test]
    fn lists_volatility_and_price_blocks() {
        let sections = report_sections(&summary(), &[1.0, 2.0, 3.0]);
        assert_eq!(sections.len(), 2);
        assert_eq!(
            sections[0].lines,
            vec![
                "Average Volatility: 1.50%",
                "+1 SD Volatility: 1.75%",
                "-1 SD Volatility: 1.25%",
            ]
        );
        assert_eq!(
            sections[1].lines,
            vec![
                "Average Price: 100.00",
                "Median Price: 99.50",
                "Mode Price: 98.00",
                "±1 SD Price: 98.00 to 102.00",
                "±2 SD Price: 96.00 to 104.00",
                "±3 SD Price: 94.00 to 106.00",
            ]
        );
    }

    #[test]
    fn band_list_follows_multipliers() {
        let sections = report_sections(&summary(), &[1.5]);
        assert_eq!(sections[1].lines.len(), 4);
        assert_eq!(sections[1].lines[3], "±1.5 SD Price: 97.00 to 103.00");
    }
}
