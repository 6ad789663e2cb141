use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, LineStyle, Plot, PlotPoints, Points, VLine};

use rusty_ticker::stats::{histogram, sturges_bins};
use rusty_ticker::Analysis;

use crate::color::{band_colors, MEAN_LINE, POINT_FILL};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel: scatter on top, histogram below
// ---------------------------------------------------------------------------

/// Render both charts for the current analysis.
pub fn charts(ui: &mut Ui, state: &AppState) {
    let analysis = match &state.analysis {
        Some(a) => a,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                let hint = if state.session.dataset().is_some() {
                    "No data in the selected range"
                } else {
                    "Open a CSV to view market data  (File → Open…)"
                };
                ui.heading(hint);
            });
            return;
        }
    };

    let height = (ui.available_height() - ui.spacing().item_spacing.y) / 2.0;
    volatility_scatter(ui, analysis, height);
    price_histogram(ui, state, analysis, height);
}

// ---------------------------------------------------------------------------
// Open price vs. volatility
// ---------------------------------------------------------------------------

fn volatility_scatter(ui: &mut Ui, analysis: &Analysis, height: f32) {
    let summary = &analysis.summary;
    let (x_min, x_max) = analysis.open_extent();
    let (vol_low, vol_high) = summary.volatility_band();
    let band_color = band_colors(1).first().copied().unwrap_or(Color32::GOLD);

    let horizontal = |y: f64| PlotPoints::new(vec![[x_min, y], [x_max, y]]);

    Plot::new("volatility_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Open Price")
        .y_axis_label("Volatility (%)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let points: PlotPoints = analysis
                .records
                .iter()
                .map(|r| [r.open, r.volatility])
                .collect();
            plot_ui.points(
                Points::new(points)
                    .radius(4.0)
                    .color(POINT_FILL)
                    .name("Data Points"),
            );

            plot_ui.line(
                Line::new(horizontal(summary.volatility.mean))
                    .color(MEAN_LINE)
                    .width(2.0)
                    .name("Mean Volatility"),
            );
            plot_ui.line(
                Line::new(horizontal(vol_high))
                    .color(band_color)
                    .width(2.0)
                    .style(LineStyle::dashed_loose())
                    .name("+1 SD"),
            );
            plot_ui.line(
                Line::new(horizontal(vol_low))
                    .color(band_color)
                    .width(2.0)
                    .style(LineStyle::dashed_loose())
                    .name("-1 SD"),
            );
        });
}

// ---------------------------------------------------------------------------
// Close price distribution
// ---------------------------------------------------------------------------

fn price_histogram(ui: &mut Ui, state: &AppState, analysis: &Analysis, height: f32) {
    let prices: Vec<f64> = analysis.records.iter().map(|r| r.close).collect();
    let n_bins = state
        .config
        .histogram_bins
        .unwrap_or_else(|| sturges_bins(prices.len()));

    let bars: Vec<Bar> = histogram(&prices, n_bins)
        .iter()
        .map(|bin| Bar::new(bin.center(), bin.count as f64).width(bin.width()))
        .collect();

    let summary = &analysis.summary;
    let multipliers = &state.config.band_multipliers;
    let colors = band_colors(multipliers.len());

    Plot::new("price_histogram")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Close Price")
        .y_axis_label("Frequency")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .color(POINT_FILL)
                    .name("Price Distribution"),
            );

            plot_ui.vline(
                VLine::new(summary.price.mean)
                    .color(MEAN_LINE)
                    .width(2.0)
                    .name("Mean"),
            );

            for (&k, &color) in multipliers.iter().zip(colors.iter()) {
                let (low, high) = summary.price_band(k);
                let name = format!("±{k} SD");
                for x in [low, high] {
                    plot_ui.vline(
                        VLine::new(x)
                            .color(color)
                            .width(2.0)
                            .style(LineStyle::dashed_loose())
                            .name(&name),
                    );
                }
            }
        });
}
