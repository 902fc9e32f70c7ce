use kpi::UtilizationSeries;
use plotly::common::Marker;
use plotly::Bar;
use serde_json::json;

use super::error::Result;
use super::theme::{ChartStyle, PlotSpec};

/// Options of the stacked utilization bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBarOptions {
    pub used_name: &'static str,
    pub available_name: &'static str,
    /// Show vertical grid lines between categories. Defaults to `false`.
    pub category_grid: bool,
}

impl Default for StackedBarOptions {
    fn default() -> Self {
        Self {
            used_name: "Utilizado",
            available_name: "Disponible",
            category_grid: false,
        }
    }
}

pub fn utilization_chart_spec(
    series: &UtilizationSeries,
    style: &ChartStyle,
    options: &StackedBarOptions,
) -> Result<PlotSpec> {
    let theme = &style.theme;

    let used = Bar::new(series.labels.clone(), series.used.clone())
        .name(options.used_name)
        .marker(Marker::new().color(theme.accent));
    let available = Bar::new(series.labels.clone(), series.available.clone())
        .name(options.available_name)
        .marker(Marker::new().color(theme.track));

    Ok(PlotSpec {
        data: vec![serde_json::to_value(&used)?, serde_json::to_value(&available)?],
        layout: style.layout(json!({
            "barmode": "stack",
            "legend": {"orientation": "h", "y": -0.2},
            "xaxis": {"showgrid": options.category_grid}
        }))?,
        config: style.config(),
    })
}
