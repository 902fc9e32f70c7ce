use kpi::DebtSeries;
use plotly::common::{DashType, Fill, Line, LineShape, Marker, Mode};
use plotly::Scatter;
use serde_json::json;

use super::error::Result;
use super::theme::{ChartStyle, PlotSpec};

/// Options of the debt trend line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOptions {
    /// Legend entry of the actual series
    pub actual_name: &'static str,
    /// Legend entry of the target series
    pub target_name: &'static str,
    /// Spline smoothing, 0 draws straight segments. Defaults to 0.6.
    pub smoothing: f64,
    /// Marker size on the actual series. Defaults to 8.
    pub marker_size: usize,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            actual_name: "Deuda Real (Millones MXN)",
            target_name: "Objetivo de Reducción",
            smoothing: 0.6,
            marker_size: 8,
        }
    }
}

/// Actual debt as a filled line, target as a dashed line without markers.
pub fn debt_chart_spec(
    series: &DebtSeries,
    style: &ChartStyle,
    options: &LineOptions,
) -> Result<PlotSpec> {
    let theme = &style.theme;

    let actual = Scatter::new(series.labels.clone(), series.actual.clone())
        .name(options.actual_name)
        .mode(Mode::LinesMarkers)
        .fill(Fill::ToZeroY)
        .fill_color(theme.accent_fill)
        .line(
            Line::new()
                .color(theme.accent)
                .shape(LineShape::Spline)
                .smoothing(options.smoothing),
        )
        .marker(Marker::new().color(theme.accent).size(options.marker_size));

    let target = Scatter::new(series.labels.clone(), series.target.clone())
        .name(options.target_name)
        .mode(Mode::Lines)
        .line(
            Line::new()
                .color(theme.muted)
                .dash(DashType::Dash)
                .shape(LineShape::Spline)
                .smoothing(options.smoothing),
        );

    Ok(PlotSpec {
        data: vec![serde_json::to_value(&actual)?, serde_json::to_value(&target)?],
        layout: style.layout(json!({"legend": {"orientation": "h", "y": -0.2}}))?,
        config: style.config(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> PlotSpec {
        let series = kpi::provider::financial_data().debt;
        debt_chart_spec(&series, &ChartStyle::default(), &LineOptions::default()).unwrap()
    }

    #[test]
    fn test_two_series_over_all_periods() {
        let spec = spec();
        assert_eq!(spec.data.len(), 2);
        for trace in &spec.data {
            assert_eq!(trace["type"], "scatter");
            assert_eq!(trace["x"].as_array().map(Vec::len), Some(8));
            assert_eq!(trace["y"].as_array().map(Vec::len), Some(8));
        }
        assert_eq!(spec.data[0]["x"][0], "Ene");
    }

    #[test]
    fn test_only_actual_series_is_filled() {
        let spec = spec();
        assert_eq!(spec.data[0]["fill"], "tozeroy");
        assert!(spec.data[1].get("fill").is_none());
        assert_eq!(spec.data[1]["line"]["dash"], "dash");
    }

    #[test]
    fn test_series_names() {
        let spec = spec();
        assert_eq!(spec.data[0]["name"], "Deuda Real (Millones MXN)");
        assert_eq!(spec.data[1]["name"], "Objetivo de Reducción");
    }
}
