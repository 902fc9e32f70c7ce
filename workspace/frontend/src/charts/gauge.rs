//! Half-circle gauge drawn as a Plotly pie.
//!
//! The pie gets a fourth, transparent slice as wide as the three zones
//! together. Starting at three o'clock and running clockwise, that slice
//! covers the bottom half, so the zones fill the top half from left (low)
//! to right (high).

use kpi::format::format_number;
use kpi::GaugeConfig;
use serde_json::json;

use super::error::Result;
use super::theme::{ChartStyle, PlotSpec, TRANSPARENT};

/// Options of the gauge chart.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeOptions {
    /// Size of the hole relative to the pie. Defaults to 0.7.
    pub hole: f64,
    /// Font size of the current value. Defaults to 36.
    pub value_font_size: usize,
    /// Font size of the label under the value. Defaults to 14.
    pub label_font_size: usize,
    /// Decimals shown for the current value. Defaults to 2.
    pub value_decimals: usize,
    /// Zone names, low zone first
    pub zone_names: [&'static str; 3],
}

impl Default for GaugeOptions {
    fn default() -> Self {
        Self {
            hole: 0.7,
            value_font_size: 36,
            label_font_size: 14,
            value_decimals: 2,
            zone_names: ["Zona Baja", "Zona Media", "Zona Alta"],
        }
    }
}

pub fn gauge_chart_spec(
    label: &str,
    gauge: &GaugeConfig,
    style: &ChartStyle,
    options: &GaugeOptions,
) -> Result<PlotSpec> {
    let theme = &style.theme;
    let [low, mid, high] = gauge.zone_widths();
    let zone_colors = gauge.zone_tones().map(|tone| theme.tone_color(tone));
    let [low_name, mid_name, high_name] = options.zone_names;

    let trace = json!({
        "type": "pie",
        "values": [gauge.max, low, mid, high],
        "labels": ["", low_name, mid_name, high_name],
        "rotation": 90,
        "direction": "clockwise",
        "sort": false,
        "hole": options.hole,
        "textinfo": "none",
        "hoverinfo": "skip",
        "showlegend": false,
        "marker": {
            "colors": [TRANSPARENT, zone_colors[0], zone_colors[1], zone_colors[2]],
            "line": {
                "color": [
                    TRANSPARENT,
                    theme.segment_border,
                    theme.segment_border,
                    theme.segment_border
                ],
                "width": 2
            }
        }
    });

    let value_text =
        format!("{}{}", format_number(gauge.value, options.value_decimals), gauge.unit);
    let layout = style.layout(json!({
        "showlegend": false,
        "margin": {"t": 0, "r": 0, "b": 0, "l": 0},
        "annotations": [
            {
                "text": format!("<b>{}</b>", value_text),
                "x": 0.5,
                "y": 0.6,
                "xref": "paper",
                "yref": "paper",
                "showarrow": false,
                "font": {
                    "family": theme.font_family,
                    "size": options.value_font_size,
                    "color": theme.tone_color(gauge.tone())
                }
            },
            {
                "text": label,
                "x": 0.5,
                "y": 0.45,
                "xref": "paper",
                "yref": "paper",
                "showarrow": false,
                "font": {
                    "family": theme.font_family,
                    "size": options.label_font_size,
                    "color": theme.text
                }
            }
        ]
    }))?;

    Ok(PlotSpec {
        data: vec![trace],
        layout,
        config: style.config(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kpi::provider::{admin_expense_gauge, financial_data, interest_coverage_gauge};

    fn spec(gauge: &GaugeConfig) -> PlotSpec {
        gauge_chart_spec("Etiqueta", gauge, &ChartStyle::default(), &GaugeOptions::default())
            .unwrap()
    }

    #[test]
    fn test_zone_colors_follow_inversion() {
        let ratios = financial_data().ratios;
        let theme = ChartStyle::default().theme;

        let coverage = spec(&interest_coverage_gauge(&ratios));
        assert_eq!(
            coverage.data[0]["marker"]["colors"],
            json!([TRANSPARENT, theme.bad, theme.caution, theme.good])
        );

        let expenses = spec(&admin_expense_gauge(&ratios));
        assert_eq!(
            expenses.data[0]["marker"]["colors"],
            json!([TRANSPARENT, theme.good, theme.caution, theme.bad])
        );
    }

    #[test]
    fn test_hidden_half_matches_visible_half() {
        let ratios = financial_data().ratios;
        let spec = spec(&admin_expense_gauge(&ratios));
        assert_eq!(spec.data[0]["values"], json!([50.0, 30.0, 10.0, 10.0]));
    }

    #[test]
    fn test_value_text_and_color() {
        let ratios = financial_data().ratios;
        let theme = ChartStyle::default().theme;

        let coverage = spec(&interest_coverage_gauge(&ratios));
        assert_eq!(coverage.layout["annotations"][0]["text"], "<b>2.8</b>");
        assert_eq!(coverage.layout["annotations"][0]["font"]["color"], theme.caution);
        assert_eq!(coverage.layout["annotations"][1]["text"], "Etiqueta");

        let expenses = spec(&admin_expense_gauge(&ratios));
        assert_eq!(expenses.layout["annotations"][0]["text"], "<b>38%</b>");
        assert_eq!(expenses.layout["annotations"][0]["font"]["color"], theme.caution);
    }

    #[test]
    fn test_value_color_outside_middle_zone() {
        let theme = ChartStyle::default().theme;
        let ratios = kpi::FinancialRatios {
            interest_coverage: 4.2,
            admin_expense_ratio: 0.45,
        };

        let coverage = spec(&interest_coverage_gauge(&ratios));
        assert_eq!(coverage.layout["annotations"][0]["font"]["color"], theme.good);

        let expenses = spec(&admin_expense_gauge(&ratios));
        assert_eq!(expenses.layout["annotations"][0]["font"]["color"], theme.bad);
    }
}
