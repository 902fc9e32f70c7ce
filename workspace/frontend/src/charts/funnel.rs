use kpi::FunnelSeries;
use serde_json::json;

use super::error::Result;
use super::theme::{ChartStyle, PlotSpec};

/// Options of the funnel chart.
#[derive(Debug, Clone, PartialEq)]
pub struct FunnelOptions {
    /// Font size of the text inside each segment. Defaults to 14.
    pub text_size: usize,
    /// Plotly template of the text inside each segment: stage name and count
    pub text_template: &'static str,
}

impl Default for FunnelOptions {
    fn default() -> Self {
        Self {
            text_size: 14,
            text_template: "<b>%{y}</b><br>(%{x})",
        }
    }
}

// plotly-rs has no funnel trace, so the trace is written as JSON.
pub fn funnel_chart_spec(
    series: &FunnelSeries,
    style: &ChartStyle,
    options: &FunnelOptions,
) -> Result<PlotSpec> {
    let theme = &style.theme;
    let colors: Vec<&str> = (0..series.len())
        .map(|i| theme.funnel[i % theme.funnel.len()])
        .collect();

    let trace = json!({
        "type": "funnel",
        "y": series.labels,
        "x": series.values,
        "textposition": "inside",
        "texttemplate": options.text_template,
        "textfont": {
            "family": theme.font_family,
            "size": options.text_size,
            "color": theme.funnel_text
        },
        "marker": {
            "color": colors,
            "line": {"color": theme.segment_border, "width": 2}
        },
        "connector": {"line": {"color": theme.segment_border}},
        "hoverinfo": "y+x"
    });

    Ok(PlotSpec {
        data: vec![trace],
        layout: style.layout(json!({
            "showlegend": false,
            "margin": {"l": 10, "r": 10},
            "xaxis": {"visible": false},
            "yaxis": {"visible": false}
        }))?,
        config: style.config(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_annotated_with_label_and_value() {
        let series = kpi::provider::commercial_data().funnel;
        let spec =
            funnel_chart_spec(&series, &ChartStyle::default(), &FunnelOptions::default()).unwrap();

        let trace = &spec.data[0];
        assert_eq!(trace["type"], "funnel");
        assert_eq!(trace["x"], json!([150, 80, 45, 22]));
        assert_eq!(trace["y"][3], "Proyectos Ganados");
        assert_eq!(trace["texttemplate"], "<b>%{y}</b><br>(%{x})");
        assert_eq!(spec.layout["xaxis"]["visible"], false);
        assert_eq!(spec.layout["yaxis"]["visible"], false);
    }

    #[test]
    fn test_colors_cycle_past_palette() {
        let series = FunnelSeries {
            labels: (1..=6).map(|i| format!("Etapa {i}")).collect(),
            values: vec![60, 50, 40, 30, 20, 10],
        };
        let theme = ChartStyle::default().theme;
        let spec =
            funnel_chart_spec(&series, &ChartStyle::default(), &FunnelOptions::default()).unwrap();

        let colors = spec.data[0]["marker"]["color"].as_array().unwrap();
        assert_eq!(colors.len(), 6);
        assert_eq!(colors[4], theme.funnel[0]);
    }
}
