use kpi::Tone;
use plotly::common::{Font, Label};
use plotly::layout::{Axis, Legend, Margin};
use plotly::Layout;
use serde::Serialize;
use serde_json::{json, Value};

use super::error::Result;
use crate::settings::DashboardSettings;

pub const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// Colors and fonts shared by every chart (slate dark palette).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub font_family: &'static str,
    /// Axis ticks, legend and secondary labels
    pub text: &'static str,
    pub grid: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_border: &'static str,
    pub tooltip_text: &'static str,
    /// Border drawn between gauge and funnel segments
    pub segment_border: &'static str,
    pub accent: &'static str,
    pub accent_fill: &'static str,
    pub muted: &'static str,
    pub track: &'static str,
    pub good: &'static str,
    pub caution: &'static str,
    pub bad: &'static str,
    /// Funnel segment colors, cycled when the funnel has more stages
    pub funnel: [&'static str; 4],
    pub funnel_text: &'static str,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            font_family: "Roboto",
            text: "#94a3b8",
            grid: "rgba(71, 85, 105, 0.5)",
            tooltip_background: "rgba(30, 41, 59, 0.9)",
            tooltip_border: "#475569",
            tooltip_text: "#cbd5e1",
            segment_border: "#1e293b",
            accent: "#38bdf8",
            accent_fill: "rgba(56, 189, 248, 0.1)",
            muted: "#475569",
            track: "#334155",
            good: "#22c55e",
            caution: "#facc15",
            bad: "#ef4444",
            funnel: ["#0ea5e9", "#38bdf8", "#7dd3fc", "#bae6fd"],
            funnel_text: "#082f49",
        }
    }
}

impl ChartTheme {
    pub fn tone_color(&self, tone: Tone) -> &'static str {
        match tone {
            Tone::Good => self.good,
            Tone::Caution => self.caution,
            Tone::Bad => self.bad,
        }
    }

    fn font(&self) -> Font {
        Font::new().family(self.font_family).color(self.text)
    }

    fn axis(&self) -> Axis {
        Axis::new()
            .color(self.text)
            .grid_color(self.grid)
            .show_grid(true)
            .zero_line(false)
    }

    /// Layout every chart kind starts from.
    pub fn base_layout(&self) -> Layout {
        Layout::new()
            .paper_background_color(TRANSPARENT)
            .plot_background_color(TRANSPARENT)
            .font(self.font())
            .margin(Margin::new().top(10).right(10).bottom(30).left(50))
            .legend(Legend::new().font(self.font()))
            .hover_label(
                Label::new()
                    .background_color(self.tooltip_background)
                    .border_color(self.tooltip_border)
                    .font(Font::new().family(self.font_family).color(self.tooltip_text)),
            )
            .x_axis(self.axis())
            .y_axis(self.axis())
    }
}

/// Theme plus the page-level chart preferences.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartStyle {
    pub theme: ChartTheme,
    pub show_mode_bar: bool,
}

impl ChartStyle {
    pub fn from_settings(settings: &DashboardSettings) -> Self {
        Self {
            theme: ChartTheme::default(),
            show_mode_bar: settings.show_mode_bar,
        }
    }

    /// Base layout with `overrides` merged on top.
    pub fn layout(&self, overrides: Value) -> Result<Value> {
        let mut layout = serde_json::to_value(self.theme.base_layout())?;
        merge(&mut layout, overrides);
        Ok(layout)
    }

    pub fn config(&self) -> Value {
        json!({"responsive": true, "displayModeBar": self.show_mode_bar})
    }
}

/// Everything `Plotly.newPlot` needs besides the target element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSpec {
    pub data: Vec<Value>,
    pub layout: Value,
    pub config: Value,
}

/// Recursively merges `patch` into `base`. Objects are merged key by key,
/// any other value in `patch` replaces the one in `base`.
pub fn merge(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                merge(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (base, patch) => *base = patch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_nested_keys() {
        let mut base = json!({"xaxis": {"showgrid": true, "gridcolor": "#eee"}, "height": 300});
        merge(&mut base, json!({"xaxis": {"showgrid": false}, "barmode": "stack"}));

        assert_eq!(base["xaxis"]["showgrid"], false);
        assert_eq!(base["xaxis"]["gridcolor"], "#eee");
        assert_eq!(base["height"], 300);
        assert_eq!(base["barmode"], "stack");
    }

    #[test]
    fn test_merge_replaces_non_objects() {
        let mut base = json!({"annotations": [1, 2]});
        merge(&mut base, json!({"annotations": [3]}));
        assert_eq!(base["annotations"], json!([3]));
    }

    #[test]
    fn test_layout_keeps_theme() {
        let style = ChartStyle::default();
        let layout = style.layout(json!({"showlegend": false})).unwrap();

        assert_eq!(layout["paper_bgcolor"], TRANSPARENT);
        assert_eq!(layout["xaxis"]["gridcolor"], style.theme.grid);
        assert_eq!(layout["showlegend"], false);
    }

    #[test]
    fn test_config() {
        let style = ChartStyle {
            show_mode_bar: true,
            ..ChartStyle::default()
        };
        assert_eq!(style.config(), json!({"responsive": true, "displayModeBar": true}));
    }

    #[test]
    fn test_tone_color() {
        let theme = ChartTheme::default();
        assert_eq!(theme.tone_color(Tone::Caution), "#facc15");
        assert_eq!(theme.tone_color(Tone::Good), "#22c55e");
        assert_eq!(theme.tone_color(Tone::Bad), "#ef4444");
    }
}
