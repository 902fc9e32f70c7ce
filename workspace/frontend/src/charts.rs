//! Chart builder over Plotly.js.
//!
//! Each chart kind has a pure `*_spec` function turning data plus a
//! [`ChartStyle`] into a [`PlotSpec`], and a `create_*` function that draws
//! the result onto a drawing surface (an element id) of the page.

mod bar;
mod error;
mod funnel;
mod gauge;
mod line;
mod render;
mod theme;

pub use bar::{utilization_chart_spec, StackedBarOptions};
pub use error::{ChartError, Result};
pub use funnel::{funnel_chart_spec, FunnelOptions};
pub use gauge::{gauge_chart_spec, GaugeOptions};
pub use line::{debt_chart_spec, LineOptions};
pub use render::render;
pub use theme::{merge, ChartStyle, ChartTheme, PlotSpec};

use kpi::{DebtSeries, FunnelSeries, GaugeConfig, UtilizationSeries};

use crate::settings::get_settings;

fn current_style() -> ChartStyle {
    ChartStyle::from_settings(&get_settings())
}

pub fn create_debt_chart(surface_id: &str, series: &DebtSeries) -> Result<()> {
    let spec = debt_chart_spec(series, &current_style(), &LineOptions::default())?;
    render(surface_id, &spec)
}

pub fn create_gauge_chart(surface_id: &str, label: &str, gauge: &GaugeConfig) -> Result<()> {
    let spec = gauge_chart_spec(label, gauge, &current_style(), &GaugeOptions::default())?;
    render(surface_id, &spec)
}

pub fn create_utilization_chart(surface_id: &str, series: &UtilizationSeries) -> Result<()> {
    let spec = utilization_chart_spec(series, &current_style(), &StackedBarOptions::default())?;
    render(surface_id, &spec)
}

pub fn create_funnel_chart(surface_id: &str, series: &FunnelSeries) -> Result<()> {
    let spec = funnel_chart_spec(series, &current_style(), &FunnelOptions::default())?;
    render(surface_id, &spec)
}
