use kpi::provider::{admin_expense_gauge, interest_coverage_gauge};
use yew::prelude::*;

use super::notice::ChartFailure;
use super::view::DashboardData;
use crate::charts;
use crate::settings::get_settings;

pub const DEBT_SURFACE: &str = "deudaChart";
pub const INTEREST_GAUGE_SURFACE: &str = "interesesGauge";
pub const EXPENSE_GAUGE_SURFACE: &str = "gastosGauge";
pub const UTILIZATION_SURFACE: &str = "utilizacionChart";
pub const FUNNEL_SURFACE: &str = "funnelChart";

pub const GAUGE_HEIGHT_PX: u32 = 220;

#[derive(Properties, PartialEq)]
pub struct ChartSurfaceProps {
    pub id: AttrValue,
    /// Defaults to the configured chart height
    #[prop_or_default]
    pub height_px: Option<u32>,
}

/// Empty element a chart is drawn onto.
#[function_component(ChartSurface)]
pub fn chart_surface(props: &ChartSurfaceProps) -> Html {
    let height = props.height_px.unwrap_or_else(|| get_settings().chart_height_px);

    html! {
        <div id={props.id.clone()} class="chart-container w-full" style={format!("height: {}px;", height)}></div>
    }
}

/// Draws every dashboard chart and returns the ones that failed.
pub fn draw_charts(data: &DashboardData) -> Vec<ChartFailure> {
    let ratios = &data.financial.ratios;
    let results = [
        (DEBT_SURFACE, charts::create_debt_chart(DEBT_SURFACE, &data.financial.debt)),
        (
            INTEREST_GAUGE_SURFACE,
            charts::create_gauge_chart(
                INTEREST_GAUGE_SURFACE,
                "Ratio Cobertura de Intereses",
                &interest_coverage_gauge(ratios),
            ),
        ),
        (
            EXPENSE_GAUGE_SURFACE,
            charts::create_gauge_chart(
                EXPENSE_GAUGE_SURFACE,
                "Gastos Admins vs. Ingresos",
                &admin_expense_gauge(ratios),
            ),
        ),
        (
            UTILIZATION_SURFACE,
            charts::create_utilization_chart(UTILIZATION_SURFACE, &data.operational.utilization),
        ),
        (FUNNEL_SURFACE, charts::create_funnel_chart(FUNNEL_SURFACE, &data.commercial.funnel)),
    ];

    results
        .into_iter()
        .filter_map(|(surface, result)| match result {
            Ok(()) => None,
            Err(err) => {
                log::error!("Failed to draw chart on #{}: {}", surface, err);
                Some(ChartFailure::new(surface, &err))
            }
        })
        .collect()
}
