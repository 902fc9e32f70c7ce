use kpi::format::{format_currency, format_number, format_percent};
use kpi::provider::{self, admin_expense_gauge, interest_coverage_gauge};
use kpi::{CommercialData, DebtScenario, FinancialData, OperationalData, ProjectMargin};
use yew::prelude::*;

use super::chart::{
    draw_charts, ChartSurface, DEBT_SURFACE, EXPENSE_GAUGE_SURFACE, FUNNEL_SURFACE, GAUGE_HEIGHT_PX,
    INTEREST_GAUGE_SURFACE, UTILIZATION_SURFACE,
};
use super::notice::{DashboardIssues, IssueNotice};
use super::scenarios::DebtScenarioTable;
use super::stats::{tone_class, FunnelStages, KpiCard};
use super::table::ProjectMarginTable;
use crate::components::tabs::{DashboardTabs, Tab, TabPane};
use crate::settings::get_settings;

pub const FINANCE_TAB: &str = "finanzas";
pub const OPERATIONS_TAB: &str = "operaciones";
pub const COMMERCIAL_TAB: &str = "comercial";

/// Everything the dashboard shows, pulled once from the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub financial: FinancialData,
    pub operational: OperationalData,
    pub commercial: CommercialData,
    pub margins: Vec<ProjectMargin>,
    pub scenarios: Vec<DebtScenario>,
}

impl DashboardData {
    pub fn load() -> Self {
        let data = Self {
            financial: provider::financial_data(),
            operational: provider::operational_data(),
            commercial: provider::commercial_data(),
            margins: provider::project_margins(),
            scenarios: provider::debt_reduction_scenarios(),
        };
        log::debug!(
            "Loaded {} periods, {} categories, {} stages, {} projects, {} scenarios",
            data.financial.debt.len(),
            data.operational.utilization.len(),
            data.commercial.funnel.len(),
            data.margins.len(),
            data.scenarios.len()
        );
        data
    }

    /// Names of the series whose parallel arrays differ in length.
    pub fn inconsistent_series(&self) -> Vec<&'static str> {
        let mut inconsistent = Vec::new();
        if !self.financial.debt.is_consistent() {
            inconsistent.push("deuda");
        }
        if !self.operational.utilization.is_consistent() {
            inconsistent.push("utilización");
        }
        if !self.commercial.funnel.is_consistent() {
            inconsistent.push("embudo");
        }
        inconsistent
    }
}

pub fn dashboard_tabs() -> Vec<Tab> {
    vec![
        Tab::new(FINANCE_TAB, "Finanzas", "fas fa-coins"),
        Tab::new(OPERATIONS_TAB, "Operaciones", "fas fa-cogs"),
        Tab::new(COMMERCIAL_TAB, "Comercial", "fas fa-handshake"),
    ]
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let settings = get_settings();
    let data = use_memo((), |_| DashboardData::load());
    let issues = use_state(DashboardIssues::default);

    {
        let issues = issues.clone();
        use_effect_with(data.clone(), move |data| {
            let inconsistent_series = data.inconsistent_series();
            if !inconsistent_series.is_empty() {
                log::warn!("Inconsistent series: {:?}", inconsistent_series);
            }

            let failures = draw_charts(data);
            if failures.is_empty() {
                log::info!("Dashboard charts drawn");
            }

            issues.set(DashboardIssues {
                failures,
                inconsistent_series,
            });
            || ()
        });
    }

    let on_dismiss = {
        let issues = issues.clone();
        Callback::from(move |_: ()| issues.set(DashboardIssues::default()))
    };

    let ratios = &data.financial.ratios;
    let coverage = interest_coverage_gauge(ratios);
    let expenses = admin_expense_gauge(ratios);
    let operational = &data.operational;
    let commercial = &data.commercial;

    html! {
        <>
            <IssueNotice issues={(*issues).clone()} {on_dismiss} />
            <DashboardTabs tabs={dashboard_tabs()} initial={settings.default_tab.clone()}>
                <TabPane id={FINANCE_TAB}>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <KpiCard
                            title="Cobertura de Intereses"
                            value={format!("{}x", format_number(coverage.value, 2))}
                            description="Utilidad operativa / gasto por intereses"
                            value_class={Some(tone_class(coverage.tone()))}
                        />
                        <KpiCard
                            title="Gastos Administrativos"
                            value={format_percent(ratios.admin_expense_ratio)}
                            description="Sobre ingresos"
                            value_class={Some(tone_class(expenses.tone()))}
                        />
                    </div>
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6">
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="card-title">{"Tendencia de Deuda vs. Objetivo"}</h2>
                                <ChartSurface id={DEBT_SURFACE} />
                            </div>
                        </div>
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="card-title">{"Margen por Proyecto"}</h2>
                                <ProjectMarginTable projects={data.margins.clone()} />
                            </div>
                        </div>
                    </div>
                    <div class="card bg-base-100 shadow mt-6">
                        <div class="card-body">
                            <h2 class="card-title">{"Escenarios de Reducción de Deuda"}</h2>
                            <DebtScenarioTable scenarios={data.scenarios.clone()} />
                        </div>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mt-6">
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="card-title">{"Cobertura de Intereses"}</h2>
                                <ChartSurface id={INTEREST_GAUGE_SURFACE} height_px={GAUGE_HEIGHT_PX} />
                            </div>
                        </div>
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="card-title">{"Gastos Administrativos"}</h2>
                                <ChartSurface id={EXPENSE_GAUGE_SURFACE} height_px={GAUGE_HEIGHT_PX} />
                            </div>
                        </div>
                    </div>
                </TabPane>
                <TabPane id={OPERATIONS_TAB}>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <KpiCard
                            title="Entregas a Tiempo"
                            value={format_percent(operational.on_time_delivery)}
                            value_class={Some("text-success")}
                        />
                        <KpiCard
                            title="Tasa de Retrabajo"
                            value={format_percent(operational.rework_rate)}
                            value_class={Some("text-warning")}
                        />
                    </div>
                    <div class="card bg-base-100 shadow mt-6">
                        <div class="card-body">
                            <h2 class="card-title">{"Utilización de Recursos (%)"}</h2>
                            <ChartSurface id={UTILIZATION_SURFACE} />
                        </div>
                    </div>
                </TabPane>
                <TabPane id={COMMERCIAL_TAB}>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <KpiCard
                            title="Tasa de Conversión"
                            value={format_percent(commercial.conversion_rate)}
                            description="Cotizaciones ganadas / enviadas"
                        />
                        <KpiCard
                            title="Valor Promedio de Proyecto"
                            value={format_currency(commercial.average_project_value)}
                            description="MXN"
                        />
                    </div>
                    <div class="card bg-base-100 shadow mt-6">
                        <div class="card-body">
                            <h2 class="card-title">{"Embudo de Ventas"}</h2>
                            <ChartSurface id={FUNNEL_SURFACE} />
                            <FunnelStages series={commercial.funnel.clone()} />
                        </div>
                    </div>
                </TabPane>
            </DashboardTabs>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_data_is_consistent() {
        let data = DashboardData::load();
        assert!(data.inconsistent_series().is_empty());
        assert_eq!(data.scenarios.len(), 2);
    }

    #[test]
    fn test_inconsistent_series_reported() {
        let mut data = DashboardData::load();
        data.commercial.funnel.values.pop();
        assert_eq!(data.inconsistent_series(), vec!["embudo"]);
    }

    #[test]
    fn test_default_tab_exists() {
        let default_tab = crate::settings::DashboardSettings::default().default_tab;
        assert!(dashboard_tabs().iter().any(|tab| tab.id == default_tab));
    }
}
