//! Fixed demonstration figures.
//!
//! Every function builds its data fresh on each call and always returns the
//! same values.

use rust_decimal::Decimal;
use tracing::debug;

use crate::gauge::{GaugeConfig, GaugeZones};
use crate::model::{
    CommercialData, DebtProjection, DebtScenario, DebtSeries, FinancialData, FinancialRatios,
    FunnelSeries, OperationalData, ProjectMargin, UtilizationSeries,
};

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn financial_data() -> FinancialData {
    debug!("Building financial data");
    FinancialData {
        debt: DebtSeries {
            labels: labels(&["Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago"]),
            actual: vec![8.0, 7.9, 7.85, 7.7, 7.6, 7.55, 7.4, 7.3],
            target: vec![8.0, 7.9, 7.8, 7.7, 7.6, 7.5, 7.4, 7.3],
        },
        ratios: FinancialRatios {
            interest_coverage: 2.8,
            admin_expense_ratio: 0.38,
        },
    }
}

fn projection(years: u8, debt_reduced: i64, remaining_cents: i64) -> DebtProjection {
    DebtProjection {
        years,
        debt_reduced: Decimal::from(debt_reduced),
        remaining_debt: Decimal::new(remaining_cents, 2),
    }
}

/// Early repayment scenarios projected over 1, 3 and 5 years.
pub fn debt_reduction_scenarios() -> Vec<DebtScenario> {
    debug!("Building debt reduction scenarios");
    vec![
        DebtScenario {
            name: "Pago Agresivo".to_string(),
            description: "Utiliza el 20% del flujo de caja libre excedente para pagos anticipados."
                .to_string(),
            projections: vec![
                projection(1, 1_200_000, 695_000_075),
                projection(3, 3_600_000, 455_000_075),
                projection(5, 6_000_000, 215_000_075),
            ],
        },
        DebtScenario {
            name: "Pago Moderado".to_string(),
            description: "Utiliza el 10% del flujo de caja libre excedente para pagos anticipados."
                .to_string(),
            projections: vec![
                projection(1, 600_000, 755_000_075),
                projection(3, 1_800_000, 635_000_075),
                projection(5, 3_000_000, 515_000_075),
            ],
        },
    ]
}

/// Project margins, highest margin first.
///
/// Projects with equal margins keep their relative order.
pub fn project_margins() -> Vec<ProjectMargin> {
    let mut projects = vec![
        ProjectMargin::new("Proyecto Alfa", 850_000, 600_000, 250_000),
        ProjectMargin::new("Automatización Z", 1_200_000, 950_000, 250_000),
        ProjectMargin::new("Mantenimiento Beta", 450_000, 300_000, 150_000),
        ProjectMargin::new("Ingeniería Delta", 2_100_000, 1_500_000, 600_000),
        ProjectMargin::new("Consultoría Gamma", 300_000, 200_000, 100_000),
    ];
    projects.sort_by(|a, b| b.margin.cmp(&a.margin));
    debug!(count = projects.len(), "Built project margins");
    projects
}

pub fn operational_data() -> OperationalData {
    debug!("Building operational data");
    OperationalData {
        utilization: UtilizationSeries {
            labels: labels(&["Ingeniería", "Técnicos", "Equipo A", "Equipo B", "Software"]),
            used: vec![75.0, 85.0, 60.0, 90.0, 80.0],
            available: vec![25.0, 15.0, 40.0, 10.0, 20.0],
        },
        on_time_delivery: 0.92,
        rework_rate: 0.047,
    }
}

pub fn commercial_data() -> CommercialData {
    debug!("Building commercial data");
    CommercialData {
        conversion_rate: 0.28,
        average_project_value: Decimal::from(750_000),
        funnel: FunnelSeries {
            labels: labels(&[
                "Prospectos Calificados (MQL)",
                "Cotizaciones Enviadas",
                "Negociación",
                "Proyectos Ganados",
            ]),
            values: vec![150, 80, 45, 22],
        },
    }
}

/// Interest coverage gauge: below 1.5 is bad, above 3 is good.
pub fn interest_coverage_gauge(ratios: &FinancialRatios) -> GaugeConfig {
    GaugeConfig::new(ratios.interest_coverage, 5.0, GaugeZones { low: 1.5, mid: 3.0 })
}

/// Administrative expenses as a percentage of revenue: above 40% is bad.
pub fn admin_expense_gauge(ratios: &FinancialRatios) -> GaugeConfig {
    let percent = (ratios.admin_expense_ratio * 100.0 * 100.0).round() / 100.0;
    GaugeConfig::new(percent, 50.0, GaugeZones { low: 30.0, mid: 40.0 })
        .inverted(true)
        .unit("%")
}
