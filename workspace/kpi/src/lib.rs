//! Business KPI data shared by the dashboard frontend.
//!
//! Everything in this crate is plain data and pure functions so it can be
//! tested natively, away from the browser:
//! - [`model`]: the series and ratio structures the charts consume
//! - [`provider`]: the fixed financial, operational and commercial figures
//! - [`gauge`]: gauge zones and the tone picked for the current value
//! - [`format`]: number formatting used by the table and the KPI cards

pub mod format;
pub mod gauge;
pub mod model;
pub mod provider;

pub use gauge::{GaugeConfig, GaugeZones, Tone};
pub use model::{
    CommercialData, DebtProjection, DebtScenario, DebtSeries, FinancialData, FinancialRatios,
    FunnelSeries, OperationalData, ProjectMargin, UtilizationSeries,
};
