use rust_decimal::Decimal;
use serde::Serialize;

/// Debt level per period against the reduction target.
///
/// `labels`, `actual` and `target` are parallel arrays.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DebtSeries {
    pub labels: Vec<String>,
    /// Actual debt, in millions of MXN
    pub actual: Vec<f64>,
    /// Reduction target, in millions of MXN
    pub target: Vec<f64>,
}

impl DebtSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_consistent(&self) -> bool {
        self.actual.len() == self.labels.len() && self.target.len() == self.labels.len()
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FinancialRatios {
    /// Operating profit over interest expense
    pub interest_coverage: f64,
    /// Administrative expenses over revenue, as a fraction
    pub admin_expense_ratio: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FinancialData {
    pub debt: DebtSeries,
    pub ratios: FinancialRatios,
}

/// Debt paid down, and debt still owed, after `years` under one scenario.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DebtProjection {
    pub years: u8,
    /// In MXN
    pub debt_reduced: Decimal,
    /// In MXN
    pub remaining_debt: Decimal,
}

impl DebtProjection {
    /// Debt at the start of the projection.
    pub fn starting_debt(&self) -> Decimal {
        self.debt_reduced + self.remaining_debt
    }
}

/// A hypothetical early repayment plan with its projections, shortest
/// horizon first.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DebtScenario {
    pub name: String,
    pub description: String,
    pub projections: Vec<DebtProjection>,
}

impl DebtScenario {
    pub fn projection(&self, years: u8) -> Option<&DebtProjection> {
        self.projections.iter().find(|projection| projection.years == years)
    }
}

/// Revenue, cost and margin of a single project.
///
/// `margin` is carried as supplied and is not recomputed from
/// `revenue - cost`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectMargin {
    pub name: String,
    pub revenue: Decimal,
    pub cost: Decimal,
    pub margin: Decimal,
}

impl ProjectMargin {
    pub fn new(name: &str, revenue: i64, cost: i64, margin: i64) -> Self {
        Self {
            name: name.to_string(),
            revenue: Decimal::from(revenue),
            cost: Decimal::from(cost),
            margin: Decimal::from(margin),
        }
    }

    pub fn is_profitable(&self) -> bool {
        self.margin > Decimal::ZERO
    }
}

/// Capacity usage per resource category, as percentages.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UtilizationSeries {
    pub labels: Vec<String>,
    pub used: Vec<f64>,
    pub available: Vec<f64>,
}

impl UtilizationSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_consistent(&self) -> bool {
        self.used.len() == self.labels.len() && self.available.len() == self.labels.len()
    }

    /// Used plus available for each category.
    pub fn capacity(&self) -> Vec<f64> {
        self.used
            .iter()
            .zip(&self.available)
            .map(|(used, available)| used + available)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OperationalData {
    pub utilization: UtilizationSeries,
    /// Share of deliveries made on time, as a fraction
    pub on_time_delivery: f64,
    /// Share of work that had to be redone, as a fraction
    pub rework_rate: f64,
}

/// Sales funnel counts per stage, widest stage first.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FunnelSeries {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
}

impl FunnelSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_consistent(&self) -> bool {
        self.values.len() == self.labels.len()
    }

    /// Ratio of each stage to the stage before it.
    ///
    /// The result has one entry less than the funnel. A stage following an
    /// empty stage yields `0.0`.
    pub fn stage_conversion(&self) -> Vec<f64> {
        self.values
            .windows(2)
            .map(|pair| {
                if pair[0] == 0 {
                    0.0
                } else {
                    f64::from(pair[1]) / f64::from(pair[0])
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommercialData {
    /// Quote to won-project conversion, as a fraction
    pub conversion_rate: f64,
    /// Average value of a won project, in MXN
    pub average_project_value: Decimal,
    pub funnel: FunnelSeries,
}
