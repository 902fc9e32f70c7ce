use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::charts::ChartError;
use crate::settings::get_settings;

/// A chart that could not be drawn onto its surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFailure {
    pub surface: &'static str,
    pub reason: String,
}

impl ChartFailure {
    pub fn new(surface: &'static str, err: &ChartError) -> Self {
        Self {
            surface,
            reason: err.to_string(),
        }
    }
}

/// Problems found while filling the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardIssues {
    pub failures: Vec<ChartFailure>,
    /// Series whose parallel arrays differ in length
    pub inconsistent_series: Vec<&'static str>,
}

impl DashboardIssues {
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty() && self.inconsistent_series.is_empty()
    }

    pub fn failed_surfaces(&self) -> Vec<&'static str> {
        self.failures.iter().map(|failure| failure.surface).collect()
    }

    /// Failed charts are errors; inconsistent data alone is a warning.
    pub fn alert_class(&self) -> &'static str {
        if self.failures.is_empty() { "alert-warning" } else { "alert-error" }
    }

    pub fn title(&self) -> String {
        match self.failures.len() {
            0 => "Series inconsistentes".to_string(),
            1 => "No se pudo dibujar 1 gráfica".to_string(),
            count => format!("No se pudieron dibujar {} gráficas", count),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .failures
            .iter()
            .map(|failure| format!("#{}: {}", failure.surface, failure.reason))
            .collect();
        if !self.inconsistent_series.is_empty() {
            lines.push(format!("Series inconsistentes: {}", self.inconsistent_series.join(", ")));
        }
        lines
    }
}

#[derive(Properties, PartialEq)]
pub struct IssueNoticeProps {
    pub issues: DashboardIssues,
    pub on_dismiss: Callback<()>,
}

/// Corner notice listing failed charts. Dismisses itself after the
/// configured duration; renders nothing when there is nothing to report.
#[function_component(IssueNotice)]
pub fn issue_notice(props: &IssueNoticeProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.issues.clone(), move |issues| {
            let timeout = (!issues.is_empty()).then(|| {
                Timeout::new(get_settings().notice_duration_ms, move || on_dismiss.emit(()))
            });
            // Dropping the handle cancels a pending dismissal
            move || drop(timeout)
        });
    }

    if props.issues.is_empty() {
        return html! {};
    }

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast toast-top toast-end z-50">
            <div role="alert" class={classes!("alert", props.issues.alert_class(), "shadow-lg")}>
                <i class="fas fa-chart-line"></i>
                <div>
                    <h3 class="font-bold">{props.issues.title()}</h3>
                    <ul class="text-xs">
                        { for props.issues.lines().into_iter().map(|line| html! { <li>{line}</li> }) }
                    </ul>
                </div>
                <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                    <i class="fas fa-times"></i>
                </button>
            </div>
        </div>
    }
}
