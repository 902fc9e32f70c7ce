use kpi::format::format_thousands;
use kpi::DebtScenario;
use yew::prelude::*;

/// One table row per scenario and horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRow {
    pub key: String,
    pub scenario: String,
    pub horizon: String,
    pub debt_reduced: String,
    pub remaining_debt: String,
}

pub fn scenario_rows(scenarios: &[DebtScenario]) -> Vec<ScenarioRow> {
    scenarios
        .iter()
        .flat_map(|scenario| {
            scenario.projections.iter().map(move |projection| ScenarioRow {
                key: format!("{}-{}", scenario.name, projection.years),
                scenario: scenario.name.clone(),
                horizon: match projection.years {
                    1 => "1 año".to_string(),
                    years => format!("{} años", years),
                },
                debt_reduced: format_thousands(projection.debt_reduced),
                remaining_debt: format_thousands(projection.remaining_debt),
            })
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub scenarios: Vec<DebtScenario>,
}

#[function_component(DebtScenarioTable)]
pub fn debt_scenario_table(props: &Props) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="table table-sm">
                <thead>
                    <tr>
                        <th>{"Escenario"}</th>
                        <th>{"Horizonte"}</th>
                        <th class="text-right">{"Deuda Reducida"}</th>
                        <th class="text-right">{"Deuda Restante"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for scenario_rows(&props.scenarios).into_iter().map(|row| html! {
                        <tr key={row.key}>
                            <td class="font-medium">{row.scenario}</td>
                            <td>{row.horizon}</td>
                            <td class="font-mono text-right text-success">{row.debt_reduced}</td>
                            <td class="font-mono text-right">{row.remaining_debt}</td>
                        </tr>
                    })}
                </tbody>
            </table>
            <ul class="mt-2 text-xs text-gray-500">
                { for props.scenarios.iter().map(|scenario| html! {
                    <li key={scenario.name.clone()}>{format!("{}: {}", scenario.name, scenario.description)}</li>
                })}
            </ul>
        </div>
    }
}
