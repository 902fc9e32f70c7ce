use kpi::format::format_percent;
use kpi::{FunnelSeries, Tone};
use yew::prelude::*;

pub fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Good => "text-success",
        Tone::Caution => "text-warning",
        Tone::Bad => "text-error",
    }
}

#[derive(Properties, PartialEq)]
pub struct KpiCardProps {
    pub title: AttrValue,
    pub value: String,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub value_class: Option<&'static str>,
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-title">{&props.title}</div>
                <div class={classes!("stat-value", props.value_class.unwrap_or("text-primary"))}>{&props.value}</div>
                {if let Some(description) = &props.description {
                    html! { <div class="stat-desc">{description}</div> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FunnelStagesProps {
    pub series: FunnelSeries,
}

/// Conversion from each funnel stage to the next one.
#[function_component(FunnelStages)]
pub fn funnel_stages(props: &FunnelStagesProps) -> Html {
    let conversion = props.series.stage_conversion();

    html! {
        <ul class="mt-4 space-y-1 text-sm">
            { for props.series.labels.iter().skip(1).zip(conversion).map(|(label, rate)| html! {
                <li key={label.clone()} class="flex justify-between">
                    <span class="text-gray-500">{label}</span>
                    <span class="font-mono">{format_percent(rate)}</span>
                </li>
            })}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_class() {
        assert_eq!(tone_class(Tone::Good), "text-success");
        assert_eq!(tone_class(Tone::Caution), "text-warning");
        assert_eq!(tone_class(Tone::Bad), "text-error");
    }
}
