use kpi::format::format_thousands;
use kpi::ProjectMargin;
use yew::prelude::*;

pub const MARGIN_TABLE_BODY: &str = "proyectos-table";

pub fn margin_class(project: &ProjectMargin) -> &'static str {
    if project.is_profitable() { "text-success" } else { "text-error" }
}

/// Display text of one margin table row.
#[derive(Debug, Clone, PartialEq)]
pub struct MarginRow {
    pub name: String,
    pub margin: String,
    pub class: &'static str,
}

/// Rows in the order given, which is the provider's descending margin order.
pub fn margin_rows(projects: &[ProjectMargin]) -> Vec<MarginRow> {
    projects
        .iter()
        .map(|project| MarginRow {
            name: project.name.clone(),
            margin: format_thousands(project.margin),
            class: margin_class(project),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Already sorted by margin
    pub projects: Vec<ProjectMargin>,
}

#[function_component(ProjectMarginTable)]
pub fn project_margin_table(props: &Props) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"Proyecto"}</th>
                        <th class="text-right">{"Margen"}</th>
                    </tr>
                </thead>
                <tbody id={MARGIN_TABLE_BODY}>
                    { for margin_rows(&props.projects).into_iter().map(|row| html! {
                        <tr key={row.name.clone()} class="hover">
                            <td class="font-medium">{row.name}</td>
                            <td class={classes!("font-mono", "text-right", row.class)}>{row.margin}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_class() {
        let alfa = ProjectMargin::new("Alfa", 850000, 600000, 250000);
        assert_eq!(margin_class(&alfa), "text-success");
        assert_eq!(margin_class(&ProjectMargin::new("Cero", 100, 100, 0)), "text-error");
        assert_eq!(margin_class(&ProjectMargin::new("Pérdida", 100, 200, -100)), "text-error");
    }

    #[test]
    fn test_rows_from_fixed_projects() {
        let rows = margin_rows(&kpi::provider::project_margins());

        let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Ingeniería Delta",
                "Proyecto Alfa",
                "Automatización Z",
                "Mantenimiento Beta",
                "Consultoría Gamma",
            ]
        );

        let margins: Vec<_> = rows.iter().map(|row| row.margin.as_str()).collect();
        assert_eq!(margins, vec!["600.0K", "250.0K", "250.0K", "150.0K", "100.0K"]);
        assert!(rows.iter().all(|row| row.class == "text-success"));
    }

    #[test]
    fn test_loss_row_is_red() {
        let rows = margin_rows(&[ProjectMargin::new("Pérdida", 100_000, 150_000, -50_000)]);
        assert_eq!(rows[0].margin, "-50.0K");
        assert_eq!(rows[0].class, "text-error");
    }
}
