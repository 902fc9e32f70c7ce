use std::rc::Rc;

use yew::html::ChildrenWithProps;
use yew::virtual_dom::VChild;
use yew::prelude::*;

/// A tab button and the id of the pane it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    /// Shared by the tab button (`data-tab`) and its pane (`id`)
    pub id: String,
    pub label: String,
    pub icon: &'static str,
}

impl Tab {
    pub fn new(id: &str, label: &str, icon: &'static str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            icon,
        }
    }
}

/// Which of a fixed set of tabs is active. Exactly one tab is active unless
/// the set is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct TabSet {
    tabs: Vec<Tab>,
    active: Option<usize>,
}

impl TabSet {
    /// Starts with `initial` active, or the first tab if no tab has that id.
    pub fn new(tabs: Vec<Tab>, initial: &str) -> Self {
        let active = tabs
            .iter()
            .position(|tab| tab.id == initial)
            .or(if tabs.is_empty() { None } else { Some(0) });
        Self { tabs, active }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active(&self) -> Option<&Tab> {
        self.active.map(|index| &self.tabs[index])
    }

    /// Makes `target` the only active tab. Returns `false` and changes
    /// nothing when no tab has that id.
    pub fn activate(&mut self, target: &str) -> bool {
        match self.tabs.iter().position(|tab| tab.id == target) {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().is_some_and(|tab| tab.id == id)
    }

    pub fn is_pane_visible(&self, pane_id: &str) -> bool {
        self.is_active(pane_id)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct TabPaneProps {
    pub id: AttrValue,
    /// Set by [`DashboardTabs`]
    #[prop_or_default]
    pub hidden: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TabPane)]
pub fn tab_pane(props: &TabPaneProps) -> Html {
    html! {
        <div id={props.id.clone()} role="tabpanel" class={classes!("tab-pane", props.hidden.then_some("hidden"))}>
            { for props.children.iter() }
        </div>
    }
}

/// Classes of a tab button; only the active one carries `active-tab`.
pub fn tab_button_classes(is_active: bool) -> Classes {
    classes!(
        "tab",
        "tab-btn",
        is_active.then_some("tab-active"),
        is_active.then_some("active-tab")
    )
}

/// Hides every pane except the one belonging to the active tab.
fn with_visibility<I>(tab_set: &TabSet, panes: I) -> Vec<VChild<TabPane>>
where
    I: IntoIterator<Item = VChild<TabPane>>,
{
    panes
        .into_iter()
        .map(|mut pane| {
            let pane_props = Rc::make_mut(&mut pane.props);
            pane_props.hidden = !tab_set.is_pane_visible(&pane_props.id);
            pane
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct DashboardTabsProps {
    pub tabs: Vec<Tab>,
    /// Tab active when the page opens
    pub initial: String,
    pub children: ChildrenWithProps<TabPane>,
}

/// Tab buttons above a set of panes; clicking a tab shows its pane and hides
/// the others. Renders nothing when there are no tabs.
#[function_component(DashboardTabs)]
pub fn dashboard_tabs(props: &DashboardTabsProps) -> Html {
    let tab_set = {
        let tabs = props.tabs.clone();
        let initial = props.initial.clone();
        use_state(move || TabSet::new(tabs, &initial))
    };

    let active_id = tab_set.active().map(|tab| tab.id.clone());
    use_effect_with(active_id, |active_id| {
        if active_id.is_some() {
            notify_resize();
        }
        || ()
    });

    if tab_set.tabs().is_empty() {
        log::debug!("No tabs to set up");
        return html! {};
    }

    html! {
        <>
            <div id="dashboard-tabs" role="tablist" class="tabs tabs-boxed bg-base-100 shadow mb-6">
                { for tab_set.tabs().iter().map(|tab| {
                    let is_active = tab_set.is_active(&tab.id);
                    let onclick = {
                        let tab_set = tab_set.clone();
                        let target = tab.id.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*tab_set).clone();
                            if next.activate(&target) {
                                log::trace!("Switching to tab {}", target);
                                tab_set.set(next);
                            }
                        })
                    };

                    html! {
                        <button
                            key={tab.id.clone()}
                            role="tab"
                            data-tab={tab.id.clone()}
                            class={tab_button_classes(is_active)}
                            {onclick}
                        >
                            <i class={format!("{} mr-2", tab.icon)}></i>
                            {&tab.label}
                        </button>
                    }
                })}
            </div>
            <div id="content-panes">
                { for with_visibility(&tab_set, props.children.iter()) }
            </div>
        </>
    }
}

/// Responsive Plotly charts only size themselves while visible, so a pane
/// that was just shown needs a resize pass.
fn notify_resize() {
    let Some(window) = web_sys::window() else {
        return;
    };
    match web_sys::Event::new("resize") {
        Ok(event) => {
            if let Err(err) = window.dispatch_event(&event) {
                log::warn!("Failed to dispatch resize event: {:?}", err);
            }
        }
        Err(err) => log::warn!("Failed to create resize event: {:?}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Vec<Tab> {
        vec![
            Tab::new("finanzas", "Finanzas", "fas fa-coins"),
            Tab::new("operaciones", "Operaciones", "fas fa-cogs"),
            Tab::new("comercial", "Comercial", "fas fa-handshake"),
        ]
    }

    fn visible_panes(tab_set: &TabSet) -> Vec<&str> {
        ["finanzas", "operaciones", "comercial"]
            .into_iter()
            .filter(|id| tab_set.is_pane_visible(id))
            .collect()
    }

    #[test]
    fn test_initial_tab() {
        let tab_set = TabSet::new(tabs(), "comercial");
        assert_eq!(tab_set.active().map(|t| t.id.as_str()), Some("comercial"));
        assert_eq!(visible_panes(&tab_set), vec!["comercial"]);
    }

    #[test]
    fn test_unknown_initial_tab_falls_back_to_first() {
        let tab_set = TabSet::new(tabs(), "missing");
        assert!(tab_set.is_active("finanzas"));
    }

    #[test]
    fn test_activate_shows_exactly_one_pane() {
        let mut tab_set = TabSet::new(tabs(), "finanzas");

        assert!(tab_set.activate("operaciones"));
        assert_eq!(visible_panes(&tab_set), vec!["operaciones"]);
        assert_eq!(tab_set.tabs().iter().filter(|t| tab_set.is_active(&t.id)).count(), 1);

        assert!(tab_set.activate("operaciones"));
        assert_eq!(visible_panes(&tab_set), vec!["operaciones"]);
    }

    #[test]
    fn test_activate_unknown_tab_is_noop() {
        let mut tab_set = TabSet::new(tabs(), "finanzas");
        let before = tab_set.clone();

        assert!(!tab_set.activate("ventas"));
        assert_eq!(tab_set, before);
    }

    #[test]
    fn test_empty_tab_set_is_noop() {
        let mut tab_set = TabSet::new(Vec::new(), "finanzas");

        assert!(tab_set.active().is_none());
        assert!(!tab_set.activate("finanzas"));
        assert!(!tab_set.is_pane_visible("finanzas"));
    }

    fn pane(id: &'static str) -> VChild<TabPane> {
        let props = TabPaneProps {
            id: id.into(),
            hidden: false,
            children: Children::default(),
        };
        VChild::new(props, None)
    }

    fn panes() -> Vec<VChild<TabPane>> {
        vec![pane("finanzas"), pane("operaciones"), pane("comercial")]
    }

    #[test]
    fn test_only_active_button_is_marked() {
        let tab_set = TabSet::new(tabs(), "operaciones");
        let marked: Vec<_> = tab_set
            .tabs()
            .iter()
            .filter(|tab| tab_button_classes(tab_set.is_active(&tab.id)).contains("active-tab"))
            .map(|tab| tab.id.as_str())
            .collect();
        assert_eq!(marked, vec!["operaciones"]);

        let inactive = tab_button_classes(false);
        assert!(inactive.contains("tab-btn"));
        assert!(!inactive.contains("tab-active"));
        assert!(tab_button_classes(true).contains("tab-btn"));
    }

    #[test]
    fn test_all_panes_but_active_hidden() {
        let mut tab_set = TabSet::new(tabs(), "finanzas");
        assert!(tab_set.activate("comercial"));

        let visible: Vec<_> = with_visibility(&tab_set, panes())
            .into_iter()
            .filter(|pane| !pane.props.hidden)
            .map(|pane| pane.props.id.to_string())
            .collect();
        assert_eq!(visible, vec!["comercial".to_string()]);
    }

    #[test]
    fn test_pane_without_tab_stays_hidden() {
        let tab_set = TabSet::new(tabs(), "finanzas");
        let shown = with_visibility(&tab_set, vec![pane("ventas"), pane("finanzas")]);
        assert!(shown[0].props.hidden);
        assert!(!shown[1].props.hidden);
    }
}
