use yew::prelude::*;

pub mod charts;
mod components;
pub mod settings;

use components::dashboard::Dashboard;
use components::layout::Layout;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Layout title="Tablero de Indicadores">
            <Dashboard />
        </Layout>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== KPI Dashboard Starting ===");
    log::info!("Dashboard settings: {:?}", settings);
    log::debug!("Icons come from the Font Awesome stylesheet, nothing to initialize");

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Dashboard initialized successfully");
}
