use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use super::error::{ChartError, Result};
use super::theme::PlotSpec;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(
        div_id: &str,
        data: JsValue,
        layout: JsValue,
        config: JsValue,
    ) -> std::result::Result<JsValue, JsValue>;
}

/// Draws `spec` onto the element with id `surface_id`.
pub fn render(surface_id: &str, spec: &PlotSpec) -> Result<()> {
    let window = web_sys::window().ok_or(ChartError::NoWindow)?;
    let document = window.document().ok_or(ChartError::NoWindow)?;

    if document.get_element_by_id(surface_id).is_none() {
        return Err(ChartError::SurfaceNotFound(surface_id.to_string()));
    }

    if !js_sys::Reflect::has(&window, &JsValue::from_str("Plotly")).unwrap_or(false) {
        return Err(ChartError::PlotlyMissing);
    }

    // Plain objects instead of Maps, Plotly reads them with property access
    let serializer = Serializer::json_compatible();
    let data = spec.data.serialize(&serializer)?;
    let layout = spec.layout.serialize(&serializer)?;
    let config = spec.config.serialize(&serializer)?;

    new_plot(surface_id, data, layout, config)
        .map_err(|err| ChartError::Plotly(format!("{:?}", err)))?;

    log::debug!("Rendered chart on #{} with {} trace(s)", surface_id, spec.data.len());
    Ok(())
}
