use thiserror::Error;

/// Error types for chart construction and rendering
#[derive(Error, Debug)]
pub enum ChartError {
    /// No element with the given id exists in the page
    #[error("Drawing surface not found: {0}")]
    SurfaceNotFound(String),

    /// Browser window or document is not available
    #[error("Browser window is not available")]
    NoWindow,

    /// Plotly.js has not been loaded by the page
    #[error("Plotly.js is not loaded")]
    PlotlyMissing,

    /// Error building the JSON description of a chart
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error converting a chart description into JavaScript values
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_wasm_bindgen::Error),

    /// Exception thrown by Plotly.js while drawing
    #[error("Plotly error: {0}")]
    Plotly(String),
}

/// Type alias for Result with ChartError
pub type Result<T> = std::result::Result<T, ChartError>;
