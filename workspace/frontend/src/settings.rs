use log::Level;
use web_sys::window;

/// Global dashboard settings
#[derive(Debug, Clone)]
pub struct DashboardSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Pane shown when the page opens (e.g., "finanzas")
    pub default_tab: String,

    /// Height of every chart surface in pixels
    pub chart_height_px: u32,

    /// Show the Plotly mode bar above charts
    pub show_mode_bar: bool,

    /// How long the chart failure notice stays up, in milliseconds
    pub notice_duration_ms: u32,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            default_tab: "finanzas".to_string(),
            chart_height_px: 300,
            show_mode_bar: false,
            notice_duration_ms: 8000,
        }
    }
}

impl DashboardSettings {
    /// Create settings from window location and localStorage
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(log_level)) = storage.get_item("kpi_dashboard_log_level") {
                    settings.log_level = parse_level(&log_level).unwrap_or(settings.log_level);
                }

                if let Ok(Some(default_tab)) = storage.get_item("kpi_dashboard_default_tab") {
                    settings.default_tab = default_tab;
                }

                if let Ok(Some(height)) = storage.get_item("kpi_dashboard_chart_height") {
                    if let Ok(height_val) = height.parse::<u32>() {
                        settings.chart_height_px = height_val;
                    }
                }

                if let Ok(Some(mode_bar)) = storage.get_item("kpi_dashboard_show_mode_bar") {
                    settings.show_mode_bar = mode_bar.to_lowercase() == "true";
                }

                if let Ok(Some(duration)) = storage.get_item("kpi_dashboard_notice_duration_ms") {
                    if let Ok(duration_val) = duration.parse::<u32>() {
                        settings.notice_duration_ms = duration_val;
                    }
                }
            }
        }

        settings
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<DashboardSettings> = RefCell::new(DashboardSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> DashboardSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = DashboardSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("TRACE"), Some(Level::Trace));
        assert_eq!(parse_level("warn"), Some(Level::Warn));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_defaults() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.default_tab, "finanzas");
        assert_eq!(settings.chart_height_px, 300);
        assert!(!settings.show_mode_bar);
    }
}
