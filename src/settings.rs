use crate::alerts::DEFAULT_PAGE_SIZE;

/// Runtime settings, read once at startup. Values that fail to parse fall
/// back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub port: u16,
    /// Extra origin allowed by CORS; any origin is allowed when unset.
    pub frontend_url: Option<String>,
    pub seed_demo_data: bool,
    pub alert_page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".into(),
            port: 8080,
            frontend_url: None,
            seed_demo_data: true,
            alert_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        fn str_env(name: &str) -> Option<String> {
            std::env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
        }
        fn parsed_env<T: std::str::FromStr>(name: &str, default: T) -> T {
            str_env(name).and_then(|v| v.parse().ok()).unwrap_or(default)
        }
        fn bool_env(name: &str, default: bool) -> bool {
            match str_env(name).map(|v| v.to_ascii_lowercase()).as_deref() {
                Some("1" | "true" | "yes") => true,
                Some("0" | "false" | "no") => false,
                _ => default,
            }
        }

        let defaults = Self::default();
        Self {
            bind_addr: str_env("ADMIN_BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: parsed_env("ADMIN_PORT", defaults.port),
            frontend_url: str_env("FRONTEND_URL"),
            seed_demo_data: bool_env("ADMIN_SEED_DEMO_DATA", defaults.seed_demo_data),
            alert_page_size: parsed_env("ALERT_PAGE_SIZE", defaults.alert_page_size).max(1),
        }
    }
}
