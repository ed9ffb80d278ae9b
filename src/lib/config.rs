//! Build-time configuration for the API endpoint, timeouts and log level with
//! an optional runtime override. The runtime config is read from
//! `window.HALLSYNC_CONFIG` (if present) so static deployments can point at a
//! different backend without rebuilding. Configuration values are public; do
//! not store secrets here.

/// Default API base used by local development backends.
const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;
/// Default lifetime (milliseconds) of a toast notification.
const DEFAULT_TOAST_TIMEOUT_MS: u32 = 3_000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    pub toast_timeout_ms: u32,
    pub log_level: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env();

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    fn from_build_env() -> Self {
        Self {
            api_base_url: option_env!("HALLSYNC_API_BASE_URL")
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            request_timeout_ms: option_env!("HALLSYNC_REQUEST_TIMEOUT_MS")
                .and_then(parse_millis)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
            toast_timeout_ms: option_env!("HALLSYNC_TOAST_TIMEOUT_MS")
                .and_then(parse_millis)
                .unwrap_or(DEFAULT_TOAST_TIMEOUT_MS),
            log_level: option_env!("HALLSYNC_LOG_LEVEL")
                .and_then(normalize_runtime_value)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Maps the configured log level onto a `tracing` level, defaulting to INFO.
    pub fn tracing_level(&self) -> tracing::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => tracing::Level::INFO,
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    request_timeout_ms: Option<u32>,
    toast_timeout_ms: Option<u32>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.request_timeout_ms {
        config.request_timeout_ms = value;
    }
    if let Some(value) = runtime.toast_timeout_ms {
        config.toast_timeout_ms = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("HALLSYNC_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        request_timeout_ms: read_runtime_value(&object, "request_timeout_ms")
            .as_deref()
            .and_then(parse_millis),
        toast_timeout_ms: read_runtime_value(&object, "toast_timeout_ms")
            .as_deref()
            .and_then(parse_millis),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    // Numbers are accepted as well as strings for the timeout keys.
    let text = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&text)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_millis(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|millis| *millis > 0)
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value, parse_millis,
    };

    fn defaults() -> AppConfig {
        AppConfig {
            api_base_url: "http://localhost:5000/api".to_string(),
            request_timeout_ms: 10_000,
            toast_timeout_ms: 3_000,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://halls.example.edu/api "),
            Some("https://halls.example.edu/api".to_string())
        );
    }

    #[test]
    fn parse_millis_rejects_zero_and_garbage() {
        assert_eq!(parse_millis("2500"), Some(2500));
        assert_eq!(parse_millis(" 15000 "), Some(15000));
        assert_eq!(parse_millis("0"), None);
        assert_eq!(parse_millis("fast"), None);
        assert_eq!(parse_millis("-1"), None);
    }

    #[test]
    fn apply_runtime_overrides_ignores_missing_values() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            request_timeout_ms: parse_millis("nope"),
            toast_timeout_ms: None,
            log_level: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, defaults());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://halls.example.edu/api"),
            request_timeout_ms: parse_millis("20000"),
            toast_timeout_ms: parse_millis("5000"),
            log_level: normalize_runtime_value("debug"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://halls.example.edu/api");
        assert_eq!(config.request_timeout_ms, 20_000);
        assert_eq!(config.toast_timeout_ms, 5_000);
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn unknown_log_level_defaults_to_info() {
        let mut config = defaults();
        config.log_level = "verbose".to_string();
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }
}
