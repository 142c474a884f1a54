use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

pub const LOCAL_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const PRODUCTION_API_BASE_URL: &str = "https://amkatech.co.tz";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Base URL used when nothing is configured: the local backend while developing
/// on localhost, the hosted API everywhere else.
pub fn default_base_url(hostname: &str) -> &'static str {
    match hostname {
        "localhost" | "127.0.0.1" | "[::1]" => LOCAL_API_BASE_URL,
        _ => PRODUCTION_API_BASE_URL,
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

#[cfg(target_arch = "wasm32")]
mod source {
    use super::{normalize, RuntimeConfig};
    use wasm_bindgen::JsValue;

    fn global_entry(global: &str, keys: [&str; 2]) -> Option<String> {
        // Optional object injected by env.js, e.g. window.__VEMACARS_ENV = { API_BASE_URL: "..." }
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        keys.iter()
            .filter_map(|key| js_sys::Reflect::get(&any, &(*key).into()).ok())
            .find(|value| !value.is_undefined() && !value.is_null())
            .and_then(|value| value.as_string())
            .and_then(|value| normalize(&value))
    }

    pub fn from_globals() -> Option<String> {
        global_entry("__VEMACARS_ENV", ["API_BASE_URL", "api_base_url"])
            .or_else(|| global_entry("__VEMACARS_CONFIG", ["api_base_url", "API_BASE_URL"]))
    }

    pub fn write_window_config(url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&obj, &"api_base_url".into(), &JsValue::from_str(url));
        let _ = js_sys::Reflect::set(&window, &"__VEMACARS_CONFIG".into(), &obj);
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let response = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !response.status().is_success() {
            log::debug!("no runtime config.json ({})", response.status());
            return None;
        }
        response.json::<RuntimeConfig>().await.ok()
    }

    pub fn hostname() -> String {
        web_sys::window()
            .and_then(|window| window.location().hostname().ok())
            .unwrap_or_default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod source {
    use super::{normalize, RuntimeConfig};

    pub const ENV_VAR: &str = "VEMACARS_API_BASE_URL";

    pub fn from_globals() -> Option<String> {
        std::env::var(ENV_VAR).ok().and_then(|value| normalize(&value))
    }

    pub fn write_window_config(_url: &str) {}

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        None
    }

    pub fn hostname() -> String {
        "localhost".to_string()
    }
}

/// Resolves the API base URL once and caches it for the lifetime of the app.
///
/// Precedence: `window.__VEMACARS_ENV`, then `window.__VEMACARS_CONFIG`, then
/// `./config.json`, then [`default_base_url`] for the current hostname.
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = source::from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(url) = source::fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.api_base_url)
        .and_then(|url| normalize(&url))
    {
        source::write_window_config(&url);
        return cache_base_url(&url);
    }
    cache_base_url(default_base_url(&source::hostname()))
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL: {}", url);
}
