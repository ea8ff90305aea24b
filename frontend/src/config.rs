use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// How a session found in storage at startup is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPolicy {
    /// Trust the stored token until the backend rejects it.
    #[default]
    TrustStorage,
    /// Stay in the loading state until `GET /employees/me` confirms the token.
    Revalidate,
}

/// Raw configuration as supplied by `window.__WORKWISE_ENV`, `window.__WORKWISE_CONFIG`
/// or `./config.json`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "TIME_ZONE")]
    pub time_zone: Option<String>,
    #[serde(default, alias = "SESSION_POLICY")]
    pub session_policy: Option<SessionPolicy>,
    #[serde(default, alias = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub time_zone: Option<Tz>,
    pub session_policy: SessionPolicy,
    pub log_level: log::Level,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            time_zone: None,
            session_policy: SessionPolicy::default(),
            log_level: log::Level::Info,
        }
    }
}

impl ResolvedConfig {
    pub fn from_runtime(raw: RuntimeConfig) -> Self {
        let defaults = Self::default();
        let api_base_url = raw
            .api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);
        let time_zone = raw.time_zone.as_deref().and_then(|name| {
            name.parse::<Tz>()
                .map_err(|err| log::warn!("Ignoring unknown time zone {:?}: {}", name, err))
                .ok()
        });
        let log_level = raw
            .log_level
            .as_deref()
            .and_then(|level| level.parse::<log::Level>().ok())
            .unwrap_or(defaults.log_level);
        Self {
            api_base_url,
            time_zone,
            session_policy: raw.session_policy.unwrap_or_default(),
            log_level,
        }
    }
}

static CONFIG: OnceLock<ResolvedConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_window_object(name: &str) -> Option<RuntimeConfig> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    serde_json::from_str(&json)
        .map_err(|err| log::warn!("Ignoring malformed window.{}: {}", name, err))
        .ok()
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    read_window_object("__WORKWISE_ENV").or_else(|| read_window_object("__WORKWISE_CONFIG"))
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    use anyhow::Context;

    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .context("window location is unavailable")?;
    let resp = reqwest::get(format!("{}/config.json", origin))
        .await
        .context("requesting ./config.json")?;
    if !resp.status().is_success() {
        anyhow::bail!("./config.json returned {}", resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("decoding ./config.json")
}

#[cfg(target_arch = "wasm32")]
async fn load_runtime_config() -> RuntimeConfig {
    if let Some(existing) = snapshot_from_globals() {
        return existing;
    }
    match fetch_runtime_config().await {
        Ok(cfg) => cfg,
        Err(err) => {
            log::info!("Using default runtime config ({:#})", err);
            RuntimeConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_runtime_config() -> RuntimeConfig {
    RuntimeConfig::default()
}

/// Resolves the runtime configuration once; later calls return the cached value.
pub async fn init() -> &'static ResolvedConfig {
    if let Some(cached) = CONFIG.get() {
        return cached;
    }
    let resolved = ResolvedConfig::from_runtime(load_runtime_config().await);
    CONFIG.get_or_init(|| resolved)
}

pub fn current() -> ResolvedConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

pub async fn await_api_base_url() -> String {
    init().await.api_base_url.clone()
}

pub fn current_time_zone() -> Option<Tz> {
    CONFIG.get().and_then(|cfg| cfg.time_zone)
}

pub fn session_policy() -> SessionPolicy {
    CONFIG
        .get()
        .map(|cfg| cfg.session_policy)
        .unwrap_or_default()
}
