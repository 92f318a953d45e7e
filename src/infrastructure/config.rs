use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TrackerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub views: ViewSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BackendSettings {
    /// Root of the performance REST API, including the `/api` prefix
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5098/api".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ViewSettings {
    /// Race cards requested when the caller gives no limit
    pub race_card_limit: usize,
    /// Bars shown on the members status chart
    pub member_limit: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            race_card_limit: 500,
            member_limit: 10,
        }
    }
}

/// `config/tracker.*` if present, overridden by `TRACKER__SECTION__KEY` variables
pub fn load_tracker_config() -> anyhow::Result<TrackerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/tracker").required(false))
        .add_source(config::Environment::with_prefix("TRACKER").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
