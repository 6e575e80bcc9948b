use briefme_core::DashboardConfig;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

/// Contents of `briefme.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BriefMeConfig {
    pub server: ServerConfig,
    pub dashboard: DashboardSection,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub http_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 9191)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardSection {
    pub today_preview_limit: usize,
    pub follow_up_preview_limit: usize,
}

impl Default for DashboardSection {
    fn default() -> Self {
        let defaults = DashboardConfig::default();
        Self {
            today_preview_limit: defaults.today_preview_limit,
            follow_up_preview_limit: defaults.follow_up_preview_limit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub max_chars: usize,
    /// Use the compact renderer unless a command asks otherwise.
    pub compact: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_chars: DashboardConfig::default().max_chars,
            compact: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl BriefMeConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig::new()
            .with_today_preview_limit(self.dashboard.today_preview_limit)
            .with_follow_up_preview_limit(self.dashboard.follow_up_preview_limit)
            .with_max_chars(self.render.max_chars)
    }

    /// All problems found, empty when the config is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if let Err(e) = self.dashboard_config().validate() {
            errors.push(e.to_string());
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            errors.push(format!(
                "[logging] level must be one of trace, debug, info, warn, error (got {:?})",
                self.logging.level
            ));
        }
        errors
    }
}
