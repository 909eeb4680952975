use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub openai: OpenAiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    /// Maximum database connections (default: 5)
    pub max_db_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/refinarr.db".to_string(),
            log_level: "info".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,

    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    pub base_url: String,

    /// Overridden by the `OPENAI_API_KEY` environment variable when set.
    pub api_key: String,

    pub model: String,

    /// Completion token budget per request.
    pub max_tokens: u32,

    /// Request timeout in seconds (default: 30)
    pub request_timeout_seconds: u32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: String::new(),
            model: "gpt-4".to_string(),
            max_tokens: 150,
            request_timeout_seconds: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            server: ServerConfig::default(),
            openai: OpenAiConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Path::new("config.toml");

        let mut config = if path.exists() {
            info!("Loading config from: {}", path.display());
            Self::load_from_path(path)?
        } else {
            info!("No config file found, using defaults");
            Self::default()
        };

        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            config.openai.api_key = key;
        }
        if let Ok(url) = std::env::var("OPENAI_BASE_URL") {
            config.openai.base_url = url;
        }

        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Path::new("config.toml");
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.general.database_path.is_empty() {
            anyhow::bail!("Database path cannot be empty");
        }

        if self.openai.base_url.is_empty() {
            anyhow::bail!("OpenAI base URL cannot be empty");
        }

        if self.openai.max_tokens == 0 {
            anyhow::bail!("OpenAI max_tokens must be > 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.openai.model, "gpt-4");
        assert_eq!(config.openai.max_tokens, 150);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn empty_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.general.database_path, "sqlite:data/refinarr.db");
        assert_eq!(config.general.max_db_connections, 5);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [openai]
            model = "gpt-4o"
            "#,
        )
        .unwrap();

        assert_eq!(config.openai.model, "gpt-4o");
        assert_eq!(config.openai.max_tokens, 150);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn zero_max_tokens_is_rejected() {
        let mut config = Config::default();
        config.openai.max_tokens = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let path = std::env::temp_dir().join(format!(
            "refinarr-config-test-{}.toml",
            std::process::id()
        ));

        let mut config = Config::default();
        config.server.port = 9100;
        config.openai.model = "gpt-4o".to_string();
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.server.port, 9100);
        assert_eq!(loaded.openai.model, "gpt-4o");
        assert_eq!(loaded.general.database_path, "sqlite:data/refinarr.db");

        std::fs::remove_file(&path).ok();
    }
}
