use crate::error::{ThinkResult, ThinkToolError};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_NAME: &str = "think-tool";
pub const DEFAULT_SERVER_VERSION: &str = "1.0.0";
pub const DEFAULT_TRANSPORT: &str = "stdio";

/// think-tool service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThinkToolConfig {
    /// Server configuration
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server name advertised to clients
    pub name: String,
    /// Server version advertised to clients
    pub version: String,
    /// Transport the server listens on
    pub transport: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
            version: DEFAULT_SERVER_VERSION.to_string(),
            transport: DEFAULT_TRANSPORT.to_string(),
        }
    }
}

impl ThinkToolConfig {
    /// Load configuration from defaults, an optional TOML file and the environment
    pub fn load() -> ThinkResult<Self> {
        let config_file =
            std::env::var("THINK_TOOL_CONFIG").unwrap_or_else(|_| "think-tool.toml".to_string());
        Self::load_from(&config_file)
    }

    /// Load configuration using the given file path (missing files are ignored)
    pub fn load_from(config_file: &str) -> ThinkResult<Self> {
        let config = Config::builder()
            .set_default("server.name", DEFAULT_SERVER_NAME)?
            .set_default("server.version", DEFAULT_SERVER_VERSION)?
            .set_default("server.transport", DEFAULT_TRANSPORT)?
            .add_source(File::with_name(config_file).required(false))
            // THINK_TOOL_SERVER__NAME, THINK_TOOL_SERVER__TRANSPORT, ...
            .add_source(
                Environment::with_prefix("THINK_TOOL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut loaded: Self = config.try_deserialize()?;
        if loaded.server.name.trim().is_empty() {
            tracing::warn!("Empty server name configured, using default: {}", DEFAULT_SERVER_NAME);
            loaded.server.name = DEFAULT_SERVER_NAME.to_string();
        }
        Ok(loaded)
    }

    /// Validate configuration
    pub fn validate(&self) -> ThinkResult<()> {
        if self.server.transport != DEFAULT_TRANSPORT {
            return Err(ThinkToolError::UnsupportedTransport {
                transport: self.server.transport.clone(),
            });
        }

        tracing::info!(
            "Configuration validated: server '{}' v{} on {}",
            self.server.name,
            self.server.version,
            self.server.transport
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent.toml");

        let config = ThinkToolConfig::load_from(missing.to_str().unwrap()).unwrap();
        assert_eq!(config.server.name, "think-tool");
        assert_eq!(config.server.version, "1.0.0");
        assert_eq!(config.server.transport, "stdio");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("think-tool.toml");
        fs::write(&path, "[server]\nname = \"reasoning-log\"\nversion = \"2.1.0\"\n").unwrap();

        let config = ThinkToolConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.server.name, "reasoning-log");
        assert_eq!(config.server.version, "2.1.0");
        assert_eq!(config.server.transport, "stdio");
    }

    #[test]
    fn test_empty_name_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("think-tool.toml");
        fs::write(&path, "[server]\nname = \"\"\n").unwrap();

        let config = ThinkToolConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.server.name, DEFAULT_SERVER_NAME);
    }

    #[test]
    fn test_unsupported_transport_rejected() {
        let mut config = ThinkToolConfig::default();
        config.server.transport = "sse".to_string();

        match config.validate() {
            Err(ThinkToolError::UnsupportedTransport { transport }) => assert_eq!(transport, "sse"),
            other => panic!("expected unsupported transport, got {:?}", other),
        }
    }
}
