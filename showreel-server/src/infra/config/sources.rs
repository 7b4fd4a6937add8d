use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_HOST: &str = "SHOWREEL_HOST";
pub const ENV_PORT: &str = "SHOWREEL_PORT";
pub const ENV_DATA_FILE: &str = "SHOWREEL_DATA_FILE";
pub const ENV_CORS_ORIGINS: &str = "SHOWREEL_CORS_ORIGINS";
pub const ENV_CONFIG_PATH: &str = "SHOWREEL_CONFIG";

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub storage: FileStorageConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileStorageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    /// Raw port value that failed to parse.
    pub invalid_port: Option<String>,
    pub data_file: Option<PathBuf>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub config_path: Option<PathBuf>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut env_config = Self::default();

        env_config.server_host = lookup(ENV_HOST);
        if let Some(raw) = lookup(ENV_PORT) {
            match raw.trim().parse() {
                Ok(port) => env_config.server_port = Some(port),
                Err(_) => env_config.invalid_port = Some(raw),
            }
        }
        env_config.data_file = lookup(ENV_DATA_FILE).map(PathBuf::from);
        env_config.cors_allowed_origins =
            lookup(ENV_CORS_ORIGINS).map(|raw| parse_csv(&raw));
        env_config.config_path = lookup(ENV_CONFIG_PATH).map(PathBuf::from);

        env_config
    }
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> EnvConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn reads_prefixed_variables() {
        let env = env_from(&[
            (ENV_HOST, "127.0.0.1"),
            (ENV_PORT, "9000"),
            (ENV_DATA_FILE, "/srv/showreel/data.json"),
            (ENV_CORS_ORIGINS, "https://a.example, ,https://b.example"),
        ]);

        assert_eq!(env.server_host.as_deref(), Some("127.0.0.1"));
        assert_eq!(env.server_port, Some(9000));
        assert_eq!(
            env.data_file,
            Some(PathBuf::from("/srv/showreel/data.json"))
        );
        assert_eq!(
            env.cors_allowed_origins,
            Some(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ])
        );
    }

    #[test]
    fn unparsable_port_is_kept_for_reporting() {
        let env = env_from(&[(ENV_PORT, "eighty")]);
        assert_eq!(env.server_port, None);
        assert_eq!(env.invalid_port.as_deref(), Some("eighty"));
    }

    #[test]
    fn file_config_accepts_partial_tables() {
        let file: FileConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [storage]
            data_file = "catalog.json"
            "#,
        )
        .unwrap();

        assert_eq!(file.server.port, Some(8080));
        assert_eq!(file.server.host, None);
        assert_eq!(
            file.storage.data_file,
            Some(PathBuf::from("catalog.json"))
        );
        assert!(file.cors.allowed_origins.is_none());
    }
}
