use anyhow::Result;
use serde::Deserialize;
use anyhow::{anyhow, Context};
use std::io::ErrorKind;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
    /// Apply pending migrations during startup.
    #[serde(default = "default_auto_migrate")]
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
            auto_migrate: default_auto_migrate(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `compact` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { format: default_log_format() } }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_auto_migrate() -> bool { true }
fn default_log_format() -> String { "compact".into() }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// `CONFIG_PATH` (default `config.toml`) with environment overrides.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path())
    }

    /// A missing file means defaults; an unreadable or malformed one is an error.
    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let mut cfg = match std::fs::read_to_string(path) {
            Ok(content) => parse(&content).with_context(|| format!("invalid config file {}", path))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(anyhow!("cannot read config file {}: {}", path, e)),
        };
        cfg.apply_env();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// SERVER_HOST, SERVER_PORT, TOKIO_WORKER_THREADS and LOG_FORMAT win over the file.
    pub fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        if let Ok(format) = std::env::var("LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        // 若 TOML 中未提供 URL，则尝试从环境变量填充
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || lower.starts_with("sqlite:")) {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_fills_defaults() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [database]
            url = "sqlite::memory:"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.database.max_connections, 10);
        assert!(cfg.database.auto_migrate);
        assert_eq!(cfg.logging.format, "compact");
    }

    #[test]
    fn validate_rejects_unknown_scheme() {
        let db = DatabaseConfig { url: "mysql://localhost/smogit".into(), ..DatabaseConfig::default() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_pool_bounds() {
        let db = DatabaseConfig {
            url: "postgres://localhost/smogit".into(),
            max_connections: 1,
            min_connections: 4,
            ..DatabaseConfig::default()
        };
        assert!(db.validate().is_err());
    }

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn malformed_file_is_an_error_not_a_fallback() {
        let f = write_config(
            r#"
            [server]
            host = "0.0.0.0"
            port = "not a number"

            [database]
            url = "postgres://db.prod/smogit"
            "#,
        );
        let err = AppConfig::load_or_env_from(f.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("invalid config file"), "{}", err);
    }

    #[test]
    fn present_file_is_used() {
        let f = write_config(
            r#"
            [database]
            url = "sqlite::memory:"
            auto_migrate = false
            "#,
        );
        let cfg = AppConfig::load_or_env_from(f.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert!(!cfg.database.auto_migrate);
    }

    #[test]
    fn unreadable_path_is_an_error() {
        // a directory exists but cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_or_env_from(dir.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn zero_worker_threads_normalized() {
        let mut s = ServerConfig { worker_threads: Some(0), ..ServerConfig::default() };
        s.normalize().unwrap();
        assert_eq!(s.worker_threads, Some(4));
    }
}
