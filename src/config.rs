use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub max_body_size: usize,
    pub request_timeout: Duration,
    pub db_timeout: Duration,
    pub admin_password: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_or("DATABASE_URL", "sqlite://database.db");

        let host: IpAddr = env_or("TELECALL_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid TELECALL_HOST: {e}"))?;

        let port: u16 = env_or("TELECALL_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid TELECALL_PORT: {e}"))?;

        let static_dir = PathBuf::from(env_or("TELECALL_STATIC_DIR", "public"));
        let upload_dir = PathBuf::from(env_or("TELECALL_UPLOAD_DIR", "uploads"));

        let max_body_size: usize = env_or("TELECALL_MAX_BODY_SIZE", "10485760")
            .parse()
            .map_err(|e| format!("Invalid TELECALL_MAX_BODY_SIZE: {e}"))?;

        let request_timeout = env_secs("TELECALL_REQUEST_TIMEOUT_SECS", "30")?;
        let db_timeout = env_secs("TELECALL_DB_TIMEOUT_SECS", "5")?;

        let admin_password = env_or("TELECALL_ADMIN_PASSWORD", "admin");
        if admin_password.is_empty() {
            return Err("TELECALL_ADMIN_PASSWORD must not be empty".to_string());
        }

        let log_level = env_or("TELECALL_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            static_dir,
            upload_dir,
            max_body_size,
            request_timeout,
            db_timeout,
            admin_password,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_secs(key: &str, default: &str) -> Result<Duration, String> {
    env_or(key, default)
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| format!("Invalid {key}: {e}"))
}
