use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Maximum number of jobs shown on the seeker dashboard.
    pub recommended_jobs_limit: usize,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            recommended_jobs_limit: parse_env("RECOMMENDED_JOBS_LIMIT", 4)?,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let value: usize = parse_env("JOBSPHERE_TEST_UNSET_LIMIT", 4).unwrap();
        assert_eq!(value, 4);
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("JOBSPHERE_TEST_PORT", " 9090 ");
        let value: u16 = parse_env("JOBSPHERE_TEST_PORT", 8080).unwrap();
        assert_eq!(value, 9090);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("JOBSPHERE_TEST_BAD_LIMIT", "four");
        let err = parse_env::<usize>("JOBSPHERE_TEST_BAD_LIMIT", 4).unwrap_err();
        assert!(err.to_string().contains("JOBSPHERE_TEST_BAD_LIMIT"));
    }
}
