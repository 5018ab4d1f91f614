use anyhow::{Context, Result};

use crate::models::session::Role;
use crate::service::Scope;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub api_token: String,
    pub user_id: String,
    pub role: Role,
    /// Restrict the board to one job's applicants when set.
    pub job_id: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: require_env("API_BASE_URL")?,
            api_token: require_env("API_TOKEN")?,
            user_id: require_env("USER_ID")?,
            role: require_env("ROLE")?.parse::<Role>()?,
            job_id: std::env::var("JOB_ID").ok().filter(|v| !v.is_empty()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn scope(&self) -> Scope {
        match &self.job_id {
            Some(job_id) => Scope::Job(job_id.clone()),
            None => Scope::All,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_follows_job_id() {
        let config = Config {
            api_base_url: "https://api.example.com".to_string(),
            api_token: "t".to_string(),
            user_id: "u1".to_string(),
            role: Role::Manager,
            job_id: Some("job-42".to_string()),
            rust_log: "info".to_string(),
        };
        assert_eq!(config.scope(), Scope::Job("job-42".to_string()));

        let config = Config {
            job_id: None,
            ..config
        };
        assert_eq!(config.scope(), Scope::All);
    }
}
