use std::net::IpAddr;

use ipnet::IpNet;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub base_url: String,
    pub max_body_size: usize,
    pub trusted_proxies: Vec<IpNet>,
    pub rate_limit: u32,
    pub rate_limit_window_secs: u64,
    pub log_level: String,
    pub admin_token: Option<String>,
    pub discord_webhook_url: Option<String>,
    pub posthog: Option<PosthogConfig>,
    pub sanity: Option<SanityConfig>,
}

#[derive(Debug, Clone)]
pub struct PosthogConfig {
    pub api_key: String,
    pub host: String,
}

#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub read_token: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_opt("DATABASE_URL");

        let host: IpAddr = env_or("LAUNCHLIST_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid LAUNCHLIST_HOST: {e}"))?;

        let port: u16 = env_or("LAUNCHLIST_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid LAUNCHLIST_PORT: {e}"))?;

        let base_url = env_or("LAUNCHLIST_BASE_URL", &format!("http://{host}:{port}"));

        let max_body_size: usize = env_or("LAUNCHLIST_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid LAUNCHLIST_MAX_BODY_SIZE: {e}"))?;

        let trusted_proxies: Vec<IpNet> = env_or("LAUNCHLIST_TRUSTED_PROXIES", "")
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                s.trim()
                    .parse()
                    .map_err(|e| format!("Invalid LAUNCHLIST_TRUSTED_PROXIES entry '{s}': {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rate_limit: u32 = env_or("LAUNCHLIST_RATE_LIMIT", "5")
            .parse()
            .map_err(|e| format!("Invalid LAUNCHLIST_RATE_LIMIT: {e}"))?;

        let rate_limit_window_secs: u64 = env_or("LAUNCHLIST_RATE_LIMIT_WINDOW_SECS", "60")
            .parse()
            .map_err(|e| format!("Invalid LAUNCHLIST_RATE_LIMIT_WINDOW_SECS: {e}"))?;

        let log_level = env_or("LAUNCHLIST_LOG_LEVEL", "info");

        let admin_token = env_opt("LAUNCHLIST_ADMIN_TOKEN");
        let discord_webhook_url = env_opt("DISCORD_WEBHOOK_URL");

        let posthog = env_opt("POSTHOG_API_KEY").map(|api_key| PosthogConfig {
            api_key,
            host: env_or("POSTHOG_HOST", "https://app.posthog.com")
                .trim_end_matches('/')
                .to_string(),
        });

        let sanity = match (
            env_opt("SANITY_PROJECT_ID"),
            env_opt("SANITY_DATASET"),
            env_opt("SANITY_API_VERSION"),
        ) {
            (Some(project_id), Some(dataset), Some(api_version)) => Some(SanityConfig {
                project_id,
                dataset,
                api_version,
                read_token: env_opt("SANITY_READ_TOKEN"),
            }),
            _ => None,
        };

        Ok(Config {
            database_url,
            host,
            port,
            base_url,
            max_body_size,
            trusted_proxies,
            rate_limit,
            rate_limit_window_secs,
            log_level,
            admin_token,
            discord_webhook_url,
            posthog,
            sanity,
        })
    }
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
