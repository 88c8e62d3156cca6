use serde::Serialize;

use crate::config::Config;

/// Which optional integrations are active, derived from config presence.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostics {
    pub integrations: Integrations,
}

#[derive(Debug, Clone, Serialize)]
pub struct Integrations {
    pub database: IntegrationStatus,
    pub discord: IntegrationStatus,
    pub posthog: IntegrationStatus,
    pub sanity: IntegrationStatus,
    pub admin: IntegrationStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntegrationStatus {
    pub enabled: bool,
}

impl From<bool> for IntegrationStatus {
    fn from(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Diagnostics {
    pub fn from_config(config: &Config) -> Self {
        Self {
            integrations: Integrations {
                database: config.database_url.is_some().into(),
                discord: config.discord_webhook_url.is_some().into(),
                posthog: config.posthog.is_some().into(),
                sanity: config.sanity.is_some().into(),
                admin: config.admin_token.is_some().into(),
            },
        }
    }
}

/// Log the integration checklist at startup. Missing env simply means an
/// integration stays off; nothing here is fatal.
pub fn log_startup(config: &Config) {
    let diag = Diagnostics::from_config(config);
    let i = &diag.integrations;

    for (name, status) in [
        ("database", &i.database),
        ("discord", &i.discord),
        ("posthog", &i.posthog),
        ("sanity", &i.sanity),
        ("admin", &i.admin),
    ] {
        if status.enabled {
            tracing::info!("Integration {name}: enabled");
        } else {
            tracing::info!("Integration {name}: disabled");
        }
    }
}
