use async_trait::async_trait;
use serde_json::json;

use crate::config::PosthogConfig;
use crate::models::Submission;

use super::{Notifier, NotifyError};

pub struct PosthogNotifier {
    config: PosthogConfig,
    client: reqwest::Client,
}

impl PosthogNotifier {
    pub fn new(config: PosthogConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build reqwest client"),
        }
    }
}

#[async_trait]
impl Notifier for PosthogNotifier {
    fn id(&self) -> &'static str {
        "posthog"
    }

    async fn notify(&self, submission: &Submission) -> Result<(), NotifyError> {
        let email_domain = submission.email.split('@').nth(1).unwrap_or("unknown");

        let resp = self
            .client
            .post(format!("{}/capture/", self.config.host))
            .json(&json!({
                "api_key": self.config.api_key,
                "event": "waitlist_submitted",
                "distinct_id": submission.id,
                "properties": {
                    "email_domain": email_domain,
                },
            }))
            .send()
            .await
            .map_err(|e| NotifyError::from(format!("PostHog capture failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(NotifyError::from(format!(
                "PostHog returned {}",
                resp.status()
            )));
        }

        Ok(())
    }
}
