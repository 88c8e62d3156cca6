use async_trait::async_trait;
use serde_json::json;

use crate::models::Submission;

use super::{Notifier, NotifyError};

pub struct DiscordNotifier {
    webhook_url: String,
    client: reqwest::Client,
}

impl DiscordNotifier {
    pub fn new(webhook_url: String) -> Self {
        Self {
            webhook_url,
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build reqwest client"),
        }
    }

    fn format_content(submission: &Submission) -> String {
        let mut lines = vec![
            "**New waitlist submission**".to_string(),
            format!("- email: {}", submission.email),
        ];
        if let Some(name) = submission.name.as_deref().filter(|s| !s.is_empty()) {
            lines.push(format!("- name: {name}"));
        }
        if let Some(message) = submission.message.as_deref().filter(|s| !s.is_empty()) {
            lines.push(format!("- message: {message}"));
        }
        lines.join("\n")
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    fn id(&self) -> &'static str {
        "discord"
    }

    async fn notify(&self, submission: &Submission) -> Result<(), NotifyError> {
        let resp = self
            .client
            .post(&self.webhook_url)
            .json(&json!({ "content": Self::format_content(submission) }))
            .send()
            .await
            .map_err(|e| NotifyError::from(format!("Discord request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(NotifyError::from(format!(
                "Discord returned {}",
                resp.status()
            )));
        }

        Ok(())
    }
}
