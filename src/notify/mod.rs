pub mod discord;
pub mod posthog;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::models::Submission;

pub use discord::DiscordNotifier;
pub use posthog::PosthogNotifier;

const NOTIFY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub struct NotifyError {
    pub message: String,
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for NotifyError {
    fn from(s: String) -> Self {
        NotifyError { message: s }
    }
}

impl From<&str> for NotifyError {
    fn from(s: &str) -> Self {
        NotifyError {
            message: s.to_string(),
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    fn id(&self) -> &'static str;
    async fn notify(&self, submission: &Submission) -> Result<(), NotifyError>;
}

pub struct NotifierRegistry {
    notifiers: Vec<Arc<dyn Notifier>>,
}

impl NotifierRegistry {
    pub fn new() -> Self {
        Self {
            notifiers: Vec::new(),
        }
    }

    pub fn register(&mut self, notifier: Arc<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }

    /// Fire every registered notifier for a new submission. Best effort:
    /// each runs in its own task, failures are logged and never reach the
    /// request that triggered them.
    pub fn dispatch(&self, submission: &Submission) {
        for notifier in &self.notifiers {
            let notifier = notifier.clone();
            let submission = submission.clone();
            tokio::spawn(async move {
                match tokio::time::timeout(NOTIFY_TIMEOUT, notifier.notify(&submission)).await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => tracing::warn!("Notifier {} failed: {e}", notifier.id()),
                    Err(_) => tracing::warn!("Notifier {} timed out", notifier.id()),
                }
            });
        }
    }
}
