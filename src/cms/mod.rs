use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::config::SanityConfig;

/// GROQ query for the single `landing` document.
const LANDING_QUERY: &str = r#"*[_type=="landing"][0]{heroTitle,heroSubtitle}"#;

const CACHE_TTL: Duration = Duration::from_secs(60);

/// Hero copy from the CMS `landing` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_subtitle: Option<String>,
}

#[derive(Deserialize)]
struct QueryResponse {
    result: Option<LandingContent>,
}

pub struct SanityClient {
    config: SanityConfig,
    client: reqwest::Client,
    cache: Mutex<Option<(Instant, Option<LandingContent>)>>,
}

impl SanityClient {
    pub fn new(config: SanityConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to build reqwest client"),
            cache: Mutex::new(None),
        }
    }

    /// Fetch the landing document, serving a cached copy for up to a minute.
    /// Fetch failures are treated as "no content" so the landing page can
    /// fall back to its built-in copy.
    pub async fn landing_content(&self) -> Option<LandingContent> {
        {
            let cache = self.cache.lock().expect("cms cache lock poisoned");
            if let Some((fetched_at, content)) = cache.as_ref() {
                if fetched_at.elapsed() < CACHE_TTL {
                    return content.clone();
                }
            }
        }

        let fetched = self.fetch().await;

        let mut cache = self.cache.lock().expect("cms cache lock poisoned");
        *cache = Some((Instant::now(), fetched.clone()));
        fetched
    }

    async fn fetch(&self) -> Option<LandingContent> {
        let url = format!(
            "https://{}.api.sanity.io/v{}/data/query/{}",
            self.config.project_id, self.config.api_version, self.config.dataset
        );

        let mut req = self.client.get(&url).query(&[("query", LANDING_QUERY)]);
        if let Some(token) = &self.config.read_token {
            req = req.bearer_auth(token);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!("Sanity fetch failed: {e}");
                return None;
            }
        };

        if !resp.status().is_success() {
            tracing::warn!("Sanity returned {}", resp.status());
            return None;
        }

        match resp.json::<QueryResponse>().await {
            Ok(body) => body.result,
            Err(e) => {
                tracing::warn!("Sanity response parse failed: {e}");
                None
            }
        }
    }
}
