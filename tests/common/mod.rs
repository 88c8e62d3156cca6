use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use launchlist::config::Config;

pub const ADMIN_TOKEN: &str = "test-admin-token";

/// A running test server instance backed by the in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit JSON to the waitlist endpoint, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/waitlist"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit form-urlencoded data to the waitlist endpoint, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/waitlist"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Fetch the admin list with a bearer token, return (body, status).
    pub async fn admin_list(&self, token: &str, query: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(&format!("/api/admin/waitlist{query}")))
            .bearer_auth(token)
            .send()
            .await
            .expect("admin list failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: None,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        base_url: "http://localhost:0".to_string(),
        max_body_size: 1_048_576,
        trusted_proxies: vec![],
        // High enough that ordinary tests never trip it; rate-limit tests
        // spawn their own app with a tight limit.
        rate_limit: 100,
        rate_limit_window_secs: 60,
        log_level: "warn".to_string(),
        admin_token: Some(ADMIN_TOKEN.to_string()),
        discord_webhook_url: None,
        posthog: None,
        sanity: None,
    }
}

/// Spawn a test app with the default test config.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config()).await
}

/// Spawn a test app with a custom config on a random port.
pub async fn spawn_app_with(config: Config) -> TestApp {
    let (app, _state) = launchlist::build_app(None, config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp { addr, client }
}
