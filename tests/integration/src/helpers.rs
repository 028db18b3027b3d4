//! Test helpers: in-process server lifecycle, HTTP shorthand, and
//! response assertions.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use vms_api::server::{create_app, create_app_state};
use vms_common::AppConfig;

// Each test gets its own listener so suites can run in parallel
static PORT_COUNTER: AtomicU16 = AtomicU16::new(19000);

pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// One running API server plus a client pointed at it
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let addr = SocketAddr::from(([127, 0, 0, 1], get_test_port()));

        let state = create_app_state(config).await?;
        let app = create_app(state);

        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Give the accept loop a beat before the first request
        tokio::time::sleep(Duration::from_millis(100)).await;

        Ok(Self {
            addr: actual_addr,
            client: Client::builder().timeout(Duration::from_secs(10)).build()?,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, format!("{}{path}", self.base_url()));
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        builder
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.request(Method::GET, path, None).send().await?)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.request(Method::GET, path, Some(token)).send().await?)
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.request(Method::POST, path, None).json(body).send().await?)
    }

    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .request(Method::POST, path, Some(token))
            .json(body)
            .send()
            .await?)
    }

    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .request(Method::PATCH, path, Some(token))
            .json(body)
            .send()
            .await?)
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self.request(Method::DELETE, path, Some(token)).send().await?)
    }
}

/// Build a config for tests; only DATABASE_URL must come from outside.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let fallbacks = [
        ("JWT_SECRET", "integration-test-secret"),
        ("API_PORT", "0"),
        // Keep the limiter out of the way for request-heavy tests
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1000"),
        ("RATE_LIMIT_BURST", "1000"),
    ];
    for (name, value) in fallbacks {
        if std::env::var(name).is_err() {
            std::env::set_var(name, value);
        }
    }

    AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Skip guard: true when a database is configured for this run.
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Promote an account to admin directly in the database.
///
/// Registration only creates volunteers, so admin-only tests provision
/// their admin out of band, the same way operators do.
pub async fn promote_to_admin(user_id: &str) -> Result<()> {
    let url = std::env::var("DATABASE_URL")?;
    let pool = PgPoolOptions::new().max_connections(1).connect(&url).await?;

    sqlx::query("UPDATE users SET role = 'admin' WHERE id = $1")
        .bind(user_id.parse::<i64>()?)
        .execute(&pool)
        .await?;

    Ok(())
}

/// Require a status and parse the JSON body, failing with the body text
/// on mismatch so the assertion message shows the server's error.
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Require a status, discarding the body on success.
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
