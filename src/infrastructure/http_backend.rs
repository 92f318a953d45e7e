// HTTP implementation of the performance backend
use crate::application::performance_backend::{BackendError, PerformanceBackend};
use crate::domain::user::UserFilter;
use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpPerformanceBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPerformanceBackend {
    pub fn new(base_url: String, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn build_url(&self, path: &str, params: &[(&str, String)]) -> String {
        let query: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();

        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query.join("&"))
        }
    }

    async fn get_json(&self, url: String) -> Result<Value, BackendError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| BackendError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| BackendError::Request {
            url: url.clone(),
            source,
        })?;

        // An empty body carries no records
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| BackendError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

/// Try each URL in order, moving on only when the backend answers 404.
/// Any other outcome, success or failure, ends the search.
pub async fn first_available<F, Fut>(urls: &[String], mut fetch: F) -> Result<Value, BackendError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Value, BackendError>>,
{
    let mut last_err = None;

    for url in urls {
        match fetch(url.clone()).await {
            Err(e) if e.is_not_found() => {
                tracing::warn!("{} not found, trying next endpoint variant", url);
                last_err = Some(e);
            }
            outcome => return outcome,
        }
    }

    Err(last_err.unwrap_or_else(|| BackendError::Status {
        url: String::new(),
        status: 404,
    }))
}

#[async_trait]
impl PerformanceBackend for HttpPerformanceBackend {
    async fn race_cards(&self, limit: usize) -> Result<Value, BackendError> {
        let url = self.build_url("/race-summary/card", &[("limit", limit.to_string())]);
        self.get_json(url).await
    }

    async fn race_table(&self) -> Result<Value, BackendError> {
        self.get_json(self.build_url("/race-summary", &[])).await
    }

    async fn race_detail(&self, race_id: i64) -> Result<Value, BackendError> {
        let url = self.build_url(&format!("/race-summary/{}", race_id), &[]);
        self.get_json(url).await
    }

    async fn members_status(&self, race_id: i64) -> Result<Value, BackendError> {
        let urls = [
            format!("/race-summary/{}/members-status", race_id),
            format!("/performance/{}/members-status", race_id),
            format!("/race-summary/{}/member-status", race_id),
        ]
        .map(|path| self.build_url(&path, &[]));

        first_available(&urls, |url| self.get_json(url)).await
    }

    async fn ranking(&self, race_id: i64) -> Result<Value, BackendError> {
        let url = self.build_url("/performance/ranking", &[("raceId", race_id.to_string())]);
        self.get_json(url).await
    }

    async fn user_race_table(&self, user_id: i64) -> Result<Value, BackendError> {
        let url = self.build_url("/performance/race-table", &[("userId", user_id.to_string())]);
        self.get_json(url).await
    }

    async fn daily(&self, user_id: i64, race_id: i64) -> Result<Value, BackendError> {
        let url = self.build_url(
            "/performance/daily",
            &[("userId", user_id.to_string()), ("raceId", race_id.to_string())],
        );
        self.get_json(url).await
    }

    async fn race_trend(&self, year: Option<i32>, month: Option<u32>) -> Result<Value, BackendError> {
        let mut params = Vec::new();
        if let Some(year) = year {
            params.push(("year", year.to_string()));
        }
        if let Some(month) = month {
            params.push(("month", month.to_string()));
        }
        let url = self.build_url("/performance/race-trend", &params);
        self.get_json(url).await
    }

    async fn users(&self, filter: &UserFilter) -> Result<Value, BackendError> {
        let params: Vec<(&str, String)> = filter
            .query_pairs()
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect();
        self.get_json(self.build_url("/users", &params)).await
    }

    async fn total_users(&self) -> Result<Value, BackendError> {
        self.get_json(self.build_url("/users/total", &[])).await
    }

    async fn assignees(&self) -> Result<Value, BackendError> {
        self.get_json(self.build_url("/users/assignees", &[])).await
    }
}
