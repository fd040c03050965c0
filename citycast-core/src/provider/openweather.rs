use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::model::CurrentConditions;

use super::{FetchError, WeatherProvider};

/// Client for the OpenWeather "current weather" endpoint. Base URL and key
/// are injected at construction; see `Config`.
#[derive(Debug, Clone)]
pub struct OpenWeather {
    base_url: String,
    api_key: String,
    http: Client,
}

impl OpenWeather {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url,
            api_key,
            http: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/weather", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeather {
    async fn current(&self, query: &str) -> Result<CurrentConditions, FetchError> {
        debug!(query, "requesting current weather");

        let res = self
            .http
            .get(self.endpoint())
            .query(&[("q", query), ("APPID", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(%status, "weather request rejected");
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: CurrentConditions = serde_json::from_str(&body)?;

        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
