use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

#[cfg(test)]
use mockall::automock;

/// Status and JSON body exactly as the backend returned them.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendResponse {
    pub status: StatusCode,
    pub body: Value,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait BackendClient: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<BackendResponse>;
}

/// Values are substituted as given, without re-encoding.
pub fn number_url(base: &str, num: &str, key: &str) -> String {
    format!("{base}/api/number?num={num}&key={key}")
}

/// Error text safe to log: reqwest errors carry the request URL, whose query
/// holds the caller's key, so the query is dropped from it.
pub fn loggable_error(err: &anyhow::Error) -> String {
    let message = err.to_string();
    match err.downcast_ref::<reqwest::Error>().and_then(reqwest::Error::url) {
        Some(url) => {
            let mut masked = url.clone();
            masked.set_query(None);
            message.replace(url.as_str(), masked.as_str())
        }
        None => message,
    }
}

#[derive(Clone, Default)]
pub struct HttpBackend {
    client: Client,
}

#[async_trait]
impl BackendClient for HttpBackend {
    async fn get_json(&self, url: &str) -> Result<BackendResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        // Non-2xx bodies are decoded too; the caller relays them unchanged.
        let body = response.json::<Value>().await?;

        Ok(BackendResponse { status, body })
    }
}
