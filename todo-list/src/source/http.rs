//! HTTP implementation of [`TodoSource`].

use super::{FetchFuture, SourceError, TodoSource};
use crate::collection::TodoItem;
use crate::config::TodoListConfig;
use reqwest::Client;

/// Fetches todos with a single HTTP GET
#[derive(Clone, Debug)]
pub struct HttpTodoSource {
    client: Client,
    endpoint: String,
}

impl HttpTodoSource {
    /// Create a source for an explicit endpoint
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a source for the configured endpoint
    #[must_use]
    pub fn from_config(config: &TodoListConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    /// The endpoint this source reads from
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TodoSource for HttpTodoSource {
    fn fetch_todos(&self) -> FetchFuture<'_> {
        Box::pin(async move {
            tracing::debug!(endpoint = %self.endpoint, "GET todos");

            let response = self
                .client
                .get(&self.endpoint)
                .send()
                .await
                .map_err(|e| SourceError::RequestFailed(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(SourceError::Status {
                    status: status.as_u16(),
                    message: body,
                });
            }

            let items = response
                .json::<Vec<TodoItem>>()
                .await
                .map_err(|e| SourceError::ResponseParseFailed(e.to_string()))?;

            tracing::debug!(count = items.len(), "todos fetched");
            Ok(items)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_configured_endpoint() {
        let config = TodoListConfig::default().with_endpoint("http://127.0.0.1:9000/todos");
        let source = HttpTodoSource::from_config(&config);
        assert_eq!(source.endpoint(), "http://127.0.0.1:9000/todos");

        let source = HttpTodoSource::from_config(&TodoListConfig::default());
        assert_eq!(source.endpoint(), crate::config::DEFAULT_ENDPOINT);
    }
}
