//! Request plumbing shared by every client operation.

use super::SemanticScholarClient;
use crate::error::{ClientError, ClientResult};

impl SemanticScholarClient {
    /// Make a GET request and decode the JSON body into `T`.
    ///
    /// The body is read as text first so that a payload of the wrong shape
    /// surfaces as [`ClientError::Parse`] rather than a transport error.
    pub(super) async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!(url = %url, "GET");

        let response = self.client.get(url).query(params).send().await?;
        let response = Self::handle_response(response).await?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Malformed response body");
            ClientError::from(e)
        })
    }

    /// Handle API response status codes.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        tracing::warn!(
            status = status.as_u16(),
            url = %url,
            "Semantic Scholar returned an error status"
        );

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(describe(&url, &text)))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

/// Prefer the API's `{"error": "..."}` message, fall back to the raw body or the URL.
fn describe(url: &str, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ApiError {
        error: String,
    }

    if let Ok(api) = serde_json::from_str::<ApiError>(body) {
        return api.error;
    }
    if body.trim().is_empty() { url.to_string() } else { body.trim().to_string() }
}
