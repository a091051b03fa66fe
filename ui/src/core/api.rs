//! Thin REST client for the headless CMS.
//!
//! Every document the site renders comes through here: success envelopes are
//! unwrapped to their `data` payload, list endpoints additionally surface the
//! pagination metadata, and error bodies are normalized into a single
//! [`ApiError`] shape regardless of whether the CMS answered with its JSON
//! error envelope, a bare string, or an HTML error page.

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::config;
use super::content::{Page, Pagination};
use super::store::Lang;

/// Failure talking to the CMS.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("cms returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("could not decode cms response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ListEnvelope<T> {
    data: Vec<T>,
    #[serde(default)]
    meta: ListMeta,
}

#[derive(Default, Deserialize)]
struct ListMeta {
    #[serde(default)]
    pagination: Pagination,
}

/// REST client bound to one CMS deployment.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

/// Shared client instance bound to the configured deployment.
pub fn client() -> &'static ApiClient {
    static CLIENT: Lazy<ApiClient> = Lazy::new(ApiClient::from_env);
    &CLIENT
}

impl ApiClient {
    pub fn from_env() -> Self {
        Self::new(config::cms_base_url())
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a single document, unwrapping the `{ data }` envelope.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        locale: Option<Lang>,
    ) -> Result<T, ApiError> {
        let body = self.send(self.client.get(self.url(endpoint)), locale).await?;
        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(envelope.data)
    }

    /// GET a collection, keeping the pagination metadata alongside the items.
    pub async fn fetch_list<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        locale: Option<Lang>,
    ) -> Result<Page<T>, ApiError> {
        let body = self.send(self.client.get(self.url(endpoint)), locale).await?;
        let envelope: ListEnvelope<T> =
            serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(Page {
            items: envelope.data,
            pagination: envelope.meta.pagination,
        })
    }

    /// POST a payload, unwrapping the `{ data }` envelope of the reply.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        payload: &B,
        locale: Option<Lang>,
    ) -> Result<T, ApiError> {
        let request = self.client.post(self.url(endpoint)).json(payload);
        let body = self.send(request, locale).await?;
        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(envelope.data)
    }

    /// PUT a payload, unwrapping the `{ data }` envelope of the reply.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        payload: &B,
        locale: Option<Lang>,
    ) -> Result<T, ApiError> {
        let request = self.client.put(self.url(endpoint)).json(payload);
        let body = self.send(request, locale).await?;
        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(envelope.data)
    }

    /// DELETE a document. The CMS replies with the removed entry or nothing.
    pub async fn delete(&self, endpoint: &str, locale: Option<Lang>) -> Result<(), ApiError> {
        self.send(self.client.delete(self.url(endpoint)), locale)
            .await
            .map(|_| ())
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/api{}", self.base_url, endpoint)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        locale: Option<Lang>,
    ) -> Result<String, ApiError> {
        // Content is editorial and may change between requests.
        let mut request = request
            .header("Cache-Control", "no-cache, no-store, must-revalidate")
            .header("Pragma", "no-cache");
        if let Some(locale) = locale {
            request = request.header("Accept-Language", locale.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        if !status.is_success() {
            eprintln!("[api] {} -> {}", status, body.chars().take(200).collect::<String>());
            return Err(normalize_error(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown error"),
                &body,
            ));
        }

        Ok(body)
    }
}

/// Flatten the CMS's assorted error shapes into one message. Handles the JSON
/// error envelope (`{ error: { message } }`), flat `{ message }` payloads,
/// bare strings, and HTML error pages from proxies.
fn normalize_error(status: u16, fallback: &str, body: &str) -> ApiError {
    let trimmed = body.trim_start();
    if trimmed.starts_with("<!DOCTYPE html") || trimmed.starts_with("<html") {
        return ApiError::Status {
            status,
            message: fallback.to_owned(),
        };
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        let message = value
            .get("message")
            .and_then(|m| m.as_str())
            .or_else(|| value.get("error").and_then(|e| e.get("message")).and_then(|m| m.as_str()))
            .or_else(|| value.get("error").and_then(|e| e.as_str()));
        if let Some(message) = message {
            return ApiError::Status {
                status,
                message: message.to_owned(),
            };
        }
    }

    let message = if body.trim().is_empty() {
        fallback.to_owned()
    } else {
        body.trim().to_owned()
    };
    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_bodies_collapse_to_the_status_text() {
        let err = normalize_error(502, "Bad Gateway", "<!DOCTYPE html><html>boom</html>");
        assert_eq!(
            err,
            ApiError::Status {
                status: 502,
                message: "Bad Gateway".to_owned()
            }
        );
    }

    #[test]
    fn cms_error_envelope_message_wins() {
        let body = r#"{"data":null,"error":{"status":404,"name":"NotFoundError","message":"Not Found"}}"#;
        let err = normalize_error(404, "Not Found", body);
        assert_eq!(
            err,
            ApiError::Status {
                status: 404,
                message: "Not Found".to_owned()
            }
        );
    }

    #[test]
    fn flat_message_field_is_used() {
        let err = normalize_error(400, "Bad Request", r#"{"message":"email is taken"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: "email is taken".to_owned()
            }
        );
    }

    #[test]
    fn bare_string_bodies_pass_through() {
        let err = normalize_error(429, "Too Many Requests", "slow down");
        assert_eq!(
            err,
            ApiError::Status {
                status: 429,
                message: "slow down".to_owned()
            }
        );
    }

    #[test]
    fn empty_bodies_fall_back_to_status_text() {
        let err = normalize_error(500, "Internal Server Error", "");
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "Internal Server Error".to_owned()
            }
        );
    }

    #[test]
    fn endpoints_are_rooted_under_api() {
        let client = ApiClient::new("http://localhost:1337/");
        assert_eq!(client.url("/herobanner"), "http://localhost:1337/api/herobanner");
    }
}
