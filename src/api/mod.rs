use crate::models::{Note, NotePayload};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    /// Request never got a response (offline, DNS, CORS, ...).
    Network,
    /// Server answered with a non-2xx status.
    Http(u16),
    /// Response body did not match the wire contract.
    Parse,
}

/// Transport/status failure surfaced to the orchestration layer unmodified.
/// Interpretation (user-facing wording, list reloads) happens there, not here.
#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http(status.as_u16()),
            message: format!("{ctx} ({status}): {body}"),
        }
    }

    /// HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ApiErrorKind::Http(s) => Some(s),
            _ => None,
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        let default_api_url = "http://localhost:3000/api".to_string();

        // Deployments inject `window.ENV.API_URL` at serve time so the same
        // wasm bundle can point at different backends. The lowercase
        // `api_url` spelling is accepted for compatibility.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    for key in ["API_URL", "api_url"] {
                        if let Ok(api_url) = js_sys::Reflect::get(&env, &key.into()) {
                            if let Some(url_str) = api_url.as_string() {
                                return Self { api_url: url_str };
                            }
                        }
                    }
                }
            }
        }

        Self {
            api_url: default_api_url,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Thin client over the `notes` REST resource. No retry, no caching.
#[derive(Clone)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_url)
    }

    fn notes_url(&self, suffix: &str) -> String {
        format!("{}/notes{}", self.base_url, suffix)
    }

    async fn send(
        &self,
        method: reqwest::Method,
        suffix: &str,
        body: Option<&NotePayload>,
        ctx: &str,
    ) -> ApiResult<reqwest::Response> {
        let client = reqwest::Client::new();
        let mut req = client.request(method, self.notes_url(suffix));

        if let Some(b) = body {
            req = req.json(b);
        }

        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            Ok(res)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, ctx))
        }
    }

    pub async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        let res = self
            .send(reqwest::Method::GET, "", None, "Load notes failed")
            .await?;
        res.json().await.map_err(ApiError::parse)
    }

    #[allow(dead_code)]
    pub async fn get_note(&self, id: i64) -> ApiResult<Note> {
        let res = self
            .send(
                reqwest::Method::GET,
                &format!("/{id}"),
                None,
                "Load note failed",
            )
            .await?;
        res.json().await.map_err(ApiError::parse)
    }

    pub async fn create_note(&self, payload: &NotePayload) -> ApiResult<Note> {
        let res = self
            .send(
                reqwest::Method::POST,
                "",
                Some(payload),
                "Create note failed",
            )
            .await?;
        res.json().await.map_err(ApiError::parse)
    }

    pub async fn update_note(&self, id: i64, payload: &NotePayload) -> ApiResult<Note> {
        let res = self
            .send(
                reqwest::Method::PUT,
                &format!("/{id}"),
                Some(payload),
                "Update note failed",
            )
            .await?;
        res.json().await.map_err(ApiError::parse)
    }

    pub async fn delete_note(&self, id: i64) -> ApiResult<()> {
        // DELETE returns an empty body; success status is all we need.
        self.send(
            reqwest::Method::DELETE,
            &format!("/{id}"),
            None,
            "Delete note failed",
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_url_building() {
        let c = ApiClient::new("http://localhost:3000/api".to_string());
        assert_eq!(c.notes_url(""), "http://localhost:3000/api/notes");
        assert_eq!(c.notes_url("/42"), "http://localhost:3000/api/notes/42");
    }

    #[test]
    fn test_http_error_carries_status() {
        let e = ApiError::http(
            reqwest::StatusCode::NOT_FOUND,
            "gone".to_string(),
            "Update note failed",
        );
        assert_eq!(e.kind, ApiErrorKind::Http(404));
        assert_eq!(e.status(), Some(404));
        assert!(e.message.contains("Update note failed"));
    }

    #[test]
    fn test_non_http_errors_have_no_status() {
        let e = ApiError {
            kind: ApiErrorKind::Network,
            message: "connection refused".to_string(),
        };
        assert_eq!(e.status(), None);

        let e = ApiError::parse("expected value at line 1");
        assert_eq!(e.status(), None);
    }
}
