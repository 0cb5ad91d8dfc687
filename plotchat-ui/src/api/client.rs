//! HTTP API Client
//!
//! Functions for communicating with the PlotChat relay.

use gloo_net::http::Request;

/// Default API base URL (the relay also serves this page)
pub const DEFAULT_API_BASE: &str = "/api/v1";

const API_URL_KEY: &str = "plotchat_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// Normalized reply from the relay
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Reply {
    /// "text" or "plot"
    pub kind: String,
    pub content: String,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

// ============ API Functions ============

/// Send one prompt and wait for the reply
pub async fn send_prompt(prompt: &str) -> Result<Reply, String> {
    #[derive(serde::Serialize)]
    struct PromptRequest<'a> {
        prompt: &'a str,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/prompt", api_base))
        .json(&PromptRequest { prompt })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(error_message(status, &text));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Human-readable description of a failed response
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| format!("Request failed with status {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://localhost:8090/api/v1/"), "http://localhost:8090/api/v1");
        assert_eq!(normalize_base(" /api/v1 "), "/api/v1");
    }

    #[test]
    fn test_error_message_from_relay_body() {
        let body = r#"{"error": {"code": "BACKEND_ERROR", "message": "unknown column"}, "request_id": "abc"}"#;
        assert_eq!(error_message(502, body), "unknown column");
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(error_message(500, "oops"), "Request failed with status 500");
    }

    #[test]
    fn test_reply_deserializes() {
        let reply: Reply = serde_json::from_str(r#"{"kind": "plot", "content": "<div/>"}"#).unwrap();
        assert_eq!(reply.kind, "plot");
        assert_eq!(reply.content, "<div/>");
    }
}
