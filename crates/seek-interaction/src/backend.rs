//! HttpAnswerBackend - REST client for the RAG answer service.
//!
//! One call to [`AnswerBackend::ask`] is exactly one `POST <backend>/query`
//! with body `{"query": "..."}`. There are no retries and no auth headers;
//! the only client-side bound is the request timeout from [`ClientConfig`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use seek_core::{ClientConfig, Result, SeekError, NO_ANSWER_PLACEHOLDER};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Something that can turn a query into an answer.
///
/// The controller talks to the backend only through this trait, so a
/// scripted implementation can stand in for the network in tests.
#[async_trait]
pub trait AnswerBackend: Send + Sync {
    /// Asks the backend a single question. `query` is never empty.
    async fn ask(&self, query: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

/// Backend implementation that talks to the answer service over HTTP.
#[derive(Clone)]
pub struct HttpAnswerBackend {
    client: Client,
    query_url: Url,
}

impl HttpAnswerBackend {
    /// Creates a backend client from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let query_url = config.query_url()?;
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SeekError::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, query_url })
    }

    /// The endpoint every query is posted to.
    pub fn query_url(&self) -> &Url {
        &self.query_url
    }
}

#[async_trait]
impl AnswerBackend for HttpAnswerBackend {
    async fn ask(&self, query: &str) -> Result<String> {
        debug!(url = %self.query_url, "posting query");

        let response = self
            .client
            .post(self.query_url.clone())
            .json(&QueryRequest { query })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "backend request failed");
                SeekError::from(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "backend returned non-200 status");
            return Err(SeekError::backend(status.as_u16()));
        }

        let body = response.text().await?;
        let answer = parse_answer(&body)?;
        debug!(answer_len = answer.len(), "received answer");
        Ok(answer)
    }
}

/// Extracts the `answer` field from a 200 response body.
///
/// A missing or `null` answer becomes [`NO_ANSWER_PLACEHOLDER`]; a
/// non-string answer is kept as its JSON text. A body that is not a JSON
/// object is a transport error.
fn parse_answer(body: &str) -> Result<String> {
    let json: Value = serde_json::from_str(body)?;
    let Value::Object(mut fields) = json else {
        return Err(SeekError::transport(
            "invalid JSON response: expected an object",
        ));
    };

    Ok(match fields.remove("answer") {
        None | Some(Value::Null) => NO_ANSWER_PLACEHOLDER.to_string(),
        Some(Value::String(answer)) => answer,
        Some(other) => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer_extracts_string() {
        let answer = parse_answer(r#"{"answer": "42", "sources": ["a.md"]}"#).unwrap();
        assert_eq!(answer, "42");
    }

    #[test]
    fn test_parse_answer_missing_field_uses_placeholder() {
        assert_eq!(parse_answer(r#"{"result": "x"}"#).unwrap(), NO_ANSWER_PLACEHOLDER);
        assert_eq!(parse_answer(r#"{"answer": null}"#).unwrap(), NO_ANSWER_PLACEHOLDER);
    }

    #[test]
    fn test_parse_answer_non_string_kept_as_json() {
        assert_eq!(parse_answer(r#"{"answer": 7}"#).unwrap(), "7");
        assert_eq!(
            parse_answer(r#"{"answer": {"text": "x"}}"#).unwrap(),
            r#"{"text":"x"}"#
        );
        assert_eq!(parse_answer(r#"{"answer": ""}"#).unwrap(), "");
    }

    #[test]
    fn test_parse_answer_rejects_non_object_bodies() {
        assert!(parse_answer("not json").unwrap_err().is_transport());
        assert!(parse_answer(r#"["answer"]"#).unwrap_err().is_transport());
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let config = ClientConfig::default().with_backend_url("localhost without scheme");
        assert!(HttpAnswerBackend::new(&config).is_err());
    }

    #[test]
    fn test_new_builds_query_url() {
        let config = ClientConfig::default().with_backend_url("http://127.0.0.1:5001");
        let backend = HttpAnswerBackend::new(&config).unwrap();
        assert_eq!(backend.query_url().as_str(), "http://127.0.0.1:5001/query");
    }
}
