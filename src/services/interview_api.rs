use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, Response};
use serde_json::Value as JsonValue;
use url::Url;

use crate::config::get_config;
use crate::dto::interview_dto::{
    CreateInterviewPayload, FeedbackResponse, TranscribeResponse, UploadResponse,
};
use crate::error::{Error, Result};
use crate::models::{Interview, MediaFile};

const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// Called with the cumulative upload percentage (0-100) as chunks are
/// handed to the transport.
pub type ProgressFn = Arc<dyn Fn(u8) + Send + Sync>;

/// The remote interview API, `/api/interviews/`. A trait so the workflow
/// can be exercised against a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InterviewApi: Send + Sync {
    async fn create(&self, payload: &CreateInterviewPayload) -> Result<Interview>;

    /// Raw list payload; the caller normalizes non-array shapes.
    async fn list(&self) -> Result<JsonValue>;

    async fn delete(&self, id: i64) -> Result<()>;

    async fn upload(&self, id: i64, file: &MediaFile, on_progress: ProgressFn)
        -> Result<UploadResponse>;

    async fn transcribe(&self, id: i64) -> Result<TranscribeResponse>;

    async fn feedback(&self, id: i64) -> Result<FeedbackResponse>;
}

#[derive(Clone)]
pub struct InterviewApiClient {
    client: Client,
    base_url: Url,
}

impl InterviewApiClient {
    pub fn new(base_url: &str, client: Client) -> Result<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Self {
            client,
            base_url: Url::parse(&base)?,
        })
    }

    pub fn from_config() -> Result<Self> {
        let config = get_config();
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;
        Self::new(&config.api_base_url, client)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn check(resp: Response) -> Result<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(error_from_body(status.as_u16(), &body))
    }
}

/// Extracts the server's error message from a non-2xx body. The API
/// answers `{"error": ...}`; DRF's own handlers answer `{"detail": ...}`.
fn error_from_body(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<JsonValue>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .or_else(|| v.get("detail"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_default();
    Error::Api { status, message }
}

fn percent(loaded: u64, total: u64) -> u8 {
    let pct = (loaded as f64 * 100.0) / (total.max(1) as f64);
    pct.round().min(100.0) as u8
}

#[async_trait]
impl InterviewApi for InterviewApiClient {
    async fn create(&self, payload: &CreateInterviewPayload) -> Result<Interview> {
        let resp = self
            .client
            .post(self.endpoint("")?)
            .json(payload)
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }

    async fn list(&self) -> Result<JsonValue> {
        let resp = self.client.get(self.endpoint("")?).send().await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let resp = self
            .client
            .delete(self.endpoint(&format!("{}/", id))?)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn upload(
        &self,
        id: i64,
        file: &MediaFile,
        on_progress: ProgressFn,
    ) -> Result<UploadResponse> {
        let total = file.data.len() as u64;
        let data = file.data.clone();

        // Chunked body so the transport pulls the file piecewise and the
        // caller sees cumulative progress as each chunk is handed over.
        let body = stream::unfold(0usize, move |offset| {
            let data = data.clone();
            let on_progress = on_progress.clone();
            async move {
                if offset >= data.len() {
                    return None;
                }
                let end = (offset + UPLOAD_CHUNK_SIZE).min(data.len());
                let chunk: Bytes = data.slice(offset..end);
                on_progress(percent(end as u64, total));
                Some((Ok::<Bytes, std::io::Error>(chunk), end))
            }
        });

        let part = Part::stream_with_length(Body::wrap_stream(body), total)
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)?;
        let form = Form::new().part("file", part);

        let resp = self
            .client
            .post(self.endpoint(&format!("{}/upload/", id))?)
            .multipart(form)
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await.unwrap_or_default())
    }

    async fn transcribe(&self, id: i64) -> Result<TranscribeResponse> {
        let resp = self
            .client
            .post(self.endpoint(&format!("{}/transcribe/", id))?)
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }

    async fn feedback(&self, id: i64) -> Result<FeedbackResponse> {
        let resp = self
            .client
            .post(self.endpoint(&format!("{}/feedback/", id))?)
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_joined_with_trailing_slash() {
        let client = InterviewApiClient::new("http://localhost:8000/api/interviews", Client::new())
            .expect("client");
        assert_eq!(
            client.endpoint("").expect("url").as_str(),
            "http://localhost:8000/api/interviews/"
        );
        assert_eq!(
            client.endpoint("42/upload/").expect("url").as_str(),
            "http://localhost:8000/api/interviews/42/upload/"
        );
        assert_eq!(
            client.endpoint("42/").expect("url").as_str(),
            "http://localhost:8000/api/interviews/42/"
        );
    }

    #[test]
    fn error_message_extraction() {
        let err = error_from_body(400, r#"{"error": "No file uploaded"}"#);
        assert_eq!(err.user_message("fallback"), "No file uploaded");

        let err = error_from_body(404, r#"{"detail": "Not found."}"#);
        assert_eq!(err.user_message("fallback"), "Not found.");

        // Non-JSON bodies fall through to the per-operation message.
        let err = error_from_body(502, "<html>Bad gateway</html>");
        assert_eq!(err.user_message("Failed to upload file"), "Failed to upload file");
    }

    #[test]
    fn percent_is_rounded_and_clamped() {
        assert_eq!(percent(0, 200), 0);
        assert_eq!(percent(1, 200), 1); // 0.5 rounds up
        assert_eq!(percent(100, 200), 50);
        assert_eq!(percent(200, 200), 100);
        assert_eq!(percent(300, 200), 100);
        // Zero-length uploads must not divide by zero.
        assert_eq!(percent(0, 0), 0);
    }
}
