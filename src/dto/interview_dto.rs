use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use validator::Validate;

/// Body of `POST /api/interviews/`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInterviewPayload {
    #[validate(length(min = 1, message = "Job title must not be blank"))]
    pub job_title: String,
}

/// Client-side request for the upload + transcribe sequence. The title is
/// validated before any network call is made.
#[derive(Debug, Clone, Validate)]
pub struct UploadRequest {
    #[validate(length(min = 1, message = "Job title must not be blank"))]
    pub job_title: String,
}

/// `POST /{id}/upload/` success body. The body is informational only, so
/// an empty 2xx response decodes to the default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /{id}/transcribe/` body. The transcript field is kept raw and
/// coerced by the caller so a misshapen payload degrades to an empty
/// transcript instead of a decode error.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscribeResponse {
    #[serde(default)]
    pub transcript: JsonValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub total_tokens: Option<u64>,
}

/// `POST /{id}/feedback/` body. Both fields are optional; partial responses
/// are accepted as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackResponse {
    #[serde(default)]
    pub feedback: JsonValue,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_job_title_is_rejected() {
        let payload = CreateInterviewPayload { job_title: String::new() };
        assert!(payload.validate().is_err());

        let payload = CreateInterviewPayload { job_title: "QA Engineer".into() };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn feedback_response_accepts_partial_bodies() {
        let resp: FeedbackResponse =
            serde_json::from_value(json!({ "feedback": "Good job" })).expect("response");
        assert_eq!(resp.feedback, json!("Good job"));
        assert!(resp.usage.is_none());

        let resp: FeedbackResponse =
            serde_json::from_value(json!({ "usage": { "total_tokens": 120 } })).expect("response");
        assert!(resp.feedback.is_null());
        assert_eq!(resp.usage.expect("usage").total_tokens, Some(120));

        // usage present but without total_tokens, as some gateways strip it
        let resp: FeedbackResponse =
            serde_json::from_value(json!({ "feedback": "Ok", "usage": {} })).expect("response");
        assert_eq!(resp.usage.expect("usage").total_tokens, None);
    }
}
