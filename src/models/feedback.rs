use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One per-question feedback record from the coaching model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub question: String,
    #[serde(rename = "userAnswer")]
    pub user_answer: String,
    pub feedback: String,
    #[serde(rename = "suggestedAnswer")]
    pub suggested_answer: String,
    /// 0-10.
    pub score: u8,
}

/// AI feedback as returned by the server: either free text or a structured
/// per-question breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Feedback {
    Text(String),
    Structured(Vec<FeedbackItem>),
}

impl Feedback {
    /// Coerces the `feedback` field of a response. Absent, null, or
    /// unrecognized shapes yield `None`; prior local feedback is left for
    /// the caller to keep.
    pub fn from_payload(payload: &JsonValue) -> Option<Feedback> {
        if payload.is_null() {
            return None;
        }
        match serde_json::from_value(payload.clone()) {
            Ok(feedback) => Some(feedback),
            Err(_) => {
                tracing::warn!("Unrecognized feedback payload shape: {}", payload);
                None
            }
        }
    }
}
