use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One (speaker, text) unit of a diarized transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub speaker: String,
    pub text: String,
}

impl TranscriptSegment {
    /// Coerces a response payload into segments.
    ///
    /// The transcribe endpoint promises an array, but the client never
    /// trusts that: any non-array payload yields an empty transcript and
    /// malformed elements are skipped, so downstream rendering always sees
    /// a sequence.
    pub fn from_payload(payload: &JsonValue) -> Vec<TranscriptSegment> {
        match payload.as_array() {
            Some(items) => items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect(),
            None => {
                if !payload.is_null() {
                    tracing::warn!("Expected transcript array but got: {}", payload);
                }
                Vec::new()
            }
        }
    }
}
