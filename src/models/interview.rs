use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::media::MediaKind;

/// Lifecycle of one interview: strictly forward, no terminal error state.
/// A stalled interview simply stays at its last reached status until the
/// user retries the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Uploaded,
    Analyzing,
    Completed,
}

impl Default for InterviewStatus {
    fn default() -> Self {
        InterviewStatus::Uploaded
    }
}

/// Whether a local record is provisional or reflects server truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateOrigin {
    Optimistic,
    #[default]
    Confirmed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: i64,
    pub job_title: String,
    #[serde(default)]
    pub status: InterviewStatus,
    pub created_at: Option<DateTime<Utc>>,
    /// Server's flattened transcript rendering; presence means the list view
    /// can show "transcript available".
    pub transcript: Option<String>,
    /// Path of the audio track extracted server-side.
    pub extracted_audio: Option<String>,
    pub duration: Option<f64>,
    #[serde(skip, default)]
    pub origin: StateOrigin,
    /// Media kind taken from the file the user picked, before the server
    /// has extracted anything. Not a wire field.
    #[serde(skip, default)]
    pub local_media_kind: Option<MediaKind>,
}

impl Interview {
    /// Advances the status if and only if `to` is further along than the
    /// current one. Regressions are silently ignored.
    pub fn advance_status(&mut self, to: InterviewStatus) {
        if to > self.status {
            self.status = to;
        }
    }

    pub fn has_transcript(&self) -> bool {
        self.transcript.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn media_kind(&self) -> MediaKind {
        if let Some(kind) = self.local_media_kind {
            return kind;
        }
        if self.extracted_audio.is_some() {
            MediaKind::Audio
        } else {
            MediaKind::Video
        }
    }
}
