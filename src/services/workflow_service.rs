use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::instrument;
use validator::Validate;

use crate::dto::interview_dto::{CreateInterviewPayload, UploadRequest};
use crate::error::Error;
use crate::models::{Interview, InterviewStatus, MediaFile, TranscriptSegment};
use crate::services::interview_api::{InterviewApi, ProgressFn};
use crate::services::notify_service::Notifier;
use crate::store::InterviewStore;

const DEFAULT_JOB_TITLE: &str = "New Interview";

/// Drives one interview's lifecycle (uploaded -> analyzing -> completed)
/// against the remote API, keeping the local store consistent with, and
/// optimistically ahead of, server state.
///
/// Every operation is terminal on failure: the error becomes a user-facing
/// notification, nothing is retried, and nothing escapes past this
/// boundary. Locally established state is never rolled back on failure;
/// "upload succeeded but transcription failed" stays visibly different
/// from "nothing happened".
pub struct WorkflowService<A: InterviewApi> {
    api: Arc<A>,
    store: Arc<RwLock<InterviewStore>>,
    notifier: Arc<dyn Notifier>,
}

impl<A: InterviewApi> Clone for WorkflowService<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            store: self.store.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<A: InterviewApi> WorkflowService<A> {
    pub fn new(api: A, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api: Arc::new(api),
            store: Arc::new(RwLock::new(InterviewStore::default())),
            notifier,
        }
    }

    /// Read access for the presentation layer.
    pub fn store(&self) -> RwLockReadGuard<'_, InterviewStore> {
        self.store.read().expect("interview store lock poisoned")
    }

    fn store_mut(&self) -> RwLockWriteGuard<'_, InterviewStore> {
        self.store.write().expect("interview store lock poisoned")
    }

    fn notify_failure(&self, err: &Error, fallback: &str) {
        tracing::error!(error = %err, "{}", fallback);
        self.notifier.error(&err.user_message(fallback));
    }

    /// Creates an interview, falling back to a default title when the user
    /// typed nothing. On success the new interview is appended to the
    /// collection and its workspace opened; on failure nothing changes.
    #[instrument(skip(self))]
    pub async fn create_interview(&self, job_title: &str) -> Option<Interview> {
        let title = if job_title.trim().is_empty() {
            DEFAULT_JOB_TITLE
        } else {
            job_title
        };
        let payload = CreateInterviewPayload {
            job_title: title.to_string(),
        };

        match self.api.create(&payload).await {
            Ok(interview) => {
                tracing::info!(id = interview.id, "Interview created");
                let mut store = self.store_mut();
                store.insert_confirmed(interview.clone());
                store.open_workspace(interview.id);
                Some(interview)
            }
            Err(err) => {
                self.notify_failure(&err, "Failed to create interview");
                None
            }
        }
    }

    /// The multi-step happy path: upload the recording, then transcribe,
    /// then reconcile against server truth. Local status is advanced
    /// optimistically ahead of each step and never rolled back; any
    /// failure notifies and halts the remaining steps.
    #[instrument(skip(self, file), fields(file_name = %file.file_name))]
    pub async fn upload_and_process(&self, id: i64, file: MediaFile, job_title: &str) {
        let request = UploadRequest {
            job_title: job_title.trim().to_string(),
        };
        if let Err(errs) = request.validate() {
            let err = Error::Validation(errs);
            self.notify_failure(&err, "Job title must not be blank");
            return;
        }

        self.store_mut()
            .mark_uploaded(id, &request.job_title, file.media_kind());

        let progress: ProgressFn = {
            let store = self.store.clone();
            Arc::new(move |pct| {
                if let Ok(mut store) = store.write() {
                    store.set_upload_progress(pct);
                }
            })
        };

        let uploaded = self.api.upload(id, &file, progress).await;
        // Progress resets on completion, success or failure.
        self.store_mut().set_upload_progress(0);

        if let Err(err) = uploaded {
            self.notify_failure(&err, "Failed to upload file");
            return;
        }
        tracing::info!(id, "Upload complete, starting transcription");
        self.notifier.success("File uploaded successfully");
        self.store_mut().advance_status(id, InterviewStatus::Analyzing);

        match self.api.transcribe(id).await {
            Ok(resp) => {
                let segments = TranscriptSegment::from_payload(&resp.transcript);
                {
                    let mut store = self.store_mut();
                    store.set_transcript(id, segments);
                    store.advance_status(id, InterviewStatus::Completed);
                }
                // Local optimistic state is superseded by server truth.
                self.refresh_list().await;
            }
            Err(err) => self.notify_failure(&err, "Failed to transcribe audio"),
        }
    }

    /// Standalone transcription, decoupled from an upload. A non-array
    /// transcript payload replaces the local transcript with an empty one;
    /// a failed call leaves it untouched.
    #[instrument(skip(self))]
    pub async fn transcribe(&self, id: i64) {
        match self.api.transcribe(id).await {
            Ok(resp) => {
                let segments = TranscriptSegment::from_payload(&resp.transcript);
                self.store_mut().set_transcript(id, segments);
            }
            Err(err) => self.notify_failure(&err, "Failed to transcribe audio"),
        }
    }

    /// Fetches AI feedback. Partial responses are accepted: feedback and
    /// token usage are each applied only when present.
    #[instrument(skip(self))]
    pub async fn fetch_feedback(&self, id: i64) {
        match self.api.feedback(id).await {
            Ok(resp) => {
                let feedback = crate::models::Feedback::from_payload(&resp.feedback);
                let tokens = resp.usage.and_then(|u| u.total_tokens);
                self.store_mut().apply_feedback(id, feedback, tokens);
            }
            Err(err) => self.notify_failure(&err, "Failed to get feedback"),
        }
    }

    /// Deletes server-side first; the local entry goes away only once the
    /// server has confirmed.
    #[instrument(skip(self))]
    pub async fn delete_interview(&self, id: i64) {
        match self.api.delete(id).await {
            Ok(()) => {
                tracing::info!(id, "Interview deleted");
                self.store_mut().remove(id);
            }
            Err(err) => self.notify_failure(&err, "Failed to delete interview"),
        }
    }

    /// Refreshes the collection from the server. A non-array payload is
    /// normalized to an empty collection with a logged diagnostic so the
    /// view layer always has a sequence to render.
    #[instrument(skip(self))]
    pub async fn refresh_list(&self) {
        match self.api.list().await {
            Ok(payload) => {
                let interviews: Vec<Interview> = match payload.as_array() {
                    Some(items) => items
                        .iter()
                        .filter_map(|item| serde_json::from_value(item.clone()).ok())
                        .collect(),
                    None => {
                        tracing::error!("Expected interview array but got: {}", payload);
                        Vec::new()
                    }
                };
                self.store_mut().replace_interviews(interviews);
            }
            Err(err) => self.notify_failure(&err, "Failed to fetch interviews"),
        }
    }
}
