//! Client library for the interview-coaching API: create an interview,
//! upload a recording, run server-side transcription, and fetch AI
//! feedback, with all client-side workflow state kept in an in-memory
//! store that a presentation layer reads.
//!
//! ```no_run
//! use std::sync::Arc;
//! use interview_coach_client::{
//!     config::init_config, InterviewApiClient, TracingNotifier, WorkflowService,
//! };
//!
//! # async fn run() -> interview_coach_client::Result<()> {
//! init_config()?;
//! let api = InterviewApiClient::from_config()?;
//! let workflow = WorkflowService::new(api, Arc::new(TracingNotifier));
//!
//! workflow.refresh_list().await;
//! if let Some(interview) = workflow.create_interview("Backend Engineer").await {
//!     let _ = interview.id;
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use error::{Error, Result};
pub use models::{
    Feedback, FeedbackItem, Interview, InterviewStatus, MediaFile, MediaKind, StateOrigin,
    TranscriptSegment,
};
pub use services::interview_api::{InterviewApi, InterviewApiClient, ProgressFn};
pub use services::notify_service::{Notifier, TracingNotifier};
pub use services::workflow_service::WorkflowService;
pub use store::{InterviewStore, View};
