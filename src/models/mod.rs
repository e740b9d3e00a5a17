pub mod feedback;
pub mod interview;
pub mod media;
pub mod transcript;

pub use feedback::{Feedback, FeedbackItem};
pub use interview::{Interview, InterviewStatus, StateOrigin};
pub use media::{MediaFile, MediaKind};
pub use transcript::TranscriptSegment;
