use crate::models::{
    Feedback, Interview, InterviewStatus, MediaKind, StateOrigin, TranscriptSegment,
};

/// Which screen the client is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Workspace,
}

/// In-memory client state: the interview collection plus the artifacts of
/// the currently open interview.
///
/// The workflow service owns this behind a lock; the view layer only reads.
/// Per-interview mutations are id-scoped and become no-ops once the id has
/// left the collection, so a delete that lands while an upload sequence is
/// still in flight cannot be resurrected by the sequence's later steps.
#[derive(Debug, Clone, Default)]
pub struct InterviewStore {
    interviews: Vec<Interview>,
    selected: Option<i64>,
    view: View,
    transcript: Vec<TranscriptSegment>,
    feedback: Option<Feedback>,
    tokens_used: Option<u64>,
    upload_progress: u8,
}

impl InterviewStore {
    pub fn interviews(&self) -> &[Interview] {
        &self.interviews
    }

    pub fn get(&self, id: i64) -> Option<&Interview> {
        self.interviews.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn selected_interview(&self) -> Option<&Interview> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn transcript(&self) -> &[TranscriptSegment] {
        &self.transcript
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn tokens_used(&self) -> Option<u64> {
        self.tokens_used
    }

    pub fn upload_progress(&self) -> u8 {
        self.upload_progress
    }

    /// Authoritative reconciliation: the whole collection is replaced by
    /// server truth, superseding any optimistic entries.
    pub fn replace_interviews(&mut self, interviews: Vec<Interview>) {
        self.interviews = interviews;
    }

    /// Appends a server-confirmed interview.
    pub fn insert_confirmed(&mut self, interview: Interview) {
        let mut interviews = std::mem::take(&mut self.interviews);
        interviews.retain(|i| i.id != interview.id);
        interviews.push(interview);
        self.interviews = interviews;
    }

    /// Opens the workspace for an interview, clearing any artifacts left
    /// over from a previous session.
    pub fn open_workspace(&mut self, id: i64) {
        self.selected = Some(id);
        self.view = View::Workspace;
        self.transcript.clear();
        self.feedback = None;
        self.tokens_used = None;
        self.upload_progress = 0;
    }

    /// Optimistically marks an interview as uploaded before the network
    /// round-trip returns; inserts a provisional entry when the id is not
    /// in the collection yet.
    pub fn mark_uploaded(&mut self, id: i64, job_title: &str, media_kind: MediaKind) {
        match self.interviews.iter_mut().find(|i| i.id == id) {
            Some(existing) => {
                existing.advance_status(InterviewStatus::Uploaded);
                existing.origin = StateOrigin::Optimistic;
                existing.local_media_kind = Some(media_kind);
            }
            None => self.interviews.push(Interview {
                id,
                job_title: job_title.to_string(),
                status: InterviewStatus::Uploaded,
                created_at: None,
                transcript: None,
                extracted_audio: None,
                duration: None,
                origin: StateOrigin::Optimistic,
                local_media_kind: Some(media_kind),
            }),
        }
    }

    /// Forward-only, id-scoped status advance.
    pub fn advance_status(&mut self, id: i64, to: InterviewStatus) {
        if let Some(interview) = self.interviews.iter_mut().find(|i| i.id == id) {
            interview.advance_status(to);
            interview.origin = StateOrigin::Optimistic;
        }
    }

    /// Replaces the open transcript. No-op if the interview is gone.
    pub fn set_transcript(&mut self, id: i64, segments: Vec<TranscriptSegment>) {
        if self.contains(id) {
            self.transcript = segments;
        }
    }

    /// Applies a feedback response. Absent fields leave the prior values in
    /// place; the whole call is a no-op if the interview is gone.
    pub fn apply_feedback(&mut self, id: i64, feedback: Option<Feedback>, tokens: Option<u64>) {
        if !self.contains(id) {
            return;
        }
        if let Some(feedback) = feedback {
            self.feedback = Some(feedback);
        }
        if let Some(tokens) = tokens {
            self.tokens_used = Some(tokens);
        }
    }

    pub fn set_upload_progress(&mut self, percent: u8) {
        self.upload_progress = percent.min(100);
    }

    /// Removes a server-confirmed deletion. If the deleted interview was
    /// open, the workspace is cleared and the view returns to the landing
    /// screen.
    pub fn remove(&mut self, id: i64) {
        let mut interviews = std::mem::take(&mut self.interviews);
        interviews.retain(|i| i.id != id);
        self.interviews = interviews;

        if self.selected == Some(id) {
            self.selected = None;
            self.view = View::Landing;
            self.transcript.clear();
            self.feedback = None;
            self.tokens_used = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaKind;

    fn confirmed(id: i64, title: &str) -> Interview {
        Interview {
            id,
            job_title: title.to_string(),
            status: InterviewStatus::Uploaded,
            created_at: None,
            transcript: None,
            extracted_audio: None,
            duration: None,
            origin: StateOrigin::Confirmed,
            local_media_kind: None,
        }
    }

    fn segment(speaker: &str, text: &str) -> TranscriptSegment {
        TranscriptSegment {
            speaker: speaker.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn mark_uploaded_inserts_or_tags() {
        let mut store = InterviewStore::default();
        store.mark_uploaded(42, "QA Engineer", MediaKind::Audio);
        let entry = store.get(42).expect("entry");
        assert_eq!(entry.status, InterviewStatus::Uploaded);
        assert_eq!(entry.origin, StateOrigin::Optimistic);
        assert_eq!(entry.media_kind(), MediaKind::Audio);

        store.replace_interviews(vec![confirmed(42, "QA Engineer")]);
        store.mark_uploaded(42, "QA Engineer", MediaKind::Video);
        assert_eq!(store.interviews().len(), 1);
        assert_eq!(store.get(42).expect("entry").origin, StateOrigin::Optimistic);
    }

    #[test]
    fn updates_for_removed_id_are_noops() {
        let mut store = InterviewStore::default();
        store.insert_confirmed(confirmed(7, "Backend Engineer"));
        store.open_workspace(7);
        store.remove(7);

        store.advance_status(7, InterviewStatus::Analyzing);
        store.set_transcript(7, vec![segment("Interviewer", "Hi")]);
        store.apply_feedback(7, Some(Feedback::Text("Good".into())), Some(50));

        assert!(store.interviews().is_empty());
        assert!(store.transcript().is_empty());
        assert!(store.feedback().is_none());
        assert!(store.tokens_used().is_none());
    }

    #[test]
    fn removing_open_interview_clears_workspace() {
        let mut store = InterviewStore::default();
        store.insert_confirmed(confirmed(1, "QA Engineer"));
        store.insert_confirmed(confirmed(2, "Data Analyst"));
        store.open_workspace(1);
        store.set_transcript(1, vec![segment("Candidate", "Hello")]);
        store.apply_feedback(1, Some(Feedback::Text("Fine".into())), Some(10));

        store.remove(1);
        assert_eq!(store.view(), View::Landing);
        assert!(store.selected().is_none());
        assert!(store.transcript().is_empty());
        assert!(store.feedback().is_none());
        assert!(store.tokens_used().is_none());
        assert!(store.contains(2));
    }

    #[test]
    fn removing_other_interview_keeps_workspace() {
        let mut store = InterviewStore::default();
        store.insert_confirmed(confirmed(1, "QA Engineer"));
        store.insert_confirmed(confirmed(2, "Data Analyst"));
        store.open_workspace(1);
        store.set_transcript(1, vec![segment("Candidate", "Hello")]);

        store.remove(2);
        assert_eq!(store.view(), View::Workspace);
        assert_eq!(store.selected(), Some(1));
        assert_eq!(store.transcript().len(), 1);
        assert!(!store.contains(2));
    }

    #[test]
    fn feedback_fields_apply_independently() {
        let mut store = InterviewStore::default();
        store.insert_confirmed(confirmed(3, "QA Engineer"));

        store.apply_feedback(3, Some(Feedback::Text("Good job".into())), None);
        assert_eq!(store.feedback(), Some(&Feedback::Text("Good job".into())));
        assert!(store.tokens_used().is_none());

        // A later partial response must not blank out what is already there.
        store.apply_feedback(3, None, Some(120));
        assert_eq!(store.feedback(), Some(&Feedback::Text("Good job".into())));
        assert_eq!(store.tokens_used(), Some(120));
    }

    #[test]
    fn upload_progress_is_clamped() {
        let mut store = InterviewStore::default();
        store.set_upload_progress(250);
        assert_eq!(store.upload_progress(), 100);
        store.set_upload_progress(0);
        assert_eq!(store.upload_progress(), 0);
    }
}
