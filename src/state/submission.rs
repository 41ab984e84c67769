//! Request lifecycle shared by every form
//!
//! A [`SubmissionController`] owns the [`RequestStatus`] of one form. It hands
//! out a [`Ticket`] when a request starts and only accepts the completion
//! carrying that same ticket, so a form can never have two requests in
//! flight or apply an answer that belongs to someone else.

use super::View;
use std::fmt;
use uuid::Uuid;

/// Identifier of one in-flight request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(Uuid);

impl Ticket {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of the latest submission of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending { ticket: Ticket },
    Succeeded,
    Failed,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Pending { .. } => "Working...",
            Self::Succeeded => "Done",
            Self::Failed => "Failed",
        }
    }
}

/// Outcome of a finished request, with backend detail already stripped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Guards the single outstanding request of one form
#[derive(Debug, Clone, Default)]
pub struct SubmissionController {
    status: RequestStatus,
}

impl SubmissionController {
    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, RequestStatus::Pending { .. })
    }

    /// Whether the trigger is actionable given the form's readiness
    pub fn can_submit(&self, fields_ready: bool) -> bool {
        fields_ready && !self.is_pending()
    }

    /// Start a request; `None` while another one is still pending
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.is_pending() {
            return None;
        }
        let ticket = Ticket::new();
        self.status = RequestStatus::Pending { ticket };
        Some(ticket)
    }

    /// Finish the request identified by `ticket`
    ///
    /// Returns false, leaving the state untouched, when `ticket` is not
    /// the outstanding one.
    pub fn complete(&mut self, ticket: Ticket, outcome: Outcome) -> bool {
        match self.status {
            RequestStatus::Pending { ticket: current } if current == ticket => {
                self.status = match outcome {
                    Outcome::Success => RequestStatus::Succeeded,
                    Outcome::Failure => RequestStatus::Failed,
                };
                true
            }
            _ => false,
        }
    }
}

/// Every backend operation a form can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    Generate,
    Transcribe,
    Summarize,
    GenerateNfrDoc,
    ExportNfrDoc,
}

impl Operation {
    /// View whose form owns the operation
    pub fn view(self) -> View {
        match self {
            Self::Search => View::Search,
            Self::Generate => View::Generator,
            Self::Transcribe | Self::Summarize => View::Summarizer,
            Self::GenerateNfrDoc | Self::ExportNfrDoc => View::Nfr,
        }
    }

    pub fn success_title(self) -> &'static str {
        match self {
            Self::Search => "Search completed",
            Self::Generate => "Data Generated",
            Self::Transcribe => "Audio Transcribed",
            Self::Summarize => "Text Summarized",
            Self::GenerateNfrDoc => "Document Generated",
            Self::ExportNfrDoc => "Document Exported",
        }
    }

    /// Message shown on success; the export message is followed by the saved path
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Search => "Results have been fetched successfully",
            Self::Generate => "Sample data has been generated successfully",
            Self::Transcribe => "Your audio has been successfully transcribed",
            Self::Summarize => "Your text has been successfully summarized",
            Self::GenerateNfrDoc => "NFR document has been generated successfully",
            Self::ExportNfrDoc => "Saved to",
        }
    }

    /// Generic message shown on failure; never includes backend detail
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Search => "Failed to perform search. Please try again.",
            Self::Generate => "Failed to generate data. Please check your template.",
            Self::Transcribe => "Failed to transcribe audio. Please try again.",
            Self::Summarize => "Failed to summarize text. Please try again.",
            Self::GenerateNfrDoc => "Failed to generate document. Please try again.",
            Self::ExportNfrDoc => "Failed to export document. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let controller = SubmissionController::default();
        assert_eq!(controller.status(), RequestStatus::Idle);
        assert!(!controller.is_pending());
    }

    #[test]
    fn test_can_submit_requires_ready_fields() {
        let controller = SubmissionController::default();
        assert!(controller.can_submit(true));
        assert!(!controller.can_submit(false));
    }

    #[test]
    fn test_begin_moves_to_pending() {
        let mut controller = SubmissionController::default();
        let ticket = controller.begin().unwrap();
        assert_eq!(controller.status(), RequestStatus::Pending { ticket });
        assert!(!controller.can_submit(true));
    }

    #[test]
    fn test_begin_refused_while_pending() {
        let mut controller = SubmissionController::default();
        let first = controller.begin().unwrap();
        assert!(controller.begin().is_none());
        assert_eq!(controller.status(), RequestStatus::Pending { ticket: first });
    }

    #[test]
    fn test_complete_success() {
        let mut controller = SubmissionController::default();
        let ticket = controller.begin().unwrap();
        assert!(controller.complete(ticket, Outcome::Success));
        assert_eq!(controller.status(), RequestStatus::Succeeded);
        assert!(controller.can_submit(true));
    }

    #[test]
    fn test_complete_failure() {
        let mut controller = SubmissionController::default();
        let ticket = controller.begin().unwrap();
        assert!(controller.complete(ticket, Outcome::Failure));
        assert_eq!(controller.status(), RequestStatus::Failed);
        assert!(controller.can_submit(true));
    }

    #[test]
    fn test_completion_applies_once() {
        let mut controller = SubmissionController::default();
        let ticket = controller.begin().unwrap();
        assert!(controller.complete(ticket, Outcome::Failure));
        assert!(!controller.complete(ticket, Outcome::Success));
        assert_eq!(controller.status(), RequestStatus::Failed);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut controller = SubmissionController::default();
        let old = controller.begin().unwrap();
        controller.complete(old, Outcome::Success);
        let current = controller.begin().unwrap();

        assert!(!controller.complete(old, Outcome::Failure));
        assert_eq!(controller.status(), RequestStatus::Pending { ticket: current });
    }

    #[test]
    fn test_resubmit_after_terminal_state() {
        let mut controller = SubmissionController::default();
        let ticket = controller.begin().unwrap();
        controller.complete(ticket, Outcome::Failure);
        let next = controller.begin().unwrap();
        assert_ne!(ticket, next);
        assert!(controller.is_pending());
    }

    #[test]
    fn test_operations_map_to_views() {
        assert_eq!(Operation::Search.view(), View::Search);
        assert_eq!(Operation::Generate.view(), View::Generator);
        assert_eq!(Operation::Transcribe.view(), View::Summarizer);
        assert_eq!(Operation::Summarize.view(), View::Summarizer);
        assert_eq!(Operation::GenerateNfrDoc.view(), View::Nfr);
        assert_eq!(Operation::ExportNfrDoc.view(), View::Nfr);
    }

    #[test]
    fn test_failure_messages_are_generic() {
        for op in [
            Operation::Search,
            Operation::Generate,
            Operation::Transcribe,
            Operation::Summarize,
            Operation::GenerateNfrDoc,
            Operation::ExportNfrDoc,
        ] {
            assert!(op.failure_message().starts_with("Failed to"));
        }
    }

    #[test]
    fn test_export_message_prefixes_saved_path() {
        assert_eq!(Operation::ExportNfrDoc.success_title(), "Document Exported");
        assert_eq!(Operation::ExportNfrDoc.success_message(), "Saved to");
    }
}
