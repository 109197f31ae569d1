use crate::core::TableError;
use crate::facade::{FieldPrompt, RawFields, Session, UserInteraction};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Session plus the messages waiting to be shown on the next page load.
#[derive(Debug)]
pub struct PageState {
    pub session: Session,
    pub notices: Vec<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub page: Arc<Mutex<PageState>>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self::with_notices(session, Vec::new())
    }

    /// State whose first page load shows `notices`, e.g. seed rejections.
    pub fn with_notices(session: Session, notices: Vec<String>) -> Self {
        Self {
            page: Arc::new(Mutex::new(PageState { session, notices })),
        }
    }
}

/// Answers the field prompt with the form that was posted and turns
/// reports into page notices.
#[derive(Debug, Default)]
pub struct FormInteraction {
    submitted: Option<RawFields>,
    pub notices: Vec<String>,
}

impl FormInteraction {
    pub fn new(submitted: Option<RawFields>) -> Self {
        Self {
            submitted,
            notices: Vec::new(),
        }
    }
}

impl UserInteraction for FormInteraction {
    fn collect_fields(&mut self, _prompt: &FieldPrompt) -> Option<RawFields> {
        self.submitted.take()
    }

    fn report_rejection(&mut self, error: &TableError) {
        self.notices.push(error.to_string());
    }
}
