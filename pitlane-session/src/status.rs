/// Status of one workflow, reset at the start of every submission.
/// Never persisted; its lifetime is bound to one screen mount.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkflowStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success,
}

impl WorkflowStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, WorkflowStatus::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, WorkflowStatus::Success)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WorkflowStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}
