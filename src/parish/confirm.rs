//! The yes/no boundary in front of destructive actions.
//!
//! A [`ConfirmationGate`] is awaited before a list view removes anything.
//! Until it resolves, nothing is mutated; a `false` answer leaves the
//! collection exactly as it was.

use async_trait::async_trait;

pub const DEFAULT_CONFIRM_LABEL: &str = "Confirmar";
pub const DEFAULT_CANCEL_LABEL: &str = "Cancelar";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmLabels {
    pub confirm: String,
    pub cancel: String,
}

impl Default for ConfirmLabels {
    fn default() -> Self {
        Self {
            confirm: DEFAULT_CONFIRM_LABEL.to_string(),
            cancel: DEFAULT_CANCEL_LABEL.to_string(),
        }
    }
}

impl ConfirmLabels {
    pub fn new(confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        Self {
            confirm: confirm.into(),
            cancel: cancel.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub labels: ConfirmLabels,
}

impl ConfirmRequest {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            labels: ConfirmLabels::default(),
        }
    }

    pub fn with_labels(mut self, labels: ConfirmLabels) -> Self {
        self.labels = labels;
        self
    }
}

#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    async fn confirm(&self, request: &ConfirmRequest) -> bool;
}

/// Answers yes to everything (`--yes` in the CLI).
pub struct AlwaysConfirm;

/// Answers no to everything.
pub struct NeverConfirm;

#[async_trait]
impl ConfirmationGate for AlwaysConfirm {
    async fn confirm(&self, _request: &ConfirmRequest) -> bool {
        true
    }
}

#[async_trait]
impl ConfirmationGate for NeverConfirm {
    async fn confirm(&self, _request: &ConfirmRequest) -> bool {
        false
    }
}
