//! # Command Layer
//!
//! Each command drives one [`ListController`](crate::controller::ListController)
//! through a user-level operation and packages the outcome as a
//! [`CmdResult`]: the records to show plus leveled messages. Commands never
//! print; presentation belongs to the client.
//!
//! All list commands first make sure the controller is loaded, then apply the
//! caller's filter, so every result carries the filtered view as of the end
//! of the operation.

use crate::config::ParishConfig;
use crate::model::RecordKind;

pub mod config;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod subscribe;
pub mod summary;
pub mod toggle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug)]
pub struct CmdResult<R> {
    /// The filtered view after the command ran.
    pub listed: Vec<R>,
    /// Records removed or changed by the command.
    pub affected: Vec<R>,
    /// Size of the authoritative collection after the command ran.
    pub total: usize,
    pub config: Option<ParishConfig>,
    pub messages: Vec<CmdMessage>,
}

impl<R> Default for CmdResult<R> {
    fn default() -> Self {
        Self {
            listed: Vec::new(),
            affected: Vec::new(),
            total: 0,
            config: None,
            messages: Vec::new(),
        }
    }
}

impl<R> CmdResult<R> {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, records: Vec<R>, total: usize) -> Self {
        self.listed = records;
        self.total = total;
        self
    }

    pub fn with_config(mut self, config: ParishConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Record counts for one kind, for dashboard summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindCount {
    pub kind: RecordKind,
    pub total: usize,
    pub visible: usize,
}
