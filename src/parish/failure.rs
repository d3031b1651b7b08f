//! Classification of data source failures into user-facing messages.
//!
//! | outcome              | kind                    | message                     |
//! |----------------------|-------------------------|-----------------------------|
//! | 401                  | `AuthenticationExpired` | session expired + redirect  |
//! | 403                  | `Forbidden`             | forbidden                   |
//! | 404                  | `NotFound`              | not found                   |
//! | 500                  | `ServerFault`           | server error                |
//! | other, with payload  | `PayloadReported`       | payload message, verbatim   |
//! | other, no payload    | `Unknown`               | generic fallback            |
//! | transport failure    | `Network`               | generic fallback            |
//!
//! Only `AuthenticationExpired` has a side effect: [`ErrorReporter`] sends the
//! user to the login entry point through its [`Navigator`].

use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

pub const SESSION_EXPIRED: &str = "Sessão expirada. Faça login novamente.";
pub const FORBIDDEN: &str = "Você não tem permissão para acessar este recurso.";
pub const NOT_FOUND: &str = "Recurso não encontrado.";
pub const SERVER_ERROR: &str = "Erro interno do servidor. Tente novamente mais tarde.";
pub const UNKNOWN_ERROR: &str = "Ocorreu um erro desconhecido.";

pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Why a data source could not deliver its records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    #[error("transport failure: {0}")]
    Network(String),

    #[error("status {code}")]
    Status { code: u16, message: Option<String> },
}

impl Failure {
    pub fn status(code: u16) -> Self {
        Failure::Status {
            code,
            message: None,
        }
    }

    pub fn status_with_message(code: u16, message: impl Into<String>) -> Self {
        Failure::Status {
            code,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Unknown,
    Network,
    AuthenticationExpired,
    Forbidden,
    NotFound,
    ServerFault,
    PayloadReported,
}

/// A failure paired with the message to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub kind: FailureKind,
    pub message: String,
}

impl Classified {
    fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub fn classify(failure: &Failure) -> Classified {
    match failure {
        Failure::Network(_) => Classified::new(FailureKind::Network, UNKNOWN_ERROR),
        Failure::Status { code: 401, .. } => {
            Classified::new(FailureKind::AuthenticationExpired, SESSION_EXPIRED)
        }
        Failure::Status { code: 403, .. } => Classified::new(FailureKind::Forbidden, FORBIDDEN),
        Failure::Status { code: 404, .. } => Classified::new(FailureKind::NotFound, NOT_FOUND),
        Failure::Status { code: 500, .. } => {
            Classified::new(FailureKind::ServerFault, SERVER_ERROR)
        }
        Failure::Status {
            message: Some(message),
            ..
        } if !message.trim().is_empty() => {
            Classified::new(FailureKind::PayloadReported, message.clone())
        }
        Failure::Status { .. } => Classified::new(FailureKind::Unknown, UNKNOWN_ERROR),
    }
}

/// Where the user is sent when their session has expired.
pub trait Navigator: Send + Sync {
    fn redirect(&self, path: &str);
}

/// Navigator for clients without a login screen.
pub struct NoNavigation;

impl Navigator for NoNavigation {
    fn redirect(&self, _path: &str) {}
}

/// Classifies failures and performs the redirect side effect.
#[derive(Clone)]
pub struct ErrorReporter {
    navigator: Arc<dyn Navigator>,
    login_path: String,
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new(Arc::new(NoNavigation))
    }
}

impl ErrorReporter {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            navigator,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn report(&self, failure: &Failure) -> Classified {
        let classified = classify(failure);
        warn!("Load failed ({}): {}", failure, classified.message);
        if classified.kind == FailureKind::AuthenticationExpired {
            self.navigator.redirect(&self.login_path);
        }
        classified
    }
}
