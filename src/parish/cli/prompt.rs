//! Terminal implementations of the library's two outward seams.

use async_trait::async_trait;
use console::{style, Term};
use parish::confirm::{ConfirmRequest, ConfirmationGate};
use parish::failure::Navigator;
use tracing::{debug, warn};

/// Asks on stderr and reads the answer from the terminal.
///
/// Without a terminal there is nobody to ask, so the answer is no.
pub struct TerminalGate;

#[async_trait]
impl ConfirmationGate for TerminalGate {
    async fn confirm(&self, request: &ConfirmRequest) -> bool {
        let request = request.clone();
        tokio::task::spawn_blocking(move || ask(&Term::stderr(), &request))
            .await
            .unwrap_or(false)
    }
}

fn ask(term: &Term, request: &ConfirmRequest) -> bool {
    if !term.is_term() {
        warn!("No terminal to confirm \"{}\"; use --yes", request.title);
        return false;
    }

    let shown = term
        .write_line(&style(&request.title).bold().to_string())
        .and_then(|_| term.write_line(&request.message))
        .and_then(|_| {
            term.write_str(&format!(
                "[s] {} / [n] {}: ",
                request.labels.confirm, request.labels.cancel
            ))
        });
    if let Err(e) = shown {
        warn!("Could not show confirmation prompt: {}", e);
        return false;
    }

    match term.read_line() {
        Ok(answer) => is_yes(&answer, &request.labels.confirm),
        Err(e) => {
            warn!("Could not read confirmation: {}", e);
            false
        }
    }
}

fn is_yes(answer: &str, confirm_label: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    matches!(answer.as_str(), "s" | "sim" | "y" | "yes") || answer == confirm_label.to_lowercase()
}

/// Reports the login redirect; a terminal has no login screen to open.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn redirect(&self, path: &str) {
        debug!("Redirecting to {}", path);
        eprintln!(
            "{}",
            style(format!("Faça login novamente em {}", path)).yellow()
        );
    }
}
