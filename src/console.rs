//! Terminal implementations of the UI capabilities
//!
//! Used by the `update-notifier` binary. Everything user-facing goes to
//! stderr; stdout carries the outbound signal wire.

use std::collections::HashMap;
use std::io::Write;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::core::Result;
use crate::update::{DialogService, NotificationService, PromptResponse, UiSurface};

/// Dialogs rendered as plain text blocks
pub struct ConsoleDialog {
    /// Button value returned from every restart prompt
    answer: String,
}

impl ConsoleDialog {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

#[async_trait]
impl DialogService for ConsoleDialog {
    fn show_new_features(&self, html: &str) {
        write_block("What's new", html);
    }

    fn html_success(&self, html: &str) {
        write_block("Success", html);
    }

    async fn update_prompt(&self, message: &str) -> Result<PromptResponse> {
        write_block("Update", &format!("{}\n> {}", message, self.answer));
        Ok(PromptResponse::from_button(&self.answer))
    }
}

/// Toasts printed as single lines
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl NotificationService for ConsoleNotifier {
    fn info(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "[info] {}", message);
    }
}

/// Element texts kept in memory and echoed when they change
#[derive(Debug, Default)]
pub struct ConsoleUi {
    elements: Mutex<HashMap<String, String>>,
}

impl ConsoleUi {
    pub fn text(&self, element_id: &str) -> Option<String> {
        self.elements.lock().get(element_id).cloned()
    }
}

impl UiSurface for ConsoleUi {
    fn set_text(&self, element_id: &str, text: &str) {
        self.elements
            .lock()
            .insert(element_id.to_string(), text.to_string());
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "#{} = {}", element_id, text);
    }
}

fn write_block(title: &str, body: &str) {
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "==== {} ====", title);
    let _ = writeln!(stderr, "{}", body.trim_end());
    let _ = writeln!(stderr, "{}", "=".repeat(title.len() + 10));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prompt_answer_maps_to_response() {
        let dialog = ConsoleDialog::new("restart");
        assert_eq!(
            dialog.update_prompt("Restart?").await.unwrap(),
            PromptResponse::Restart
        );

        let dialog = ConsoleDialog::new("later");
        assert_eq!(
            dialog.update_prompt("Restart?").await.unwrap(),
            PromptResponse::Later
        );
    }

    #[test]
    fn test_ui_keeps_last_text() {
        let ui = ConsoleUi::default();
        assert!(ui.text("version").is_none());
        ui.set_text("version", "Current version: v1.0.0");
        ui.set_text("version", "Current version: v1.0.1");
        assert_eq!(ui.text("version").as_deref(), Some("Current version: v1.0.1"));
    }
}
