//! Blocking prompts shown by the rendering layer
//!
//! The wizard's missing-name alert and every reset confirmation go through
//! [`Prompt`]. Browser hosts back it with `window.alert` / `window.confirm`.

/// Blocking user prompts
pub trait Prompt {
    /// Show a message and wait for the user to dismiss it
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question; `true` means the user agreed
    fn confirm(&mut self, message: &str) -> bool;
}

/// Prompt with a fixed answer that records what it was asked
///
/// Useful for headless hosts and scripted sessions.
#[derive(Debug, Clone, Default)]
pub struct RecordingPrompt {
    answer: bool,
    pub alerts: Vec<String>,
    pub confirmations: Vec<String>,
}

impl RecordingPrompt {
    /// Answers every confirmation with `answer`
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Default::default()
        }
    }

    pub fn set_answer(&mut self, answer: bool) {
        self.answer = answer;
    }
}

impl Prompt for RecordingPrompt {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answer
    }
}
