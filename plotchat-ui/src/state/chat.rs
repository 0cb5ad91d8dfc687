//! Chat State
//!
//! Transcript and request status as Leptos signals, plus the submit cycle.

use leptos::*;

use crate::api::{self, Reply};
use crate::document::plot_document;

/// Prefix of the bot entry that reports a failed request
pub const ERROR_PREFIX: &str = "Error: ";

/// Who produced a transcript entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
    Plot,
}

/// A transcript entry
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    /// Text, or the rendered document for plots
    pub content: String,
    pub timestamp: i64,
}

impl ChatMessage {
    fn new(sender: Sender, content: String) -> Self {
        Self {
            sender,
            content,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn user(content: String) -> Self {
        Self::new(Sender::User, content)
    }

    pub fn bot(content: String) -> Self {
        Self::new(Sender::Bot, content)
    }

    pub fn plot(document: String) -> Self {
        Self::new(Sender::Plot, document)
    }

    /// Whether this entry reports a failed request
    pub fn is_error(&self) -> bool {
        self.sender == Sender::Bot && self.content.starts_with(ERROR_PREFIX)
    }

    /// Local time of day, for the bubble footer
    pub fn time_label(&self) -> String {
        chrono::DateTime::from_timestamp_millis(self.timestamp)
            .map(|dt| dt.with_timezone(&chrono::Local).format("%H:%M").to_string())
            .unwrap_or_default()
    }
}

/// Chat state provided to all components
#[derive(Clone, Copy)]
pub struct ChatState {
    /// Append-only transcript
    pub messages: RwSignal<Vec<ChatMessage>>,
    /// A request is outstanding
    pub busy: RwSignal<bool>,
    /// Index of the plot currently shown full-screen
    pub fullscreen: RwSignal<Option<usize>>,
}

/// Entries the transcript starts with
pub fn greetings() -> Vec<ChatMessage> {
    vec![
        ChatMessage::bot("Hi! What would you like me to plot today?".to_string()),
        ChatMessage::bot(
            "Try prompts like: \"draw a sphere\", \"make a donut shape\", \"plot a sine surface\""
                .to_string(),
        ),
    ]
}

/// Provide chat state to the component tree
pub fn provide_chat_state() {
    provide_context(ChatState {
        messages: create_rw_signal(greetings()),
        busy: create_rw_signal(false),
        fullscreen: create_rw_signal(None),
    });
}

/// Fetch the chat state from context
pub fn use_chat_state() -> ChatState {
    expect_context::<ChatState>()
}

impl ChatState {
    /// Start a request for `input`.
    ///
    /// Returns false (and changes nothing) when the input is empty or a
    /// request is already outstanding.
    pub fn submit(&self, input: &str) -> bool {
        let Some(prompt) = prepare_prompt(input, self.busy.get_untracked()) else {
            return false;
        };

        self.busy.set(true);
        self.messages.update(|m| m.push(ChatMessage::user(prompt.clone())));

        let state = *self;
        spawn_local(async move {
            let result = api::send_prompt(&prompt).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Prompt failed: {}", e).into());
            }
            state.messages.update(|m| m.push(derive_entry(result)));
            state.busy.set(false);
        });

        true
    }

    /// Show the plot at `index` full-screen, or leave full-screen if it already is
    pub fn toggle_fullscreen(&self, index: usize) {
        self.fullscreen
            .update(|current| *current = toggled(*current, index));
    }

    pub fn exit_fullscreen(&self) {
        self.fullscreen.set(None);
    }
}

/// The prompt to send, or `None` when the submission must be ignored
pub fn prepare_prompt(input: &str, busy: bool) -> Option<String> {
    let prompt = input.trim();
    if busy || prompt.is_empty() {
        None
    } else {
        Some(prompt.to_string())
    }
}

/// The single transcript entry derived from a finished request
pub fn derive_entry(result: Result<Reply, String>) -> ChatMessage {
    match result {
        Ok(reply) if reply.kind == "plot" => ChatMessage::plot(plot_document(&reply.content)),
        Ok(reply) => ChatMessage::bot(reply.content),
        Err(e) => ChatMessage::bot(format!("{}{}", ERROR_PREFIX, e)),
    }
}

fn toggled(current: Option<usize>, index: usize) -> Option<usize> {
    if current == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_prompt() {
        assert_eq!(prepare_prompt("  plot sales  ", false), Some("plot sales".to_string()));
        assert_eq!(prepare_prompt("   ", false), None);
        assert_eq!(prepare_prompt("", false), None);
        assert_eq!(prepare_prompt("plot sales", true), None);
    }

    #[test]
    fn test_derive_entry() {
        let plot = derive_entry(Ok(Reply {
            kind: "plot".to_string(),
            content: "<div/>".to_string(),
        }));
        assert_eq!(plot.sender, Sender::Plot);
        assert!(plot.content.contains("<body>\n<div/>\n</body>"));
        assert!(plot.content.contains(".js-plotly-plot"));

        let text = derive_entry(Ok(Reply {
            kind: "text".to_string(),
            content: "hi".to_string(),
        }));
        assert_eq!(text.sender, Sender::Bot);
        assert_eq!(text.content, "hi");

        let failed = derive_entry(Err("Network error: refused".to_string()));
        assert_eq!(failed.sender, Sender::Bot);
        assert_eq!(failed.content, "Error: Network error: refused");
        assert!(failed.is_error());
        assert!(!text.is_error());
    }

    #[test]
    fn test_greetings_seed_transcript() {
        let seeded = greetings();
        assert_eq!(seeded.len(), 2);
        assert!(seeded.iter().all(|m| m.sender == Sender::Bot && !m.is_error()));
    }

    #[test]
    fn test_toggled() {
        assert_eq!(toggled(None, 2), Some(2));
        assert_eq!(toggled(Some(2), 2), None);
        assert_eq!(toggled(Some(1), 2), Some(2));
    }
}
