//! UI Components
//!
//! Leptos components for the chat view.

pub mod chat_input;
pub mod header;
pub mod loading;
pub mod message_bubble;
pub mod message_list;
pub mod plot_frame;

pub use chat_input::ChatInput;
pub use header::Header;
pub use loading::TypingIndicator;
pub use message_bubble::MessageBubble;
pub use message_list::MessageList;
pub use plot_frame::PlotFrame;
