//! State Management
//!
//! Chat transcript and request status.

pub mod chat;

pub use chat::{provide_chat_state, use_chat_state, ChatMessage, ChatState, Sender};
