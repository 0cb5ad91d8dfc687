//! App Root Component
//!
//! Single chat view with the state provider and global key handling.

use leptos::*;

use crate::components::{ChatInput, Header, MessageList};
use crate::state::{provide_chat_state, use_chat_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_chat_state();
    let state = use_chat_state();

    // Escape leaves full-screen plot mode
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            state.exit_fullscreen();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="h-screen bg-gray-900 text-white flex flex-col">
            <Header />
            <MessageList />
            <ChatInput />
        </div>
    }
}
