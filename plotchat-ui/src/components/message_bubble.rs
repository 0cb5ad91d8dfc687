//! Message Bubble
//!
//! One transcript entry: user text on the right, bot text on the left,
//! plots in an embedded frame.

use leptos::*;

use crate::components::PlotFrame;
use crate::state::{ChatMessage, Sender};

#[component]
pub fn MessageBubble(index: usize, message: ChatMessage) -> impl IntoView {
    let time = message.time_label();

    match message.sender {
        Sender::User => view! {
            <div class="flex justify-end">
                <div class="max-w-[75%] bg-primary-600 text-white rounded-2xl rounded-br-sm px-4 py-2">
                    <p class="whitespace-pre-wrap break-words">{message.content}</p>
                    <span class="block text-right text-xs text-primary-200 mt-1">{time}</span>
                </div>
            </div>
        }
        .into_view(),
        Sender::Bot => {
            let is_error = message.is_error();
            let bubble_class = if is_error {
                "max-w-[75%] bg-red-900/60 text-red-100 rounded-2xl rounded-bl-sm px-4 py-2"
            } else {
                "max-w-[75%] bg-gray-800 text-gray-100 rounded-2xl rounded-bl-sm px-4 py-2"
            };

            view! {
                <div class="flex justify-start">
                    <div class=bubble_class>
                        <p class="whitespace-pre-wrap break-words">{message.content}</p>
                        <span class="block text-xs text-gray-500 mt-1">{time}</span>
                    </div>
                </div>
            }
            .into_view()
        }
        Sender::Plot => view! {
            <div class="flex justify-start">
                <PlotFrame index=index document=message.content />
            </div>
        }
        .into_view(),
    }
}
