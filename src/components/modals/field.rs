// Shared form controls for the add/edit modals.

use dioxus::prelude::*;

use crate::api::models::GENRES;

#[component]
pub fn FieldRow(
    label: String,
    value: String,
    placeholder: Option<String>,
    error: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "mb-4",
            label { class: "block text-sm font-medium text-zinc-300 mb-1", "{label}" }
            input {
                class: "w-full px-3 py-2 bg-zinc-800/50 border border-zinc-700/50 rounded-lg text-sm text-white placeholder:text-zinc-500 focus:outline-none focus:border-sky-500/50",
                value,
                placeholder: placeholder.unwrap_or_default(),
                oninput: move |e| oninput.call(e),
            }
            if let Some(message) = error {
                p { class: "mt-1 text-xs text-red-400", "{message}" }
            }
        }
    }
}

#[component]
pub fn GenreSelect(
    value: String,
    error: Option<String>,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div { class: "mb-4",
            label { class: "block text-sm font-medium text-zinc-300 mb-1", "Genre" }
            select {
                class: "w-full px-3 py-2 bg-zinc-800/50 border border-zinc-700/50 rounded-lg text-sm text-white focus:outline-none focus:border-sky-500/50",
                value,
                oninput: move |e| oninput.call(e),
                option { value: "", "Select a genre" }
                for genre in GENRES {
                    option { value: "{genre}", "{genre}" }
                }
            }
            if let Some(message) = error {
                p { class: "mt-1 text-xs text-red-400", "{message}" }
            }
        }
    }
}
