use dioxus::prelude::*;

use crate::components::modals::{AddSongModal, DeleteSongDialog, EditSongModal, ModalController};
use crate::components::{Icon, IpodController, SongsResource};

/// Action bar above the active view: add a song any time, edit/delete once
/// a song is selected. Each modal hangs off its own open flag.
#[component]
pub fn TopBar() -> Element {
    let ipod = use_context::<IpodController>();
    let songs = use_context::<SongsResource>();
    let mut add_modal = ModalController::new(use_signal(|| false));
    let mut edit_modal = ModalController::new(use_signal(|| false));
    let mut delete_modal = ModalController::new(use_signal(|| false));

    let list = match songs() {
        Some(Ok(list)) => list,
        _ => Vec::new(),
    };
    let selected = ipod.current().selection.selected_song(&list).cloned();

    rsx! {
        div { class: "w-full flex justify-end items-center h-16 px-6 gap-2 border-b border-zinc-800/50",
            button {
                class: "flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium bg-sky-600 text-white hover:bg-sky-500 transition-colors",
                onclick: move |_| add_modal.open(),
                Icon { name: "plus".to_string(), class: "w-4 h-4".to_string() }
                "Add Song"
            }
            if selected.is_some() {
                button {
                    class: "flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium bg-red-600/80 text-white hover:bg-red-500 transition-colors",
                    onclick: move |_| delete_modal.open(),
                    Icon { name: "trash".to_string(), class: "w-4 h-4".to_string() }
                    "Delete"
                }
                button {
                    class: "flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium bg-zinc-800 text-zinc-200 hover:bg-zinc-700 transition-colors",
                    onclick: move |_| edit_modal.open(),
                    Icon { name: "pen".to_string(), class: "w-4 h-4".to_string() }
                    "Edit"
                }
            }
        }

        if add_modal.is_open() {
            AddSongModal { on_close: move |_| add_modal.close() }
        }
        if let Some(song) = selected {
            if edit_modal.is_open() {
                EditSongModal {
                    song: song.clone(),
                    on_close: move |_| edit_modal.close(),
                }
            }
            if delete_modal.is_open() {
                DeleteSongDialog {
                    song: song.clone(),
                    on_close: move |_| delete_modal.close(),
                }
            }
        }
    }
}
