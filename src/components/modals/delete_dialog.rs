use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::api::models::Song;
use crate::api::SongsClient;
use crate::components::{Icon, IpodController, SelectionState, SongsResource};

/// Delete confirmation dialog. The replacement selection is computed from
/// the cached list before the DELETE goes out, so the panel lands on the
/// neighboring song once the refreshed list arrives.
#[component]
pub fn DeleteSongDialog(song: Song, on_close: EventHandler<()>) -> Element {
    let client = use_context::<SongsClient>();
    let mut songs = use_context::<SongsResource>();
    let mut ipod = use_context::<IpodController>();
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let song_id = song.id;
    let on_confirm = move |_| {
        let list = match songs() {
            Some(Ok(list)) => list,
            _ => Vec::new(),
        };
        let neighbor = SelectionState::neighbor_after_delete(&list, song_id);
        let client = client.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            match client.delete_song(song_id).await {
                Ok(()) => {
                    info!("deleted song {song_id}");
                    ipod.select(neighbor);
                    busy.set(false);
                    songs.restart();
                    on_close.call(());
                }
                Err(err) => {
                    warn!("failed to delete song {song_id}: {err}");
                    busy.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/60",
            div { class: "bg-zinc-900 border border-zinc-800 rounded-xl shadow-lg w-full max-w-sm p-8",
                div { class: "flex items-center gap-3 mb-4",
                    div { class: "w-10 h-10 rounded-full bg-red-500/10 flex items-center justify-center",
                        Icon { name: "trash".to_string(), class: "w-5 h-5 text-red-400".to_string() }
                    }
                    h2 { class: "text-xl font-bold text-white", "Delete Song" }
                }

                p { class: "text-sm text-zinc-400 mb-6",
                    "Delete \"{song.title}\" by {song.artist}? This cannot be undone."
                }

                if let Some(message) = error() {
                    p { class: "mb-4 text-sm text-red-400", "{message}" }
                }

                div { class: "flex justify-end gap-2",
                    button {
                        class: "px-4 py-2 rounded-lg text-sm text-zinc-300 hover:bg-zinc-800 transition-colors",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "px-4 py-2 rounded-lg text-sm font-medium bg-red-600 text-white hover:bg-red-500 transition-colors disabled:opacity-50",
                        disabled: busy(),
                        onclick: on_confirm,
                        if busy() { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}
