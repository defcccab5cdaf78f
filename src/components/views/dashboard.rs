use dioxus::prelude::*;

use crate::api::models::{format_duration, Song};
use crate::components::{DashboardController, Icon};

/// Client-only favorites view, filled from the heart buttons on the list.
#[component]
pub fn DashboardView() -> Element {
    let dashboard = use_context::<DashboardController>();
    let set = dashboard.current();

    rsx! {
        div { class: "space-y-6",
            header { class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold text-white", "Dashboard" }
                span { class: "px-3 py-1 rounded-full bg-zinc-800 text-xs text-zinc-300",
                    if set.len() == 1 {
                        "1 song in your collection"
                    } else {
                        "{set.len()} songs in your collection"
                    }
                }
            }

            if set.is_empty() {
                div { class: "flex flex-col items-center justify-center py-20 gap-4 text-center",
                    Icon { name: "music".to_string(), class: "w-16 h-16 text-zinc-600".to_string() }
                    h3 { class: "text-xl font-medium text-white", "No songs in dashboard" }
                    p { class: "text-zinc-500", "Add songs from the library to see them here" }
                }
            } else {
                div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 xl:grid-cols-4 gap-4",
                    for song in set.songs().to_vec() {
                        DashboardSongCard { song }
                    }
                }
            }
        }
    }
}

#[component]
fn DashboardSongCard(song: Song) -> Element {
    let mut dashboard = use_context::<DashboardController>();
    let song_id = song.id;

    rsx! {
        div { class: "rounded-xl border border-zinc-800 bg-zinc-900/50 overflow-hidden group",
            div { class: "aspect-square bg-zinc-800 relative",
                if let Some(cover) = song.cover_art_url.clone() {
                    img {
                        class: "w-full h-full object-cover",
                        src: "{cover}",
                        alt: "{song.title} cover art",
                    }
                } else {
                    div { class: "w-full h-full flex items-center justify-center bg-gradient-to-br from-zinc-700 to-zinc-800",
                        Icon { name: "music".to_string(), class: "w-10 h-10 text-zinc-500".to_string() }
                    }
                }
                button {
                    class: "absolute top-2 right-2 p-2 rounded-full bg-zinc-950/70 text-zinc-300 hover:text-red-400 transition-colors opacity-0 group-hover:opacity-100",
                    aria_label: "Remove from dashboard",
                    onclick: move |_| dashboard.remove(song_id),
                    Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                }
            }
            div { class: "p-3",
                p { class: "text-sm font-medium text-white truncate", "{song.title}" }
                p { class: "text-xs text-zinc-400 truncate", "{song.artist}" }
                div { class: "flex items-center justify-between mt-1",
                    span { class: "text-xs text-zinc-500", "{song.year}" }
                    span { class: "text-xs text-zinc-500", "{format_duration(song.duration)}" }
                }
            }
        }
    }
}
