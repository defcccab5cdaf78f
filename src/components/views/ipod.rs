use dioxus::prelude::*;

use crate::api::models::{format_duration, Song};
use crate::components::modals::{DeleteSongDialog, EditSongModal, ModalController};
use crate::components::player::SpotifyPlayer;
use crate::components::{Icon, IpodController, SongsResource};
use crate::songlist::Paginator;

const MENU_SONGS_PER_PAGE: usize = 5;

/// The iPod face: screen above, click wheel below.
#[component]
pub fn IpodView() -> Element {
    rsx! {
        div { class: "flex items-start justify-center py-4",
            div { class: "w-[400px] bg-gradient-to-b from-zinc-300 to-zinc-400 rounded-[40px] shadow-2xl flex flex-col items-center p-6",
                IpodScreen {}
                div { class: "flex items-center justify-center w-full py-8",
                    IpodWheel {}
                }
            }
        }
    }
}

#[component]
fn IpodScreen() -> Element {
    let songs = use_context::<SongsResource>();
    let mut ipod = use_context::<IpodController>();
    let mut pager = use_signal(|| Paginator::new(MENU_SONGS_PER_PAGE));

    use_effect(move || {
        if let Some(Ok(list)) = songs() {
            pager.with_mut(|p| p.observe_len(list.len()));
        }
    });

    // The menu page follows the highlight cursor as the wheel moves it.
    use_effect(move || {
        if let Some(Ok(list)) = songs() {
            if let Some(index) = ipod.current().selection.highlighted_index(&list) {
                let target = pager.peek().page_for_index(index);
                if target != pager.peek().page() {
                    pager.with_mut(|p| p.go_to(target, list.len()));
                }
            }
        }
    });

    let list = match songs() {
        Some(Ok(list)) => list,
        _ => Vec::new(),
    };
    let state = ipod.current();
    let pager_now = pager();
    let visible: Vec<Song> = pager_now.slice(&list).to_vec();
    let total_pages = pager_now.total_pages(list.len());
    let selected = state.selection.selected_song(&list).cloned();

    let menu_class = if state.sidebar_open {
        "absolute top-0 left-0 h-full w-2/3 max-w-[260px] z-20 bg-zinc-900 border-r border-zinc-800 transition-transform duration-300 translate-x-0 flex flex-col"
    } else {
        "absolute top-0 left-0 h-full w-2/3 max-w-[260px] z-20 bg-zinc-900 border-r border-zinc-800 transition-transform duration-300 -translate-x-full flex flex-col"
    };

    rsx! {
        div { class: "w-full h-[380px] bg-zinc-950 rounded-3xl flex overflow-hidden relative border-4 border-zinc-700",
            div { class: "{menu_class}",
                ul { class: "flex-1 overflow-y-auto",
                    for song in visible {
                        li {
                            class: if state.selection.highlighted_id == Some(song.id) { "px-5 py-2.5 cursor-pointer bg-zinc-800 text-white" } else { "px-5 py-2.5 cursor-pointer text-zinc-300 hover:bg-zinc-800/50" },
                            onclick: {
                                let id = song.id;
                                move |_| ipod.highlight(Some(id))
                            },
                            div { class: "text-sm font-medium truncate", "{song.title}" }
                            div { class: "text-xs text-zinc-500 truncate", "{song.artist}" }
                        }
                    }
                }
                div { class: "py-2 text-center border-t border-zinc-800",
                    span { class: "text-xs text-zinc-500", "Page {pager_now.page()} of {total_pages}" }
                }
            }

            if let Some(song) = selected {
                SongDetailPanel { song, playing: state.is_playing }
            } else {
                div { class: "flex-1 flex flex-col items-center justify-center gap-3 text-center p-6",
                    Icon { name: "music".to_string(), class: "w-12 h-12 text-zinc-700".to_string() }
                    p { class: "text-sm text-zinc-500", "Press MENU, scroll to a song, and press the center button." }
                }
            }
        }
    }
}

/// Detail panel for the selected song, with the embedded player and the
/// edit/delete entry points.
#[component]
fn SongDetailPanel(song: Song, playing: bool) -> Element {
    let mut edit_modal = ModalController::new(use_signal(|| false));
    let mut delete_modal = ModalController::new(use_signal(|| false));

    let genre = song.genre.clone().unwrap_or_else(|| "—".to_string());
    let decade = song.decade_label();

    rsx! {
        div { class: "flex-1 flex flex-col items-center justify-start p-4 overflow-y-auto",
            SpotifyPlayer { song: song.clone(), playing }

            div { class: "w-full text-center mt-1",
                p { class: "text-lg font-bold text-white break-words", "{song.title}" }
                p { class: "text-sm text-zinc-400 break-words", "{song.artist}" }
                p { class: "text-xs text-zinc-500", "{song.album}" }
                p { class: "text-xs text-zinc-600 mt-1",
                    "{song.year} · {decade} · {format_duration(song.duration)} · {genre}"
                }
            }

            div { class: "flex gap-2 mt-3",
                button {
                    class: "flex items-center gap-1.5 px-3 py-1.5 rounded-lg text-xs bg-zinc-800 text-zinc-200 hover:bg-zinc-700 transition-colors",
                    onclick: move |_| edit_modal.open(),
                    Icon { name: "pen".to_string(), class: "w-3 h-3".to_string() }
                    "Edit"
                }
                button {
                    class: "flex items-center gap-1.5 px-3 py-1.5 rounded-lg text-xs bg-red-600/80 text-white hover:bg-red-500 transition-colors",
                    onclick: move |_| delete_modal.open(),
                    Icon { name: "trash".to_string(), class: "w-3 h-3".to_string() }
                    "Delete"
                }
            }
        }

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

#[component]
fn IpodWheel() -> Element {
    let songs = use_context::<SongsResource>();
    let mut ipod = use_context::<IpodController>();
    let playing = ipod.current().is_playing;

    let current_list = move || match songs() {
        Some(Ok(list)) => list,
        _ => Vec::new(),
    };

    rsx! {
        div { class: "w-56 h-56 bg-gradient-to-b from-zinc-300 to-zinc-500 rounded-full flex flex-col items-center justify-center relative shadow-inner",
            button {
                class: "absolute top-6 left-1/2 -translate-x-1/2 text-zinc-700 font-bold text-sm",
                onclick: move |_| ipod.menu(),
                "MENU"
            }
            button {
                class: "absolute left-6 top-1/2 -translate-y-1/2 text-zinc-600",
                aria_label: "Previous",
                onclick: move |_| {
                    let list = current_list();
                    ipod.up(&list);
                },
                Icon { name: "caret-left".to_string(), class: "w-5 h-5".to_string() }
            }
            button {
                class: "absolute right-6 top-1/2 -translate-y-1/2 text-zinc-600",
                aria_label: "Next",
                onclick: move |_| {
                    let list = current_list();
                    ipod.down(&list);
                },
                Icon { name: "caret-right".to_string(), class: "w-5 h-5".to_string() }
            }
            button {
                class: "absolute bottom-6 left-1/2 -translate-x-1/2 text-zinc-600",
                aria_label: "Play/Pause",
                onclick: move |_| ipod.play_pause(),
                Icon {
                    name: if playing { "pause".to_string() } else { "play".to_string() },
                    class: "w-4 h-4".to_string(),
                }
            }
            button {
                class: "w-24 h-24 bg-white rounded-full shadow-md absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2",
                aria_label: "Select Song",
                onclick: move |_| ipod.center(),
            }
        }
    }
}
