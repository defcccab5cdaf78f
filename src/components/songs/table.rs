use dioxus::prelude::*;

use crate::api::models::{format_duration, Song};
use crate::components::songs::FavoriteButton;
use crate::components::Icon;
use crate::songlist::{SortDirection, SortKey, SortSpec};

const COLUMNS: [SortKey; 4] = [
    SortKey::Title,
    SortKey::Artist,
    SortKey::Album,
    SortKey::Year,
];

/// Tabular layout for wide viewports. Column headers drive the sort.
#[component]
pub fn SongsTable(
    songs: Vec<Song>,
    sort: SortSpec,
    selected_id: Option<u32>,
    highlighted_id: Option<u32>,
    on_sort: EventHandler<SortSpec>,
    on_row_click: EventHandler<u32>,
) -> Element {
    rsx! {
        div { class: "overflow-x-auto",
            table { class: "w-full text-left",
                thead {
                    tr { class: "border-b border-zinc-800",
                        for key in COLUMNS {
                            th { class: "px-4 py-2",
                                SortableHeader {
                                    label: key.label().to_string(),
                                    active: sort.key == key,
                                    direction: sort.direction,
                                    onclick: move |_| on_sort.call(sort.toggled(key)),
                                }
                            }
                        }
                        th { class: "px-4 py-2 text-xs font-semibold text-zinc-500 uppercase tracking-wider",
                            "Length"
                        }
                        th { class: "px-4 py-2" }
                    }
                }
                tbody {
                    for song in songs {
                        SongRow {
                            song: song.clone(),
                            selected: selected_id == Some(song.id),
                            highlighted: highlighted_id == Some(song.id),
                            on_click: move |_| on_row_click.call(song.id),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SongRow(
    song: Song,
    selected: bool,
    highlighted: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let row_class = if selected {
        "border-b border-zinc-800/50 bg-sky-500/10 cursor-pointer"
    } else if highlighted {
        "border-b border-zinc-800/50 bg-zinc-800/50 cursor-pointer"
    } else {
        "border-b border-zinc-800/50 hover:bg-zinc-800/30 cursor-pointer"
    };

    rsx! {
        tr { class: "{row_class}", onclick: move |e| on_click.call(e),
            td { class: "px-4 py-3 text-sm font-medium text-white", "{song.title}" }
            td { class: "px-4 py-3 text-sm text-zinc-400", "{song.artist}" }
            td { class: "px-4 py-3 text-sm text-zinc-400", "{song.album}" }
            td { class: "px-4 py-3 text-sm text-zinc-400", "{song.year}" }
            td { class: "px-4 py-3 text-sm text-zinc-500", "{format_duration(song.duration)}" }
            td { class: "px-4 py-3",
                FavoriteButton { song: song.clone() }
            }
        }
    }
}

#[component]
fn SortableHeader(
    label: String,
    active: bool,
    direction: SortDirection,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let label_class = if active {
        "text-xs font-semibold text-sky-400 uppercase tracking-wider"
    } else {
        "text-xs font-semibold text-zinc-500 uppercase tracking-wider"
    };

    rsx! {
        button {
            class: "flex items-center gap-1 {label_class} hover:text-sky-300 transition-colors",
            onclick: move |e| onclick.call(e),
            span { "{label}" }
            if active {
                Icon {
                    name: match direction {
                        SortDirection::Ascending => "chevron-up".to_string(),
                        SortDirection::Descending => "chevron-down".to_string(),
                    },
                    class: "w-3 h-3".to_string(),
                }
            }
        }
    }
}
