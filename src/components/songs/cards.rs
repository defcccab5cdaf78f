use dioxus::prelude::*;

use crate::api::models::{format_duration, Song};
use crate::components::songs::FavoriteButton;
use crate::songlist::{SortDirection, SortKey, SortSpec};

const SORT_OPTIONS: [(&str, SortKey, SortDirection); 6] = [
    ("Title (A-Z)", SortKey::Title, SortDirection::Ascending),
    ("Title (Z-A)", SortKey::Title, SortDirection::Descending),
    ("Artist (A-Z)", SortKey::Artist, SortDirection::Ascending),
    ("Year (oldest first)", SortKey::Year, SortDirection::Ascending),
    ("Year (newest first)", SortKey::Year, SortDirection::Descending),
    ("Duration (longest first)", SortKey::Duration, SortDirection::Descending),
];

fn option_value(key: SortKey, direction: SortDirection) -> String {
    let key = match key {
        SortKey::Title => "title",
        SortKey::Artist => "artist",
        SortKey::Album => "album",
        SortKey::Year => "year",
        SortKey::Duration => "duration",
    };
    let direction = match direction {
        SortDirection::Ascending => "asc",
        SortDirection::Descending => "desc",
    };
    format!("{key}:{direction}")
}

fn parse_option(value: &str) -> Option<SortSpec> {
    SORT_OPTIONS
        .iter()
        .find(|(_, key, direction)| option_value(*key, *direction) == value)
        .map(|(_, key, direction)| SortSpec {
            key: *key,
            direction: *direction,
        })
}

/// Stacked-card layout for narrow viewports; sorting moves into a dropdown.
#[component]
pub fn SongsCardList(
    songs: Vec<Song>,
    sort: SortSpec,
    selected_id: Option<u32>,
    highlighted_id: Option<u32>,
    on_sort: EventHandler<SortSpec>,
    on_row_click: EventHandler<u32>,
) -> Element {
    rsx! {
        div { class: "pt-2 pb-6",
            div { class: "sticky top-0 z-10 pb-2",
                select {
                    class: "w-full px-3 py-2 bg-zinc-800/50 border border-zinc-700/50 rounded-lg text-sm text-white focus:outline-none focus:border-sky-500/50",
                    value: option_value(sort.key, sort.direction),
                    oninput: move |e| {
                        if let Some(spec) = parse_option(&e.value()) {
                            on_sort.call(spec);
                        }
                    },
                    for (label , key , direction) in SORT_OPTIONS {
                        option { value: option_value(key, direction), "{label}" }
                    }
                }
            }

            div { class: "flex flex-col gap-3 mt-2",
                for song in songs {
                    SongCard {
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

#[component]
fn SongCard(
    song: Song,
    selected: bool,
    highlighted: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let card_class = if selected {
        "rounded-xl border border-sky-500/40 bg-sky-500/10 p-4 cursor-pointer"
    } else if highlighted {
        "rounded-xl border border-zinc-700 bg-zinc-800/50 p-4 cursor-pointer"
    } else {
        "rounded-xl border border-zinc-800 bg-zinc-900/50 p-4 hover:bg-zinc-800/30 cursor-pointer"
    };

    rsx! {
        div { class: "{card_class}", onclick: move |e| on_click.call(e),
            div { class: "flex items-start justify-between gap-2",
                div { class: "min-w-0",
                    p { class: "text-xs font-medium text-zinc-500 uppercase tracking-wider", "Song Title" }
                    p { class: "text-base font-semibold text-white truncate", "{song.title}" }
                }
                FavoriteButton { song: song.clone() }
            }
            div { class: "mt-2 space-y-1",
                div {
                    p { class: "text-xs font-medium text-zinc-500 uppercase tracking-wider", "Artist" }
                    p { class: "text-sm text-zinc-300 truncate", "{song.artist}" }
                }
                div {
                    p { class: "text-xs font-medium text-zinc-500 uppercase tracking-wider", "Album" }
                    p { class: "text-sm text-zinc-300 truncate", "{song.album}" }
                }
                div { class: "flex items-center justify-between",
                    div {
                        p { class: "text-xs font-medium text-zinc-500 uppercase tracking-wider", "Year" }
                        p { class: "text-sm text-zinc-300", "{song.year}" }
                    }
                    span { class: "text-sm text-zinc-500", "{format_duration(song.duration)}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn option_values_round_trip() {
        for (_, key, direction) in SORT_OPTIONS {
            let spec = parse_option(&option_value(key, direction)).unwrap();
            assert_eq!(spec.key, key);
            assert_eq!(spec.direction, direction);
        }
    }

    #[test]
    fn unknown_option_values_parse_to_none() {
        assert_eq!(parse_option("tempo:asc"), None);
        assert_eq!(parse_option(""), None);
    }
}
