use dioxus::prelude::*;

use crate::components::songs::{SongsListResponsive, SongsListSkeleton};
use crate::components::{Icon, IpodController, SongsResource};
use crate::songlist::{sort_songs, Paginator, SortSpec};

const SONGS_PER_PAGE: usize = 5;

/// The main library listing: sorted, paginated, responsive, with row
/// clicks driving the selection shown in the detail views.
#[component]
pub fn LibraryView() -> Element {
    let mut songs = use_context::<SongsResource>();
    let mut ipod = use_context::<IpodController>();
    let mut sort = use_signal(SortSpec::default);
    let mut pager = use_signal(|| Paginator::new(SONGS_PER_PAGE));

    // A list-length change snaps back to the first page.
    use_effect(move || {
        if let Some(Ok(list)) = songs() {
            pager.with_mut(|p| p.observe_len(list.len()));
        }
    });

    // Keep the highlighted song's page in view.
    use_effect(move || {
        if let Some(Ok(list)) = songs() {
            let sorted = sort_songs(&list, sort());
            if let Some(index) = ipod.current().selection.highlighted_index(&sorted) {
                let target = pager.peek().page_for_index(index);
                if target != pager.peek().page() {
                    pager.with_mut(|p| p.go_to(target, sorted.len()));
                }
            }
        }
    });

    rsx! {
        div { class: "space-y-6",
            header { class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold text-white", "Songs" }
                if let Some(Ok(list)) = songs() {
                    span { class: "text-sm text-zinc-500", "{list.len()} songs" }
                }
            }

            {
                match songs() {
                    None => rsx! {
                        SongsListSkeleton {}
                    },
                    Some(Err(err)) => rsx! {
                        div { class: "flex flex-col items-center justify-center py-20 gap-4",
                            Icon { name: "music".to_string(), class: "w-16 h-16 text-zinc-600".to_string() }
                            p { class: "text-zinc-300", "Error loading songs" }
                            p { class: "text-sm text-zinc-500", "{err}" }
                            button {
                                class: "px-4 py-2 rounded-lg text-sm bg-zinc-800 text-zinc-200 hover:bg-zinc-700 transition-colors",
                                onclick: move |_| songs.restart(),
                                "Try again"
                            }
                        }
                    },
                    Some(Ok(list)) => {
                        let sorted = sort_songs(&list, sort());
                        let len = sorted.len();
                        let pager_now = pager();
                        let visible: Vec<_> = pager_now.slice(&sorted).to_vec();
                        let total_pages = pager_now.total_pages(len);
                        let state = ipod.current();

                        rsx! {
                            if sorted.is_empty() {
                                div { class: "flex flex-col items-center justify-center py-20 gap-4",
                                    Icon { name: "music".to_string(), class: "w-16 h-16 text-zinc-600".to_string() }
                                    p { class: "text-zinc-400", "No songs yet. Add one to get started." }
                                }
                            } else {
                                SongsListResponsive {
                                    songs: visible,
                                    sort: sort(),
                                    selected_id: state.selection.selected_id,
                                    highlighted_id: state.selection.highlighted_id,
                                    on_sort: move |spec| sort.set(spec),
                                    on_row_click: move |id| {
                                        ipod.highlight(Some(id));
                                        ipod.select(Some(id));
                                    },
                                }

                                div { class: "flex items-center justify-center gap-4",
                                    button {
                                        class: "px-3 py-1.5 rounded-lg text-sm text-zinc-300 hover:bg-zinc-800 transition-colors disabled:opacity-40",
                                        disabled: !pager_now.has_prev(),
                                        onclick: move |_| pager.with_mut(|p| p.prev_page(len)),
                                        Icon { name: "caret-left".to_string(), class: "w-4 h-4".to_string() }
                                    }
                                    span { class: "text-sm text-zinc-500",
                                        "Page {pager_now.page()} of {total_pages}"
                                    }
                                    button {
                                        class: "px-3 py-1.5 rounded-lg text-sm text-zinc-300 hover:bg-zinc-800 transition-colors disabled:opacity-40",
                                        disabled: !pager_now.has_next(len),
                                        onclick: move |_| pager.with_mut(|p| p.next_page(len)),
                                        Icon { name: "caret-right".to_string(), class: "w-4 h-4".to_string() }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
