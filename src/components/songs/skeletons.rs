// Loading placeholders shown while the first list fetch is in flight.

use dioxus::prelude::*;

use crate::components::songs::{use_viewport_width, MOBILE_BREAKPOINT};

#[component]
pub fn TableSkeleton(rows: usize) -> Element {
    rsx! {
        div { class: "space-y-2",
            div { class: "h-8 rounded bg-zinc-800/70 animate-pulse" }
            for _ in 0..rows {
                div { class: "h-12 rounded bg-zinc-800/40 animate-pulse" }
            }
        }
    }
}

#[component]
pub fn SongCardSkeleton() -> Element {
    rsx! {
        div { class: "rounded-xl border border-zinc-800 p-4 space-y-3",
            div { class: "h-5 w-2/3 rounded bg-zinc-800/70 animate-pulse" }
            div { class: "h-4 w-1/2 rounded bg-zinc-800/40 animate-pulse" }
            div { class: "h-4 w-1/3 rounded bg-zinc-800/40 animate-pulse" }
        }
    }
}

/// Responsive skeleton: mirrors the layout switch of the real list.
#[component]
pub fn SongsListSkeleton() -> Element {
    let width = use_viewport_width();
    let mobile = width() < MOBILE_BREAKPOINT;

    if mobile {
        rsx! {
            div { class: "flex flex-col gap-3",
                for _ in 0..3 {
                    SongCardSkeleton {}
                }
            }
        }
    } else {
        rsx! {
            TableSkeleton { rows: 5 }
        }
    }
}
