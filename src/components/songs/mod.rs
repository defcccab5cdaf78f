mod cards;
mod responsive;
mod skeletons;
mod table;

pub use cards::SongsCardList;
pub use responsive::{use_viewport_width, SongsListResponsive, MOBILE_BREAKPOINT};
pub use skeletons::{SongCardSkeleton, SongsListSkeleton, TableSkeleton};
pub use table::SongsTable;

use dioxus::prelude::*;

use crate::api::models::Song;
use crate::components::{DashboardController, Icon};

/// Heart toggle shown on every row and card; adds to or removes from the
/// client-only dashboard without touching the selection.
#[component]
pub fn FavoriteButton(song: Song) -> Element {
    let mut dashboard = use_context::<DashboardController>();
    let favorited = dashboard.contains(song.id);

    rsx! {
        button {
            class: if favorited { "p-2 text-sky-400 hover:text-sky-300 transition-colors" } else { "p-2 text-zinc-500 hover:text-sky-400 transition-colors" },
            aria_label: "Favorite",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                if favorited {
                    dashboard.remove(song.id);
                } else {
                    dashboard.add(song.clone());
                }
            },
            Icon {
                name: if favorited { "heart-filled".to_string() } else { "heart".to_string() },
                class: "w-4 h-4".to_string(),
            }
        }
    }
}
