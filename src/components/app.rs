use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

use crate::api::{ApiError, Song, SongsClient};
use crate::components::views::{DashboardView, IpodView, LibraryView};
use crate::components::{
    AppView, DashboardController, DashboardSet, IpodController, IpodState, Sidebar, TopBar,
};
use crate::db::load_dashboard_songs;

/// The shared list fetch. `None` while the request is in flight; mutations
/// restart it rather than patching the cache.
pub type SongsResource = Resource<Result<Vec<Song>, ApiError>>;

#[component]
pub fn AppShell() -> Element {
    let current_view = use_signal(|| AppView::Library);
    let ipod_state = use_signal(IpodState::default);
    let ipod = IpodController::new(ipod_state);
    let dashboard_set = use_signal(|| DashboardSet::new(load_dashboard_songs()));
    let dashboard = DashboardController::new(dashboard_set);
    let client = SongsClient::new();

    let base_url = client.config.base_url.clone();
    use_hook(move || info!("stereopod starting, api at {base_url}"));

    let songs: SongsResource = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.list_songs().await }
        }
    });

    // Provide state via context
    use_context_provider(|| current_view);
    use_context_provider(|| ipod);
    use_context_provider(|| dashboard);
    use_context_provider(|| client);
    use_context_provider(|| songs);

    // Reconcile the selection with every fresh list: stale ids drop out and
    // the highlight falls back to the first song.
    {
        let mut ipod = ipod;
        use_effect(move || match songs() {
            Some(Ok(list)) => ipod.sync_with(&list),
            Some(Err(err)) => error!("failed to load songs: {err}"),
            None => {}
        });
    }

    let view = current_view();
    let state = ipod.current();
    let show_top_bar = !matches!(view, AppView::Ipod) || state.show_top_bar;

    rsx! {
        div { class: "flex h-screen bg-zinc-950 text-white",
            Sidebar {}
            main { class: "flex-1 flex flex-col min-w-0 overflow-hidden",
                if show_top_bar {
                    TopBar {}
                }
                div { class: "flex-1 overflow-y-auto p-6",
                    {
                        match view {
                            AppView::Library => rsx! {
                                LibraryView {}
                            },
                            AppView::Ipod => rsx! {
                                IpodView {}
                            },
                            AppView::Dashboard => rsx! {
                                DashboardView {}
                            },
                        }
                    }
                }
            }
        }
    }
}
