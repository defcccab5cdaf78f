//! Local persistence for client-only UI state.
//!
//! Only the dashboard favorites live here; everything else is a cached
//! reflection of the backend and is re-fetched, never stored. Browser builds
//! keep the set in LocalStorage, native builds keep it in memory only.

use crate::api::models::Song;

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;
#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const DASHBOARD_KEY: &str = "stereopod.dashboard_songs";

pub fn load_dashboard_songs() -> Vec<Song> {
    #[cfg(target_arch = "wasm32")]
    {
        LocalStorage::get(DASHBOARD_KEY).unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Vec::new()
    }
}

pub fn save_dashboard_songs(songs: &[Song]) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = LocalStorage::set(DASHBOARD_KEY, songs) {
            warn!("failed to persist dashboard songs: {err}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = songs;
    }
}
