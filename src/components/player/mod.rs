//! Embedded Spotify player. The widget is a third-party iframe keyed to the
//! selected song's track URL; everything here is local show/error/skeleton
//! state around it.

use dioxus::prelude::*;

use crate::api::models::Song;
use crate::components::modals::form::SPOTIFY_TRACK_PREFIX;
use crate::components::Icon;

const SPOTIFY_EMBED_PREFIX: &str = "https://open.spotify.com/embed/track/";

/// The track page URL rewritten to its embeddable form, or `None` for URLs
/// that are not Spotify track links.
pub fn embed_url(spotify_url: &str) -> Option<String> {
    let track = spotify_url.strip_prefix(SPOTIFY_TRACK_PREFIX)?;
    if track.is_empty() {
        return None;
    }
    Some(format!("{SPOTIFY_EMBED_PREFIX}{track}"))
}

/// Local widget state: whether the iframe is mounted, whether it failed,
/// and whether the boot skeleton is still covering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmbedState {
    pub show_embed: bool,
    pub error: bool,
    pub skeleton: bool,
}

impl EmbedState {
    /// Selecting a different song resets the widget entirely.
    pub fn on_song_changed(&mut self) {
        *self = Self::default();
    }

    /// Follow the play flag: starting playback mounts the iframe behind a
    /// fresh skeleton, pausing unmounts it.
    pub fn on_play_changed(&mut self, is_playing: bool, has_url: bool) {
        if is_playing && has_url && !self.show_embed {
            self.show_embed = true;
            self.error = false;
            self.skeleton = true;
        } else if !is_playing && self.show_embed {
            self.show_embed = false;
            self.error = false;
            self.skeleton = false;
        }
    }

    pub fn fail(&mut self) {
        self.error = true;
        self.show_embed = false;
        self.skeleton = false;
    }

    /// Back out of the error panel so the embed can be retried.
    pub fn back(&mut self) {
        *self = Self::default();
    }

    pub fn skeleton_done(&mut self) {
        self.skeleton = false;
    }
}

/// Renders the embed for the selected song while playing, a cover-art
/// panel while paused, and a fallback panel when the widget failed.
#[component]
pub fn SpotifyPlayer(song: Song, playing: bool) -> Element {
    let mut embed = use_signal(EmbedState::default);

    let song_id = song.id;
    use_effect(use_reactive!(|(song_id,)| {
        let _ = song_id;
        embed.with_mut(|state| state.on_song_changed());
    }));

    let has_url = song.spotify_url.as_deref().and_then(embed_url).is_some();
    use_effect(use_reactive!(|(playing, has_url)| {
        embed.with_mut(|state| state.on_play_changed(playing, has_url));
    }));

    // Short cover while the iframe boots.
    use_effect(move || {
        if embed().skeleton {
            spawn(async move {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::TimeoutFuture::new(200).await;
                embed.with_mut(|state| state.skeleton_done());
            });
        }
    });

    let state = embed();
    let src = song.spotify_url.as_deref().and_then(embed_url);

    rsx! {
        if state.error {
            div { class: "flex flex-col items-center justify-center gap-3 p-6 text-center",
                Icon { name: "music".to_string(), class: "w-10 h-10 text-zinc-600".to_string() }
                p { class: "text-sm text-zinc-400", "The Spotify player could not be loaded." }
                button {
                    class: "px-4 py-2 rounded-lg text-sm bg-zinc-800 text-zinc-200 hover:bg-zinc-700 transition-colors",
                    onclick: move |_| embed.with_mut(|state| state.back()),
                    "Back"
                }
            }
        } else if state.show_embed {
            div { class: "relative w-full",
                if state.skeleton {
                    div { class: "absolute inset-0 rounded-xl bg-zinc-800 animate-pulse" }
                }
                if let Some(url) = src {
                    iframe {
                        class: "w-full rounded-xl",
                        src: "{url}",
                        height: "152",
                        allow: "encrypted-media",
                        onerror: move |_| embed.with_mut(|state| state.fail()),
                    }
                }
            }
        } else {
            div { class: "flex flex-col items-center gap-2 p-4",
                if let Some(cover) = song.cover_art_url.clone() {
                    img {
                        class: "w-36 h-36 object-cover rounded-xl",
                        src: "{cover}",
                        alt: "{song.title} cover art",
                    }
                } else {
                    div { class: "w-36 h-36 rounded-xl bg-gradient-to-br from-zinc-700 to-zinc-800 flex items-center justify-center",
                        Icon { name: "music".to_string(), class: "w-10 h-10 text-zinc-500".to_string() }
                    }
                }
                if !has_url {
                    p { class: "text-xs text-zinc-500", "No player link for this song" }
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
    fn embed_url_rewrites_track_links() {
        assert_eq!(
            embed_url("https://open.spotify.com/track/05uGBKRCuePsf43Hfm0JwX").as_deref(),
            Some("https://open.spotify.com/embed/track/05uGBKRCuePsf43Hfm0JwX")
        );
    }

    #[test]
    fn embed_url_rejects_foreign_and_bare_links() {
        assert_eq!(embed_url("https://example.com/track/123"), None);
        assert_eq!(embed_url("https://open.spotify.com/track/"), None);
        assert_eq!(embed_url(""), None);
    }

    #[test]
    fn playing_mounts_the_embed_behind_a_skeleton() {
        let mut state = EmbedState::default();
        state.on_play_changed(true, true);
        assert_eq!(
            state,
            EmbedState {
                show_embed: true,
                error: false,
                skeleton: true,
            }
        );
    }

    #[test]
    fn pausing_unmounts_the_embed() {
        let mut state = EmbedState::default();
        state.on_play_changed(true, true);
        state.skeleton_done();
        state.on_play_changed(false, true);
        assert_eq!(state, EmbedState::default());
    }

    #[test]
    fn playing_without_a_url_keeps_the_embed_down() {
        let mut state = EmbedState::default();
        state.on_play_changed(true, false);
        assert!(!state.show_embed);
    }

    #[test]
    fn failure_swaps_in_the_fallback_until_backed_out() {
        let mut state = EmbedState::default();
        state.on_play_changed(true, true);
        state.fail();
        assert!(state.error);
        assert!(!state.show_embed);

        state.back();
        assert_eq!(state, EmbedState::default());
    }

    #[test]
    fn changing_songs_resets_everything() {
        let mut state = EmbedState::default();
        state.on_play_changed(true, true);
        state.fail();
        state.on_song_changed();
        assert_eq!(state, EmbedState::default());
    }
}
