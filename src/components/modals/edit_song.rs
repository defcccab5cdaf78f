use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::api::models::Song;
use crate::api::SongsClient;
use crate::components::modals::field::{FieldRow, GenreSelect};
use crate::components::modals::form::{current_year, FormErrors, FormField, SongFormState};
use crate::components::{Icon, SongsResource};

/// Edit-song modal. Untouched fields fall back to the existing record at
/// validation time, and only changed fields go over the wire; a no-change
/// submit skips the network entirely and just closes.
#[component]
pub fn EditSongModal(song: Song, on_close: EventHandler<()>) -> Element {
    let client = use_context::<SongsClient>();
    let mut songs = use_context::<SongsResource>();
    let mut state = use_signal(SongFormState::default);

    let submit_song = song.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = state().form;
        let merged = form.merged_with(&submit_song);
        let errors = merged.validate(current_year());
        if !errors.is_empty() {
            state.with_mut(|s| s.errors = errors);
            return;
        }

        let patch = form.changed_fields(&submit_song);
        if patch.is_empty() {
            on_close.call(());
            return;
        }

        let client = client.clone();
        let song_id = submit_song.id;
        spawn(async move {
            state.with_mut(|s| {
                s.submitting = true;
                s.errors = FormErrors::default();
            });
            match client.update_song(song_id, &patch).await {
                Ok(updated) => {
                    info!("updated song {} ({})", updated.id, updated.title);
                    state.with_mut(|s| {
                        s.submitting = false;
                        s.success = true;
                    });
                    songs.restart();
                    on_close.call(());
                }
                Err(err) => {
                    warn!("failed to update song {song_id}: {err}");
                    state.with_mut(|s| {
                        s.submitting = false;
                        s.errors.form = Some(err.to_string());
                    });
                }
            }
        });
    };

    let current = state();

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/60",
            div { class: "bg-zinc-900 border border-zinc-800 rounded-xl shadow-lg w-full max-w-md p-8 max-h-[90vh] overflow-y-auto",
                div { class: "flex items-center justify-between mb-6",
                    h2 { class: "text-2xl font-bold text-white", "Edit Song" }
                    button {
                        class: "p-2 text-zinc-500 hover:text-white transition-colors",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { name: "x".to_string(), class: "w-5 h-5".to_string() }
                    }
                }

                form { onsubmit: on_submit,
                    FieldRow {
                        label: "Title",
                        value: current.form.title.clone(),
                        placeholder: song.title.clone(),
                        error: current.errors.title.clone(),
                        oninput: move |e: FormEvent| {
                            state.with_mut(|s| s.set_field(FormField::Title, e.value()))
                        },
                    }
                    FieldRow {
                        label: "Artist",
                        value: current.form.artist.clone(),
                        placeholder: song.artist.clone(),
                        error: current.errors.artist.clone(),
                        oninput: move |e: FormEvent| {
                            state.with_mut(|s| s.set_field(FormField::Artist, e.value()))
                        },
                    }
                    FieldRow {
                        label: "Album",
                        value: current.form.album.clone(),
                        placeholder: song.album.clone(),
                        error: current.errors.album.clone(),
                        oninput: move |e: FormEvent| {
                            state.with_mut(|s| s.set_field(FormField::Album, e.value()))
                        },
                    }
                    FieldRow {
                        label: "Year",
                        value: current.form.year.clone(),
                        placeholder: song.year.to_string(),
                        error: current.errors.year.clone(),
                        oninput: move |e: FormEvent| {
                            state.with_mut(|s| s.set_field(FormField::Year, e.value()))
                        },
                    }
                    FieldRow {
                        label: "Duration (seconds)",
                        value: current.form.duration.clone(),
                        placeholder: song.duration.to_string(),
                        error: current.errors.duration.clone(),
                        oninput: move |e: FormEvent| {
                            state.with_mut(|s| s.set_field(FormField::Duration, e.value()))
                        },
                    }
                    FieldRow {
                        label: "Spotify URL",
                        value: current.form.spotify_url.clone(),
                        placeholder: song.spotify_url.clone().unwrap_or_default(),
                        error: current.errors.spotify_url.clone(),
                        oninput: move |e: FormEvent| {
                            state.with_mut(|s| s.set_field(FormField::SpotifyUrl, e.value()))
                        },
                    }
                    FieldRow {
                        label: "Cover Art URL",
                        value: current.form.cover_art_url.clone(),
                        placeholder: song.cover_art_url.clone().unwrap_or_default(),
                        error: current.errors.cover_art_url.clone(),
                        oninput: move |e: FormEvent| {
                            state.with_mut(|s| s.set_field(FormField::CoverArtUrl, e.value()))
                        },
                    }
                    GenreSelect {
                        value: current.form.genre.clone(),
                        error: current.errors.genre.clone(),
                        oninput: move |e: FormEvent| {
                            state.with_mut(|s| s.set_field(FormField::Genre, e.value()))
                        },
                    }

                    if let Some(message) = current.errors.form.clone() {
                        p { class: "mb-4 text-sm text-red-400", "{message}" }
                    }

                    div { class: "flex justify-end gap-2",
                        button {
                            r#type: "button",
                            class: "px-4 py-2 rounded-lg text-sm text-zinc-300 hover:bg-zinc-800 transition-colors",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 rounded-lg text-sm font-medium bg-sky-600 text-white hover:bg-sky-500 transition-colors disabled:opacity-50",
                            disabled: current.submitting,
                            if current.submitting { "Saving..." } else { "Save Changes" }
                        }
                    }
                }
            }
        }
    }
}
