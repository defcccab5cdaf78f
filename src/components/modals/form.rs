// Song form state and the validation rule set shared by the add and edit
// modals. Fields stay strings until submission; parsing happens inside
// validation so the inline messages match what the user typed.

use chrono::Datelike;

use crate::api::models::{Song, SongDraft, SongPatch};

pub const SPOTIFY_TRACK_PREFIX: &str = "https://open.spotify.com/track/";
const MIN_YEAR: i32 = 1970;
const MAX_DURATION_SECS: u32 = 3600;
const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Artist,
    Album,
    Year,
    Duration,
    SpotifyUrl,
    CoverArtUrl,
    Genre,
}

/// Flat string-typed field set backing the song form inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SongForm {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub duration: String,
    pub spotify_url: String,
    pub cover_art_url: String,
    pub genre: String,
}

/// Field-level validation messages, plus one slot for a form-level error
/// coming back from a failed mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,
    pub duration: Option<String>,
    pub spotify_url: Option<String>,
    pub cover_art_url: Option<String>,
    pub genre: Option<String>,
    pub form: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.year.is_none()
            && self.duration.is_none()
            && self.spotify_url.is_none()
            && self.cover_art_url.is_none()
            && self.genre.is_none()
            && self.form.is_none()
    }
}

impl SongForm {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Artist => self.artist = value,
            FormField::Album => self.album = value,
            FormField::Year => self.year = value,
            FormField::Duration => self.duration = value,
            FormField::SpotifyUrl => self.spotify_url = value,
            FormField::CoverArtUrl => self.cover_art_url = value,
            FormField::Genre => self.genre = value,
        }
    }

    /// Edit-mode merge: untouched fields fall back to the existing record
    /// before validation runs.
    pub fn merged_with(&self, song: &Song) -> SongForm {
        let fallback = |value: &str, existing: String| {
            if value.is_empty() {
                existing
            } else {
                value.to_string()
            }
        };
        SongForm {
            title: fallback(&self.title, song.title.clone()),
            artist: fallback(&self.artist, song.artist.clone()),
            album: fallback(&self.album, song.album.clone()),
            year: fallback(&self.year, song.year.to_string()),
            duration: fallback(&self.duration, song.duration.to_string()),
            spotify_url: fallback(&self.spotify_url, song.spotify_url.clone().unwrap_or_default()),
            cover_art_url: fallback(
                &self.cover_art_url,
                song.cover_art_url.clone().unwrap_or_default(),
            ),
            genre: fallback(&self.genre, song.genre.clone().unwrap_or_default()),
        }
    }

    /// Run the full rule set. `max_year` is the current calendar year,
    /// injected so the rules stay deterministic under test.
    pub fn validate(&self, max_year: i32) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.title.is_empty() {
            errors.title = Some("Title is required".to_string());
        }
        if self.artist.is_empty() {
            errors.artist = Some("Artist is required".to_string());
        }
        if self.album.is_empty() {
            errors.album = Some("Album is required".to_string());
        }

        if self.year.is_empty() {
            errors.year = Some("Year is required".to_string());
        } else {
            match self.year.parse::<i32>() {
                Ok(year) if (MIN_YEAR..=max_year).contains(&year) => {}
                _ => {
                    errors.year = Some(format!("Year must be between {MIN_YEAR} and {max_year}"));
                }
            }
        }

        if self.duration.is_empty() {
            errors.duration = Some("Duration is required".to_string());
        } else {
            match self.duration.parse::<u32>() {
                Ok(duration) if duration > 0 && duration <= MAX_DURATION_SECS => {}
                _ => {
                    errors.duration = Some("Duration must be 1-3600 seconds".to_string());
                }
            }
        }

        if self.spotify_url.is_empty() {
            errors.spotify_url = Some("Spotify URL is required".to_string());
        } else if !self.spotify_url.starts_with(SPOTIFY_TRACK_PREFIX) {
            errors.spotify_url = Some("Must be a valid Spotify track URL".to_string());
        }

        if self.cover_art_url.is_empty() {
            errors.cover_art_url = Some("Cover art URL is required".to_string());
        } else if !is_image_url(&self.cover_art_url) {
            errors.cover_art_url = Some("Must be a valid image URL".to_string());
        }

        if self.genre.is_empty() {
            errors.genre = Some("Genre is required".to_string());
        }

        errors
    }

    /// Full creation payload. Only meaningful after `validate` came back
    /// clean; unparseable numerics collapse to zero rather than panicking.
    pub fn to_draft(&self) -> SongDraft {
        SongDraft {
            title: self.title.clone(),
            artist: self.artist.clone(),
            album: self.album.clone(),
            year: self.year.parse().unwrap_or_default(),
            duration: self.duration.parse().unwrap_or_default(),
            spotify_url: self.spotify_url.clone(),
            cover_art_url: self.cover_art_url.clone(),
            genre: self.genre.clone(),
        }
    }

    /// The partial update an edit submits: touched fields that differ from
    /// the existing record. An untouched form diffs to an empty patch.
    pub fn changed_fields(&self, song: &Song) -> SongPatch {
        let mut patch = SongPatch::default();
        if !self.title.is_empty() && self.title != song.title {
            patch.title = Some(self.title.clone());
        }
        if !self.artist.is_empty() && self.artist != song.artist {
            patch.artist = Some(self.artist.clone());
        }
        if !self.album.is_empty() && self.album != song.album {
            patch.album = Some(self.album.clone());
        }
        if !self.year.is_empty() && self.year != song.year.to_string() {
            patch.year = self.year.parse().ok();
        }
        if !self.duration.is_empty() && self.duration != song.duration.to_string() {
            patch.duration = self.duration.parse().ok();
        }
        if !self.spotify_url.is_empty()
            && Some(self.spotify_url.as_str()) != song.spotify_url.as_deref()
        {
            patch.spotify_url = Some(self.spotify_url.clone());
        }
        if !self.cover_art_url.is_empty()
            && Some(self.cover_art_url.as_str()) != song.cover_art_url.as_deref()
        {
            patch.cover_art_url = Some(self.cover_art_url.clone());
        }
        if !self.genre.is_empty() && Some(self.genre.as_str()) != song.genre.as_deref() {
            patch.genre = Some(self.genre.clone());
        }
        patch
    }
}

fn is_image_url(url: &str) -> bool {
    let lowered = url.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext))
}

/// Everything a modal holds while it is open: the field values, their
/// messages, and the in-flight/success flags gating the submit button.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SongFormState {
    pub form: SongForm,
    pub errors: FormErrors,
    pub submitting: bool,
    pub success: bool,
}

impl SongFormState {
    /// Update a field and clear its stale message so the user is not
    /// shouted at while fixing it.
    pub fn set_field(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
        match field {
            FormField::Title => self.errors.title = None,
            FormField::Artist => self.errors.artist = None,
            FormField::Album => self.errors.album = None,
            FormField::Year => self.errors.year = None,
            FormField::Duration => self.errors.duration = None,
            FormField::SpotifyUrl => self.errors.spotify_url = None,
            FormField::CoverArtUrl => self.errors.cover_art_url = None,
            FormField::Genre => self.errors.genre = None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const TEST_YEAR: i32 = 2026;

    fn valid_form() -> SongForm {
        SongForm {
            title: "Blue Monday".to_string(),
            artist: "New Order".to_string(),
            album: "Power, Corruption & Lies".to_string(),
            year: "1983".to_string(),
            duration: "447".to_string(),
            spotify_url: format!("{SPOTIFY_TRACK_PREFIX}05uGBKRCuePsf43Hfm0JwX"),
            cover_art_url: "https://images.example.com/blue-monday.jpg".to_string(),
            genre: "New Wave".to_string(),
        }
    }

    fn existing_song() -> Song {
        Song {
            id: 9,
            title: "Blue Monday".to_string(),
            artist: "New Order".to_string(),
            album: "Power, Corruption & Lies".to_string(),
            year: 1983,
            duration: 447,
            spotify_url: Some(format!("{SPOTIFY_TRACK_PREFIX}05uGBKRCuePsf43Hfm0JwX")),
            cover_art_url: Some("https://images.example.com/blue-monday.jpg".to_string()),
            genre: Some("New Wave".to_string()),
            ..Song::default()
        }
    }

    #[test]
    fn a_fully_valid_form_passes_with_zero_errors() {
        let errors = valid_form().validate(TEST_YEAR);
        assert_eq!(errors, FormErrors::default());
        assert!(errors.is_empty());
    }

    #[rstest]
    #[case("1969")]
    #[case("2027")]
    #[case("next year")]
    fn out_of_range_years_fail_with_a_range_message(#[case] year: &str) {
        let mut form = valid_form();
        form.year = year.to_string();
        let errors = form.validate(TEST_YEAR);
        assert_eq!(
            errors.year.as_deref(),
            Some("Year must be between 1970 and 2026")
        );
    }

    #[rstest]
    #[case("0")]
    #[case("3601")]
    #[case("-5")]
    #[case("ninety")]
    fn bad_durations_fail(#[case] duration: &str) {
        let mut form = valid_form();
        form.duration = duration.to_string();
        let errors = form.validate(TEST_YEAR);
        assert_eq!(
            errors.duration.as_deref(),
            Some("Duration must be 1-3600 seconds")
        );
    }

    #[test]
    fn boundary_duration_values_pass() {
        for duration in ["1", "3600"] {
            let mut form = valid_form();
            form.duration = duration.to_string();
            assert!(form.validate(TEST_YEAR).is_empty(), "duration {duration}");
        }
    }

    #[test]
    fn non_image_cover_art_fails() {
        let mut form = valid_form();
        form.cover_art_url = "https://images.example.com/cover.bmp".to_string();
        let errors = form.validate(TEST_YEAR);
        assert_eq!(
            errors.cover_art_url.as_deref(),
            Some("Must be a valid image URL")
        );
    }

    #[test]
    fn image_extensions_match_case_insensitively() {
        let mut form = valid_form();
        form.cover_art_url = "https://images.example.com/COVER.PNG".to_string();
        assert!(form.validate(TEST_YEAR).is_empty());
    }

    #[test]
    fn foreign_player_urls_fail() {
        let mut form = valid_form();
        form.spotify_url = "https://music.example.com/track/123".to_string();
        let errors = form.validate(TEST_YEAR);
        assert_eq!(
            errors.spotify_url.as_deref(),
            Some("Must be a valid Spotify track URL")
        );
    }

    #[test]
    fn empty_fields_each_get_their_own_message() {
        let errors = SongForm::default().validate(TEST_YEAR);
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert_eq!(errors.artist.as_deref(), Some("Artist is required"));
        assert_eq!(errors.album.as_deref(), Some("Album is required"));
        assert_eq!(errors.year.as_deref(), Some("Year is required"));
        assert_eq!(errors.duration.as_deref(), Some("Duration is required"));
        assert_eq!(errors.spotify_url.as_deref(), Some("Spotify URL is required"));
        assert_eq!(
            errors.cover_art_url.as_deref(),
            Some("Cover art URL is required")
        );
        assert_eq!(errors.genre.as_deref(), Some("Genre is required"));
    }

    #[test]
    fn merge_falls_back_to_the_record_for_untouched_fields() {
        let mut form = SongForm::default();
        form.title = "Temptation".to_string();

        let merged = form.merged_with(&existing_song());
        assert_eq!(merged.title, "Temptation");
        assert_eq!(merged.artist, "New Order");
        assert_eq!(merged.year, "1983");
        assert_eq!(merged.duration, "447");
        assert!(merged.validate(TEST_YEAR).is_empty());
    }

    #[test]
    fn untouched_form_diffs_to_an_empty_patch() {
        let patch = SongForm::default().changed_fields(&existing_song());
        assert!(patch.is_empty());
    }

    #[test]
    fn restating_existing_values_also_diffs_to_empty() {
        let patch = valid_form().changed_fields(&existing_song());
        assert!(patch.is_empty());
    }

    #[test]
    fn changed_fields_carry_only_the_difference() {
        let mut form = SongForm::default();
        form.title = "Temptation".to_string();
        form.year = "1982".to_string();

        let patch = form.changed_fields(&existing_song());
        assert_eq!(patch.title.as_deref(), Some("Temptation"));
        assert_eq!(patch.year, Some(1982));
        assert_eq!(patch.artist, None);
        assert_eq!(patch.duration, None);
    }

    #[test]
    fn to_draft_parses_the_numeric_fields() {
        let draft = valid_form().to_draft();
        assert_eq!(draft.year, 1983);
        assert_eq!(draft.duration, 447);
        assert_eq!(draft.genre, "New Wave");
    }

    #[test]
    fn editing_a_field_clears_its_message() {
        let mut state = SongFormState::default();
        state.errors = SongForm::default().validate(TEST_YEAR);
        assert!(state.errors.title.is_some());

        state.set_field(FormField::Title, "Ceremony".to_string());
        assert_eq!(state.errors.title, None);
        assert!(state.errors.artist.is_some());
    }
}
