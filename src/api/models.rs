use serde::{Deserialize, Serialize};

/// A song record as served by the library backend.
///
/// `decade`, `created_at`, and `updated_at` are derived server-side and
/// never submitted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Song {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub cover_art_url: Option<String>,
    #[serde(default)]
    pub spotify_url: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub decade: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Song {
    /// Decade label shown in the detail panel, falling back to the year
    /// when the server did not send one.
    pub fn decade_label(&self) -> String {
        self.decade
            .clone()
            .unwrap_or_else(|| decade_from_year(self.year).to_string())
    }
}

/// Label for the decade a year falls in. Out-of-range years collapse to the
/// current decade, matching the backend's default.
pub fn decade_from_year(year: i32) -> &'static str {
    match year {
        1970..=1979 => "70s",
        1980..=1989 => "80s",
        1990..=1999 => "90s",
        2000..=2009 => "00s",
        2010..=2019 => "10s",
        _ => "20s",
    }
}

/// Full creation payload, everything except the server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongDraft {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: i32,
    pub duration: u32,
    pub spotify_url: String,
    pub cover_art_url: String,
    pub genre: String,
}

/// Partial update payload; only populated fields go over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct SongPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotify_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_art_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl SongPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.year.is_none()
            && self.duration.is_none()
            && self.spotify_url.is_none()
            && self.cover_art_url.is_none()
            && self.genre.is_none()
    }
}

/// Genres offered by the add/edit forms, same set the backend accepts.
pub const GENRES: [&str; 10] = [
    "Rock",
    "Pop",
    "Disco",
    "New Wave",
    "Hip Hop",
    "Electronic",
    "Jazz",
    "Classical",
    "Country",
    "R&B",
];

pub fn format_duration(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1975, "70s")]
    #[case(1989, "80s")]
    #[case(1999, "90s")]
    #[case(2003, "00s")]
    #[case(2015, "10s")]
    #[case(2024, "20s")]
    #[case(1950, "20s")]
    #[case(2099, "20s")]
    fn decade_labels(#[case] year: i32, #[case] expected: &str) {
        assert_eq!(decade_from_year(year), expected);
    }

    #[test]
    fn decade_label_prefers_server_value() {
        let song = Song {
            year: 1984,
            decade: Some("80s".to_string()),
            ..Song::default()
        };
        assert_eq!(song.decade_label(), "80s");

        let unlabeled = Song {
            year: 1984,
            ..Song::default()
        };
        assert_eq!(unlabeled.decade_label(), "80s");
    }

    #[test]
    fn format_duration_pads_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(61), "1:01");
        assert_eq!(format_duration(754), "12:34");
    }

    #[test]
    fn patch_serializes_only_populated_fields() {
        let patch = SongPatch {
            title: Some("Blue Monday".to_string()),
            year: Some(1983),
            ..SongPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "title": "Blue Monday", "year": 1983 })
        );
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(SongPatch::default().is_empty());
        let patch = SongPatch {
            genre: Some("Disco".to_string()),
            ..SongPatch::default()
        };
        assert!(!patch.is_empty());
    }
}
