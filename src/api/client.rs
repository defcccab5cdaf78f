use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::api::models::{Song, SongDraft, SongPatch};

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Failures surfaced by the songs API. Validation never reaches this layer;
/// everything here is recoverable by re-attempting the action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("{0}")]
    Status(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Where the songs API lives. The default points at a local backend and can
/// be overridden at build time through `STEREOPOD_API_URL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let base_url = option_env!("STEREOPOD_API_URL").unwrap_or(DEFAULT_BASE_URL);
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl ApiConfig {
    fn songs_url(&self) -> String {
        format!("{}/songs/", self.base_url)
    }

    fn song_url(&self, id: u32) -> String {
        format!("{}/songs/{}/", self.base_url, id)
    }
}

#[derive(Debug, Deserialize)]
struct SongListEnvelope {
    #[serde(default)]
    data: Vec<Song>,
}

#[derive(Debug, Deserialize)]
struct SongEnvelope {
    data: Song,
}

/// The one owner of song HTTP traffic. Views never talk to the backend
/// directly; they hold a client and re-fetch after each mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SongsClient {
    pub config: ApiConfig,
}

impl SongsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list_songs(&self) -> Result<Vec<Song>, ApiError> {
        let response = HTTP_CLIENT.get(self.config.songs_url()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status(error_message(
                &body,
                "Failed to load songs",
            )));
        }
        let envelope: SongListEnvelope =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    pub async fn get_song(&self, id: u32) -> Result<Song, ApiError> {
        let response = HTTP_CLIENT.get(self.config.song_url(id)).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status(error_message(
                &body,
                "Failed to load song",
            )));
        }
        let envelope: SongEnvelope =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    pub async fn create_song(&self, draft: &SongDraft) -> Result<Song, ApiError> {
        let response = HTTP_CLIENT
            .post(self.config.songs_url())
            .json(draft)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status(error_message(&body, "Failed to add song")));
        }
        parse_song_body(&body)
    }

    pub async fn update_song(&self, id: u32, patch: &SongPatch) -> Result<Song, ApiError> {
        let response = HTTP_CLIENT
            .put(self.config.song_url(id))
            .json(patch)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status(error_message(
                &body,
                "Failed to update song",
            )));
        }
        parse_song_body(&body)
    }

    pub async fn delete_song(&self, id: u32) -> Result<(), ApiError> {
        let response = HTTP_CLIENT.delete(self.config.song_url(id)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status(error_message(
                &body,
                "Failed to delete song",
            )));
        }
        Ok(())
    }
}

// Mutation responses arrive either as the bare record or wrapped in the same
// `data` envelope the list endpoints use.
fn parse_song_body(body: &str) -> Result<Song, ApiError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let record = match value.get("data") {
        Some(data) => data.clone(),
        None => value,
    };
    serde_json::from_value(record).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull the `message` field out of an error body, falling back to a generic
/// label when the body is not the JSON shape the backend promises.
fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn config_builds_collection_and_detail_urls() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/api".to_string(),
        };
        assert_eq!(config.songs_url(), "http://localhost:8000/api/songs/");
        assert_eq!(config.song_url(7), "http://localhost:8000/api/songs/7/");
    }

    #[test]
    fn error_message_prefers_server_message() {
        let body = r#"{"message": "Song with this title already exists"}"#;
        assert_eq!(
            error_message(body, "Failed to add song"),
            "Song with this title already exists"
        );
    }

    #[test]
    fn error_message_falls_back_on_non_json_bodies() {
        assert_eq!(
            error_message("<html>502 Bad Gateway</html>", "Failed to add song"),
            "Failed to add song"
        );
        assert_eq!(error_message("", "Failed to delete song"), "Failed to delete song");
        assert_eq!(
            error_message(r#"{"message": "  "}"#, "Failed to update song"),
            "Failed to update song"
        );
    }

    #[test]
    fn parse_song_body_accepts_bare_and_enveloped_records() {
        let bare = r#"{"id": 3, "title": "Heroes", "artist": "David Bowie",
                       "album": "Heroes", "year": 1977, "duration": 367}"#;
        let song = parse_song_body(bare).unwrap();
        assert_eq!(song.id, 3);
        assert_eq!(song.title, "Heroes");

        let enveloped = format!(r#"{{"data": {bare}}}"#);
        let song = parse_song_body(&enveloped).unwrap();
        assert_eq!(song.id, 3);
        assert_eq!(song.year, 1977);
    }

    #[test]
    fn parse_song_body_rejects_garbage() {
        assert!(matches!(
            parse_song_body("not json"),
            Err(ApiError::Decode(_))
        ));
    }
}
