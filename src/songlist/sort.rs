use std::cmp::Ordering;

use crate::api::models::Song;

/// Columns the list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Artist,
    Album,
    Year,
    Duration,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Song Title",
            Self::Artist => "Artist",
            Self::Album => "Album",
            Self::Year => "Year",
            Self::Duration => "Duration",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Title,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortSpec {
    /// Header-click semantics: clicking the active column flips its
    /// direction, clicking another column activates it ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Ascending,
            }
        }
    }
}

/// Pure, non-mutating sort over the cached list. Stable, so rows with equal
/// keys keep their server order.
pub fn sort_songs(songs: &[Song], spec: SortSpec) -> Vec<Song> {
    let mut sorted = songs.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by(a, b, spec.key);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

fn compare_by(a: &Song, b: &Song, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => compare_text(&a.title, &b.title),
        SortKey::Artist => compare_text(&a.artist, &b.artist),
        SortKey::Album => compare_text(&a.album, &b.album),
        SortKey::Year => a.year.cmp(&b.year),
        SortKey::Duration => a.duration.cmp(&b.duration),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn song(id: u32, title: &str, artist: &str, year: i32, duration: u32) -> Song {
        Song {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            album: String::new(),
            year,
            duration,
            ..Song::default()
        }
    }

    #[test]
    fn sorts_years_ascending() {
        let songs = vec![
            song(1, "a", "x", 2001, 100),
            song(2, "b", "y", 1999, 100),
        ];
        let spec = SortSpec {
            key: SortKey::Year,
            direction: SortDirection::Ascending,
        };
        let years: Vec<i32> = sort_songs(&songs, spec).iter().map(|s| s.year).collect();
        assert_eq!(years, vec![1999, 2001]);
    }

    #[test]
    fn descending_reverses_the_order() {
        let songs = vec![
            song(1, "a", "x", 1999, 100),
            song(2, "b", "y", 2001, 100),
            song(3, "c", "z", 1975, 100),
        ];
        let spec = SortSpec {
            key: SortKey::Year,
            direction: SortDirection::Descending,
        };
        let years: Vec<i32> = sort_songs(&songs, spec).iter().map(|s| s.year).collect();
        assert_eq!(years, vec![2001, 1999, 1975]);
    }

    #[test]
    fn equal_keys_keep_server_order() {
        let songs = vec![
            song(1, "First", "Same Artist", 1990, 100),
            song(2, "Second", "Same Artist", 1990, 100),
            song(3, "Third", "Same Artist", 1990, 100),
        ];
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let spec = SortSpec {
                key: SortKey::Year,
                direction,
            };
            let ids: Vec<u32> = sort_songs(&songs, spec).iter().map(|s| s.id).collect();
            assert_eq!(ids, vec![1, 2, 3]);
        }
    }

    #[test]
    fn titles_compare_case_insensitively() {
        let songs = vec![
            song(1, "zebra", "x", 2000, 100),
            song(2, "Apple", "y", 2000, 100),
            song(3, "mango", "z", 2000, 100),
        ];
        let titles: Vec<String> = sort_songs(&songs, SortSpec::default())
            .iter()
            .map(|s| s.title.clone())
            .collect();
        assert_eq!(titles, vec!["Apple", "mango", "zebra"]);
    }

    #[test]
    fn toggling_flips_active_column_and_resets_new_ones() {
        let spec = SortSpec::default();
        let flipped = spec.toggled(SortKey::Title);
        assert_eq!(flipped.direction, SortDirection::Descending);

        let switched = flipped.toggled(SortKey::Year);
        assert_eq!(switched.key, SortKey::Year);
        assert_eq!(switched.direction, SortDirection::Ascending);
    }

    #[test]
    fn sort_does_not_mutate_the_input() {
        let songs = vec![
            song(1, "b", "x", 2001, 100),
            song(2, "a", "y", 1999, 100),
        ];
        let _ = sort_songs(&songs, SortSpec::default());
        assert_eq!(songs[0].id, 1);
    }
}
