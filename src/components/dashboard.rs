use dioxus::prelude::*;

use crate::api::models::Song;
use crate::db::save_dashboard_songs;

/// The client-only favorites subset, kept apart from the main list.
/// Insertion order is display order; membership is keyed by song id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardSet {
    songs: Vec<Song>,
}

impl DashboardSet {
    pub fn new(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.songs.iter().any(|song| song.id == id)
    }

    /// Add a song; a song already present stays where it is.
    pub fn add(&mut self, song: Song) {
        if !self.contains(song.id) {
            self.songs.push(song);
        }
    }

    pub fn remove(&mut self, id: u32) {
        self.songs.retain(|song| song.id != id);
    }
}

/// Context handle for the dashboard set. Mutations persist the set so the
/// favorites survive a reload.
#[derive(Clone, Copy, PartialEq)]
pub struct DashboardController {
    set: Signal<DashboardSet>,
}

impl DashboardController {
    pub fn new(set: Signal<DashboardSet>) -> Self {
        Self { set }
    }

    pub fn current(&self) -> DashboardSet {
        (self.set)()
    }

    pub fn contains(&self, id: u32) -> bool {
        (self.set)().contains(id)
    }

    pub fn add(&mut self, song: Song) {
        self.set.with_mut(|set| {
            set.add(song);
            save_dashboard_songs(set.songs());
        });
    }

    pub fn remove(&mut self, id: u32) {
        self.set.with_mut(|set| {
            set.remove(id);
            save_dashboard_songs(set.songs());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn song(id: u32, title: &str) -> Song {
        Song {
            id,
            title: title.to_string(),
            ..Song::default()
        }
    }

    #[test]
    fn adding_twice_stores_once() {
        let mut set = DashboardSet::default();
        set.add(song(1, "Once in a Lifetime"));
        set.add(song(1, "Once in a Lifetime"));
        assert_eq!(set.len(), 1);
        assert!(set.contains(1));
    }

    #[test]
    fn removal_restores_absence() {
        let mut set = DashboardSet::default();
        set.add(song(1, "Rapture"));
        set.add(song(2, "Heart of Glass"));

        set.remove(1);
        assert!(!set.contains(1));
        assert!(set.contains(2));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn removing_an_absent_id_is_a_no_op() {
        let mut set = DashboardSet::default();
        set.add(song(1, "Rapture"));
        set.remove(9);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut set = DashboardSet::default();
        set.add(song(2, "b"));
        set.add(song(1, "a"));
        let ids: Vec<u32> = set.songs().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
