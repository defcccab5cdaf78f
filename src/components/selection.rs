use crate::api::models::Song;

/// Which song the list cursor sits on and which one the detail panel shows.
///
/// The highlight is the navigation focus; the selection drives the detail
/// panel and the player. Both are ids into the cached list and are dropped
/// when the list no longer contains them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub selected_id: Option<u32>,
    pub highlighted_id: Option<u32>,
}

impl SelectionState {
    pub fn select(&mut self, id: Option<u32>) {
        self.selected_id = id;
    }

    pub fn highlight(&mut self, id: Option<u32>) {
        self.highlighted_id = id;
    }

    pub fn select_highlighted(&mut self) {
        if self.highlighted_id.is_some() {
            self.selected_id = self.highlighted_id;
        }
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
        self.highlighted_id = None;
    }

    pub fn selected_song<'a>(&self, songs: &'a [Song]) -> Option<&'a Song> {
        self.selected_id
            .and_then(|id| songs.iter().find(|song| song.id == id))
    }

    pub fn highlighted_index(&self, songs: &[Song]) -> Option<usize> {
        self.highlighted_id
            .and_then(|id| songs.iter().position(|song| song.id == id))
    }

    /// Move the highlight cursor down, wrapping at the end of the list.
    pub fn highlight_next(&mut self, songs: &[Song]) {
        if songs.is_empty() {
            return;
        }
        let next = match self.highlighted_index(songs) {
            Some(index) if index + 1 < songs.len() => index + 1,
            _ => 0,
        };
        self.highlighted_id = Some(songs[next].id);
    }

    /// Move the highlight cursor up, wrapping at the start of the list.
    pub fn highlight_previous(&mut self, songs: &[Song]) {
        if songs.is_empty() {
            return;
        }
        let previous = match self.highlighted_index(songs) {
            Some(index) if index > 0 => index - 1,
            _ => songs.len() - 1,
        };
        self.highlighted_id = Some(songs[previous].id);
    }

    /// Move the selection itself, also wrapping. Used by the wheel while a
    /// song is open in the detail panel.
    pub fn select_next(&mut self, songs: &[Song]) {
        if songs.is_empty() {
            return;
        }
        let current = self
            .selected_id
            .and_then(|id| songs.iter().position(|song| song.id == id));
        let next = match current {
            Some(index) if index + 1 < songs.len() => index + 1,
            _ => 0,
        };
        self.selected_id = Some(songs[next].id);
    }

    pub fn select_previous(&mut self, songs: &[Song]) {
        if songs.is_empty() {
            return;
        }
        let current = self
            .selected_id
            .and_then(|id| songs.iter().position(|song| song.id == id));
        let previous = match current {
            Some(index) if index > 0 => index - 1,
            _ => songs.len() - 1,
        };
        self.selected_id = Some(songs[previous].id);
    }

    /// Reconcile with a freshly fetched list: stale ids are dropped and the
    /// highlight falls back to the first song.
    pub fn sync_with(&mut self, songs: &[Song]) {
        if let Some(id) = self.selected_id {
            if !songs.iter().any(|song| song.id == id) {
                self.selected_id = None;
            }
        }
        let highlight_valid = self
            .highlighted_id
            .is_some_and(|id| songs.iter().any(|song| song.id == id));
        if !highlight_valid {
            self.highlighted_id = songs.first().map(|song| song.id);
        }
    }

    /// The id selection should move to once `id` is deleted: the previous
    /// song when `id` sits at the end of the list, otherwise the next one,
    /// or `None` when the list is about to empty. Computed before the
    /// delete call goes out.
    pub fn neighbor_after_delete(songs: &[Song], id: u32) -> Option<u32> {
        let index = songs.iter().position(|song| song.id == id)?;
        if songs.len() <= 1 {
            return None;
        }
        if index >= songs.len() - 1 {
            Some(songs[index - 1].id)
        } else {
            Some(songs[index + 1].id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn songs(ids: &[u32]) -> Vec<Song> {
        ids.iter()
            .map(|&id| Song {
                id,
                title: format!("song {id}"),
                ..Song::default()
            })
            .collect()
    }

    #[test]
    fn highlight_wraps_around_both_ends() {
        let songs = songs(&[1, 2, 3]);
        let mut state = SelectionState::default();

        state.highlight(Some(3));
        state.highlight_next(&songs);
        assert_eq!(state.highlighted_id, Some(1));

        state.highlight_previous(&songs);
        assert_eq!(state.highlighted_id, Some(3));
    }

    #[test]
    fn highlight_on_empty_list_is_a_no_op() {
        let mut state = SelectionState::default();
        state.highlight_next(&[]);
        state.highlight_previous(&[]);
        assert_eq!(state.highlighted_id, None);
    }

    #[test]
    fn selection_wraps_too() {
        let songs = songs(&[1, 2, 3]);
        let mut state = SelectionState::default();
        state.select(Some(1));
        state.select_previous(&songs);
        assert_eq!(state.selected_id, Some(3));
        state.select_next(&songs);
        assert_eq!(state.selected_id, Some(1));
    }

    #[test]
    fn deleting_the_last_song_selects_its_predecessor() {
        let songs = songs(&[10, 20, 30]);
        assert_eq!(SelectionState::neighbor_after_delete(&songs, 30), Some(20));
    }

    #[test]
    fn deleting_a_middle_song_selects_its_successor() {
        let songs = songs(&[10, 20, 30]);
        assert_eq!(SelectionState::neighbor_after_delete(&songs, 10), Some(20));
        assert_eq!(SelectionState::neighbor_after_delete(&songs, 20), Some(30));
    }

    #[test]
    fn deleting_the_only_song_clears_selection() {
        let songs = songs(&[10]);
        assert_eq!(SelectionState::neighbor_after_delete(&songs, 10), None);
    }

    #[test]
    fn deleting_an_unknown_song_yields_none() {
        let songs = songs(&[10, 20]);
        assert_eq!(SelectionState::neighbor_after_delete(&songs, 99), None);
    }

    #[test]
    fn sync_drops_stale_ids_and_rehighlights_the_first_song() {
        let mut state = SelectionState {
            selected_id: Some(5),
            highlighted_id: Some(5),
        };
        let songs = songs(&[1, 2]);
        state.sync_with(&songs);
        assert_eq!(state.selected_id, None);
        assert_eq!(state.highlighted_id, Some(1));
    }

    #[test]
    fn sync_keeps_valid_ids() {
        let mut state = SelectionState {
            selected_id: Some(2),
            highlighted_id: Some(1),
        };
        let songs = songs(&[1, 2]);
        state.sync_with(&songs);
        assert_eq!(state.selected_id, Some(2));
        assert_eq!(state.highlighted_id, Some(1));
    }

    #[test]
    fn sync_with_empty_list_clears_everything() {
        let mut state = SelectionState {
            selected_id: Some(1),
            highlighted_id: Some(1),
        };
        state.sync_with(&[]);
        assert_eq!(state.selected_id, None);
        assert_eq!(state.highlighted_id, None);
    }

    #[test]
    fn select_highlighted_promotes_the_cursor() {
        let mut state = SelectionState::default();
        state.select_highlighted();
        assert_eq!(state.selected_id, None);

        state.highlight(Some(7));
        state.select_highlighted();
        assert_eq!(state.selected_id, Some(7));
    }
}
