// Click-wheel state machine and its signal-backed controller.

use dioxus::prelude::*;

use crate::api::models::Song;
use crate::components::selection::SelectionState;

/// Everything the iPod face needs: the list cursor plus the sidebar,
/// top-bar, and play flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpodState {
    pub selection: SelectionState,
    pub sidebar_open: bool,
    pub show_top_bar: bool,
    pub is_playing: bool,
}

impl Default for IpodState {
    fn default() -> Self {
        Self {
            selection: SelectionState::default(),
            sidebar_open: false,
            show_top_bar: true,
            is_playing: false,
        }
    }
}

impl IpodState {
    /// MENU toggles the sidebar.
    pub fn menu(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Wheel up: move the open selection when the sidebar is closed,
    /// otherwise move the highlight cursor. Both wrap.
    pub fn up(&mut self, songs: &[Song]) {
        if self.selection.selected_id.is_some() && !self.sidebar_open && !songs.is_empty() {
            self.selection.select_previous(songs);
        } else {
            self.selection.highlight_previous(songs);
        }
    }

    /// Wheel down, mirror of [`IpodState::up`].
    pub fn down(&mut self, songs: &[Song]) {
        if self.selection.selected_id.is_some() && !self.sidebar_open && !songs.is_empty() {
            self.selection.select_next(songs);
        } else {
            self.selection.highlight_next(songs);
        }
    }

    /// Center button: with a selection open and the sidebar closed it
    /// toggles the top bar; otherwise it promotes the highlight to the
    /// selection and closes the sidebar.
    pub fn center(&mut self) {
        if !self.sidebar_open && self.selection.selected_id.is_some() {
            self.show_top_bar = !self.show_top_bar;
            return;
        }
        self.selection.select_highlighted();
        self.sidebar_open = false;
    }

    pub fn play_pause(&mut self) {
        self.is_playing = !self.is_playing;
    }
}

/// Shared handle to the iPod state, passed to components through context.
/// Single owner of the state signal; every mutation goes through here.
#[derive(Clone, Copy, PartialEq)]
pub struct IpodController {
    state: Signal<IpodState>,
}

impl IpodController {
    pub fn new(state: Signal<IpodState>) -> Self {
        Self { state }
    }

    pub fn current(&self) -> IpodState {
        (self.state)()
    }

    pub fn menu(&mut self) {
        self.state.with_mut(|state| state.menu());
    }

    pub fn up(&mut self, songs: &[Song]) {
        self.state.with_mut(|state| state.up(songs));
    }

    pub fn down(&mut self, songs: &[Song]) {
        self.state.with_mut(|state| state.down(songs));
    }

    pub fn center(&mut self) {
        self.state.with_mut(|state| state.center());
    }

    pub fn play_pause(&mut self) {
        self.state.with_mut(|state| state.play_pause());
    }

    pub fn select(&mut self, id: Option<u32>) {
        self.state.with_mut(|state| state.selection.select(id));
    }

    pub fn highlight(&mut self, id: Option<u32>) {
        self.state.with_mut(|state| state.selection.highlight(id));
    }

    pub fn sync_with(&mut self, songs: &[Song]) {
        self.state.with_mut(|state| state.selection.sync_with(songs));
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
                ..Song::default()
            })
            .collect()
    }

    #[test]
    fn menu_toggles_the_sidebar() {
        let mut state = IpodState::default();
        state.menu();
        assert!(state.sidebar_open);
        state.menu();
        assert!(!state.sidebar_open);
    }

    #[test]
    fn wheel_moves_highlight_until_a_song_is_selected() {
        let songs = songs(&[1, 2, 3]);
        let mut state = IpodState::default();
        state.selection.highlight(Some(1));

        state.down(&songs);
        assert_eq!(state.selection.highlighted_id, Some(2));
        assert_eq!(state.selection.selected_id, None);

        state.selection.select(Some(2));
        state.down(&songs);
        assert_eq!(state.selection.selected_id, Some(3));

        state.up(&songs);
        assert_eq!(state.selection.selected_id, Some(2));
    }

    #[test]
    fn wheel_moves_highlight_while_the_sidebar_is_open() {
        let songs = songs(&[1, 2, 3]);
        let mut state = IpodState::default();
        state.selection.select(Some(1));
        state.selection.highlight(Some(1));
        state.sidebar_open = true;

        state.down(&songs);
        assert_eq!(state.selection.selected_id, Some(1));
        assert_eq!(state.selection.highlighted_id, Some(2));
    }

    #[test]
    fn center_promotes_the_highlight_and_closes_the_sidebar() {
        let mut state = IpodState::default();
        state.sidebar_open = true;
        state.selection.highlight(Some(4));

        state.center();
        assert_eq!(state.selection.selected_id, Some(4));
        assert!(!state.sidebar_open);
    }

    #[test]
    fn center_toggles_the_top_bar_once_a_selection_is_open() {
        let mut state = IpodState::default();
        state.selection.select(Some(4));
        assert!(state.show_top_bar);

        state.center();
        assert!(!state.show_top_bar);
        state.center();
        assert!(state.show_top_bar);
    }

    #[test]
    fn play_pause_flips_the_flag() {
        let mut state = IpodState::default();
        state.play_pause();
        assert!(state.is_playing);
        state.play_pause();
        assert!(!state.is_playing);
    }
}
