mod add_song;
mod delete_dialog;
mod edit_song;
mod field;
pub mod form;

pub use add_song::AddSongModal;
pub use delete_dialog::DeleteSongDialog;
pub use edit_song::EditSongModal;
pub use form::{current_year, FormErrors, FormField, SongForm, SongFormState};

use dioxus::prelude::*;

/// One open/closed flag per modal. Each modal owns its flag; nothing is
/// shared between them.
#[derive(Clone, Copy, PartialEq)]
pub struct ModalController {
    open: Signal<bool>,
}

impl ModalController {
    pub fn new(open: Signal<bool>) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        (self.open)()
    }

    pub fn open(&mut self) {
        self.open.set(true);
    }

    pub fn close(&mut self) {
        self.open.set(false);
    }

    pub fn toggle(&mut self) {
        let open = (self.open)();
        self.open.set(!open);
    }
}
