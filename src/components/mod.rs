//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod controls;
mod dashboard;
mod icons;
pub mod modals;
pub mod player;
mod selection;
mod sidebar;
pub mod songs;
mod top_bar;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use controls::*;
pub use dashboard::*;
pub use icons::*;
pub use selection::*;
pub use sidebar::*;
pub use top_bar::*;
