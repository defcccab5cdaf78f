//! Defines the shared application view state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Library,
    Ipod,
    Dashboard,
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Library => "Library",
        AppView::Ipod => "iPod",
        AppView::Dashboard => "Dashboard",
    }
}
