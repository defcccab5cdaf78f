mod dashboard;
mod ipod;
mod library;

pub use dashboard::DashboardView;
pub use ipod::IpodView;
pub use library::LibraryView;
