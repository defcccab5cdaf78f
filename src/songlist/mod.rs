//! Pure client-side transforms over the cached song list.

pub mod paginate;
pub mod sort;

pub use paginate::Paginator;
pub use sort::{sort_songs, SortDirection, SortKey, SortSpec};
