//! UI Components
//!
//! Reusable Leptos components.

mod breadcrumb;
mod game_card;
mod header;
mod sortable_game_list;
mod status;

pub use breadcrumb::{Breadcrumb, Crumb};
pub use game_card::{use_placeholder_on_error, GameCard};
pub use header::Header;
pub use sortable_game_list::SortableGameList;
pub use status::{EmptyState, ErrorCard, LoadingSpinner};
