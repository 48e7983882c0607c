//! Pages
//!
//! One component per route.

mod game_detail;
mod games;
mod home;
mod list_games;
mod lists;

pub use game_detail::GameDetailPage;
pub use games::GamesPage;
pub use home::HomePage;
pub use list_games::ListGamesPage;
pub use lists::ListsPage;

use crate::api::ApiError;

/// Fetch state of a page's display data
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Loaded(T),
    Failed(ApiError),
}
