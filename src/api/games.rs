//! Game Endpoints
//!
//! Read-only catalog lookups.

use super::{ApiClient, ApiError};
use crate::models::{Game, GameDetail};

impl ApiClient {
    /// `GET /games`
    pub async fn list_games(&self) -> Result<Vec<Game>, ApiError> {
        self.get_json("/games").await
    }

    /// `GET /games/{id}`
    pub async fn get_game(&self, id: u64) -> Result<GameDetail, ApiError> {
        self.get_json(&format!("/games/{}", id)).await
    }
}
