//! List Endpoints
//!
//! List metadata, list contents, and the positional move call.

use async_trait::async_trait;
use dslist_reorder::{ListId, Move, MoveSink};

use super::{ApiClient, ApiError};
use crate::models::{Game, GameList};

impl ApiClient {
    /// `GET /lists`
    pub async fn list_lists(&self) -> Result<Vec<GameList>, ApiError> {
        self.get_json("/lists").await
    }

    /// `GET /lists/{id}/games`, in the backend's current order
    pub async fn list_games_in(&self, list_id: ListId) -> Result<Vec<Game>, ApiError> {
        self.get_json(&format!("/lists/{}/games", list_id)).await
    }

    /// `POST /lists/{id}/replacement` with `{ sourceIndex, destinationIndex }`
    pub async fn replace_position(&self, list_id: ListId, mv: Move) -> Result<(), ApiError> {
        self.post_json(&format!("/lists/{}/replacement", list_id), &mv).await
    }
}

#[async_trait(?Send)]
impl MoveSink for ApiClient {
    type Error = ApiError;

    async fn move_item(&self, list_id: ListId, mv: Move) -> Result<(), ApiError> {
        self.replace_position(list_id, mv).await
    }
}
