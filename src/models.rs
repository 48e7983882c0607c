//! Frontend Models
//!
//! Data structures matching the DSList backend JSON.

use dslist_reorder::Keyed;
use serde::{Deserialize, Serialize};

/// Game summary, as returned by `/games` and `/lists/{id}/games`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: u64,
    pub title: String,
    pub year: i32,
    pub img_url: String,
    pub short_description: String,
}

impl Keyed for Game {
    type Id = u64;

    fn key(&self) -> u64 {
        self.id
    }
}

/// Full game record for the detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetail {
    pub id: u64,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub platforms: String,
    pub score: f64,
    pub img_url: String,
    pub short_description: String,
    pub long_description: String,
}

/// Named game list (one per genre)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameList {
    pub id: u64,
    pub name: String,
}

/// "1 jogo encontrado" / "3 jogos encontrados"
pub fn games_found_label(count: usize) -> String {
    if count == 1 {
        "1 jogo encontrado".to_string()
    } else {
        format!("{} jogos encontrados", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_from_backend_json() {
        let json = r#"{
            "id": 3,
            "title": "Super Mario World",
            "year": 1990,
            "imgUrl": "https://example.com/smw.png",
            "shortDescription": "Platformer"
        }"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.id, 3);
        assert_eq!(game.img_url, "https://example.com/smw.png");
        assert_eq!(game.key(), 3);
    }

    #[test]
    fn test_game_detail_from_backend_json() {
        let json = r#"{
            "id": 1,
            "title": "Mass Effect Trilogy",
            "year": 2012,
            "genre": "Role-playing (RPG), Shooter",
            "platforms": "XBox, Playstation, PC",
            "score": 4.8,
            "imgUrl": "https://example.com/me.png",
            "shortDescription": "Short",
            "longDescription": "Long"
        }"#;
        let detail: GameDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.platforms, "XBox, Playstation, PC");
        assert_eq!(detail.score, 4.8);
        assert_eq!(detail.long_description, "Long");
    }

    #[test]
    fn test_games_found_label() {
        assert_eq!(games_found_label(0), "0 jogos encontrados");
        assert_eq!(games_found_label(1), "1 jogo encontrado");
        assert_eq!(games_found_label(12), "12 jogos encontrados");
    }
}
