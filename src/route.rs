//! Hash Routes
//!
//! Pages addressed by the location hash (`#/games/3`).

/// A page of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Games,
    GameDetail(u64),
    Lists,
    ListGames(u64),
    NotFound,
}

/// Header navigation section a route belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Lists,
    Games,
}

impl Route {
    /// Parse a location hash such as `#/lists/2/games`
    pub fn from_hash(hash: &str) -> Route {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["games"] => Route::Games,
            ["games", id] => id.parse().map(Route::GameDetail).unwrap_or(Route::NotFound),
            ["lists"] => Route::Lists,
            ["lists", id, "games"] => id.parse().map(Route::ListGames).unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    /// Hash form, usable as an `href`
    pub fn href(&self) -> String {
        match self {
            Route::Home | Route::NotFound => "#/".to_string(),
            Route::Games => "#/games".to_string(),
            Route::GameDetail(id) => format!("#/games/{}", id),
            Route::Lists => "#/lists".to_string(),
            Route::ListGames(id) => format!("#/lists/{}/games", id),
        }
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            Route::Home => Some(Section::Home),
            Route::Games | Route::GameDetail(_) => Some(Section::Games),
            Route::Lists | Route::ListGames(_) => Some(Section::Lists),
            Route::NotFound => None,
        }
    }
}

/// Route for the browser's current location
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|win| win.location().hash().ok())
        .map(|hash| Route::from_hash(&hash))
        .unwrap_or(Route::Home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/games"), Route::Games);
        assert_eq!(Route::from_hash("#/games/7/"), Route::GameDetail(7));
        assert_eq!(Route::from_hash("#/lists"), Route::Lists);
        assert_eq!(Route::from_hash("#/lists/2/games"), Route::ListGames(2));
    }

    #[test]
    fn test_unknown_routes() {
        assert_eq!(Route::from_hash("#/games/mario"), Route::NotFound);
        assert_eq!(Route::from_hash("#/lists/2"), Route::NotFound);
        assert_eq!(Route::from_hash("#/settings"), Route::NotFound);
    }

    #[test]
    fn test_href_parses_back() {
        for route in [Route::Home, Route::Games, Route::GameDetail(4), Route::Lists, Route::ListGames(1)] {
            assert_eq!(Route::from_hash(&route.href()), route);
        }
    }

    #[test]
    fn test_sections() {
        assert_eq!(Route::GameDetail(1).section(), Some(Section::Games));
        assert_eq!(Route::ListGames(1).section(), Some(Section::Lists));
        assert_eq!(Route::NotFound.section(), None);
    }
}
