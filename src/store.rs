//! Catalog Store
//!
//! Uses Leptos reactive_stores for data shared between pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::GameList;

/// Data fetched once and reused across pages
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// List metadata from `GET /lists`
    pub lists: Vec<GameList>,
    /// Whether `lists` holds a successful fetch
    pub lists_loaded: bool,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

/// Replace the cached list metadata
pub fn store_set_lists(store: &CatalogStore, lists: Vec<GameList>) {
    store.lists().set(lists);
    store.lists_loaded().set(true);
}

/// Name of list `list_id`, or "Lista {id}" when unknown
pub fn list_name(lists: &[GameList], list_id: u64) -> String {
    lists
        .iter()
        .find(|list| list.id == list_id)
        .map(|list| list.name.clone())
        .unwrap_or_else(|| format!("Lista {}", list_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_name_lookup() {
        let lists = vec![
            GameList { id: 1, name: "Aventura e RPG".to_string() },
            GameList { id: 2, name: "Jogos de plataforma".to_string() },
        ];
        assert_eq!(list_name(&lists, 2), "Jogos de plataforma");
        assert_eq!(list_name(&lists, 9), "Lista 9");
        assert_eq!(list_name(&[], 1), "Lista 1");
    }
}
