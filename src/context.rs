//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::route::Route;

/// App-wide signals and services provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Backend client
    pub api: ApiClient,
}

impl AppContext {
    pub fn new(route: ReadSignal<Route>, api: ApiClient) -> Self {
        Self { route, api }
    }

    /// Go to `route`; the hashchange listener updates the route signal
    pub fn navigate(&self, route: Route) {
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_hash(&route.href());
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
