//! Header Component
//!
//! Brand and top-level navigation.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::{Route, Section};

#[component]
fn NavLink(route: Route, section: Section, label: &'static str) -> impl IntoView {
    let ctx = use_app_context();
    let is_active = move || ctx.route.get().section() == Some(section);

    view! {
        <a
            href=route.href()
            class=move || if is_active() { "nav-link active" } else { "nav-link" }
        >
            {label}
        </a>
    }
}

/// Top bar shown on every page
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <nav class="app-nav">
                <a href=Route::Home.href() class="brand">
                    <span class="brand-icon">"🎮"</span>
                    <div>
                        <h1 class="brand-title">"DSList"</h1>
                        <p class="brand-subtitle">"Sua lista de games"</p>
                    </div>
                </a>
                <div class="nav-links">
                    <NavLink route=Route::Home section=Section::Home label="Home" />
                    <NavLink route=Route::Lists section=Section::Lists label="Listas" />
                    <NavLink route=Route::Games section=Section::Games label="Games" />
                </div>
            </nav>
        </header>
    }
}
