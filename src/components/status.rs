//! Loading and Error Components
//!
//! Shared placeholders for pages waiting on the backend.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::Route;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
        </div>
    }
}

/// Error card with a retry action and a way back
#[component]
pub fn ErrorCard(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
    back: Route,
    #[prop(into)] back_label: String,
) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="status-card error">
            <span class="status-icon">"❌"</span>
            <h2>{title}</h2>
            <p class="status-message">{message}</p>
            <div class="status-actions">
                <button class="primary" on:click=move |_| on_retry.run(())>"Tentar novamente"</button>
                <button on:click=move |_| ctx.navigate(back)>{back_label}</button>
            </div>
        </div>
    }
}

/// Placeholder for a list with nothing in it
#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="status-card empty">
            <span class="status-icon">"🎮"</span>
            <h2>{title}</h2>
            <p class="status-message">{message}</p>
            {children.map(|children| children())}
        </div>
    }
}
