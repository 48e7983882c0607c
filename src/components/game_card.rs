//! Game Card Component

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Game;
use crate::route::Route;

const PLACEHOLDER_IMAGE: &str = "/placeholder-game.png";

/// Swap a broken cover for the placeholder image
pub fn use_placeholder_on_error(ev: &web_sys::Event) {
    if let Some(img) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok()) {
        if !img.src().ends_with(PLACEHOLDER_IMAGE) {
            img.set_src(PLACEHOLDER_IMAGE);
        }
    }
}

/// Cover, year badge and short description
#[component]
pub fn GameCard(game: Game) -> impl IntoView {
    view! {
        <div class="game-card">
            <div class="game-card-image">
                <img src=game.img_url.clone() alt=game.title.clone() on:error=move |ev| use_placeholder_on_error(&ev) />
                <span class="year-badge">{game.year}</span>
            </div>
            <div class="game-card-body">
                <h3 class="game-card-title">{game.title.clone()}</h3>
                <p class="game-card-description">{game.short_description.clone()}</p>
                <a class="button primary" href=Route::GameDetail(game.id).href()>"Ver Detalhes"</a>
            </div>
        </div>
    }
}
