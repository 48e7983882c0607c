//! Home Page

use leptos::prelude::*;

use crate::route::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <span class="hero-icon">"🎮"</span>
            <h1>"Bem-vindo ao " <span class="accent">"DSList"</span></h1>
            <p class="hero-text">
                "Descubra, organize e explore uma vasta coleção de games. "
                "Crie suas próprias listas personalizadas e compartilhe suas descobertas."
            </p>
            <div class="hero-actions">
                <a class="button primary" href=Route::Games.href()>"🚀 Explorar Games"</a>
                <a class="button" href=Route::Lists.href()>"📋 Ver Listas"</a>
            </div>
        </section>
    }
}
