//! Page Header Component

use leptos::prelude::*;

use crate::components::ThemeToggle;
use crate::context::use_app_context;
use crate::route::Route;
use crate::store::{store_is_authenticated, store_logout, use_session_store};

/// Title row shared by every page: theme toggle, plus logout when signed in
#[component]
pub fn PageHeader(#[prop(into)] title: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_session_store();

    let logout = move |_| {
        log::info!("logout");
        store_logout(&store);
        ctx.navigate(Route::Login);
    };

    view! {
        <header class="page-header">
            <h2>{title}</h2>
            <div class="header-actions">
                <Show when=move || store_is_authenticated(&store)>
                    <button type="button" class="logout-btn" on:click=logout>"로그아웃"</button>
                </Show>
                <ThemeToggle />
            </div>
        </header>
    }
}
