//! Theme Toggle Component

use leptos::prelude::*;

use crate::store::{store_toggle_theme, use_session_store, SessionStateStoreFields};

/// Sun/moon button flipping the persisted dark mode flag
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_session_store();

    view! {
        <button
            type="button"
            class="theme-toggle"
            aria-label=move || if store.is_dark().get() { "라이트 모드로 전환" } else { "다크 모드로 전환" }
            on:click=move |_| store_toggle_theme(&store)
        >
            {move || if store.is_dark().get() { "☀️" } else { "🌙" }}
        </button>
    }
}
