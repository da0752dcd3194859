//! Progress Bar Component

use leptos::prelude::*;

/// Horizontal bar filled to `percent`; `tone` picks the fill colour class
#[component]
pub fn ProgressBar(percent: u8, #[prop(into)] tone: String) -> impl IntoView {
    view! {
        <div class="progress-track">
            <div class=format!("progress-fill {tone}") style=format!("width: {percent}%")></div>
        </div>
    }
}
