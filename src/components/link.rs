//! Link Component
//!
//! Anchor that navigates through history instead of reloading the page.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::Route;

#[component]
pub fn Link(
    to: Route,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <a
            href=to.path()
            class=class
            on:click=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                ctx.navigate(to);
            }
        >
            {children()}
        </a>
    }
}
