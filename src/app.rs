//! Study Board App
//!
//! Root component: provides the session store, API client and app context,
//! then renders the page for the current route.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{
    Link, SignupPage, LoginPage, StudyCreatePage, StudyDetailPage, StudyEditPage, StudyListPage,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::route::Route;
use crate::store::{store_is_authenticated, SessionState, SessionStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::debug!("api base url {}", config.api_base_url);

    let store = Store::new(SessionState::restore());
    provide_context(store);
    provide_context(ApiClient::new(&config));

    let ctx = AppContext::new(signal(Route::current()), config.query);
    provide_context(ctx);

    // Back/forward buttons
    let popstate = window_event_listener(ev::popstate, move |_| ctx.sync_route());
    on_cleanup(move || popstate.remove());

    Effect::new(move |_| {
        let is_dark = store.is_dark().get();
        if let Some(body) = document().body() {
            body.set_class_name(if is_dark { "dark" } else { "" });
        }
    });

    // Keep the address bar honest when a guarded page bounces
    Effect::new(move |_| {
        let route = ctx.route.get();
        let guarded = route.guard(store_is_authenticated(&store));
        if guarded != route {
            log::info!("{} requires login", route.path());
            ctx.redirect(guarded);
        }
    });

    let page = move || match ctx.route.get().guard(store_is_authenticated(&store)) {
        Route::Signup => view! { <SignupPage /> }.into_any(),
        Route::Login => view! { <LoginPage /> }.into_any(),
        Route::Studies => view! { <StudyListPage /> }.into_any(),
        Route::CreateStudy => view! { <StudyCreatePage /> }.into_any(),
        Route::EditStudy(id) => view! { <StudyEditPage id=id /> }.into_any(),
        Route::StudyDetail(id) => view! { <StudyDetailPage id=id /> }.into_any(),
        Route::NotFound => view! { <NotFound /> }.into_any(),
    };

    view! { <main class="app">{page}</main> }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"페이지를 찾을 수 없습니다"</h2>
            <Link to=Route::Studies>"스터디 목록으로"</Link>
        </div>
    }
}
