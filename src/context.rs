//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::api::ApiClient;
use crate::cache::{QueryCache, QueryKey};
use crate::config::QueryConfig;
use crate::error::ApiError;
use crate::models::Study;
use crate::route::Route;
use crate::store::{store_logout, SessionStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    /// Bumped whenever cached studies are invalidated - read
    pub studies_version: ReadSignal<u32>,
    /// Bumped whenever cached studies are invalidated - write
    set_studies_version: WriteSignal<u32>,
    pub(crate) list_cache: StoredValue<QueryCache<Vec<Study>>>,
    pub(crate) detail_cache: StoredValue<QueryCache<Study>>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>), query: QueryConfig) -> Self {
        let (studies_version, set_studies_version) = signal(0u32);
        Self {
            route: route.0,
            set_route: route.1,
            studies_version,
            set_studies_version,
            list_cache: StoredValue::new(QueryCache::new(query)),
            detail_cache: StoredValue::new(QueryCache::new(query)),
        }
    }

    /// Go to a page, adding a history entry
    pub fn navigate(&self, route: Route) {
        let path = route.path();
        log::debug!("navigate {path}");
        if let Ok(history) = window().history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&path));
        }
        self.set_route.set(route);
    }

    /// Go to a page, replacing the current history entry
    pub fn redirect(&self, route: Route) {
        let path = route.path();
        log::debug!("redirect {path}");
        if let Ok(history) = window().history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&path));
        }
        self.set_route.set(route);
    }

    /// Sync with the address bar after back/forward
    pub fn sync_route(&self) {
        self.set_route.set(Route::current());
    }

    /// Drop the cached list so the next read refetches
    pub fn invalidate_studies(&self) {
        self.list_cache.update_value(|cache| cache.invalidate(QueryKey::Studies));
        self.set_studies_version.update(|v| *v += 1);
    }

    /// Drop one study and the list it appears in
    pub fn invalidate_study(&self, id: u64) {
        self.detail_cache.update_value(|cache| cache.invalidate(QueryKey::Study(id)));
        self.invalidate_studies();
    }

    /// Turn a failed request into display text; expired sessions are signed out
    pub fn report(&self, store: &SessionStore, err: &ApiError) -> String {
        if err.ends_session() {
            log::warn!("session ended: {err}");
            store_logout(store);
            self.navigate(Route::Signup);
        } else {
            log::error!("request failed: {err}");
        }
        err.to_string()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// REST client from context, wrapped so event handlers stay `Copy`
pub fn use_api() -> StoredValue<ApiClient> {
    StoredValue::new(expect_context::<ApiClient>())
}
