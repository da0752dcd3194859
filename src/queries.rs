//! Cached Reads
//!
//! API reads that go through the query cache first.

use chrono::Utc;
use leptos::prelude::{UpdateValue, WithValue};

use crate::api::ApiClient;
use crate::cache::QueryKey;
use crate::context::AppContext;
use crate::error::ApiError;
use crate::models::Study;

pub async fn fetch_studies(ctx: AppContext, api: &ApiClient) -> Result<Vec<Study>, ApiError> {
    let key = QueryKey::Studies;
    if let Some(studies) = ctx.list_cache.with_value(|cache| cache.fresh(key, Utc::now())) {
        return Ok(studies);
    }

    let studies = api.list_studies().await?;
    log::debug!("loaded {} studies", studies.len());
    ctx.list_cache.update_value(|cache| {
        cache.insert(key, studies.clone(), Utc::now());
        log::debug!("{} cached list entries", cache.len());
    });
    Ok(studies)
}

/// Last loaded list, even if stale, to show while a refetch is in flight
pub fn cached_studies(ctx: AppContext) -> Option<Vec<Study>> {
    ctx.list_cache.with_value(|cache| cache.peek(QueryKey::Studies))
}

pub async fn fetch_study(ctx: AppContext, api: &ApiClient, id: u64) -> Result<Study, ApiError> {
    let key = QueryKey::Study(id);
    if let Some(study) = ctx.detail_cache.with_value(|cache| cache.fresh(key, Utc::now())) {
        return Ok(study);
    }

    let study = api.get_study(id).await?;
    ctx.detail_cache
        .update_value(|cache| cache.insert(key, study.clone(), Utc::now()));
    Ok(study)
}

/// Keep the detail cache in step with a study the server just returned
pub fn remember_study(ctx: AppContext, study: &Study) {
    ctx.detail_cache
        .update_value(|cache| cache.insert(QueryKey::Study(study.id), study.clone(), Utc::now()));
}
