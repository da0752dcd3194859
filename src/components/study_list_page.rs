//! Study List Page
//!
//! Filterable grid of study cards. Reloads whenever the study cache is
//! invalidated.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{PageHeader, StudyCard};
use crate::constants::{CATEGORIES, METHODS};
use crate::context::{use_api, use_app_context};
use crate::filter::{SortOrder, StudyFilter};
use crate::models::Study;
use crate::queries::{cached_studies, fetch_studies};
use crate::route::Route;
use crate::store::use_session_store;

#[component]
pub fn StudyListPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_session_store();
    let api = use_api();

    let (studies, set_studies) = signal(Vec::<Study>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let filter = RwSignal::new(StudyFilter::default());

    Effect::new(move |_| {
        ctx.studies_version.track();
        if let Some(stale) = cached_studies(ctx) {
            set_studies.set(stale);
            set_loading.set(false);
        }
        let api = api.get_value();
        spawn_local(async move {
            match fetch_studies(ctx, &api).await {
                Ok(loaded) => {
                    set_studies.set(loaded);
                    set_error.set(None);
                }
                Err(err) => set_error.set(Some(ctx.report(&store, &err))),
            }
            set_loading.set(false);
        });
    });

    let visible = Memo::new(move |_| filter.with(|f| studies.with(|all| f.apply(all))));

    let on_delete = Callback::new(move |id: u64| {
        let api = api.get_value();
        spawn_local(async move {
            match api.delete_study(id).await {
                Ok(()) => {
                    log::info!("deleted study {id}");
                    ctx.invalidate_study(id);
                }
                Err(err) => set_error.set(Some(ctx.report(&store, &err))),
            }
        });
    });

    let category_chips = CATEGORIES
        .iter()
        .map(|category| {
            let id = category.id;
            view! {
                <button
                    type="button"
                    class=move || if filter.with(|f| f.category == Some(id)) { "chip selected" } else { "chip" }
                    on:click=move |_| filter.update(|f| f.toggle_category(id))
                >
                    {category.name}
                </button>
            }
        })
        .collect_view();

    let method_chips = METHODS
        .iter()
        .map(|&method| {
            view! {
                <button
                    type="button"
                    class=move || {
                        if filter.with(|f| f.method.as_deref() == Some(method)) { "chip selected" } else { "chip" }
                    }
                    on:click=move |_| filter.update(|f| f.toggle_method(method))
                >
                    {method}
                </button>
            }
        })
        .collect_view();

    let list = move || {
        if loading.get() {
            return view! { <p class="list-status">"불러오는 중..."</p> }.into_any();
        }
        if let Some(message) = error.get() {
            return view! { <p class="list-status error">{message}</p> }.into_any();
        }
        if visible.with(Vec::is_empty) {
            return view! { <p class="list-status empty">"조건에 맞는 스터디가 없습니다."</p> }.into_any();
        }
        view! {
            <div class="study-grid">
                <For
                    each=move || visible.get()
                    key=|study| (study.id, study.updated_at, study.participants.len())
                    children=move |study| view! { <StudyCard study=study on_delete=on_delete /> }
                />
            </div>
        }
        .into_any()
    };

    view! {
        <div class="study-list-page">
            <PageHeader title="스터디 목록" />
            <div class="filter-bar">
                <input
                    type="search"
                    class="search-input"
                    placeholder="스터디 검색"
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    class="sort-select"
                    prop:value=move || filter.with(|f| f.sort.value())
                    on:change=move |ev| filter.update(|f| f.sort = SortOrder::from_value(&event_target_value(&ev)))
                >
                    {SortOrder::ALL
                        .into_iter()
                        .map(|order| view! { <option value=order.value()>{order.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="chip-row">
                <button
                    type="button"
                    class=move || if filter.with(|f| f.category.is_none()) { "chip selected" } else { "chip" }
                    on:click=move |_| filter.update(|f| f.category = None)
                >
                    "모두"
                </button>
                {category_chips}
            </div>
            <div class="chip-row">
                <button
                    type="button"
                    class=move || if filter.with(|f| f.method.is_none()) { "chip selected" } else { "chip" }
                    on:click=move |_| filter.update(|f| f.method = None)
                >
                    "모두"
                </button>
                {method_chips}
            </div>
            {list}
            <button
                type="button"
                class="fab"
                aria-label="스터디 만들기"
                on:click=move |_| ctx.navigate(Route::CreateStudy)
            >
                "+"
            </button>
        </div>
    }
}
