//! Study Create Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{PageHeader, StudyForm};
use crate::context::{use_api, use_app_context};
use crate::error::ApiError;
use crate::queries::remember_study;
use crate::route::Route;
use crate::store::{store_user_id, use_session_store};
use crate::validation::{FieldErrors, StudyDraft, StudyFormState};

#[component]
pub fn StudyCreatePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_session_store();
    let api = use_api();

    let errors = RwSignal::new(FieldErrors::new());
    let (pending, set_pending) = signal(false);

    let on_submit = Callback::new(move |draft: StudyDraft| {
        let Some(creator_id) = store_user_id(&store) else {
            errors.set(FieldErrors::submit(ctx.report(&store, &ApiError::MissingToken)));
            return;
        };
        let api = api.get_value();
        set_pending.set(true);

        spawn_local(async move {
            match api.create_study(&draft.into_create(creator_id)).await {
                Ok(created) => {
                    log::info!("created study {}", created.id);
                    remember_study(ctx, &created);
                    ctx.invalidate_studies();
                    set_pending.set(false);
                    ctx.navigate(Route::Studies);
                }
                Err(err) => {
                    errors.set(FieldErrors::submit(ctx.report(&store, &err)));
                    set_pending.set(false);
                }
            }
        });
    });

    view! {
        <div class="study-form-page">
            <PageHeader title="스터디 만들기" />
            <StudyForm
                initial=StudyFormState::default()
                editing=false
                errors=errors
                pending=pending
                on_submit=on_submit
            />
        </div>
    }
}
