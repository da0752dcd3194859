//! Study Edit Page
//!
//! Loads the study, prefills the shared form and sends an update.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{PageHeader, ParticipantList, StudyForm};
use crate::context::{use_api, use_app_context};
use crate::models::Study;
use crate::queries::{fetch_study, remember_study};
use crate::route::Route;
use crate::store::use_session_store;
use crate::validation::{FieldErrors, StudyDraft, StudyFormState};

#[component]
pub fn StudyEditPage(id: u64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_session_store();
    let api = use_api();

    let (study, set_study) = signal::<Option<Study>>(None);
    let (load_error, set_load_error) = signal::<Option<String>>(None);
    let errors = RwSignal::new(FieldErrors::new());
    let (pending, set_pending) = signal(false);

    // Load once; the form keeps its own copy after prefilling
    let load_api = api.get_value();
    spawn_local(async move {
        match fetch_study(ctx, &load_api, id).await {
            Ok(loaded) => set_study.set(Some(loaded)),
            Err(err) => set_load_error.set(Some(ctx.report(&store, &err))),
        }
    });

    let on_submit = Callback::new(move |draft: StudyDraft| {
        let api = api.get_value();
        set_pending.set(true);

        spawn_local(async move {
            match api.update_study(id, &draft.into_update()).await {
                Ok(updated) => {
                    log::info!("updated study {id}");
                    remember_study(ctx, &updated);
                    ctx.invalidate_studies();
                    set_pending.set(false);
                    ctx.navigate(Route::StudyDetail(id));
                }
                Err(err) => {
                    errors.set(FieldErrors::submit(ctx.report(&store, &err)));
                    set_pending.set(false);
                }
            }
        });
    });

    let body = move || {
        let loaded = study.with(|s| s.as_ref().map(|s| (StudyFormState::from_study(s), s.participants.clone())));
        match (loaded, load_error.get()) {
            (Some((initial, participants)), _) => view! {
                <StudyForm initial=initial editing=true errors=errors pending=pending on_submit=on_submit />
                <ParticipantList participants=participants />
            }
            .into_any(),
            (None, Some(message)) => view! { <p class="list-status error">{message}</p> }.into_any(),
            (None, None) => view! { <p class="list-status">"불러오는 중..."</p> }.into_any(),
        }
    };

    view! {
        <div class="study-form-page">
            <PageHeader title="스터디 수정" />
            {body}
        </div>
    }
}
