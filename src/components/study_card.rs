//! Study Card Component

use chrono::Utc;
use leptos::prelude::*;

use crate::components::{AvatarStack, DeleteConfirmButton, Link, ProgressBar};
use crate::constants::category_name;
use crate::context::use_app_context;
use crate::models::Study;
use crate::progress::{study_progress, StudyStatus};
use crate::route::Route;

#[component]
pub fn StudyCard(study: Study, on_delete: Callback<u64>) -> impl IntoView {
    let ctx = use_app_context();
    let id = study.id;
    let now = Utc::now();
    let percent = study_progress(&study, now);
    let status = StudyStatus::of(&study, now);
    let finished = percent >= 100;

    let open = move |_| {
        if !finished {
            ctx.navigate(Route::StudyDetail(id));
        }
    };

    view! {
        <article class=if finished { "study-card finished" } else { "study-card" } on:click=open>
            <div class="card-head">
                <h3 class="card-title">{study.title.clone()}</h3>
                {finished.then(|| view! { <span class="success-badge">"✅ 성공"</span> })}
                <span class="category-chip">{category_name(study.category_id).unwrap_or("기타")}</span>
            </div>
            <p class="card-goal">{study.goal.clone()}</p>
            <p class="card-description">{study.description.clone()}</p>
            <p class="card-meta">{format!("최대 {}명 / {}", study.max_participants, study.method)}</p>
            <div class="card-participants">
                <AvatarStack participants=study.participants.clone() size=28 />
                <span class="participant-count">
                    {format!("{}/{}", study.participant_count(), study.max_participants)}
                </span>
            </div>
            <ProgressBar percent=percent tone=status.css_class() />
            <div class="card-actions" on:click=|ev| ev.stop_propagation()>
                <Link to=Route::EditStudy(id) class="edit-link">"수정"</Link>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=Callback::new(move |_: ()| on_delete.run(id))
                />
            </div>
        </article>
    }
}
