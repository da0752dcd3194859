//! Study Detail Page
//!
//! Full study information with join/leave and delete actions.

use chrono::{DateTime, Local, Utc};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::avatar::summary;
use crate::components::{AvatarStack, Link, PageHeader, ProgressBar};
use crate::constants::{category_name, AVATAR_PREVIEW, LABEL_DELETE, LABEL_PROCESSING, MODAL_DURATION_MS};
use crate::context::{use_api, use_app_context};
use crate::error::ApiError;
use crate::models::Study;
use crate::progress::{study_progress, JoinState, StudyStatus};
use crate::queries::fetch_study;
use crate::route::Route;
use crate::store::{store_user_id, use_session_store};

/// Delete button text; a running delete blocks a second one
fn delete_label(deleting: bool) -> &'static str {
    if deleting {
        LABEL_PROCESSING
    } else {
        LABEL_DELETE
    }
}

fn display_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|v| v.with_timezone(&Local).format("%Y. %m. %d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn StudyDetailPage(id: u64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_session_store();
    let api = use_api();

    let (study, set_study) = signal::<Option<Study>>(None);
    let (load_error, set_load_error) = signal::<Option<String>>(None);
    let (action_error, set_action_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let (show_modal, set_show_modal) = signal(false);

    Effect::new(move |_| {
        ctx.studies_version.track();
        let api = api.get_value();
        spawn_local(async move {
            match fetch_study(ctx, &api, id).await {
                Ok(loaded) => {
                    set_study.set(Some(loaded));
                    set_load_error.set(None);
                }
                Err(err) => set_load_error.set(Some(ctx.report(&store, &err))),
            }
        });
    });

    let join_state = Memo::new(move |_| {
        let user_id = store_user_id(&store);
        study.with(|s| s.as_ref().map(|s| JoinState::for_study(s, user_id, Utc::now())))
    });

    let toggle_membership = move |_| {
        let Some(state) = join_state.get_untracked() else {
            return;
        };
        if pending.get_untracked() || !(state.can_join() || state == JoinState::Joined) {
            return;
        }
        let api = api.get_value();
        let user_id = store_user_id(&store);
        set_pending.set(true);
        set_action_error.set(None);

        spawn_local(async move {
            let result = match user_id {
                None => Err(ApiError::MissingToken),
                Some(user_id) if state == JoinState::Joined => api.leave_study(id, user_id).await,
                Some(user_id) => api.join_study(id, user_id).await,
            };
            set_pending.set(false);
            match result {
                Ok(()) => {
                    ctx.invalidate_study(id);
                    if state.can_join() {
                        log::info!("joined study {id}");
                        set_show_modal.set(true);
                        TimeoutFuture::new(MODAL_DURATION_MS).await;
                        set_show_modal.set(false);
                    } else {
                        log::info!("left study {id}");
                    }
                }
                Err(err) => set_action_error.set(Some(ctx.report(&store, &err))),
            }
        });
    };

    let delete = move |_| {
        if deleting.get_untracked() {
            return;
        }
        let confirmed = window()
            .confirm_with_message("정말 삭제할까요?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let api = api.get_value();
        set_deleting.set(true);
        set_action_error.set(None);
        spawn_local(async move {
            let result = api.delete_study(id).await;
            set_deleting.set(false);
            match result {
                Ok(()) => {
                    log::info!("deleted study {id}");
                    ctx.invalidate_study(id);
                    ctx.navigate(Route::Studies);
                }
                Err(err) => set_action_error.set(Some(ctx.report(&store, &err))),
            }
        });
    };

    let details = move || {
        let Some(study) = study.get() else {
            return match load_error.get() {
                Some(message) => view! { <p class="list-status error">{message}</p> }.into_any(),
                None => view! { <p class="list-status">"불러오는 중..."</p> }.into_any(),
            };
        };

        let now = Utc::now();
        let status = StudyStatus::of(&study, now);
        let percent = study_progress(&study, now);

        view! {
            <section class="study-detail">
                <h1 class="detail-title">{study.title.clone()}</h1>
                <p class="detail-goal">{study.goal.clone()}</p>
                <div class="detail-chips">
                    <span class="chip">{category_name(study.category_id).unwrap_or("기타")}</span>
                    <span class="chip">{study.method.clone()}</span>
                    <span class="chip">{format!("최대 {}명", study.max_participants)}</span>
                </div>

                <div class="detail-progress">
                    <div class="progress-head">
                        <span class=format!("status-label {}", status.css_class())>{status.label()}</span>
                        <span class="progress-percent">{format!("{percent}%")}</span>
                    </div>
                    <ProgressBar percent=percent tone=status.css_class() />
                    <div class="progress-dates">
                        <span>{display_date(study.duration_start)}</span>
                        <span>{display_date(study.duration_end)}</span>
                    </div>
                </div>

                <dl class="detail-info">
                    <dt>"참여자"</dt>
                    <dd class="detail-participants">
                        <AvatarStack participants=study.participants.clone() size=32 />
                        <span>
                            {format!(
                                "{} ({}/{})",
                                summary(&study.participants, AVATAR_PREVIEW),
                                study.participant_count(),
                                study.max_participants,
                            )}
                        </span>
                    </dd>
                    <dt>"기간"</dt>
                    <dd>
                        {format!("{} ~ {}", display_date(study.duration_start), display_date(study.duration_end))}
                    </dd>
                    <dt>"모집 마감"</dt>
                    <dd>{display_date(study.deadline)}</dd>
                </dl>

                <p class="detail-description">{study.description.clone()}</p>
            </section>
        }
        .into_any()
    };

    view! {
        <div class="study-detail-page">
            <PageHeader title="스터디 상세" />
            <Link to=Route::Studies class="back-link">"← 목록으로"</Link>
            {details}
            <Show when=move || join_state.with(Option::is_some)>
                <div class="detail-actions">
                    <button
                        type="button"
                        class=move || match join_state.get() {
                            Some(JoinState::Joined) => "join-btn leave",
                            Some(JoinState::Open) => "join-btn",
                            _ => "join-btn disabled",
                        }
                        disabled=move || {
                            pending.get()
                                || !join_state.get().is_some_and(|s| s.can_join() || s == JoinState::Joined)
                        }
                        on:click=toggle_membership
                    >
                        {move || {
                            if pending.get() {
                                LABEL_PROCESSING
                            } else {
                                join_state.get().map(JoinState::label).unwrap_or_default()
                            }
                        }}
                    </button>
                    <button
                        type="button"
                        class="delete-btn"
                        disabled=move || deleting.get()
                        on:click=delete
                    >
                        {move || delete_label(deleting.get())}
                    </button>
                </div>
            </Show>
            {move || action_error.get().map(|message| view! { <p class="field-error">{message}</p> })}
            <Show when=move || show_modal.get()>
                <div class="modal-backdrop">
                    <div class="modal">
                        <p class="success-icon">"🎉"</p>
                        <p>"참여 신청 완료!"</p>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_label_while_running() {
        assert_eq!(delete_label(false), "삭제");
        assert_eq!(delete_label(true), "처리중...");
    }
}
