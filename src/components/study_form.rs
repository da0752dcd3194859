//! Study Form Component
//!
//! Shared by the create and edit pages. Validates locally and hands a
//! [`StudyDraft`] to the page, which owns the request.

use leptos::prelude::*;

use crate::components::{DateRangeField, FieldKind, FormActions, FormField};
use crate::constants::{CATEGORIES, METHODS};
use crate::validation::{FieldErrors, StudyDraft, StudyFormState, SUBMIT};

#[component]
pub fn StudyForm(
    initial: StudyFormState,
    editing: bool,
    errors: RwSignal<FieldErrors>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<StudyDraft>,
) -> impl IntoView {
    let form = RwSignal::new(initial);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.with_untracked(StudyFormState::validate) {
            Ok(draft) => {
                errors.set(FieldErrors::new());
                on_submit.run(draft);
            }
            Err(invalid) => {
                log::debug!("study form has {} invalid fields", invalid.len());
                errors.set(invalid);
            }
        }
    };

    let error = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field)));

    let category_options = CATEGORIES
        .iter()
        .map(|c| (c.id.to_string(), c.name.to_string()))
        .collect::<Vec<_>>();
    let method_options = METHODS
        .iter()
        .map(|m| (m.to_string(), m.to_string()))
        .collect::<Vec<_>>();

    view! {
        <form class="study-form" on:submit=submit novalidate=true>
            <FormField
                label="스터디 제목"
                name="title"
                value=Signal::derive(move || form.with(|f| f.title.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.title = v))
                error=error("title")
            />
            <FormField
                label="목표"
                name="goal"
                value=Signal::derive(move || form.with(|f| f.goal.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.goal = v))
                error=error("goal")
            />
            <FormField
                label="카테고리"
                name="categoryId"
                kind=FieldKind::Select(category_options)
                value=Signal::derive(move || form.with(|f| f.category_id.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.category_id = v))
                error=error("categoryId")
            />
            <FormField
                label="설명"
                name="description"
                kind=FieldKind::Textarea
                value=Signal::derive(move || form.with(|f| f.description.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.description = v))
                error=error("description")
            />
            <FormField
                label="최대 인원"
                name="maxParticipants"
                kind=FieldKind::Number
                value=Signal::derive(move || form.with(|f| f.max_participants.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.max_participants = v))
                error=error("maxParticipants")
            />
            <FormField
                label="모임 방식"
                name="method"
                kind=FieldKind::Select(method_options)
                value=Signal::derive(move || form.with(|f| f.method.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.method = v))
                error=error("method")
            />
            <DateRangeField
                start=Signal::derive(move || form.with(|f| f.duration_start.clone()))
                end=Signal::derive(move || form.with(|f| f.duration_end.clone()))
                on_start=Callback::new(move |v: String| form.update(|f| f.duration_start = v))
                on_end=Callback::new(move |v: String| form.update(|f| f.duration_end = v))
                error=error("durationStart")
            />
            <FormField
                label="신청 마감일"
                name="deadline"
                kind=FieldKind::Date
                value=Signal::derive(move || form.with(|f| f.deadline.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.deadline = v))
                error=error("deadline")
            />
            <FormActions editing=editing pending=pending error=error(SUBMIT) />
        </form>
    }
}
