//! Form Actions Component

use leptos::prelude::*;

use crate::components::FieldError;
use crate::context::use_app_context;
use crate::route::Route;

/// Submit and cancel buttons for the study form, with the form-level error
#[component]
pub fn FormActions(
    editing: bool,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let idle_label = if editing { "수정하기" } else { "생성하기" };

    view! {
        <FieldError error=error />
        <div class="form-actions">
            <button type="button" class="cancel-btn" on:click=move |_| ctx.navigate(Route::Studies)>
                "취소"
            </button>
            <button type="submit" class="submit-btn" disabled=move || pending.get()>
                {move || if pending.get() { "저장 중..." } else { idle_label }}
            </button>
        </div>
    }
}
