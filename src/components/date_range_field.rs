//! Date Range Field Component

use leptos::prelude::*;

use crate::components::FieldError;

/// Start and end date pickers sharing one label and one error line
#[component]
pub fn DateRangeField(
    #[prop(into)] start: Signal<String>,
    #[prop(into)] end: Signal<String>,
    on_start: Callback<String>,
    on_end: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for="durationStart">"스터디 기간"</label>
            <div class="date-range">
                <input
                    id="durationStart"
                    type="date"
                    class="field-input"
                    prop:value=move || start.get()
                    on:input=move |ev| on_start.run(event_target_value(&ev))
                />
                <span class="date-range-sep">"~"</span>
                <input
                    id="durationEnd"
                    type="date"
                    class="field-input"
                    min=move || start.get()
                    prop:value=move || end.get()
                    on:input=move |ev| on_end.run(event_target_value(&ev))
                />
            </div>
            <FieldError error=error />
        </div>
    }
}
