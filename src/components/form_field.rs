//! Form Field Components
//!
//! Labelled input with its inline validation message.

use leptos::prelude::*;

/// Input flavour rendered by [`FormField`]
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Date,
    Textarea,
    /// (value, label) options
    Select(Vec<(String, String)>),
}

impl FieldKind {
    fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            _ => "text",
        }
    }
}

/// Red message under a field, hidden when there is nothing to say
#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || error.get().map(|message| view! { <p class="field-error">{message}</p> })
}

#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] kind: FieldKind,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let class = move || if error.with(Option::is_some) { "field-input invalid" } else { "field-input" };

    let control = match kind {
        FieldKind::Textarea => view! {
            <textarea
                id=name.clone()
                name=name.clone()
                class=class
                rows="4"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                id=name.clone()
                name=name.clone()
                class=class
                prop:value=move || value.get()
                on:change=move |ev| on_input.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option, text)| {
                        let current = option.clone();
                        view! {
                            <option value=option selected=move || value.get() == current>{text}</option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        other => view! {
            <input
                id=name.clone()
                name=name.clone()
                type=other.input_type()
                class=class
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-field">
            <label for=name>{label}</label>
            {control}
            <FieldError error=error />
        </div>
    }
}
