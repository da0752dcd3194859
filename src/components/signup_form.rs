//! Signup Form Component
//!
//! Registers a member, then signs them in with the same credentials.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FieldError, FieldKind, FormField, Link, PageHeader};
use crate::constants::REDIRECT_DELAY_MS;
use crate::context::{use_api, use_app_context};
use crate::models::{Gender, LoginRequest};
use crate::route::Route;
use crate::store::{store_login, use_session_store};
use crate::validation::{FieldErrors, SignupForm, SUBMIT};

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_session_store();
    let api = use_api();

    let form = RwSignal::new(SignupForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (pending, set_pending) = signal(false);
    let (done, set_done) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let member = match form.with_untracked(SignupForm::validate) {
            Ok(member) => member,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FieldErrors::new());
        set_pending.set(true);

        let api = api.get_value();
        spawn_local(async move {
            if let Err(err) = api.signup(&member).await {
                log::warn!("signup failed: {err}");
                errors.set(FieldErrors::submit(err.to_string()));
                set_pending.set(false);
                return;
            }
            log::info!("signed up {}", member.email);

            let credentials = LoginRequest {
                email: member.email.clone(),
                password: member.password.clone(),
            };
            match api.login(&credentials).await {
                Ok(response) if !response.token.is_empty() => {
                    store_login(&store, response.user(), response.token);
                    set_done.set(true);
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    set_pending.set(false);
                    ctx.navigate(Route::Studies);
                }
                other => {
                    if let Err(err) = other {
                        log::warn!("auto-login after signup failed: {err}");
                    }
                    set_pending.set(false);
                    ctx.navigate(Route::Login);
                }
            }
        });
    };

    let gender_button = move |gender: Gender| {
        view! {
            <button
                type="button"
                class=move || {
                    if form.with(|f| f.gender == Some(gender)) { "gender-btn selected" } else { "gender-btn" }
                }
                on:click=move |_| form.update(|f| f.gender = Some(gender))
            >
                {gender.label()}
            </button>
        }
    };

    view! {
        <div class="auth-page">
            <PageHeader title="회원가입" />
            <Show
                when=move || done.get()
                fallback=move || view! {
                    <form class="auth-form" on:submit=submit novalidate=true>
                        <FormField
                            label="이름"
                            name="name"
                            value=Signal::derive(move || form.with(|f| f.name.clone()))
                            on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                            error=Signal::derive(move || errors.with(|e| e.get("name")))
                        />
                        <FormField
                            label="이메일"
                            name="email"
                            kind=FieldKind::Email
                            placeholder="example@email.com"
                            value=Signal::derive(move || form.with(|f| f.email.clone()))
                            on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                            error=Signal::derive(move || errors.with(|e| e.get("email")))
                        />
                        <div class="form-field">
                            <label>"성별"</label>
                            <div class="gender-toggle">
                                {gender_button(Gender::Male)}
                                {gender_button(Gender::Female)}
                            </div>
                            <FieldError error=Signal::derive(move || errors.with(|e| e.get("gender"))) />
                        </div>
                        <FormField
                            label="비밀번호"
                            name="password"
                            kind=FieldKind::Password
                            placeholder="6자 이상"
                            value=Signal::derive(move || form.with(|f| f.password.clone()))
                            on_input=Callback::new(move |v: String| form.update(|f| f.password = v))
                            error=Signal::derive(move || errors.with(|e| e.get("password")))
                        />
                        <FormField
                            label="비밀번호 확인"
                            name="confirmPassword"
                            kind=FieldKind::Password
                            value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                            on_input=Callback::new(move |v: String| form.update(|f| f.confirm_password = v))
                            error=Signal::derive(move || errors.with(|e| e.get("confirmPassword")))
                        />
                        <FieldError error=Signal::derive(move || errors.with(|e| e.get(SUBMIT))) />
                        <button type="submit" class="submit-btn" disabled=move || pending.get()>
                            {move || if pending.get() { "가입 중..." } else { "회원가입" }}
                        </button>
                        <p class="auth-switch">
                            "이미 계정이 있으신가요? "
                            <Link to=Route::Login>"로그인"</Link>
                        </p>
                    </form>
                }
            >
                <div class="success-panel">
                    <p class="success-icon">"🎉"</p>
                    <p>"회원가입이 완료되었습니다!"</p>
                    <p class="success-hint">"스터디 목록으로 이동합니다..."</p>
                </div>
            </Show>
        </div>
    }
}
