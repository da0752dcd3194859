//! Login Form Component

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FieldError, FieldKind, FormField, Link, PageHeader};
use crate::constants::REDIRECT_DELAY_MS;
use crate::context::{use_api, use_app_context};
use crate::route::Route;
use crate::store::{store_login, use_session_store};
use crate::validation::{FieldErrors, LoginForm, SUBMIT};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_session_store();
    let api = use_api();

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (pending, set_pending) = signal(false);
    let (welcome, set_welcome) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let credentials = match form.with_untracked(LoginForm::validate) {
            Ok(credentials) => credentials,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FieldErrors::new());
        set_pending.set(true);

        let api = api.get_value();
        spawn_local(async move {
            match api.login(&credentials).await {
                Ok(response) if !response.token.is_empty() => {
                    let user = response.user();
                    log::info!("logged in as {}", user.email);
                    set_welcome.set(Some(user.name.clone()));
                    store_login(&store, user, response.token);
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    set_pending.set(false);
                    ctx.navigate(Route::Studies);
                }
                Ok(_) => {
                    log::warn!("login response carried no token");
                    errors.set(FieldErrors::submit("로그인 토큰을 받지 못했습니다."));
                    set_pending.set(false);
                }
                Err(err) => {
                    log::warn!("login failed: {err}");
                    errors.set(FieldErrors::submit(err.to_string()));
                    set_pending.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <PageHeader title="로그인" />
            <Show
                when=move || welcome.with(Option::is_some)
                fallback=move || view! {
                    <form class="auth-form" on:submit=submit novalidate=true>
                        <FormField
                            label="이메일"
                            name="email"
                            kind=FieldKind::Email
                            placeholder="example@email.com"
                            value=Signal::derive(move || form.with(|f| f.email.clone()))
                            on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                            error=Signal::derive(move || errors.with(|e| e.get("email")))
                        />
                        <FormField
                            label="비밀번호"
                            name="password"
                            kind=FieldKind::Password
                            value=Signal::derive(move || form.with(|f| f.password.clone()))
                            on_input=Callback::new(move |v: String| form.update(|f| f.password = v))
                            error=Signal::derive(move || errors.with(|e| e.get("password")))
                        />
                        <FieldError error=Signal::derive(move || errors.with(|e| e.get(SUBMIT))) />
                        <button type="submit" class="submit-btn" disabled=move || pending.get()>
                            {move || if pending.get() { "로그인 중..." } else { "로그인" }}
                        </button>
                        <p class="auth-switch">
                            "계정이 없으신가요? "
                            <Link to=Route::Signup>"회원가입"</Link>
                        </p>
                    </form>
                }
            >
                <div class="success-panel">
                    <p class="success-icon">"✅"</p>
                    <p>{move || format!("{}님 환영합니다!", welcome.get().unwrap_or_default())}</p>
                    <p class="success-hint">"스터디 목록으로 이동합니다..."</p>
                </div>
            </Show>
        </div>
    }
}
