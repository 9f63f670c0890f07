//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_navigate;

use crate::components::ErrorBanner;
use crate::context::use_auth;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get().trim().to_string();
        let password = password.get();
        if username.is_empty() || password.is_empty() {
            set_error.set(Some("Enter your username and password".into()));
            return;
        }
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.login(username, password).await {
                Ok(()) => navigate("/", Default::default()),
                Err(e) => {
                    set_submitting.set(false);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <Show when=move || !auth.is_authenticated() fallback=|| view! { <Redirect path="/"/> }>
            <div class="auth-page">
                <form class="auth-form" on:submit=on_submit.clone()>
                    <h1>"Welcome back"</h1>
                    <ErrorBanner error=error/>
                    <label>
                        "Username"
                        <input
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Logging in..." } else { "Log in" }}
                    </button>
                    <p class="auth-switch">"No account yet? " <A href="/register">"Sign up"</A></p>
                </form>
            </div>
        </Show>
    }
}
