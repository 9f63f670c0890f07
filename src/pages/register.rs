//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_navigate;
use log::info;

use crate::api::Registration;
use crate::components::ErrorBanner;
use crate::context::use_auth;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (form, set_form) = signal(Registration::default());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let registration = form.get();
        if let Err(e) = registration.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let username = registration.username.clone();
            match auth.register(registration).await {
                Ok(()) => {
                    info!("[AUTH] Registered {username}");
                    navigate("/", Default::default());
                }
                Err(e) => {
                    set_submitting.set(false);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    // (label, input type, autocomplete, getter, setter)
    let field = move |label: &'static str,
                      kind: &'static str,
                      autocomplete: &'static str,
                      get: fn(&Registration) -> String,
                      set: fn(&mut Registration, String)| {
        view! {
            <label>
                {label}
                <input
                    type=kind
                    autocomplete=autocomplete
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <Show when=move || !auth.is_authenticated() fallback=|| view! { <Redirect path="/"/> }>
            <div class="auth-page">
                <form class="auth-form" on:submit=on_submit.clone()>
                    <h1>"Create your account"</h1>
                    <ErrorBanner error=error/>
                    {field("Username", "text", "username", |f| f.username.clone(), |f, v| f.username = v)}
                    {field("Email", "email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {field("First name", "text", "given-name", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                    {field("Last name", "text", "family-name", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                    {field("Password", "password", "new-password", |f| f.password.clone(), |f, v| f.password = v)}
                    <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                    <p class="auth-switch">"Already registered? " <A href="/login">"Log in"</A></p>
                </form>
            </div>
        </Show>
    }
}
