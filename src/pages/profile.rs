//! Profile Page

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;

use crate::api::{self, ProfileUpdate};
use crate::components::ErrorBanner;
use crate::context::use_auth;

/// How long the "saved" message stays up
const NOTICE_MS: u32 = 3000;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let (username, set_username) = signal(String::new());
    let (form, set_form) = signal(ProfileUpdate::default());
    let (saving, set_saving) = signal(false);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_me().await {
                Ok(user) => {
                    set_form.set(ProfileUpdate::from(&user));
                    set_username.set(user.username);
                }
                Err(e) => {
                    auth.handle_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let update = form.get_untracked();
        set_saving.set(true);
        spawn_local(async move {
            match api::update_me(&update).await {
                Ok(user) => {
                    info!("[PROFILE] Updated profile of {}", user.username);
                    set_form.set(ProfileUpdate::from(&user));
                    set_error.set(None);
                    set_notice.set(Some("Profile updated".into()));
                    Timeout::new(NOTICE_MS, move || set_notice.set(None)).forget();
                }
                Err(e) => {
                    auth.handle_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="profile-form" on:submit=on_submit>
            <h1>"My profile"</h1>
            <ErrorBanner error=error/>
            <Show when=move || notice.get().is_some()>
                <div class="notice">{move || notice.get().unwrap_or_default()}</div>
            </Show>

            <label>
                "Username"
                <input type="text" disabled prop:value=move || username.get()/>
            </label>
            <label>
                "Email"
                <input
                    type="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.email = value);
                    }
                />
            </label>
            <label>
                "First name"
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.first_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.first_name = value);
                    }
                />
            </label>
            <label>
                "Last name"
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.last_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_form.update(|f| f.last_name = value);
                    }
                />
            </label>

            <button type="submit" class="btn-primary" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save changes" }}
            </button>
        </form>
    }
}
