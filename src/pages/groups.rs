//! Groups Page
//!
//! Households the user plans with: create one, invite members, pick the
//! active one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;
use meal_domain::groups::{initial, member_preview, AddMember, NewGroup};
use meal_domain::models::PlanningGroup;

use crate::api;
use crate::components::ErrorBanner;
use crate::context::use_auth;

#[component]
fn GroupCard(
    group: PlanningGroup,
    #[prop(into)] on_invite: Callback<(u32, String)>,
) -> impl IntoView {
    let auth = use_auth();
    let group_id = group.id;
    let (invite, set_invite) = signal(String::new());
    let (visible, remaining) = member_preview(&group);
    let is_active = move || auth.active_group.get().is_some_and(|g| g.id == group_id);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = invite.get();
        if username.trim().is_empty() {
            return;
        }
        on_invite.run((group_id, username));
        set_invite.set(String::new());
    };

    let select = {
        let group = group.clone();
        move |_| auth.select_group(group.clone())
    };

    view! {
        <article class="group-card" class:active=is_active>
            <header class="group-card-header">
                <h3>{group.name.clone()}</h3>
                <Show
                    when=is_active
                    fallback=move || {
                        let select = select.clone();
                        view! { <button type="button" class="btn-secondary" on:click=select>"Select"</button> }
                    }
                >
                    <span class="active-badge">"✓ Active"</span>
                </Show>
            </header>
            <p class="members-title">"Members"</p>
            <div class="member-avatars">
                {visible
                    .into_iter()
                    .map(|member| view! { <span class="avatar" title=member.clone()>{initial(&member)}</span> })
                    .collect_view()}
                {(remaining > 0).then(|| view! { <span class="avatar more">{format!("+{remaining}")}</span> })}
            </div>
            <form class="invite-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Invite by username or email..."
                    prop:value=move || invite.get()
                    on:input=move |ev| set_invite.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || invite.get().trim().is_empty()>"Invite"</button>
            </form>
        </article>
    }
}

#[component]
pub fn GroupsPage() -> impl IntoView {
    let auth = use_auth();
    let (groups, set_groups) = signal(Vec::<PlanningGroup>::new());
    let (reload, set_reload) = signal(0u32);
    let (new_name, set_new_name) = signal(String::new());
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let _ = reload.get();
        spawn_local(async move {
            match api::list_groups().await {
                Ok(loaded) => set_groups.set(loaded),
                Err(e) => {
                    auth.handle_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let group = match NewGroup::new(&new_name.get()) {
            Ok(group) => group,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        spawn_local(async move {
            match api::create_group(&group).await {
                Ok(created) => {
                    info!("[GROUPS] Created group {} ({})", created.name, created.id);
                    set_new_name.set(String::new());
                    set_error.set(None);
                    if auth.active_group.get_untracked().is_none() {
                        auth.select_group(created);
                    }
                    set_reload.update(|v| *v += 1);
                }
                Err(e) => {
                    auth.handle_error(&e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let invite = move |(group_id, username): (u32, String)| {
        let member = match AddMember::new(&username) {
            Ok(member) => member,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        spawn_local(async move {
            match api::add_member(group_id, &member).await {
                Ok(_) => {
                    set_error.set(None);
                    set_notice.set(Some(format!("{} added to the group", member.username)));
                    set_reload.update(|v| *v += 1);
                }
                Err(e) => {
                    auth.handle_error(&e);
                    set_notice.set(None);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="groups-page">
            <header class="page-header">
                <h1>"Groups"</h1>
                <p class="page-subtitle">"Plan meals together with the people you live with."</p>
            </header>

            <form class="new-group-form" on:submit=create>
                <input
                    type="text"
                    placeholder="New group name..."
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary">"+ Create group"</button>
            </form>

            <ErrorBanner error=error/>
            <Show when=move || notice.get().is_some()>
                <div class="notice">{move || notice.get().unwrap_or_default()}</div>
            </Show>

            <div class="group-grid">
                <For
                    each=move || groups.get()
                    key=|group| (group.id, group.members_names.len())
                    children=move |group| view! { <GroupCard group=group on_invite=invite/> }
                />
            </div>
            <Show when=move || groups.with(Vec::is_empty)>
                <p class="empty-state">"You are not in any group yet. Create one to start planning."</p>
            </Show>
        </div>
    }
}
