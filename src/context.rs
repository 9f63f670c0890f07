//! Application Context
//!
//! Session state shared with every page via the Leptos Context API.

use leptos::prelude::*;
use log::{info, warn};
use meal_domain::models::PlanningGroup;
use meal_domain::session::{RestoredSession, StoredUser};

use crate::api::{self, ApiError, ApiResult, Registration};
use crate::storage::session_store;

fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Logged-in user and active planning group
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Logged-in user - read
    pub user: ReadSignal<Option<StoredUser>>,
    /// Logged-in user - write
    set_user: WriteSignal<Option<StoredUser>>,
    /// Group whose plans are shown - read
    pub active_group: ReadSignal<Option<PlanningGroup>>,
    /// Group whose plans are shown - write
    set_active_group: WriteSignal<Option<PlanningGroup>>,
}

impl AuthContext {
    /// Build the context from whatever session local storage holds
    pub fn restore() -> Self {
        let restored = match session_store() {
            Ok(session) => session.restore(now_secs()),
            Err(e) => {
                warn!("[AUTH] {e}");
                RestoredSession::default()
            }
        };
        info!(
            "[AUTH] Restored session: authenticated={}, active group={:?}",
            restored.is_authenticated(),
            restored.active_group.as_ref().map(|g| g.id)
        );

        let (user, set_user) = signal(restored.user.filter(|_| restored.access_token.is_some()));
        let (active_group, set_active_group) = signal(restored.active_group);
        Self { user, set_user, active_group, set_active_group }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.get().is_some()
    }

    pub fn username(&self) -> Option<String> {
        self.user.get().map(|u| u.username)
    }

    pub fn active_group_id(&self) -> Option<u32> {
        self.active_group.get().map(|g| g.id)
    }

    pub async fn login(self, username: String, password: String) -> ApiResult<()> {
        let tokens = api::obtain_token(&username, &password).await?;
        let saved = session_store()?.save_login(&username, &tokens);
        info!("[AUTH] Logged in as {username}");
        self.set_user.set(saved.user);
        if saved.active_group.is_some() {
            self.set_active_group.set(saved.active_group);
        }
        Ok(())
    }

    /// Create the account, then log in with the same credentials
    pub async fn register(self, form: Registration) -> ApiResult<()> {
        api::register(&form).await?;
        self.login(form.username, form.password).await
    }

    pub fn select_group(&self, group: PlanningGroup) {
        match session_store() {
            Ok(session) => session.select_group(self.user.get_untracked().as_ref(), &group),
            Err(e) => warn!("[AUTH] Active group not persisted: {e}"),
        }
        self.set_active_group.set(Some(group));
    }

    pub fn logout(&self) {
        match session_store() {
            Ok(session) => session.logout(),
            Err(e) => warn!("[AUTH] {e}"),
        }
        info!("[AUTH] Logged out");
        self.set_user.set(None);
        self.set_active_group.set(None);
    }

    /// Drop the session when the backend rejected the token
    pub fn handle_error(&self, error: &ApiError) {
        if matches!(error, ApiError::Unauthorized) {
            self.logout();
        }
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
