//! Profile Endpoints

use meal_domain::models::User;
use serde::Serialize;

use super::{get, patch, ApiResult};

/// Editable profile fields
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for ProfileUpdate {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

pub async fn get_me() -> ApiResult<User> {
    get("users/me/").await
}

pub async fn update_me(update: &ProfileUpdate) -> ApiResult<User> {
    patch("users/me/", update).await
}
