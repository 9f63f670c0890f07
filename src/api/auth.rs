//! Authentication Endpoints

use meal_domain::models::TokenPair;
use meal_domain::{DomainError, DomainResult};
use serde::Serialize;

use super::{post, ApiResult};

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// Sign-up form
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl Registration {
    pub fn validate(&self) -> DomainResult<()> {
        if self.username.trim().is_empty() {
            return Err(DomainError::validation("username", "choose a username"));
        }
        if !self.email.contains('@') {
            return Err(DomainError::validation("email", "enter a valid email address"));
        }
        if self.password.is_empty() {
            return Err(DomainError::validation("password", "choose a password"));
        }
        Ok(())
    }
}

pub async fn obtain_token(username: &str, password: &str) -> ApiResult<TokenPair> {
    post("token/", &Credentials { username, password }).await
}

pub async fn register(form: &Registration) -> ApiResult<serde_json::Value> {
    form.validate()?;
    post("register/", form).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> Registration {
        Registration {
            username: "ana".into(),
            email: "ana@example.org".into(),
            password: "secret".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_registration_validation() {
        assert!(form().validate().is_ok());
        assert!(Registration { email: "ana".into(), ..form() }.validate().is_err());
        assert!(Registration { username: " ".into(), ..form() }.validate().is_err());
        assert!(Registration { password: String::new(), ..form() }.validate().is_err());
    }
}
