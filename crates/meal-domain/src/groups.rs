//! Planning Groups

use serde::Serialize;

use crate::error::{DomainError, DomainResult};
use crate::models::PlanningGroup;

/// Avatars shown on a group card before collapsing into "+N"
pub const MAX_VISIBLE_MEMBERS: usize = 4;

/// Body of `POST groups/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGroup {
    pub name: String,
}

/// Body of `POST groups/{id}/add_member/` (username or email)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddMember {
    pub username: String,
}

impl NewGroup {
    pub fn new(name: &str) -> DomainResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name", "a group needs a name"));
        }
        Ok(Self { name: name.to_string() })
    }
}

impl AddMember {
    pub fn new(username_or_email: &str) -> DomainResult<Self> {
        let username = username_or_email.trim();
        if username.is_empty() {
            return Err(DomainError::validation("username", "enter a username or email"));
        }
        Ok(Self { username: username.to_string() })
    }
}

/// First names to show and how many are hidden
pub fn member_preview(group: &PlanningGroup) -> (Vec<String>, usize) {
    let visible = group.members_names.iter().take(MAX_VISIBLE_MEMBERS).cloned().collect();
    let remaining = group.members_names.len().saturating_sub(MAX_VISIBLE_MEMBERS);
    (visible, remaining)
}

/// Group to activate after loading: the stored one if still listed, else the first
pub fn resolve_active_group(groups: &[PlanningGroup], stored: Option<&PlanningGroup>) -> Option<PlanningGroup> {
    match stored {
        Some(active) => groups
            .iter()
            .find(|g| g.id == active.id)
            .cloned()
            .or_else(|| Some(active.clone())),
        None => groups.first().cloned(),
    }
}

/// Initial shown in a member avatar
pub fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: u32, members: &[&str]) -> PlanningGroup {
        PlanningGroup {
            id,
            name: format!("Group {id}"),
            members: (0..members.len() as u32).collect(),
            members_names: members.iter().map(|m| m.to_string()).collect(),
            planning_config: serde_json::Value::Null,
            created_at: None,
        }
    }

    #[test]
    fn test_member_preview() {
        let (visible, remaining) = member_preview(&group(1, &["ana", "luis", "eva", "jon", "mar", "pol"]));
        assert_eq!(visible, vec!["ana", "luis", "eva", "jon"]);
        assert_eq!(remaining, 2);

        let (visible, remaining) = member_preview(&group(2, &["ana"]));
        assert_eq!(visible.len(), 1);
        assert_eq!(remaining, 0);
    }

    #[test]
    fn test_resolve_active_group() {
        let groups = vec![group(1, &[]), group(2, &[])];
        assert_eq!(resolve_active_group(&groups, None).map(|g| g.id), Some(1));
        assert_eq!(resolve_active_group(&groups, Some(&group(2, &[]))).map(|g| g.id), Some(2));
        assert_eq!(resolve_active_group(&[], None), None);
    }

    #[test]
    fn test_blank_inputs_rejected() {
        assert!(NewGroup::new("   ").is_err());
        assert_eq!(NewGroup::new(" Casa ").unwrap().name, "Casa");
        assert!(AddMember::new("").is_err());
        assert_eq!(initial("eva"), "E");
        assert_eq!(initial(""), "");
    }
}
