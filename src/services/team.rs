//! Team administration — roster, roles, deactivation.
//!
//! Members are never deleted; deactivation flips `active` so history
//! referencing a member stays intact.

use tracing::info;
use uuid::Uuid;

use crate::models::{NewTeamMember, TeamMember, TeamMemberPatch};
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum TeamError {
    #[error("team member not found: {0}")]
    NotFound(Uuid),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("a member with email {0} already exists")]
    DuplicateEmail(String),
}

impl crate::error::ErrorCode for TeamError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_MEMBER_NOT_FOUND",
            Self::Validation(_) => "E_VALIDATION",
            Self::DuplicateEmail(_) => "E_DUPLICATE_EMAIL",
        }
    }
}

/// List the full roster in directory order.
pub async fn list_members(state: &AppState) -> Vec<TeamMember> {
    let directory = state.directory.read().await;
    directory.team.clone()
}

/// Add a member. Emails are unique across the roster.
///
/// # Errors
///
/// Returns `Validation` for blank name/email, `DuplicateEmail` on a
/// case-insensitive email collision.
pub async fn add_member(state: &AppState, new: NewTeamMember) -> Result<TeamMember, TeamError> {
    let name = new.name.trim();
    let email = new.email.trim();
    if name.is_empty() || email.is_empty() {
        return Err(TeamError::Validation("name and email are required".into()));
    }

    let mut directory = state.directory.write().await;
    if directory
        .team
        .iter()
        .any(|member| member.email.eq_ignore_ascii_case(email))
    {
        return Err(TeamError::DuplicateEmail(email.to_owned()));
    }

    let member = TeamMember {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        email: email.to_owned(),
        role: new.role,
        active: true,
    };
    directory.team.push(member.clone());
    info!(member_id = %member.id, role = member.role.as_str(), "team member added");
    Ok(member)
}

/// Apply a partial update to a member and return the updated record.
///
/// # Errors
///
/// `NotFound` for an unknown id, `DuplicateEmail` when the new email
/// collides with another member.
pub async fn update_member(
    state: &AppState,
    id: Uuid,
    patch: TeamMemberPatch,
) -> Result<TeamMember, TeamError> {
    let mut directory = state.directory.write().await;

    if let Some(email) = &patch.email
        && directory
            .team
            .iter()
            .any(|member| member.id != id && member.email.eq_ignore_ascii_case(email))
    {
        return Err(TeamError::DuplicateEmail(email.clone()));
    }

    let member = directory
        .team
        .iter_mut()
        .find(|member| member.id == id)
        .ok_or(TeamError::NotFound(id))?;

    if let Some(name) = patch.name {
        member.name = name;
    }
    if let Some(email) = patch.email {
        member.email = email;
    }
    if let Some(role) = patch.role {
        member.role = role;
    }

    info!(member_id = %id, "team member updated");
    Ok(member.clone())
}

/// Deactivate a member. Idempotent once inactive.
///
/// # Errors
///
/// Returns `NotFound` if no member has that id.
pub async fn deactivate_member(state: &AppState, id: Uuid) -> Result<TeamMember, TeamError> {
    let mut directory = state.directory.write().await;
    let member = directory
        .team
        .iter_mut()
        .find(|member| member.id == id)
        .ok_or(TeamError::NotFound(id))?;
    member.active = false;
    info!(member_id = %id, "team member deactivated");
    Ok(member.clone())
}

#[cfg(test)]
#[path = "team_test.rs"]
mod tests;
