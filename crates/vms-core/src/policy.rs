//! Authorization policy - single decision point for who may do what
//!
//! Services call [`authorize`] with the acting user and the requested action
//! instead of scattering role checks around. The policy covers role gates
//! (admin vs volunteer), ownership, and team-scoped rights; state-machine
//! guards (pending-only edits, draft-only project edits) live on the
//! entities and services.

use crate::entities::{Document, Project, ProjectAction, Team, TeamMember, UserRole, WorkLog};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// The acting user as seen by the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: Snowflake,
    pub role: UserRole,
}

impl Actor {
    pub fn new(id: Snowflake, role: UserRole) -> Self {
        Self { id, role }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// An action a caller wants to perform, with the resource it targets
#[derive(Debug)]
pub enum Action<'a> {
    /// Report hours (volunteers only)
    CreateWorkLog,
    /// Edit or delete an own pending work log
    ModifyWorkLog(&'a WorkLog),
    /// Approve or reject a work log (admins only)
    DecideWorkLog,
    /// Create a draft project (volunteers only)
    CreateProject,
    /// Edit or delete a draft project (creator only)
    ModifyProject(&'a Project),
    /// Drive the project lifecycle; review actions are admin-only,
    /// the rest belong to the creator
    TransitionProject {
        project: &'a Project,
        action: ProjectAction,
    },
    /// Post a progress note (project creator only)
    PostProjectUpdate(&'a Project),
    /// Create a team or join one (volunteers only)
    CreateTeam,
    JoinTeam,
    /// Add or remove team members (team leader or admin)
    ManageMembers { membership: Option<&'a TeamMember> },
    /// Delete a team (creator or admin)
    DeleteTeam(&'a Team),
    /// Upload a document (anyone signed in)
    UploadDocument,
    /// Mark a document global or share it with teams (admins only)
    ShareDocument,
    /// View a specific document
    ViewDocument {
        document: &'a Document,
        /// Teams the actor belongs to
        team_ids: &'a [Snowflake],
        /// Teams whose members' uploads the actor can see
        teammate_uploader: bool,
    },
    /// Unassigned-resource reports (admins only)
    ViewAdminReports,
}

/// Decide whether `actor` may perform `action`.
pub fn authorize(actor: &Actor, action: Action<'_>) -> Result<(), DomainError> {
    match action {
        Action::CreateWorkLog | Action::CreateProject | Action::CreateTeam | Action::JoinTeam => {
            if actor.role == UserRole::Volunteer {
                Ok(())
            } else {
                Err(DomainError::VolunteerOnly)
            }
        }

        Action::ModifyWorkLog(log) => {
            if log.is_owner(actor.id) {
                Ok(())
            } else {
                Err(DomainError::NotResourceOwner)
            }
        }

        Action::DecideWorkLog | Action::ShareDocument | Action::ViewAdminReports => {
            if actor.is_admin() {
                Ok(())
            } else {
                Err(DomainError::AdminOnly)
            }
        }

        Action::ModifyProject(project) | Action::PostProjectUpdate(project) => {
            if project.is_creator(actor.id) {
                Ok(())
            } else {
                Err(DomainError::NotResourceOwner)
            }
        }

        Action::TransitionProject { project, action } => {
            if action.is_review() {
                if actor.is_admin() {
                    Ok(())
                } else {
                    Err(DomainError::AdminOnly)
                }
            } else if project.is_creator(actor.id) {
                Ok(())
            } else {
                Err(DomainError::NotResourceOwner)
            }
        }

        Action::ManageMembers { membership } => {
            if actor.is_admin() {
                return Ok(());
            }
            match membership {
                Some(m) if m.user_id == actor.id && m.is_leader() => Ok(()),
                _ => Err(DomainError::NotTeamLeader),
            }
        }

        Action::DeleteTeam(team) => {
            if actor.is_admin() || team.is_creator(actor.id) {
                Ok(())
            } else {
                Err(DomainError::PermissionDenied("delete team".to_string()))
            }
        }

        Action::UploadDocument => Ok(()),

        Action::ViewDocument {
            document,
            team_ids,
            teammate_uploader,
        } => {
            if actor.is_admin()
                || document.is_uploader(actor.id)
                || document.is_global
                || teammate_uploader
                || team_ids.iter().any(|t| document.is_shared_with(*t))
            {
                Ok(())
            } else {
                Err(DomainError::DocumentNotFound(document.id))
            }
        }
    }
}
