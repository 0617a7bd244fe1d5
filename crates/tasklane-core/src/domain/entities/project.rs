//! Project entity.

use crate::{Entity, ProjectId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Project entity. A project belongs to exactly one user and owns zero
/// or more tasks. The owner never changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: ProjectId,

    /// Project title.
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Optional free-form description.
    pub description: Option<String>,

    /// Owning user.
    pub user_id: UserId,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project owned by the given user.
    #[must_use]
    pub fn new(title: String, description: Option<String>, user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::new(),
            title,
            description,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether the project is owned by the given user.
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Updates the mutable fields.
    pub fn update(&mut self, title: String, description: Option<String>) {
        self.title = title;
        self.description = description;
        self.updated_at = Utc::now();
    }
}

impl Entity<ProjectId> for Project {
    fn id(&self) -> &ProjectId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let owner = UserId::new();
        let project = Project::new(
            "Website redesign".to_string(),
            Some("Refresh the landing pages".to_string()),
            owner,
        );

        assert_eq!(project.title, "Website redesign");
        assert_eq!(project.user_id, owner);
        assert!(project.is_owned_by(owner));
        assert!(!project.is_owned_by(UserId::new()));
    }

    #[test]
    fn test_project_update() {
        let mut project = Project::new("Old title".to_string(), None, UserId::new());
        project.update("New title".to_string(), Some("Now described".to_string()));
        assert_eq!(project.title, "New title");
        assert_eq!(project.description, Some("Now described".to_string()));
    }

    #[test]
    fn test_project_ids_are_unique() {
        let owner = UserId::new();
        let p1 = Project::new("One".to_string(), None, owner);
        let p2 = Project::new("Two".to_string(), None, owner);
        assert_ne!(p1.id, p2.id);
    }
}
