//! Project domain model.
//!
//! # Responsibility
//! - Define the record created by one successful form submission.
//! - Define the status used by list views to pick their projects.
//!
//! # Invariants
//! - `id` is generated once at creation and never reused.
//! - New projects always start as `ProjectStatus::Active`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one project.
pub type ProjectId = Uuid;

/// Which list a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    /// Lowercase label used in list headings and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

/// One submitted project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Team size. Serialized as `people` to match the form field name.
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a freshly generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Human-readable team size, e.g. `1 person` or `4 persons`.
    pub fn people_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectStatus};

    #[test]
    fn new_project_is_active_with_unique_id() {
        let first = Project::new("T", "Desc1", 3);
        let second = Project::new("T", "Desc1", 3);

        assert_eq!(first.status, ProjectStatus::Active);
        assert!(!first.id.is_nil());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn people_label_pluralizes() {
        assert_eq!(Project::new("a", "bbbbb", 1).people_label(), "1 person");
        assert_eq!(Project::new("a", "bbbbb", 4).people_label(), "4 persons");
    }
}
