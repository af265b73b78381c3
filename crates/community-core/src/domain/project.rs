//! Project Entity
//!
//! A volunteering opportunity posted by an organization.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::lenient;

/// Whether a project still accepts applicants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    #[default]
    Open,
    Closed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Open => "Open",
            ProjectStatus::Closed => "Closed",
        }
    }

    /// Closed once the roster reaches capacity. A project without a
    /// readable capacity never fills up.
    pub fn from_fill(applicants: usize, capacity: Option<u32>) -> Self {
        match capacity {
            Some(capacity) if applicants >= capacity as usize => ProjectStatus::Closed,
            _ => ProjectStatus::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ProjectStatus::Open)
    }
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        if raw.trim().eq_ignore_ascii_case("closed") {
            ProjectStatus::Closed
        } else {
            ProjectStatus::Open
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "ProjectID", default, deserialize_with = "lenient::text")]
    pub project_id: String,
    #[serde(rename = "Title", default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(rename = "Description", default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(rename = "SkillsRequired", default, deserialize_with = "lenient::string_list")]
    pub skills_required: Vec<String>,
    /// `None` when the server sent no usable capacity
    #[serde(
        rename = "Capacity",
        default,
        deserialize_with = "lenient::optional_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub capacity: Option<u32>,
    #[serde(rename = "Location", default, deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(rename = "Status", default, deserialize_with = "lenient::from_text")]
    pub status: ProjectStatus,
    #[serde(rename = "OrganizerID", default, deserialize_with = "lenient::text")]
    pub organizer_id: String,
    #[serde(rename = "StartDate", default, deserialize_with = "lenient::text")]
    pub start_date: String,
}

impl Project {
    pub fn is_owned_by(&self, organization_id: &str) -> bool {
        self.organizer_id == organization_id
    }

    pub fn skills_label(&self) -> String {
        self.skills_required.join(", ")
    }

    /// Capacity for display, `"?"` when unknown
    pub fn capacity_label(&self) -> String {
        self.capacity.map_or_else(|| "?".to_string(), |capacity| capacity.to_string())
    }
}

impl Entity for Project {
    fn id(&self) -> &str {
        &self.project_id
    }
}

/// Payload for `registerProject`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProject {
    #[serde(flatten)]
    pub project: Project,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_from_fill_boundary() {
        assert_eq!(ProjectStatus::from_fill(1, Some(2)), ProjectStatus::Open);
        assert_eq!(ProjectStatus::from_fill(2, Some(2)), ProjectStatus::Closed);
        assert_eq!(ProjectStatus::from_fill(3, Some(2)), ProjectStatus::Closed);
        assert_eq!(ProjectStatus::from_fill(0, Some(0)), ProjectStatus::Closed);
    }

    #[test]
    fn test_unknown_capacity_never_closes() {
        assert_eq!(ProjectStatus::from_fill(0, None), ProjectStatus::Open);
        assert_eq!(ProjectStatus::from_fill(50, None), ProjectStatus::Open);

        let project: Project = serde_json::from_value(json!({ "ProjectID": "P7", "Capacity": "many" })).unwrap();
        assert_eq!(project.capacity, None);
        assert_eq!(project.capacity_label(), "?");

        let missing: Project = serde_json::from_value(json!({ "ProjectID": "P8" })).unwrap();
        assert_eq!(missing.capacity, None);
    }

    #[test]
    fn test_project_decodes_loose_payload() {
        let project: Project = serde_json::from_value(json!({
            "ProjectID": "P100",
            "Title": "Beach cleanup",
            "SkillsRequired": "Teamwork, Environmental Awareness",
            "Capacity": "2",
            "Location": null,
            "Status": "closed",
            "OrganizerID": "O100"
        }))
        .unwrap();

        assert_eq!(project.capacity, Some(2));
        assert_eq!(project.skills_required, vec!["Teamwork", "Environmental Awareness"]);
        assert_eq!(project.location, "");
        assert_eq!(project.status, ProjectStatus::Closed);
        assert!(project.is_owned_by("O100"));
        assert!(!project.is_owned_by("O101"));
    }

    #[test]
    fn test_status_serializes_as_text() {
        let value = serde_json::to_value(ProjectStatus::Closed).unwrap();
        assert_eq!(value, json!("Closed"));
    }
}
