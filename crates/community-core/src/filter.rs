//! Project filtering for the volunteer dashboard.

use crate::domain::Project;

/// Choices offered by the skill filter; the empty value means "All Skills".
pub const SKILL_FILTER_OPTIONS: &[&str] = &[
    "Teaching",
    "Healthcare",
    "Fundraising",
    "Communication",
    "Teamwork",
    "Environmental Awareness",
];

/// Skill and location predicates, ANDed together. An empty predicate
/// imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub skill: String,
    pub location: String,
}

impl ProjectFilter {
    pub fn new(skill: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
            location: location.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skill.is_empty() && self.location.is_empty()
    }

    /// Case-insensitive substring match against any required skill
    pub fn matches_skill(&self, project: &Project) -> bool {
        if self.skill.is_empty() {
            return true;
        }
        let needle = self.skill.to_lowercase();
        project
            .skills_required
            .iter()
            .any(|skill| skill.to_lowercase().contains(&needle))
    }

    /// Case-insensitive substring match against the project location
    pub fn matches_location(&self, project: &Project) -> bool {
        if self.location.is_empty() {
            return true;
        }
        project.location.to_lowercase().contains(&self.location.to_lowercase())
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.matches_skill(project) && self.matches_location(project)
    }

    /// The visible subset, in base-list order. The base list is untouched.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|project| self.matches(project)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, skills: &[&str], location: &str) -> Project {
        Project {
            project_id: id.to_string(),
            title: format!("Project {}", id),
            skills_required: skills.iter().map(|s| s.to_string()).collect(),
            capacity: Some(3),
            location: location.to_string(),
            ..Default::default()
        }
    }

    fn fixture() -> Vec<Project> {
        vec![
            project("P1", &["Teaching", "Communication"], "Bangalore"),
            project("P2", &["Healthcare"], "Mysore"),
            project("P3", &["Environmental Awareness", "Teamwork"], "Bangalore Rural"),
            project("P4", &[], ""),
        ]
    }

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.project_id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let projects = fixture();
        assert_eq!(ProjectFilter::default().apply(&projects).len(), 4);
    }

    #[test]
    fn test_skill_is_case_insensitive_substring() {
        let projects = fixture();
        let filter = ProjectFilter::new("TEACH", "");
        assert_eq!(ids(&filter.apply(&projects)), vec!["P1"]);

        let filter = ProjectFilter::new("aware", "");
        assert_eq!(ids(&filter.apply(&projects)), vec!["P3"]);
    }

    #[test]
    fn test_location_is_case_insensitive_substring() {
        let projects = fixture();
        let filter = ProjectFilter::new("", "bangalore");
        assert_eq!(ids(&filter.apply(&projects)), vec!["P1", "P3"]);
    }

    #[test]
    fn test_predicates_are_anded() {
        let projects = fixture();
        let filter = ProjectFilter::new("team", "bangalore");
        assert_eq!(ids(&filter.apply(&projects)), vec!["P3"]);
    }

    #[test]
    fn test_filters_commute_and_are_idempotent() {
        let projects = fixture();
        let by_skill = ProjectFilter::new("a", "");
        let by_location = ProjectFilter::new("", "re");

        let skill_then_location: Vec<Project> = by_skill
            .apply(&projects)
            .into_iter()
            .filter(|p| by_location.matches(p))
            .cloned()
            .collect();
        let location_then_skill: Vec<Project> = by_location
            .apply(&projects)
            .into_iter()
            .filter(|p| by_skill.matches(p))
            .cloned()
            .collect();
        assert_eq!(skill_then_location, location_then_skill);

        let combined = ProjectFilter::new("a", "re");
        let once: Vec<Project> = combined.apply(&projects).into_iter().cloned().collect();
        let twice: Vec<Project> = combined.apply(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_base_list_is_not_mutated() {
        let projects = fixture();
        let before = projects.clone();
        let _ = ProjectFilter::new("health", "mys").apply(&projects);
        assert_eq!(projects, before);
    }
}
