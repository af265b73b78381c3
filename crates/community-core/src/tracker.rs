//! Application Tracker
//!
//! Volunteer dashboard view model: filterable project list, the projects
//! already applied to with pledged hours, and the apply action.
//!
//! Applying never updates local state optimistically. After a successful
//! submission the volunteer's applications are fetched again and the
//! applied set is replaced with what the server reports.

use std::collections::{BTreeMap, BTreeSet};

use crate::api::CommunityApi;
use crate::domain::{find_by_id, Application, NewApplication, Project};
use crate::error::{ApiError, ApplyError, EmptyIdentifier};
use crate::filter::ProjectFilter;

/// Hour pledges offered on each project card
pub const HOURS_OPTIONS: &[u32] = &[8, 9, 10];

pub const MISSING_HOURS_MESSAGE: &str = "Please select hours before applying.";
pub const APPLY_FAILED_MESSAGE: &str = "Could not apply. Please try again later.";

/// Projects a volunteer has applied to, in server order, with pledged hours.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedProjects {
    pub project_ids: Vec<String>,
    pub hours: BTreeMap<String, u32>,
}

impl AppliedProjects {
    /// Keep `volunteer_id`'s applications (exact match). When a project was
    /// applied to more than once the last application's hours win.
    pub fn for_volunteer(applications: &[Application], volunteer_id: &str) -> Self {
        let mut applied = Self::default();
        for application in applications.iter().filter(|a| a.volunteer_id == volunteer_id) {
            if !applied.contains(&application.project_id) {
                applied.project_ids.push(application.project_id.clone());
            }
            applied.hours.insert(application.project_id.clone(), application.hours);
        }
        applied
    }

    pub fn contains(&self, project_id: &str) -> bool {
        self.project_ids.iter().any(|id| id == project_id)
    }

    pub fn hours_for(&self, project_id: &str) -> Option<u32> {
        self.hours.get(project_id).copied()
    }

    pub fn len(&self) -> usize {
        self.project_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.project_ids.is_empty()
    }
}

/// Initial load result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerSnapshot {
    pub projects: Vec<Project>,
    pub applied: AppliedProjects,
}

/// Per-project row state: `NotApplied -> Submitting -> Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    NotApplied { selected_hours: Option<u32> },
    Submitting,
    Pending { hours: u32 },
}

impl RowState {
    pub fn can_apply(&self) -> bool {
        matches!(self, RowState::NotApplied { .. })
    }
}

/// Dashboard state the view renders from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerState {
    projects: Vec<Project>,
    filter: ProjectFilter,
    applied: AppliedProjects,
    selected_hours: BTreeMap<String, u32>,
    errors: BTreeMap<String, String>,
    submitting: BTreeSet<String>,
}

impl TrackerState {
    pub fn load(&mut self, snapshot: TrackerSnapshot) {
        self.projects = snapshot.projects;
        self.replace_applied(snapshot.applied);
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn applied(&self) -> &AppliedProjects {
        &self.applied
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    pub fn set_skill_filter(&mut self, skill: impl Into<String>) {
        self.filter.skill = skill.into();
    }

    pub fn set_location_filter(&mut self, location: impl Into<String>) {
        self.filter.location = location.into();
    }

    /// Projects passing the current filter, in base-list order
    pub fn visible_projects(&self) -> Vec<Project> {
        self.filter.apply(&self.projects).into_iter().cloned().collect()
    }

    /// Record the hour choice for a project row; `None` clears it.
    pub fn select_hours(&mut self, project_id: &str, hours: Option<u32>) {
        match hours {
            Some(hours) => {
                self.selected_hours.insert(project_id.to_string(), hours);
            }
            None => {
                self.selected_hours.remove(project_id);
            }
        }
    }

    pub fn row(&self, project_id: &str) -> RowState {
        if self.applied.contains(project_id) {
            return RowState::Pending {
                hours: self.applied.hours_for(project_id).unwrap_or(0),
            };
        }
        if self.submitting.contains(project_id) {
            return RowState::Submitting;
        }
        RowState::NotApplied {
            selected_hours: self.selected_hours.get(project_id).copied(),
        }
    }

    pub fn error_for(&self, project_id: &str) -> Option<&str> {
        self.errors.get(project_id).map(String::as_str)
    }

    /// Validate the apply action for one row and mark it as submitting.
    ///
    /// A missing hour choice records the field message and returns
    /// `MissingHours`; nothing should be sent in that case.
    pub fn begin_apply(&mut self, volunteer_id: &str, project_id: &str) -> Result<NewApplication, ApplyError> {
        match self.row(project_id) {
            RowState::Pending { .. } => Err(ApplyError::AlreadyApplied),
            RowState::Submitting => Err(ApplyError::InFlight),
            RowState::NotApplied { selected_hours: None } => {
                self.errors.insert(project_id.to_string(), MISSING_HOURS_MESSAGE.to_string());
                Err(ApplyError::MissingHours)
            }
            RowState::NotApplied { selected_hours: Some(hours) } => {
                self.errors.remove(project_id);
                self.submitting.insert(project_id.to_string());
                Ok(NewApplication::pending(volunteer_id, project_id, hours))
            }
        }
    }

    /// Settle a submission started with `begin_apply`. Only this project's
    /// error slot is touched on failure.
    pub fn finish_apply(&mut self, project_id: &str, result: Result<AppliedProjects, ApiError>) {
        self.submitting.remove(project_id);
        match result {
            Ok(applied) => {
                self.errors.remove(project_id);
                self.replace_applied(applied);
            }
            Err(err) => {
                log::warn!("application for {} failed: {}", project_id, err);
                self.errors.insert(project_id.to_string(), err.user_message(APPLY_FAILED_MESSAGE));
            }
        }
    }

    /// "Your Applications": project title (or id when unknown) and hours
    pub fn applied_summary(&self) -> Vec<(String, u32)> {
        self.applied
            .project_ids
            .iter()
            .map(|id| {
                let label = find_by_id(&self.projects, id)
                    .map(|project| project.title.clone())
                    .filter(|title| !title.is_empty())
                    .unwrap_or_else(|| id.clone());
                (label, self.applied.hours_for(id).unwrap_or(0))
            })
            .collect()
    }

    fn replace_applied(&mut self, applied: AppliedProjects) {
        for id in &applied.project_ids {
            self.selected_hours.remove(id);
        }
        self.applied = applied;
    }
}

/// Fetches and submits on behalf of one volunteer.
#[derive(Debug, Clone)]
pub struct ApplicationTracker<A> {
    api: A,
    volunteer_id: String,
}

impl<A: CommunityApi> ApplicationTracker<A> {
    pub fn new(api: A, volunteer_id: impl Into<String>) -> Result<Self, EmptyIdentifier> {
        let volunteer_id = volunteer_id.into();
        if volunteer_id.trim().is_empty() {
            return Err(EmptyIdentifier);
        }
        Ok(Self { api, volunteer_id })
    }

    pub fn volunteer_id(&self) -> &str {
        &self.volunteer_id
    }

    /// Projects and this volunteer's applications, fetched concurrently
    pub async fn load(&self) -> Result<TrackerSnapshot, ApiError> {
        let (projects, applications) = futures::try_join!(self.api.get_projects(), self.api.get_applications())?;
        Ok(TrackerSnapshot {
            projects,
            applied: AppliedProjects::for_volunteer(&applications, &self.volunteer_id),
        })
    }

    /// Submit, then re-fetch so the server's view of the applied set wins.
    pub async fn submit(&self, application: &NewApplication) -> Result<AppliedProjects, ApiError> {
        self.api.register_application(application).await?;
        let applications = self.api.get_applications().await?;
        Ok(AppliedProjects::for_volunteer(&applications, &self.volunteer_id))
    }

    /// Full apply action against a locally owned state.
    pub async fn apply(&self, state: &mut TrackerState, project_id: &str) -> Result<(), ApplyError> {
        let application = state.begin_apply(&self.volunteer_id, project_id)?;
        let result = self.submit(&application).await;
        let outcome = result.as_ref().map(|_| ()).map_err(|err| ApplyError::Submit(err.clone()));
        state.finish_apply(project_id, result);
        outcome
    }
}
