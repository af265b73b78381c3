//! Application Reconciler
//!
//! Organization dashboard view model: joins projects, applications and
//! volunteers into per-project applicant rosters with a capacity-derived
//! status.

use crate::api::CommunityApi;
use crate::domain::{find_by_id, ApplicantRow, Application, Project, ProjectStatus, Volunteer};
use crate::error::{ApiError, EmptyIdentifier};

/// One project with its joined applicants. `project.status` holds the
/// derived status, not the server's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoster {
    pub project: Project,
    pub applicants: Vec<ApplicantRow>,
}

impl ProjectRoster {
    pub fn status(&self) -> ProjectStatus {
        self.project.status
    }

    /// "filled/capacity", e.g. `2/3`
    pub fn fill_label(&self) -> String {
        format!("{}/{}", self.applicants.len(), self.project.capacity_label())
    }
}

/// Output of one reconciliation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationSnapshot {
    /// The organization's projects exactly as the server reported them
    pub projects: Vec<Project>,
    /// The same projects with rosters and derived status
    pub rosters: Vec<ProjectRoster>,
}

/// Join the fetched collections for one organization.
pub fn build_snapshot(
    organization_id: &str,
    projects: Vec<Project>,
    applications: &[Application],
    volunteers: &[Volunteer],
) -> OrganizationSnapshot {
    let projects: Vec<Project> = projects
        .into_iter()
        .filter(|project| project.is_owned_by(organization_id))
        .collect();

    let rosters = projects
        .iter()
        .map(|project| build_roster(project, applications, volunteers))
        .collect();

    OrganizationSnapshot { projects, rosters }
}

fn build_roster(project: &Project, applications: &[Application], volunteers: &[Volunteer]) -> ProjectRoster {
    let applicants: Vec<ApplicantRow> = applications
        .iter()
        .filter(|application| application.project_id == project.project_id)
        .map(|application| ApplicantRow::join(application, find_by_id(volunteers, &application.volunteer_id)))
        .collect();

    let mut project = project.clone();
    project.status = ProjectStatus::from_fill(applicants.len(), project.capacity);

    ProjectRoster { project, applicants }
}

/// Fetches and reconciles one organization's dashboard data.
#[derive(Debug, Clone)]
pub struct ApplicationReconciler<A> {
    api: A,
    organization_id: String,
}

impl<A: CommunityApi> ApplicationReconciler<A> {
    pub fn new(api: A, organization_id: impl Into<String>) -> Result<Self, EmptyIdentifier> {
        let organization_id = organization_id.into();
        if organization_id.trim().is_empty() {
            return Err(EmptyIdentifier);
        }
        Ok(Self { api, organization_id })
    }

    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }

    /// One pass: the three fetches run concurrently; any failure aborts
    /// the pass.
    pub async fn reconcile(&self) -> Result<OrganizationSnapshot, ApiError> {
        let (projects, applications, volunteers) = futures::try_join!(
            self.api.get_projects(),
            self.api.get_applications(),
            self.api.get_volunteers(),
        )?;

        let snapshot = build_snapshot(&self.organization_id, projects, &applications, &volunteers);
        log::debug!(
            "reconciled {} projects for organization {}",
            snapshot.projects.len(),
            self.organization_id
        );
        Ok(snapshot)
    }
}

/// What the dashboard renders: the last good snapshot plus the last failure,
/// which is kept for diagnostics only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilerState {
    pub snapshot: OrganizationSnapshot,
    pub last_error: Option<ApiError>,
    pub completed_passes: u64,
}

impl ReconcilerState {
    /// Apply a pass result. A failure keeps the previous snapshot.
    pub fn record(&mut self, result: Result<OrganizationSnapshot, ApiError>) {
        match result {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.last_error = None;
                self.completed_passes += 1;
            }
            Err(err) => {
                log::warn!("reconciliation pass failed, keeping previous snapshot: {}", err);
                self.last_error = Some(err);
            }
        }
    }
}
