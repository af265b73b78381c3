//! Community Connect Core
//!
//! Layers:
//! - domain: entities exchanged with the remote API
//! - api: the `CommunityApi` port and its HTTP implementation
//! - reconciler / tracker: dashboard view models
//! - refresh: cancellable polling loop
//! - forms: client-side validation for every form page

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod forms;
pub mod reconciler;
pub mod refresh;
pub mod tracker;

#[cfg(test)]
mod fake;

pub use api::{CommunityApi, HttpCommunityApi};
pub use config::ClientConfig;
pub use domain::{
    ApplicantRow, Application, ApplicationStatus, Organization, Project, ProjectStatus, Volunteer,
};
pub use error::{ApiError, ApplyError, EmptyIdentifier};
pub use filter::ProjectFilter;
pub use reconciler::{ApplicationReconciler, OrganizationSnapshot, ProjectRoster, ReconcilerState};
pub use refresh::{RefreshLoop, Timer};
pub use tracker::{AppliedProjects, ApplicationTracker, RowState, TrackerSnapshot, TrackerState};
