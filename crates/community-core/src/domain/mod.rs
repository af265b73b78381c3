//! Domain Layer
//!
//! Entities as the remote API reports them, plus the UI-only applicant row.
//! The API owns every entity; these are read snapshots.

mod applicant;
mod application;
mod entity;
pub(crate) mod lenient;
mod organization;
mod project;
mod volunteer;

pub use applicant::ApplicantRow;
pub use application::{Application, ApplicationStatus, NewApplication};
pub use entity::{find_by_id, Entity};
pub use organization::{Organization, OrganizationRegistration};
pub use project::{NewProject, Project, ProjectStatus};
pub use volunteer::{Volunteer, VolunteerRegistration};
