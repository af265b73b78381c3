//! Applicant Row
//!
//! UI-only join of one application with its volunteer.

use super::{Application, Volunteer};

const UNKNOWN_NAME: &str = "Unknown";
const NOT_AVAILABLE: &str = "N/A";

/// Display fields for one applicant in a project's roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantRow {
    pub volunteer_name: String,
    pub email: String,
    pub skills: String,
    pub location: String,
    pub languages: String,
    pub availability: String,
    pub hours: u32,
}

impl ApplicantRow {
    /// Join an application with its volunteer, falling back to placeholders
    /// for a missing volunteer or blank fields.
    pub fn join(application: &Application, volunteer: Option<&Volunteer>) -> Self {
        let field = |value: Option<String>, placeholder: &str| {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| placeholder.to_string())
        };

        Self {
            volunteer_name: field(volunteer.map(|v| v.name.clone()), UNKNOWN_NAME),
            email: field(volunteer.map(|v| v.email.clone()), NOT_AVAILABLE),
            skills: field(volunteer.map(|v| v.skills.join(", ")), NOT_AVAILABLE),
            location: field(volunteer.map(|v| v.location.clone()), NOT_AVAILABLE),
            languages: field(volunteer.map(|v| v.languages.join(", ")), NOT_AVAILABLE),
            availability: field(volunteer.map(|v| v.availability.clone()), NOT_AVAILABLE),
            hours: application.hours,
        }
    }
}
