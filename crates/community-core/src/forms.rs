//! Form Validation
//!
//! Local state and required-field checks for every form page. Validation
//! failures never reach the server; each maps a field name to the inline
//! message shown next to it.

use std::collections::BTreeMap;

use crate::api::{OrganizationLogin, VolunteerLogin};
use crate::domain::lenient::{parse_count, split_list};
use crate::domain::{NewProject, Organization, OrganizationRegistration, Project, ProjectStatus, VolunteerRegistration};

/// Skills offered at volunteer registration
pub const REGISTRATION_SKILLS: &[&str] = &["Teaching", "Communication", "Healthcare", "Fundraising"];

/// Languages offered at volunteer registration
pub const REGISTRATION_LANGUAGES: &[&str] = &["English", "Kannada", "Hindi", "Tamil", "Telugu"];

/// Field name -> inline message
pub type FieldErrors = BTreeMap<&'static str, String>;

fn require(errors: &mut FieldErrors, field: &'static str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.insert(field, format!("{} is required.", label));
    }
}

fn require_email(errors: &mut FieldErrors, field: &'static str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, "Email is required.".to_string());
    } else if !value.contains('@') {
        errors.insert(field, "Enter a valid email address.".to_string());
    }
}

fn finish<T>(errors: FieldErrors, payload: impl FnOnce() -> T) -> Result<T, FieldErrors> {
    if errors.is_empty() {
        Ok(payload())
    } else {
        Err(errors)
    }
}

/// Add `value` to the list, or remove it if already present.
pub fn toggle_choice(choices: &mut Vec<String>, value: &str) {
    if let Some(index) = choices.iter().position(|c| c == value) {
        choices.remove(index);
    } else {
        choices.push(value.to_string());
    }
}

// ========================
// Registration
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolunteerRegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub availability: String,
    pub location: String,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
}

impl VolunteerRegistrationForm {
    pub fn validate(&self) -> Result<VolunteerRegistration, FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Full name");
        require_email(&mut errors, "email", &self.email);
        require(&mut errors, "password", &self.password, "Password");
        require(&mut errors, "availability", &self.availability, "Availability");
        require(&mut errors, "location", &self.location, "Location");

        finish(errors, || VolunteerRegistration {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            skills: self.skills.clone(),
            availability: self.availability.trim().to_string(),
            location: self.location.trim().to_string(),
            languages: self.languages.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationRegistrationForm {
    pub org_name: String,
    pub email: String,
    pub password: String,
    pub contact: String,
    pub address: String,
}

impl OrganizationRegistrationForm {
    /// `organization_id` is chosen client-side, see [`organization_id`].
    pub fn validate(&self, organization_id: &str) -> Result<OrganizationRegistration, FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "org_name", &self.org_name, "Organization name");
        require_email(&mut errors, "email", &self.email);
        require(&mut errors, "password", &self.password, "Password");
        require(&mut errors, "contact", &self.contact, "Contact number");
        require(&mut errors, "address", &self.address, "Address");

        finish(errors, || OrganizationRegistration {
            organization: Organization {
                organization_id: organization_id.to_string(),
                name: self.org_name.trim().to_string(),
                email: self.email.trim().to_string(),
                contact: self.contact.trim().to_string(),
                address: self.address.trim().to_string(),
            },
            password: self.password.clone(),
        })
    }
}

// ========================
// Login
// ========================

/// Which kind of account a form acts for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Volunteer,
    Organization,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Volunteer => "Volunteer",
            Role::Organization => "Organization",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginRequest {
    Volunteer(VolunteerLogin),
    Organization(OrganizationLogin),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub role: Role,
    pub name: String,
    pub org_name: String,
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Name shown in the welcome message
    pub fn display_name(&self) -> &str {
        match self.role {
            Role::Volunteer => self.name.trim(),
            Role::Organization => self.org_name.trim(),
        }
    }

    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        match self.role {
            Role::Volunteer => require(&mut errors, "name", &self.name, "Volunteer name"),
            Role::Organization => require(&mut errors, "org_name", &self.org_name, "Organization name"),
        }
        require_email(&mut errors, "email", &self.email);
        require(&mut errors, "password", &self.password, "Password");

        finish(errors, || match self.role {
            Role::Volunteer => LoginRequest::Volunteer(VolunteerLogin {
                email: self.email.trim().to_string(),
                name: self.name.trim().to_string(),
                password: self.password.clone(),
            }),
            Role::Organization => LoginRequest::Organization(OrganizationLogin {
                email: self.email.trim().to_string(),
                org_name: self.org_name.trim().to_string(),
                password: self.password.clone(),
            }),
        })
    }
}

// ========================
// Post Project
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    /// Comma-separated
    pub skills_required: String,
    pub capacity: String,
    pub location: String,
}

impl ProjectForm {
    pub fn validate(
        &self,
        organizer_id: &str,
        project_id: &str,
        start_date: &str,
    ) -> Result<NewProject, FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "title", &self.title, "Project title");
        require(&mut errors, "description", &self.description, "Project description");
        let skills = split_list(&self.skills_required);
        if skills.is_empty() {
            errors.insert("skills_required", "List at least one skill.".to_string());
        }
        let capacity = parse_count(&self.capacity);
        if self.capacity.trim().is_empty() {
            errors.insert("capacity", "Volunteer capacity is required.".to_string());
        } else if capacity.is_none() {
            errors.insert("capacity", "Capacity must be a whole number.".to_string());
        }
        require(&mut errors, "location", &self.location, "Location");

        finish(errors, || NewProject {
            project: Project {
                project_id: project_id.to_string(),
                title: self.title.trim().to_string(),
                description: self.description.trim().to_string(),
                skills_required: skills,
                capacity,
                location: self.location.trim().to_string(),
                status: ProjectStatus::Open,
                organizer_id: organizer_id.to_string(),
                start_date: start_date.to_string(),
            },
        })
    }
}

// ========================
// Client-side identifiers
// ========================

/// `"P"` followed by 1000..=9999, from a uniform sample in `[0, 1)`.
pub fn project_id(sample: f64) -> String {
    format!("P{}", 1000 + scale(sample, 9000))
}

/// `"O"` followed by 0..=999, from a uniform sample in `[0, 1)`.
pub fn organization_id(sample: f64) -> String {
    format!("O{}", scale(sample, 1000))
}

fn scale(sample: f64, span: u32) -> u32 {
    let sample = if sample.is_finite() { sample.clamp(0.0, 1.0) } else { 0.0 };
    ((sample * span as f64) as u32).min(span - 1)
}

/// Date part of an ISO-8601 timestamp (`2025-10-31T12:00:00Z` -> `2025-10-31`)
pub fn iso_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
