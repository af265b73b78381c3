//! API Layer - Remote Community API
//!
//! `CommunityApi` is the port every view model talks to. `HttpCommunityApi`
//! implements it over reqwest; tests substitute an in-memory fake.

mod envelope;
mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{
    lenient, Application, NewApplication, NewProject, OrganizationRegistration, Project, Volunteer,
    VolunteerRegistration,
};
use crate::error::ApiError;

pub use envelope::{extract_list, unwrap_body, APPLICATION_KEYS, PROJECT_KEYS, VOLUNTEER_KEYS};
pub use http::HttpCommunityApi;

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Acknowledgement returned by registration endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub message: Option<String>,
}

impl ApiMessage {
    pub fn or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}

/// Result of a login attempt. `success: false` is a normal answer, not an
/// error; the identifier fields are only present on newer API stages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginOutcome {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub message: Option<String>,
    #[serde(rename = "VolunteerID", default, deserialize_with = "lenient::optional_text")]
    pub volunteer_id: Option<String>,
    #[serde(
        rename = "OrganizationID",
        alias = "OrganizerID",
        default,
        deserialize_with = "lenient::optional_text"
    )]
    pub organization_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VolunteerLogin {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrganizationLogin {
    pub email: String,
    pub org_name: String,
    pub password: String,
}

/// Operations the remote API exposes to the front end.
///
/// `?Send` because browser fetch futures are not `Send`.
#[async_trait(?Send)]
pub trait CommunityApi {
    async fn register_volunteer(&self, payload: &VolunteerRegistration) -> ApiResult<ApiMessage>;

    async fn register_organization(&self, payload: &OrganizationRegistration) -> ApiResult<ApiMessage>;

    async fn login_volunteer(&self, payload: &VolunteerLogin) -> ApiResult<LoginOutcome>;

    async fn login_organization(&self, payload: &OrganizationLogin) -> ApiResult<LoginOutcome>;

    async fn get_projects(&self) -> ApiResult<Vec<Project>>;

    async fn register_project(&self, payload: &NewProject) -> ApiResult<ApiMessage>;

    async fn get_applications(&self) -> ApiResult<Vec<Application>>;

    async fn register_application(&self, payload: &NewApplication) -> ApiResult<ApiMessage>;

    /// Volunteer list, already normalized from whichever envelope the
    /// deployment answered with.
    async fn get_volunteers(&self) -> ApiResult<Vec<Volunteer>>;
}
