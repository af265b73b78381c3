//! In-memory `CommunityApi` for tests.
//!
//! Holds fixture collections, counts every call, and can be told to fail
//! specific operations. Registered applications are appended to the
//! fixture, optionally with the server rewriting the pledged hours.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::{ApiMessage, ApiResult, CommunityApi, LoginOutcome, OrganizationLogin, VolunteerLogin};
use crate::domain::{
    Application, NewApplication, NewProject, OrganizationRegistration, Project, Volunteer, VolunteerRegistration,
};
use crate::error::ApiError;

#[derive(Default)]
pub struct FakeState {
    pub projects: Vec<Project>,
    pub applications: Vec<Application>,
    pub volunteers: Vec<Volunteer>,
    pub submitted: Vec<NewApplication>,
    pub fail_projects: Option<ApiError>,
    pub fail_register_application: Option<ApiError>,
    /// Hours the server stores regardless of what was submitted
    pub server_hours_override: Option<u32>,
}

#[derive(Default)]
pub struct CallCounts {
    pub get_projects: Cell<u32>,
    pub get_applications: Cell<u32>,
    pub get_volunteers: Cell<u32>,
    pub register_application: Cell<u32>,
}

impl CallCounts {
    pub fn total(&self) -> u32 {
        self.get_projects.get()
            + self.get_applications.get()
            + self.get_volunteers.get()
            + self.register_application.get()
    }
}

fn bump(counter: &Cell<u32>) {
    counter.set(counter.get() + 1);
}

#[derive(Clone, Default)]
pub struct FakeApi {
    pub state: Rc<RefCell<FakeState>>,
    pub calls: Rc<CallCounts>,
}

impl FakeApi {
    pub fn new(projects: Vec<Project>, applications: Vec<Application>, volunteers: Vec<Volunteer>) -> Self {
        let api = Self::default();
        {
            let mut state = api.state.borrow_mut();
            state.projects = projects;
            state.applications = applications;
            state.volunteers = volunteers;
        }
        api
    }
}

#[async_trait(?Send)]
impl CommunityApi for FakeApi {
    async fn register_volunteer(&self, _payload: &VolunteerRegistration) -> ApiResult<ApiMessage> {
        Ok(ApiMessage { message: Some("Volunteer registered successfully!".into()) })
    }

    async fn register_organization(&self, _payload: &OrganizationRegistration) -> ApiResult<ApiMessage> {
        Ok(ApiMessage { message: Some("Organization registered successfully!".into()) })
    }

    async fn login_volunteer(&self, payload: &VolunteerLogin) -> ApiResult<LoginOutcome> {
        Ok(LoginOutcome { success: !payload.password.is_empty(), ..Default::default() })
    }

    async fn login_organization(&self, payload: &OrganizationLogin) -> ApiResult<LoginOutcome> {
        Ok(LoginOutcome { success: !payload.password.is_empty(), ..Default::default() })
    }

    async fn get_projects(&self) -> ApiResult<Vec<Project>> {
        bump(&self.calls.get_projects);
        let state = self.state.borrow();
        match &state.fail_projects {
            Some(err) => Err(err.clone()),
            None => Ok(state.projects.clone()),
        }
    }

    async fn register_project(&self, payload: &NewProject) -> ApiResult<ApiMessage> {
        self.state.borrow_mut().projects.push(payload.project.clone());
        Ok(ApiMessage::default())
    }

    async fn get_applications(&self) -> ApiResult<Vec<Application>> {
        bump(&self.calls.get_applications);
        Ok(self.state.borrow().applications.clone())
    }

    async fn register_application(&self, payload: &NewApplication) -> ApiResult<ApiMessage> {
        bump(&self.calls.register_application);
        let mut state = self.state.borrow_mut();
        if let Some(err) = &state.fail_register_application {
            return Err(err.clone());
        }
        let hours = state.server_hours_override.unwrap_or(payload.hours);
        state.submitted.push(payload.clone());
        state.applications.push(Application {
            application_id: None,
            volunteer_id: payload.volunteer_id.clone(),
            project_id: payload.project_id.clone(),
            status: payload.status.clone(),
            hours,
        });
        Ok(ApiMessage::default())
    }

    async fn get_volunteers(&self) -> ApiResult<Vec<Volunteer>> {
        bump(&self.calls.get_volunteers);
        Ok(self.state.borrow().volunteers.clone())
    }
}
