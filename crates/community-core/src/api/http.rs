//! HTTP implementation of `CommunityApi`
//!
//! JSON over reqwest. Runs in the browser (fetch backend) and natively.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::envelope::{extract_list, unwrap_body, APPLICATION_KEYS, PROJECT_KEYS, VOLUNTEER_KEYS};
use super::{ApiMessage, ApiResult, CommunityApi, LoginOutcome, OrganizationLogin, VolunteerLogin};
use crate::config::ClientConfig;
use crate::domain::{
    Application, NewApplication, NewProject, OrganizationRegistration, Project, Volunteer, VolunteerRegistration,
};
use crate::error::ApiError;

// ========================
// Endpoint Paths
// ========================

const REGISTER_VOLUNTEER: &str = "/register-volunteer";
const REGISTER_ORGANIZATION: &str = "/register-organization";
const LOGIN_VOLUNTEER: &str = "/login-volunteer";
const LOGIN_ORGANIZATION: &str = "/login-organization";
const PROJECTS: &str = "/projects";
const REGISTER_PROJECT: &str = "/register-project";
const APPLICATIONS: &str = "/applications";
const REGISTER_APPLICATION: &str = "/register-application";
const VOLUNTEERS: &str = "/volunteers";

/// reqwest-backed API client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpCommunityApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpCommunityApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_value(&self, path: &str) -> ApiResult<Value> {
        let url = self.config.endpoint(path);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        read_body(response).await
    }

    async fn post_value<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        let url = self.config.endpoint(path);
        log::debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        read_body(response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        decode_ack(self.post_value(path, body).await?)
    }
}

async fn read_body(response: reqwest::Response) -> ApiResult<Value> {
    let status = response.status().as_u16();
    let text = response.text().await?;
    body_to_value(status, &text)
}

/// Interpret a response body as JSON. Non-success statuses become
/// `ApiError::Status` carrying the server's `message` or `error` text; an
/// empty success body is `null`.
fn body_to_value(status: u16, text: &str) -> ApiResult<Value> {
    let value = parse_body(text);

    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            status,
            message: value.as_ref().and_then(error_message),
        });
    }

    match value {
        Some(value) => Ok(value),
        None if text.trim().is_empty() => Ok(Value::Null),
        None => Err(ApiError::Decode(format!("response is not JSON: {}", truncate(text, 80)))),
    }
}

/// Decode a POST acknowledgement. No body at all means the default ack.
fn decode_ack<T: DeserializeOwned + Default>(value: Value) -> ApiResult<T> {
    let value = unwrap_body(value)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value)?)
}

fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    serde_json::from_str(text).ok()
}

/// `message` or `error` from an error body, looking inside a proxy `body`.
fn error_message(value: &Value) -> Option<String> {
    let inner = unwrap_body(value.clone()).ok();
    for source in [Some(value), inner.as_ref()].into_iter().flatten() {
        for key in ["message", "error"] {
            let text = source.get(key).and_then(Value::as_str).map(str::trim);
            if let Some(text) = text.filter(|text| !text.is_empty()) {
                return Some(text.to_string());
            }
        }
    }
    None
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[async_trait(?Send)]
impl CommunityApi for HttpCommunityApi {
    async fn register_volunteer(&self, payload: &VolunteerRegistration) -> ApiResult<ApiMessage> {
        self.post(REGISTER_VOLUNTEER, payload).await
    }

    async fn register_organization(&self, payload: &OrganizationRegistration) -> ApiResult<ApiMessage> {
        self.post(REGISTER_ORGANIZATION, payload).await
    }

    async fn login_volunteer(&self, payload: &VolunteerLogin) -> ApiResult<LoginOutcome> {
        self.post(LOGIN_VOLUNTEER, payload).await
    }

    async fn login_organization(&self, payload: &OrganizationLogin) -> ApiResult<LoginOutcome> {
        self.post(LOGIN_ORGANIZATION, payload).await
    }

    async fn get_projects(&self) -> ApiResult<Vec<Project>> {
        extract_list(self.get_value(PROJECTS).await?, PROJECT_KEYS)
    }

    async fn register_project(&self, payload: &NewProject) -> ApiResult<ApiMessage> {
        self.post(REGISTER_PROJECT, payload).await
    }

    async fn get_applications(&self) -> ApiResult<Vec<Application>> {
        extract_list(self.get_value(APPLICATIONS).await?, APPLICATION_KEYS)
    }

    async fn register_application(&self, payload: &NewApplication) -> ApiResult<ApiMessage> {
        self.post(REGISTER_APPLICATION, payload).await
    }

    async fn get_volunteers(&self) -> ApiResult<Vec<Volunteer>> {
        extract_list(self.get_value(VOLUNTEERS).await?, VOLUNTEER_KEYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_prefers_message_field() {
        let body = json!({ "message": "Volunteer already applied", "error": "Conflict" });
        assert_eq!(error_message(&body).as_deref(), Some("Volunteer already applied"));
    }

    #[test]
    fn test_error_message_reads_error_field_and_proxy_body() {
        assert_eq!(error_message(&json!({ "error": "Email exists" })).as_deref(), Some("Email exists"));

        let proxied = json!({ "statusCode": 400, "body": "{\"message\":\"Bad hours\"}" });
        assert_eq!(error_message(&proxied).as_deref(), Some("Bad hours"));
    }

    #[test]
    fn test_parse_body_tolerates_empty_and_garbage() {
        assert!(parse_body("").is_none());
        assert!(parse_body("<html>").is_none());
        assert_eq!(parse_body("{\"ok\":true}"), Some(json!({ "ok": true })));
    }

    #[test]
    fn test_error_status_carries_server_text() {
        let err = body_to_value(400, r#"{"message":"Volunteer already applied"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: Some("Volunteer already applied".into())
            }
        );
        assert_eq!(err.user_message("fallback"), "Volunteer already applied");

        let err = body_to_value(500, r#"{"error":"Table not found"}"#).unwrap_err();
        assert_eq!(err.server_message(), Some("Table not found"));
    }

    #[test]
    fn test_error_status_without_usable_body() {
        assert_eq!(
            body_to_value(502, "Bad Gateway"),
            Err(ApiError::Status { status: 502, message: None })
        );
        assert_eq!(
            body_to_value(404, r#"{"message":"  "}"#),
            Err(ApiError::Status { status: 404, message: None })
        );
    }

    #[test]
    fn test_empty_ack_decodes_to_default() {
        let ack: ApiMessage = decode_ack(body_to_value(200, "").unwrap()).unwrap();
        assert_eq!(ack, ApiMessage::default());

        let proxied: ApiMessage = decode_ack(json!({ "statusCode": 200, "body": "" })).unwrap();
        assert_eq!(proxied, ApiMessage::default());

        let saved: ApiMessage = decode_ack(body_to_value(201, r#"{"message":"Saved"}"#).unwrap()).unwrap();
        assert_eq!(saved.or("Registered"), "Saved");
    }

    #[test]
    fn test_success_body_must_be_json() {
        assert!(matches!(body_to_value(200, "<html>oops</html>"), Err(ApiError::Decode(_))));
    }
}
