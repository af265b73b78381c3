//! Application Entity
//!
//! A volunteer's pledge of hours to a project.

use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Other(String),
}

impl From<String> for ApplicationStatus {
    fn from(raw: String) -> Self {
        if raw.is_empty() || raw.eq_ignore_ascii_case("pending") {
            ApplicationStatus::Pending
        } else {
            ApplicationStatus::Other(raw)
        }
    }
}

impl From<ApplicationStatus> for String {
    fn from(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Pending => "Pending".to_string(),
            ApplicationStatus::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    #[serde(
        rename = "ApplicationID",
        default,
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub application_id: Option<String>,
    #[serde(rename = "VolunteerID", default, deserialize_with = "lenient::text")]
    pub volunteer_id: String,
    #[serde(rename = "ProjectID", default, deserialize_with = "lenient::text")]
    pub project_id: String,
    #[serde(rename = "Status", default, deserialize_with = "lenient::from_text")]
    pub status: ApplicationStatus,
    #[serde(rename = "Hours", default, deserialize_with = "lenient::count")]
    pub hours: u32,
}

/// Payload for `registerApplication`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewApplication {
    #[serde(rename = "VolunteerID")]
    pub volunteer_id: String,
    #[serde(rename = "ProjectID")]
    pub project_id: String,
    #[serde(rename = "Status")]
    pub status: ApplicationStatus,
    #[serde(rename = "Hours")]
    pub hours: u32,
}

impl NewApplication {
    pub fn pending(volunteer_id: &str, project_id: &str, hours: u32) -> Self {
        Self {
            volunteer_id: volunteer_id.to_string(),
            project_id: project_id.to_string(),
            status: ApplicationStatus::Pending,
            hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pending_payload_shape() {
        let payload = NewApplication::pending("V001", "P100", 8);
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "VolunteerID": "V001", "ProjectID": "P100", "Status": "Pending", "Hours": 8 })
        );
    }

    #[test]
    fn test_application_hours_from_string() {
        let app: Application = serde_json::from_value(json!({
            "ApplicationID": "A1",
            "VolunteerID": "V001",
            "ProjectID": "P100",
            "Status": "Approved",
            "Hours": "9"
        }))
        .unwrap();

        assert_eq!(app.hours, 9);
        assert_eq!(app.status, ApplicationStatus::Other("Approved".into()));
        assert_eq!(app.application_id.as_deref(), Some("A1"));
    }
}
