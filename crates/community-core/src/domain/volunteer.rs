//! Volunteer Entity

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::lenient;

/// A registered volunteer profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteer {
    #[serde(rename = "VolunteerID", default, deserialize_with = "lenient::text")]
    pub volunteer_id: String,
    #[serde(rename = "Name", default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "Email", default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(rename = "Skills", default, deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(rename = "Languages", default, deserialize_with = "lenient::string_list")]
    pub languages: Vec<String>,
    #[serde(rename = "Location", default, deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(rename = "Availability", default, deserialize_with = "lenient::text")]
    pub availability: String,
}

impl Entity for Volunteer {
    fn id(&self) -> &str {
        &self.volunteer_id
    }
}

/// Payload for `registerVolunteer`. The server assigns the identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VolunteerRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub skills: Vec<String>,
    pub availability: String,
    pub location: String,
    pub languages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_volunteer_decodes_wire_names() {
        let volunteer: Volunteer = serde_json::from_value(json!({
            "VolunteerID": "V001",
            "Name": "Asha",
            "Email": "asha@example.org",
            "Skills": ["Teaching", "Healthcare"],
            "Languages": ["English", "Kannada"],
            "Location": "Bangalore",
            "Availability": "31-10-2025"
        }))
        .unwrap();

        assert_eq!(volunteer.id(), "V001");
        assert_eq!(volunteer.skills, vec!["Teaching", "Healthcare"]);
        assert_eq!(volunteer.availability, "31-10-2025");
    }

    #[test]
    fn test_registration_serializes_pascal_case() {
        let payload = VolunteerRegistration {
            name: "Asha".into(),
            email: "asha@example.org".into(),
            password: "secret".into(),
            skills: vec!["Teaching".into()],
            availability: "weekends".into(),
            location: "Mysore".into(),
            languages: vec!["Hindi".into()],
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["Name"], "Asha");
        assert_eq!(value["Skills"], json!(["Teaching"]));
        assert_eq!(value["Languages"], json!(["Hindi"]));
        assert!(value.get("VolunteerID").is_none());
    }
}
