//! Organization Entity
//!
//! Only used at registration time.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::lenient;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "OrganizationID", default, deserialize_with = "lenient::text")]
    pub organization_id: String,
    #[serde(rename = "OrgName", default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "Email", default, deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(rename = "Contact", default, deserialize_with = "lenient::text")]
    pub contact: String,
    #[serde(rename = "Address", default, deserialize_with = "lenient::text")]
    pub address: String,
}

impl Entity for Organization {
    fn id(&self) -> &str {
        &self.organization_id
    }
}

/// Payload for `registerOrganization`; the client picks the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationRegistration {
    #[serde(flatten)]
    pub organization: Organization,
    #[serde(rename = "Password")]
    pub password: String,
}
