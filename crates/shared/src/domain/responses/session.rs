use crate::model::{Identity, ProfessionalType, Role, SessionSnapshot};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct IdentityResponse {
    pub id: String,
    pub email: String,
    pub role: Role,
}

impl From<Identity> for IdentityResponse {
    fn from(value: Identity) -> Self {
        Self {
            id: value.id,
            email: value.email,
            role: value.role,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct SessionResponse {
    pub loading: bool,
    pub user: Option<IdentityResponse>,
    #[serde(rename = "isOnboardingComplete")]
    pub onboarding_complete: bool,
    #[serde(rename = "professionalType")]
    pub professional_type: Option<ProfessionalType>,
}

impl From<SessionSnapshot> for SessionResponse {
    fn from(value: SessionSnapshot) -> Self {
        Self {
            loading: value.loading,
            user: value.identity.map(IdentityResponse::from),
            onboarding_complete: value.onboarding_complete,
            professional_type: value.professional_type,
        }
    }
}
