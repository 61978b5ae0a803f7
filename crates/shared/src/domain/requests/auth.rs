use crate::model::{ProfessionalType, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct SignInRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct SignUpRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[serde(default)]
    pub role: Option<Role>,

    #[serde(default, rename = "professionalType")]
    pub professional_type: Option<ProfessionalType>,
}

impl SignUpRequest {
    pub fn role(&self) -> Role {
        self.role.unwrap_or(Role::Client)
    }
}
