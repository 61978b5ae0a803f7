use crate::model::BusinessStructure;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct OnboardingRequest {
    pub structure: BusinessStructure,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct ProfessionalOnboardingRequest {
    #[serde(rename = "fullName")]
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,

    #[serde(rename = "licenseNumber")]
    #[validate(length(min = 1, message = "License number is required"))]
    pub license_number: String,
}
