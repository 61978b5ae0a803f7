use crate::model::BusinessStructure;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OnboardingOptionResponse {
    pub id: BusinessStructure,
    pub title: String,
    pub description: String,
    pub recommended: bool,
}

impl From<BusinessStructure> for OnboardingOptionResponse {
    fn from(value: BusinessStructure) -> Self {
        Self {
            id: value,
            title: value.title().to_string(),
            description: value.description().to_string(),
            recommended: value.recommended(),
        }
    }
}

pub fn onboarding_options() -> Vec<OnboardingOptionResponse> {
    BusinessStructure::all()
        .into_iter()
        .map(OnboardingOptionResponse::from)
        .collect()
}
