use crate::model::role::{BusinessStructure, ProfessionalType, Role};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfessionalProfile {
    pub full_name: String,
    pub license_number: String,
}

/// A mock account. Onboarding status lives here so it follows the identity
/// across sign-out and sign-in for as long as the process runs.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub professional_type: Option<ProfessionalType>,
    pub onboarding_complete: bool,
    pub business_structure: Option<BusinessStructure>,
    pub professional_profile: Option<ProfessionalProfile>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub professional_type: Option<ProfessionalType>,
    pub onboarding_complete: bool,
}
