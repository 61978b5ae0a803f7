mod auth;
mod compliance;
mod document;
mod onboarding;

pub use self::auth::{SignInRequest, SignUpRequest};
pub use self::compliance::{FindCompliances, UpdateStatusRequest};
pub use self::document::{FindDocuments, UploadDocumentRequest};
pub use self::onboarding::{OnboardingRequest, ProfessionalOnboardingRequest};
