mod account;
mod client;
mod company;
mod compliance;
mod document;
mod role;
mod session;

pub use self::account::{Account, NewAccount, ProfessionalProfile};
pub use self::client::{
    ClientDetails, ClientDocument, ClientSummary, ComplianceItem, FilingDeadline, FilingStatus,
    RiskLevel,
};
pub use self::company::{CompanyInfo, RegistrationStatus};
pub use self::compliance::{ComplianceHealth, ComplianceTask, TaskPriority, TaskStatus};
pub use self::document::{
    DOCUMENT_CATEGORIES, Document, DocumentFilter, NewDocument, file_extension, format_file_size,
};
pub use self::role::{BusinessStructure, ProfessionalType, Role};
pub use self::session::{Identity, SessionRecord, SessionSnapshot};
