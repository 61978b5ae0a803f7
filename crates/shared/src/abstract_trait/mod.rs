mod account;
mod compliance;
mod document;
mod hashing;
mod jwt;
mod portfolio;
mod service;
mod session;

pub use self::account::{AccountRepositoryTrait, DynAccountRepository};
pub use self::compliance::{ComplianceRepositoryTrait, DynComplianceRepository};
pub use self::document::{DocumentRepositoryTrait, DynDocumentRepository};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::portfolio::{DynPortfolioRepository, PortfolioRepositoryTrait};
pub use self::service::{
    ComplianceServiceTrait, DocumentServiceTrait, DynComplianceService, DynDocumentService,
    DynPortfolioService, DynSessionStore, PortfolioServiceTrait, SessionStoreTrait,
};
pub use self::session::{DynSessionRepository, SessionRepositoryTrait};
