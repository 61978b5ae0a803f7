mod account;
mod compliance;
mod document;
mod portfolio;
pub mod seed;
mod session;

pub use self::account::AccountRepository;
pub use self::compliance::ComplianceRepository;
pub use self::document::DocumentRepository;
pub use self::portfolio::{PortfolioRepository, PortfolioSeed};
pub use self::session::SessionRepository;
