mod compliance;
mod document;
mod portfolio;
mod session;

pub use self::compliance::ComplianceService;
pub use self::document::DocumentService;
pub use self::portfolio::PortfolioService;
pub use self::session::{SessionStore, SessionStoreDeps};
