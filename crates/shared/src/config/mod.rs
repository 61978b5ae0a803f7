mod hashing;
mod jwt;
mod myconfig;

pub use self::hashing::Hashing;
pub use self::jwt::{Claims, JwtConfig, SESSION_TOKEN_TYPE, SESSION_TTL};
pub use self::myconfig::{Config, MockConfig};
