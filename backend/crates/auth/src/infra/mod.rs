//! Infrastructure Layer
//!
//! Storage adapters and concrete collaborators.

pub mod jwt;
pub mod memory;
pub mod password;
pub mod postgres;

pub use jwt::JwtTokenService;
pub use memory::InMemoryAuthRepository;
pub use password::Argon2PasswordHasher;
pub use postgres::PgAuthRepository;
