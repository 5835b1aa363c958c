//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;
pub mod session_manager;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::{LogoutInput, LogoutUseCase};
pub use refresh::{RefreshInput, RefreshUseCase};
pub use register::{RegisterInput, RegisterUseCase, RegisteredUser};
pub use session_manager::SessionManager;
