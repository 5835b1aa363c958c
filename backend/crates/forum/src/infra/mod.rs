//! Infrastructure Layer
//!
//! Storage adapters for the forum repository traits.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryForumRepository;
pub use postgres::PgForumRepository;
