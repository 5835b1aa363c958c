//! Application Layer
//!
//! Use cases and application services.

pub mod add_comment;
pub mod add_reply;
pub mod add_thread;
pub mod config;
pub mod delete_comment;
pub mod delete_reply;
pub mod get_thread_detail;
pub mod ownership;

// Re-exports
pub use add_comment::{AddCommentInput, AddCommentUseCase, AddedComment};
pub use add_reply::{AddReplyInput, AddReplyUseCase, AddedReply};
pub use add_thread::{AddThreadInput, AddThreadUseCase, AddedThread};
pub use config::ForumConfig;
pub use delete_comment::DeleteCommentUseCase;
pub use delete_reply::DeleteReplyUseCase;
pub use get_thread_detail::GetThreadDetailUseCase;
pub use ownership::OwnershipGuard;
