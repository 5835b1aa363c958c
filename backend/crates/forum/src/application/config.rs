//! Application Configuration
//!
//! Configuration for the Forum application layer.

/// Forum application configuration
#[derive(Debug, Clone)]
pub struct ForumConfig {
    /// Upper bound on reply fetches running at once per thread detail request
    pub reply_fetch_concurrency: usize,
    /// Shown instead of a soft-deleted comment's content
    pub deleted_comment_placeholder: String,
    /// Shown instead of a soft-deleted reply's content
    pub deleted_reply_placeholder: String,
}

pub const DEFAULT_REPLY_FETCH_CONCURRENCY: usize = 8;

impl Default for ForumConfig {
    fn default() -> Self {
        Self {
            reply_fetch_concurrency: DEFAULT_REPLY_FETCH_CONCURRENCY,
            deleted_comment_placeholder: "[comment deleted]".to_string(),
            deleted_reply_placeholder: "[reply deleted]".to_string(),
        }
    }
}

impl ForumConfig {
    /// Override the reply fetch bound (values below 1 are raised to 1)
    pub fn with_reply_fetch_concurrency(mut self, limit: usize) -> Self {
        self.reply_fetch_concurrency = limit.max(1);
        self
    }
}
