//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// ```
pub struct Id<T> {
    value: uuid::Uuid,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Parse an identifier received from a client (path segment, token claim).
    ///
    /// Returns `None` for anything that is not a UUID; callers treat that as
    /// a reference to a record that does not exist.
    pub fn parse_str(s: &str) -> Option<Self> {
        Uuid::parse_str(s.trim()).ok().map(Self::from_uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

// Manual impls: derives would put bounds on the marker type.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for Thread IDs
    pub struct Thread;

    /// Marker for Comment IDs
    pub struct Comment;

    /// Marker for Reply IDs
    pub struct Reply;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type ThreadId = Id<markers::Thread>;
pub type CommentId = Id<markers::Comment>;
pub type ReplyId = Id<markers::Reply>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let thread_id: ThreadId = Id::new();
        let comment_id: CommentId = Id::new();

        // These are different types, cannot be mixed
        let _t: Uuid = thread_id.into_uuid();
        let _c: Uuid = comment_id.into_uuid();
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id: UserId = Id::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_parse_str() {
        let id: ReplyId = Id::new();
        let parsed = ReplyId::parse_str(&id.to_string()).unwrap();
        assert_eq!(parsed, id);

        assert!(ReplyId::parse_str("reply-123").is_none());
        assert!(ReplyId::parse_str("").is_none());
    }
}
