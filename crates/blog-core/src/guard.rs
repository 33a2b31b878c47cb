//! Access guard - authentication, existence and ownership checks.

use uuid::Uuid;

use crate::domain::Post;
use crate::error::DomainError;
use crate::identity::CallerIdentity;

/// A resource with a single owning user.
pub trait Owned {
    fn owner_id(&self) -> Uuid;
}

impl Owned for Post {
    fn owner_id(&self) -> Uuid {
        self.creator_id
    }
}

/// Fails with 401 for anonymous callers; otherwise returns the caller's id.
pub fn require_authenticated(identity: &CallerIdentity) -> Result<Uuid, DomainError> {
    identity.user_id().ok_or(DomainError::NotAuthenticated)
}

/// Fails with 404 ("`entity` not found") when a lookup came back empty.
pub fn require_found<T>(resource: Option<T>, entity: &'static str) -> Result<T, DomainError> {
    resource.ok_or(DomainError::NotFound(entity))
}

/// Fails with 403 unless `caller` owns `resource`.
pub fn require_owner<R: Owned>(resource: &R, caller: Uuid) -> Result<(), DomainError> {
    if resource.owner_id() == caller {
        Ok(())
    } else {
        Err(DomainError::Forbidden)
    }
}
