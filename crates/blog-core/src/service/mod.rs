//! Resource operations - one method per GraphQL field.
//!
//! Each operation is a linear pipeline that stops at the first failure. The
//! caller's identity is passed in explicitly; nothing here holds per-request
//! state.
//!
//! Two-step mutations (post insert then user update, post delete then user
//! update) are not atomic: a failure between the steps leaves the user's post
//! set out of date.

mod posts;
mod users;

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::User;
use crate::error::DomainError;
use crate::ports::{ImageStore, PasswordService, PostRepository, TokenService, UserRepository};

pub use posts::POSTS_PER_PAGE;

/// Entry point for every user and post operation.
#[derive(Clone)]
pub struct BlogService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    tokens: Arc<dyn TokenService>,
    passwords: Arc<dyn PasswordService>,
    images: Arc<dyn ImageStore>,
}

impl BlogService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        tokens: Arc<dyn TokenService>,
        passwords: Arc<dyn PasswordService>,
        images: Arc<dyn ImageStore>,
    ) -> Self {
        Self {
            users,
            posts,
            tokens,
            passwords,
            images,
        }
    }

    /// Token service used to resolve request identities.
    pub fn tokens(&self) -> &Arc<dyn TokenService> {
        &self.tokens
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.users.find_by_id(id).await?)
    }
}

/// Parse a client-supplied id; anything unparseable cannot name an entity.
fn parse_id(raw: &str, entity: &'static str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw.trim()).map_err(|_| DomainError::NotFound(entity))
}
