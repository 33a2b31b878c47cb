//! # Blog Core
//!
//! The domain layer of the blog API.
//! Resolvers for users and posts live here as plain async operations; the
//! persistence, hashing, token and image-storage collaborators are reached
//! only through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod guard;
pub mod identity;
pub mod ports;
pub mod service;
pub mod validation;

pub use error::{DomainError, RepoError};
pub use identity::CallerIdentity;
pub use service::BlogService;
