//! # Blog Shared
//!
//! Transport-neutral types exchanged with API clients.
//! Enable the `graphql` feature to derive the GraphQL schema types from them.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
