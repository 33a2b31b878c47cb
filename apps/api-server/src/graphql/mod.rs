//! GraphQL schema, context and error shaping.

pub mod context;
pub mod error;
pub mod schema;

pub use context::GraphQLContext;
pub use schema::{Schema, create_schema};
