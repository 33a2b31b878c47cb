//! Data Transfer Objects - operation inputs and client-facing projections.
//!
//! Projections carry ids and timestamps as plain strings.

use serde::{Deserialize, Serialize};

/// Registration input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(juniper::GraphQLInputObject))]
pub struct UserInputData {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Post create/update input.
///
/// On update, an `image_url` of `"undefined"` keeps the stored image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "graphql", derive(juniper::GraphQLInputObject))]
pub struct PostInputData {
    pub title: String,
    pub content: String,
    pub image_url: String,
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(juniper::GraphQLObject))]
#[cfg_attr(feature = "graphql", graphql(name = "User"))]
pub struct UserData {
    #[serde(rename = "_id")]
    #[cfg_attr(feature = "graphql", graphql(name = "_id"))]
    pub id: String,
    pub email: String,
    pub name: String,
    pub status: String,
    /// Ids of the posts this user created.
    pub posts: Vec<String>,
}

/// Public view of a post with its creator populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "graphql", derive(juniper::GraphQLObject))]
#[cfg_attr(feature = "graphql", graphql(name = "Post"))]
pub struct PostData {
    #[serde(rename = "_id")]
    #[cfg_attr(feature = "graphql", graphql(name = "_id"))]
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub creator: UserData,
    /// ISO-8601, millisecond precision, UTC.
    pub created_at: String,
    pub updated_at: String,
}

/// One page of posts plus the size of the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "graphql", derive(juniper::GraphQLObject))]
#[cfg_attr(feature = "graphql", graphql(name = "PostData"))]
pub struct PostsData {
    pub posts: Vec<PostData>,
    pub total_posts: i32,
}

/// Successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "graphql", derive(juniper::GraphQLObject))]
pub struct AuthData {
    pub token: String,
    pub user_id: String,
}
