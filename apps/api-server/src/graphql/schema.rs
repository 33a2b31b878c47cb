//! GraphQL schema definition.

use blog_shared::dto::{AuthData, PostData, PostInputData, PostsData, UserData, UserInputData};
use juniper::{EmptySubscription, FieldResult, ID, RootNode};

use super::context::GraphQLContext;
use super::error::field_error;

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// Exchange credentials for a bearer token valid for one hour.
    async fn login(ctx: &GraphQLContext, email: String, password: String) -> FieldResult<AuthData> {
        ctx.service
            .login(&email, &password)
            .await
            .map_err(field_error)
    }

    /// Posts, newest first, two per page. `page` defaults to 1.
    async fn posts(ctx: &GraphQLContext, page: Option<i32>) -> FieldResult<PostsData> {
        ctx.service
            .posts(&ctx.identity, page)
            .await
            .map_err(field_error)
    }

    async fn post(ctx: &GraphQLContext, id: ID) -> FieldResult<PostData> {
        ctx.service
            .post(&ctx.identity, &id)
            .await
            .map_err(field_error)
    }

    /// The authenticated caller.
    async fn user(ctx: &GraphQLContext) -> FieldResult<UserData> {
        ctx.service.user(&ctx.identity).await.map_err(field_error)
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    async fn create_user(ctx: &GraphQLContext, user_input: UserInputData) -> FieldResult<UserData> {
        ctx.service
            .create_user(user_input)
            .await
            .map_err(field_error)
    }

    async fn create_post(ctx: &GraphQLContext, post_input: PostInputData) -> FieldResult<PostData> {
        ctx.service
            .create_post(&ctx.identity, post_input)
            .await
            .map_err(field_error)
    }

    /// Pass `imageUrl: "undefined"` to keep the current image.
    async fn update_post(
        ctx: &GraphQLContext,
        id: ID,
        post_input: PostInputData,
    ) -> FieldResult<PostData> {
        ctx.service
            .update_post(&ctx.identity, &id, post_input)
            .await
            .map_err(field_error)
    }

    async fn delete_post(ctx: &GraphQLContext, id: ID) -> FieldResult<bool> {
        ctx.service
            .delete_post(&ctx.identity, &id)
            .await
            .map_err(field_error)
    }

    async fn update_status(ctx: &GraphQLContext, status: String) -> FieldResult<UserData> {
        ctx.service
            .update_status(&ctx.identity, status)
            .await
            .map_err(field_error)
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_exposes_every_operation() {
        let sdl = create_schema().as_sdl();

        for field in [
            "login(",
            "posts(",
            "post(",
            "user:",
            "createUser(",
            "createPost(",
            "updatePost(",
            "deletePost(",
            "updateStatus(",
        ] {
            assert!(sdl.contains(field), "missing {field} in\n{sdl}");
        }
    }

    #[test]
    fn schema_uses_client_field_names() {
        let sdl = create_schema().as_sdl();

        for name in [
            "_id: String!",
            "imageUrl: String!",
            "totalPosts: Int!",
            "userId: String!",
            "input UserInputData",
            "input PostInputData",
            "type PostData",
        ] {
            assert!(sdl.contains(name), "missing {name} in\n{sdl}");
        }
    }
}
