use blog_core::{BlogService, CallerIdentity};

/// GraphQL request context - built once per HTTP request.
pub struct GraphQLContext {
    pub service: BlogService,
    pub identity: CallerIdentity,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(service: BlogService, identity: CallerIdentity) -> Self {
        Self { service, identity }
    }
}
