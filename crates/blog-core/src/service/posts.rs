use blog_shared::dto::{PostData, PostInputData, PostsData};
use uuid::Uuid;

use super::{BlogService, parse_id};
use crate::domain::{Post, User};
use crate::error::DomainError;
use crate::guard::{require_authenticated, require_found, require_owner};
use crate::identity::CallerIdentity;
use crate::validation::{INVALID_POST_INPUT, validate_post_input};

/// Fixed size of a `posts` page.
pub const POSTS_PER_PAGE: u64 = 2;

impl BlogService {
    /// `createPost` - publish a post as the caller.
    #[tracing::instrument(skip(self, input))]
    pub async fn create_post(
        &self,
        identity: &CallerIdentity,
        input: PostInputData,
    ) -> Result<PostData, DomainError> {
        let caller = require_authenticated(identity)?;
        validate_post_input(&input).into_result(INVALID_POST_INPUT)?;

        // Token outlived its user
        let mut user = self
            .find_user(caller)
            .await?
            .ok_or(DomainError::Unauthorized("User not found"))?;

        let post = Post::new(user.id, input.title, input.content, input.image_url);
        let created = self.posts.save(post).await?;

        user.add_post(created.id);
        let user = self.users.save(user).await?;

        tracing::info!(post_id = %created.id, "Post created");
        Ok(created.to_data(user.to_data()))
    }

    /// `posts` - one page of posts, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn posts(
        &self,
        identity: &CallerIdentity,
        page: Option<i32>,
    ) -> Result<PostsData, DomainError> {
        require_authenticated(identity)?;

        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let offset = (page as u64 - 1) * POSTS_PER_PAGE;

        let total = self.posts.count().await?;
        let page_posts = self.posts.find_page(offset, POSTS_PER_PAGE).await?;

        let mut posts = Vec::with_capacity(page_posts.len());
        for post in page_posts {
            let creator = self.populate_creator(&post).await?;
            posts.push(post.to_data(creator.to_data()));
        }

        Ok(PostsData {
            posts,
            total_posts: i32::try_from(total).unwrap_or(i32::MAX),
        })
    }

    /// `post` - a single post by id.
    #[tracing::instrument(skip(self))]
    pub async fn post(&self, identity: &CallerIdentity, id: &str) -> Result<PostData, DomainError> {
        require_authenticated(identity)?;
        let post = self.find_post(id).await?;
        let creator = self.populate_creator(&post).await?;
        Ok(post.to_data(creator.to_data()))
    }

    /// `updatePost` - edit a post the caller owns.
    #[tracing::instrument(skip(self, input))]
    pub async fn update_post(
        &self,
        identity: &CallerIdentity,
        id: &str,
        input: PostInputData,
    ) -> Result<PostData, DomainError> {
        let caller = require_authenticated(identity)?;
        let mut post = self.find_post(id).await?;
        let creator = self.populate_creator(&post).await?;
        require_owner(&post, caller)?;
        validate_post_input(&input).into_result(INVALID_POST_INPUT)?;

        post.revise(input.title, input.content, input.image_url);
        let updated = self.posts.save(post).await?;

        tracing::info!(post_id = %updated.id, "Post updated");
        Ok(updated.to_data(creator.to_data()))
    }

    /// `deletePost` - remove a post the caller owns, with its image.
    #[tracing::instrument(skip(self))]
    pub async fn delete_post(&self, identity: &CallerIdentity, id: &str) -> Result<bool, DomainError> {
        let caller = require_authenticated(identity)?;
        let post = self.find_post(id).await?;
        require_owner(&post, caller)?;

        if !post.image_url.is_empty() {
            if let Err(e) = self.images.release(&post.image_url).await {
                tracing::warn!(post_id = %post.id, error = %e, "Failed to release post image");
            }
        }

        self.posts.delete(post.id).await?;

        match self.find_user(caller).await? {
            Some(mut user) => {
                user.remove_post(post.id);
                self.users.save(user).await?;
            }
            None => {
                tracing::warn!(post_id = %post.id, user_id = %caller, "Owner vanished, post set not updated");
            }
        }

        tracing::info!(post_id = %post.id, "Post deleted");
        Ok(true)
    }

    async fn find_post(&self, raw_id: &str) -> Result<Post, DomainError> {
        let id: Uuid = parse_id(raw_id, "Post")?;
        require_found(self.posts.find_by_id(id).await?, "Post")
    }

    async fn populate_creator(&self, post: &Post) -> Result<User, DomainError> {
        self.find_user(post.creator_id).await?.ok_or_else(|| {
            DomainError::Internal(format!(
                "Creator {} of post {} is missing",
                post.creator_id, post.id
            ))
        })
    }
}
