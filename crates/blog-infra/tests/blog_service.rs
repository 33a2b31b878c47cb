//! End-to-end operation tests over the in-memory repositories.

use std::path::PathBuf;
use std::sync::Arc;

use argon2::Params;
use blog_core::domain::DEFAULT_STATUS;
use async_trait::async_trait;
use blog_core::RepoError;
use blog_core::domain::User;
use blog_core::ports::{BaseRepository, TokenService, UserRepository};
use blog_core::{BlogService, CallerIdentity, DomainError};
use blog_infra::{
    Argon2PasswordService, InMemoryPostRepository, InMemoryUserRepository, JwtConfig,
    JwtTokenService, LocalImageStore,
};
use blog_shared::dto::{PostInputData, UserInputData};
use uuid::Uuid;

struct Harness {
    service: BlogService,
    users: Arc<InMemoryUserRepository>,
    tokens: Arc<JwtTokenService>,
    image_root: PathBuf,
}

impl Harness {
    fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let posts = Arc::new(InMemoryPostRepository::new());
        let tokens = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "integration-secret".to_string(),
            ..JwtConfig::default()
        }));
        let passwords = Arc::new(Argon2PasswordService::with_params(
            Params::new(1024, 1, 1, None).unwrap(),
        ));
        let image_root = std::env::temp_dir().join(format!("blog-it-{}", Uuid::new_v4()));
        std::fs::create_dir_all(image_root.join("images")).unwrap();

        let service = BlogService::new(
            users.clone(),
            posts,
            tokens.clone(),
            passwords,
            Arc::new(LocalImageStore::new(&image_root)),
        );

        Self {
            service,
            users,
            tokens,
            image_root,
        }
    }

    async fn register(&self, email: &str) -> CallerIdentity {
        let user = self
            .service
            .create_user(user_input(email, "secret"))
            .await
            .unwrap();
        CallerIdentity::Authenticated {
            user_id: Uuid::parse_str(&user.id).unwrap(),
        }
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.image_root);
    }
}

fn user_input(email: &str, password: &str) -> UserInputData {
    UserInputData {
        email: email.to_string(),
        name: "Ada".to_string(),
        password: password.to_string(),
    }
}

fn post_input(title: &str) -> PostInputData {
    PostInputData {
        title: title.to_string(),
        content: "Some content".to_string(),
        image_url: "images/cover.png".to_string(),
    }
}

#[tokio::test]
async fn register_collects_every_violation() {
    let h = Harness::new();

    let err = h
        .service
        .create_user(user_input("not-an-email", "abc"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some(422));
    assert_eq!(err.to_string(), "invalid input.");
    assert_eq!(
        err.validation_errors().unwrap().messages(),
        vec!["Email is invalid", "Password too short"]
    );
}

#[tokio::test]
async fn register_twice_fails_uncoded() {
    let h = Harness::new();

    let first = h
        .service
        .create_user(user_input("ada@example.com", "secret"))
        .await
        .unwrap();
    assert!(Uuid::parse_str(&first.id).is_ok());
    assert_eq!(first.status, DEFAULT_STATUS);
    assert!(first.posts.is_empty());

    let err = h
        .service
        .create_user(user_input("ada@example.com", "another"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Duplicate(_)));
    assert_eq!(err.code(), None);
    assert_eq!(err.to_string(), "User already exists");
}

/// Sees no existing user on lookup, as a registration racing another would.
struct StaleEmailLookup(Arc<InMemoryUserRepository>);

#[async_trait]
impl BaseRepository<User, Uuid> for StaleEmailLookup {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        self.0.find_by_id(id).await
    }

    async fn save(&self, entity: User) -> Result<User, RepoError> {
        self.0.save(entity).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.0.delete(id).await
    }
}

#[async_trait]
impl UserRepository for StaleEmailLookup {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, RepoError> {
        Ok(None)
    }
}

#[tokio::test]
async fn register_losing_a_race_reports_duplicate() {
    let users = Arc::new(InMemoryUserRepository::new());
    let service = BlogService::new(
        Arc::new(StaleEmailLookup(users.clone())),
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(JwtTokenService::new(JwtConfig {
            secret: "integration-secret".to_string(),
            ..JwtConfig::default()
        })),
        Arc::new(Argon2PasswordService::with_params(
            Params::new(1024, 1, 1, None).unwrap(),
        )),
        Arc::new(LocalImageStore::new(std::env::temp_dir())),
    );

    service
        .create_user(user_input("ada@example.com", "secret"))
        .await
        .unwrap();

    let err = service
        .create_user(user_input("ada@example.com", "another"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Duplicate(_)));
    assert_eq!(err.to_string(), "User already exists");
}

#[tokio::test]
async fn register_stores_a_hash_not_the_password() {
    let h = Harness::new();
    h.service
        .create_user(user_input("ada@example.com", "secret"))
        .await
        .unwrap();

    let stored = h.users.find_by_email("ada@example.com").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "secret");
    assert!(stored.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn login_token_carries_user_id_and_email() {
    let h = Harness::new();
    let identity = h.register("ada@example.com").await;

    let auth = h.service.login("ada@example.com", "secret").await.unwrap();

    let claims = h.tokens.validate_token(&auth.token).unwrap();
    assert_eq!(Some(claims.user_id), identity.user_id());
    assert_eq!(claims.email, "ada@example.com");
    assert_eq!(auth.user_id, claims.user_id.to_string());
}

#[tokio::test]
async fn login_failures_are_401() {
    let h = Harness::new();
    h.register("ada@example.com").await;

    let wrong_password = h
        .service
        .login("ada@example.com", "wrong-pass")
        .await
        .unwrap_err();
    assert_eq!(wrong_password.code(), Some(401));
    assert_eq!(wrong_password.to_string(), "Password is incorrect");

    let unknown = h
        .service
        .login("bob@example.com", "secret")
        .await
        .unwrap_err();
    assert_eq!(unknown.code(), Some(401));
}

#[tokio::test]
async fn anonymous_callers_get_401_everywhere_but_register_and_login() {
    let h = Harness::new();
    let anon = CallerIdentity::Anonymous;
    let id = Uuid::new_v4().to_string();

    let results = vec![
        h.service.create_post(&anon, post_input("Hello world")).await.err(),
        h.service.posts(&anon, None).await.err(),
        h.service.post(&anon, &id).await.err(),
        h.service
            .update_post(&anon, &id, post_input("Hello world"))
            .await
            .err(),
        h.service.delete_post(&anon, &id).await.err(),
        h.service.user(&anon).await.err(),
        h.service.update_status(&anon, "busy".into()).await.err(),
    ];

    for err in results {
        let err = err.expect("anonymous call must fail");
        assert_eq!(err.code(), Some(401));
        assert_eq!(err.to_string(), "Not authenticated");
    }
}

#[tokio::test]
async fn create_post_validates_before_touching_the_store() {
    let h = Harness::new();
    let identity = h.register("ada@example.com").await;

    let err = h
        .service
        .create_post(
            &identity,
            PostInputData {
                title: "Hi".into(),
                content: "".into(),
                image_url: String::new(),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some(422));
    assert_eq!(err.to_string(), "Invalid input");
    assert_eq!(
        err.validation_errors().unwrap().messages(),
        vec!["Title is required", "Content is required"]
    );
    assert_eq!(h.service.posts(&identity, None).await.unwrap().total_posts, 0);
}

#[tokio::test]
async fn create_post_for_vanished_user_is_401() {
    let h = Harness::new();
    let ghost = CallerIdentity::Authenticated {
        user_id: Uuid::new_v4(),
    };

    let err = h
        .service
        .create_post(&ghost, post_input("Hello world"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some(401));
    assert_eq!(err.to_string(), "User not found");
}

#[tokio::test]
async fn created_post_round_trips_and_joins_the_user_post_set() {
    let h = Harness::new();
    let identity = h.register("ada@example.com").await;

    let created = h
        .service
        .create_post(&identity, post_input("Hello world"))
        .await
        .unwrap();
    let fetched = h.service.post(&identity, &created.id).await.unwrap();

    assert_eq!(fetched.title, "Hello world");
    assert_eq!(fetched.content, "Some content");
    assert_eq!(fetched.image_url, "images/cover.png");
    assert_eq!(Some(fetched.creator.id.clone()), identity.user_id().map(|id| id.to_string()));
    assert!(fetched.created_at.ends_with('Z'));

    let me = h.service.user(&identity).await.unwrap();
    assert_eq!(me.posts, vec![created.id.clone()]);
    assert_eq!(created.creator.posts, vec![created.id]);
}

#[tokio::test]
async fn posts_are_paged_by_two_newest_first() {
    let h = Harness::new();
    let identity = h.register("ada@example.com").await;

    let mut titles = Vec::new();
    for n in 1..=5 {
        let title = format!("Post number {n}");
        h.service
            .create_post(&identity, post_input(&title))
            .await
            .unwrap();
        titles.push(title);
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }

    let default_page = h.service.posts(&identity, None).await.unwrap();
    let first_page = h.service.posts(&identity, Some(1)).await.unwrap();
    assert_eq!(default_page, first_page);
    assert_eq!(first_page.total_posts, 5);

    let first: Vec<&str> = first_page.posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(first, vec!["Post number 5", "Post number 4"]);

    let third = h.service.posts(&identity, Some(3)).await.unwrap();
    assert_eq!(third.posts.len(), 1);
    assert_eq!(third.posts[0].title, "Post number 1");
    assert_eq!(third.total_posts, 5);

    let beyond = h.service.posts(&identity, Some(9)).await.unwrap();
    assert!(beyond.posts.is_empty());
    assert_eq!(beyond.total_posts, 5);
}

#[tokio::test]
async fn non_owner_cannot_update_or_delete() {
    let h = Harness::new();
    let owner = h.register("ada@example.com").await;
    let intruder = h.register("eve@example.com").await;
    let post = h
        .service
        .create_post(&owner, post_input("Hello world"))
        .await
        .unwrap();

    let update = h
        .service
        .update_post(&intruder, &post.id, post_input("Hijacked title"))
        .await
        .unwrap_err();
    assert_eq!(update.code(), Some(403));

    let delete = h.service.delete_post(&intruder, &post.id).await.unwrap_err();
    assert_eq!(delete.code(), Some(403));

    let unchanged = h.service.post(&owner, &post.id).await.unwrap();
    assert_eq!(unchanged.title, "Hello world");
}

#[tokio::test]
async fn ownership_is_checked_before_validation() {
    let h = Harness::new();
    let owner = h.register("ada@example.com").await;
    let intruder = h.register("eve@example.com").await;
    let post = h
        .service
        .create_post(&owner, post_input("Hello world"))
        .await
        .unwrap();

    let err = h
        .service
        .update_post(&intruder, &post.id, post_input(""))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some(403));
}

#[tokio::test]
async fn owner_update_persists_and_honours_image_sentinel() {
    let h = Harness::new();
    let owner = h.register("ada@example.com").await;
    let post = h
        .service
        .create_post(&owner, post_input("Hello world"))
        .await
        .unwrap();

    let updated = h
        .service
        .update_post(
            &owner,
            &post.id,
            PostInputData {
                title: "Edited title".into(),
                content: "Edited content".into(),
                image_url: "undefined".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.image_url, "images/cover.png");

    let fetched = h.service.post(&owner, &post.id).await.unwrap();
    assert_eq!(fetched.title, "Edited title");
    assert_eq!(fetched.content, "Edited content");
    assert_eq!(fetched.image_url, "images/cover.png");
    assert_eq!(fetched.created_at, post.created_at);

    let replaced = h
        .service
        .update_post(&owner, &post.id, post_input("Edited again"))
        .await
        .unwrap();
    assert_eq!(replaced.image_url, "images/cover.png");

    let mut input = post_input("Edited again");
    input.image_url = "images/other.png".into();
    let replaced = h.service.update_post(&owner, &post.id, input).await.unwrap();
    assert_eq!(replaced.image_url, "images/other.png");
}

#[tokio::test]
async fn update_rejects_invalid_input_for_owner() {
    let h = Harness::new();
    let owner = h.register("ada@example.com").await;
    let post = h
        .service
        .create_post(&owner, post_input("Hello world"))
        .await
        .unwrap();

    let err = h
        .service
        .update_post(&owner, &post.id, post_input("Hey"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some(422));
    assert_eq!(
        err.validation_errors().unwrap().messages(),
        vec!["Title is required"]
    );
}

#[tokio::test]
async fn delete_pulls_post_and_releases_image() {
    let h = Harness::new();
    let owner = h.register("ada@example.com").await;
    let image = h.image_root.join("images/cover.png");
    std::fs::write(&image, b"png").unwrap();

    let keep = h
        .service
        .create_post(&owner, post_input("Keep this one"))
        .await
        .unwrap();
    let doomed = h
        .service
        .create_post(&owner, post_input("Delete this one"))
        .await
        .unwrap();

    assert!(h.service.delete_post(&owner, &doomed.id).await.unwrap());

    let err = h.service.post(&owner, &doomed.id).await.unwrap_err();
    assert_eq!(err.code(), Some(404));
    assert_eq!(err.to_string(), "Post not found");

    let me = h.service.user(&owner).await.unwrap();
    assert_eq!(me.posts, vec![keep.id]);
    assert!(!image.exists());
}

#[tokio::test]
async fn delete_succeeds_when_image_is_already_gone() {
    let h = Harness::new();
    let owner = h.register("ada@example.com").await;
    let post = h
        .service
        .create_post(&owner, post_input("Hello world"))
        .await
        .unwrap();

    assert!(h.service.delete_post(&owner, &post.id).await.unwrap());
}

#[tokio::test]
async fn unknown_or_malformed_post_ids_are_404() {
    let h = Harness::new();
    let identity = h.register("ada@example.com").await;

    for id in [Uuid::new_v4().to_string(), "not-an-id".to_string()] {
        let err = h.service.post(&identity, &id).await.unwrap_err();
        assert_eq!(err.code(), Some(404));

        let err = h.service.delete_post(&identity, &id).await.unwrap_err();
        assert_eq!(err.code(), Some(404));
    }
}

#[tokio::test]
async fn current_user_and_status_update() {
    let h = Harness::new();
    let identity = h.register("ada@example.com").await;

    let me = h.service.user(&identity).await.unwrap();
    assert_eq!(me.email, "ada@example.com");
    assert_eq!(me.status, DEFAULT_STATUS);

    let updated = h
        .service
        .update_status(&identity, "Writing a book".into())
        .await
        .unwrap();
    assert_eq!(updated.status, "Writing a book");

    let user_id = identity.user_id().unwrap();
    let stored = h.users.find_by_id(user_id).await.unwrap().unwrap();
    assert_eq!(stored.status, "Writing a book");
}

#[tokio::test]
async fn vanished_user_is_404_for_profile_operations() {
    let h = Harness::new();
    let ghost = CallerIdentity::Authenticated {
        user_id: Uuid::new_v4(),
    };

    let err = h.service.user(&ghost).await.unwrap_err();
    assert_eq!(err.code(), Some(404));
    assert_eq!(err.to_string(), "User not found");

    let err = h
        .service
        .update_status(&ghost, "hello".into())
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(404));
}
