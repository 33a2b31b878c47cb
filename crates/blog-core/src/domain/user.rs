use blog_shared::dto::UserData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status every freshly registered user starts with.
pub const DEFAULT_STATUS: &str = "I am new!";

/// User entity - a registered author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub status: String,
    /// Ids of the posts this user created, oldest first.
    pub posts: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID, default status and no posts.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            status: DEFAULT_STATUS.to_string(),
            posts: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_post(&mut self, post_id: Uuid) {
        if !self.posts.contains(&post_id) {
            self.posts.push(post_id);
        }
        self.updated_at = Utc::now();
    }

    pub fn remove_post(&mut self, post_id: Uuid) {
        self.posts.retain(|id| *id != post_id);
        self.updated_at = Utc::now();
    }

    pub fn set_status(&mut self, status: String) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Client-facing projection. The password hash never leaves the domain.
    pub fn to_data(&self) -> UserData {
        UserData {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            status: self.status.clone(),
            posts: self.posts.iter().map(Uuid::to_string).collect(),
        }
    }
}
