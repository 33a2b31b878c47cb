use blog_shared::dto::{PostData, UserData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::iso8601;

/// Image URL value clients send on update to keep the current image.
pub const KEEP_IMAGE_SENTINEL: &str = "undefined";

/// Post entity - a blog post owned by its creator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post.
    pub fn new(creator_id: Uuid, title: String, content: String, image_url: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            image_url,
            creator_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields. The image is kept when `image_url` is
    /// the [`KEEP_IMAGE_SENTINEL`].
    pub fn revise(&mut self, title: String, content: String, image_url: String) {
        self.title = title;
        self.content = content;
        if image_url != KEEP_IMAGE_SENTINEL {
            self.image_url = image_url;
        }
        self.updated_at = Utc::now();
    }

    pub fn to_data(&self, creator: UserData) -> PostData {
        PostData {
            id: self.id.to_string(),
            title: self.title.clone(),
            content: self.content.clone(),
            image_url: self.image_url.clone(),
            creator,
            created_at: iso8601(&self.created_at),
            updated_at: iso8601(&self.updated_at),
        }
    }
}
