use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Forum board a post belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostCategory {
    /// Farming tips, questions and success stories
    #[default]
    Tips,
    /// Tool sharing and borrowing
    Tools,
    /// Seed exchange
    Seeds,
}

/// Forum post entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: String,
    pub location: Option<String>,
    pub category: PostCategory,
    pub content: String,
    pub likes: u32,
    pub comments: u32,
    pub has_image: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author: String,
    pub location: Option<String>,
    pub category: PostCategory,
    pub content: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForumError {
    #[error("Post content must not be empty")]
    EmptyContent,

    #[error("Post {0} not found")]
    NotFound(Uuid),
}

/// Request DTO for creating a post
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<PostCategory>,
}

impl CreatePostRequest {
    pub fn into_new_post(self) -> Result<NewPost, ForumError> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(ForumError::EmptyContent);
        }

        let author = self
            .author
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| "Anonymous Farmer".to_string());

        Ok(NewPost {
            author,
            location: self
                .location
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
            category: self.category.unwrap_or_default(),
            content: content.to_string(),
        })
    }
}

/// Query parameters for listing posts
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListPostsQuery {
    #[serde(default)]
    pub category: Option<PostCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_content_is_rejected() {
        let req = CreatePostRequest {
            content: "  \n ".into(),
            author: None,
            location: None,
            category: None,
        };
        assert_eq!(req.into_new_post().unwrap_err(), ForumError::EmptyContent);
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let req = CreatePostRequest {
            content: "  Neem oil works on aphids  ".into(),
            author: Some("   ".into()),
            location: Some("".into()),
            category: None,
        };
        let post = req.into_new_post().unwrap();
        assert_eq!(post.content, "Neem oil works on aphids");
        assert_eq!(post.author, "Anonymous Farmer");
        assert_eq!(post.location, None);
        assert_eq!(post.category, PostCategory::Tips);
    }
}
