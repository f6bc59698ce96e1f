use serde::Serialize;

use crate::core::time::format_primitive;
use crate::db::models::{BlogCategory, BlogPost};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BlogPostResponse {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) body: String,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

impl BlogPostResponse {
    pub(crate) fn from_db(post: BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            created_at: format_primitive(post.created_at),
            updated_at: format_primitive(post.updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BlogCategoryResponse {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

impl BlogCategoryResponse {
    pub(crate) fn from_db(category: BlogCategory) -> Self {
        Self {
            id: category.id,
            title: category.title,
            created_at: format_primitive(category.created_at),
            updated_at: format_primitive(category.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn post_serializes_with_camel_case_timestamps() {
        let post = BlogPost {
            id: 7,
            title: "Hello".to_string(),
            body: "First post".to_string(),
            created_at: datetime!(2024-03-01 08:00:00),
            updated_at: datetime!(2024-03-02 09:30:00),
        };

        let json = serde_json::to_value(BlogPostResponse::from_db(post)).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "title": "Hello",
                "body": "First post",
                "createdAt": "2024-03-01T08:00:00Z",
                "updatedAt": "2024-03-02T09:30:00Z",
            })
        );
    }

    #[test]
    fn category_has_no_body() {
        let category = BlogCategory {
            id: 1,
            title: "Rust".to_string(),
            created_at: datetime!(2024-01-01 00:00:00),
            updated_at: datetime!(2024-01-01 00:00:00),
        };

        let json = serde_json::to_value(BlogCategoryResponse::from_db(category)).expect("serialize");
        assert!(json.get("body").is_none());
        assert_eq!(json["title"], "Rust");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");
    }
}
