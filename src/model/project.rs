use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{award::AwardDto, tag::TagDto};

/// Compact project representation used in listings and team pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCardDto {
    pub id: i32,
    pub name: String,
    pub summary: String,
    pub team_id: i32,
    pub semester_id: i32,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
    pub thumbnail_path: Option<String>,
    pub likes: i32,
    pub favorites: i32,
    pub tags: Vec<TagDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectImageDto {
    pub id: i32,
    pub path: String,
    pub position: i32,
}

/// Full project representation for the project detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetailDto {
    pub id: i32,
    pub name: String,
    pub summary: String,
    pub description: Option<String>,
    pub repo_url: Option<String>,
    pub team_id: i32,
    pub team_name: String,
    pub semester_id: i32,
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
    pub thumbnail_path: Option<String>,
    pub likes: i32,
    pub favorites: i32,
    pub tags: Vec<TagDto>,
    pub images: Vec<ProjectImageDto>,
    pub awards: Vec<AwardDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedProjectsDto {
    pub projects: Vec<ProjectCardDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectDto {
    pub name: String,
    pub summary: String,
    pub description: Option<String>,
    pub repo_url: Option<String>,
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProjectDto {
    pub name: String,
    pub summary: String,
    pub description: Option<String>,
    pub repo_url: Option<String>,
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetThumbnailDto {
    pub image_id: i32,
}

/// Result of a like toggle: the caller's state plus the maintained counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeStateDto {
    pub liked: bool,
    pub likes: i32,
}

/// Result of a favorite toggle: the caller's state plus the maintained counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteStateDto {
    pub favorited: bool,
    pub favorites: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pins the toggle response wire format the client updates its UI from.
    #[test]
    fn like_state_wire_format() {
        let dto = LikeStateDto {
            liked: true,
            likes: 3,
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value, serde_json::json!({"liked": true, "likes": 3}));
    }

    #[test]
    fn project_card_omits_nothing() {
        let dto = ProjectCardDto {
            id: 1,
            name: "Solar Tracker".to_string(),
            summary: "Panels that follow the sun".to_string(),
            team_id: 2,
            semester_id: 3,
            category_id: None,
            category_name: None,
            thumbnail_path: None,
            likes: 0,
            favorites: 0,
            tags: Vec::new(),
        };

        let value = serde_json::to_value(&dto).unwrap();
        // Optional fields serialize as explicit nulls so the client never
        // has to distinguish missing keys from cleared values.
        assert!(value.get("category_name").unwrap().is_null());
        assert!(value.get("thumbnail_path").unwrap().is_null());
    }
}
