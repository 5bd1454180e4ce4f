//! Project domain models and operation parameters.
//!
//! A project is the central entity of the platform: one per team, shown in
//! paginated listings (as `ProjectCard`) and on a detail page (as
//! `ProjectDetail`). The denormalized `likes` / `favorites` counters live on
//! the project row and are maintained by the engagement toggles.

use chrono::{DateTime, Utc};

use crate::{
    model::project::{
        FavoriteStateDto, LikeStateDto, PaginatedProjectsDto, ProjectCardDto, ProjectDetailDto,
        ProjectImageDto,
    },
    server::model::{award::Award, tag::Tag},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub team_id: i32,
    pub semester_id: i32,
    pub category_id: Option<i32>,
    pub name: String,
    pub summary: String,
    pub description: Option<String>,
    pub repo_url: Option<String>,
    pub thumbnail_path: Option<String>,
    pub likes: i32,
    pub favorites: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn from_entity(entity: entity::project::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            semester_id: entity.semester_id,
            category_id: entity.category_id,
            name: entity.name,
            summary: entity.summary,
            description: entity.description,
            repo_url: entity.repo_url,
            thumbnail_path: entity.thumbnail_path,
            likes: entity.likes,
            favorites: entity.favorites,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Listing-row representation: the project plus the display data the cards
/// need (category name and bound tags).
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub project: Project,
    pub category_name: Option<String>,
    pub tags: Vec<Tag>,
}

impl ProjectCard {
    pub fn into_dto(self) -> ProjectCardDto {
        ProjectCardDto {
            id: self.project.id,
            name: self.project.name,
            summary: self.project.summary,
            team_id: self.project.team_id,
            semester_id: self.project.semester_id,
            category_id: self.project.category_id,
            category_name: self.category_name,
            thumbnail_path: self.project.thumbnail_path,
            likes: self.project.likes,
            favorites: self.project.favorites,
            tags: self.tags.into_iter().map(|t| t.into_dto()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectImage {
    pub id: i32,
    pub path: String,
    pub position: i32,
}

impl ProjectImage {
    pub fn from_entity(entity: entity::project_image::Model) -> Self {
        Self {
            id: entity.id,
            path: entity.path,
            position: entity.position,
        }
    }

    pub fn into_dto(self) -> ProjectImageDto {
        ProjectImageDto {
            id: self.id,
            path: self.path,
            position: self.position,
        }
    }
}

/// Detail-page representation with all related display data resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub project: Project,
    pub team_name: String,
    pub category_name: Option<String>,
    pub tags: Vec<Tag>,
    pub images: Vec<ProjectImage>,
    pub awards: Vec<Award>,
}

impl ProjectDetail {
    pub fn into_dto(self) -> ProjectDetailDto {
        ProjectDetailDto {
            id: self.project.id,
            name: self.project.name,
            summary: self.project.summary,
            description: self.project.description,
            repo_url: self.project.repo_url,
            team_id: self.project.team_id,
            team_name: self.team_name,
            semester_id: self.project.semester_id,
            category_id: self.project.category_id,
            category_name: self.category_name,
            thumbnail_path: self.project.thumbnail_path,
            likes: self.project.likes,
            favorites: self.project.favorites,
            tags: self.tags.into_iter().map(|t| t.into_dto()).collect(),
            images: self.images.into_iter().map(|i| i.into_dto()).collect(),
            awards: self.awards.into_iter().map(|a| a.into_dto()).collect(),
            created_at: self.project.created_at,
            updated_at: self.project.updated_at,
        }
    }
}

/// Parameters for registering a new project.
///
/// `team_id` and `semester_id` come from the creating student's team, not from
/// the request body, so a student can only ever register a project for their
/// own team.
#[derive(Debug, Clone)]
pub struct CreateProjectParams {
    pub team_id: i32,
    pub semester_id: i32,
    pub category_id: Option<i32>,
    pub name: String,
    pub summary: String,
    pub description: Option<String>,
    pub repo_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateProjectParams {
    pub id: i32,
    pub category_id: Option<i32>,
    pub name: String,
    pub summary: String,
    pub description: Option<String>,
    pub repo_url: Option<String>,
}

/// Listing filters; all optional and combinable.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub semester_id: Option<i32>,
    pub category_id: Option<i32>,
    /// Tag name (normalized form) the listed projects must be bound to.
    pub tag: Option<String>,
    /// Substring match against project name and summary.
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedProjects {
    pub projects: Vec<ProjectCard>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedProjects {
    pub fn into_dto(self) -> PaginatedProjectsDto {
        PaginatedProjectsDto {
            projects: self.projects.into_iter().map(|p| p.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// State after a like toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LikeState {
    pub liked: bool,
    pub likes: i32,
}

impl LikeState {
    pub fn into_dto(self) -> LikeStateDto {
        LikeStateDto {
            liked: self.liked,
            likes: self.likes,
        }
    }
}

/// State after a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FavoriteState {
    pub favorited: bool,
    pub favorites: i32,
}

impl FavoriteState {
    pub fn into_dto(self) -> FavoriteStateDto {
        FavoriteStateDto {
            favorited: self.favorited,
            favorites: self.favorites,
        }
    }
}
