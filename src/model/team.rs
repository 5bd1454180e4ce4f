use serde::{Deserialize, Serialize};

use crate::model::project::ProjectCardDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberDto {
    pub id: i32,
    pub name: String,
    pub avatar_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub semester_id: i32,
    pub members: Vec<TeamMemberDto>,
    pub project: Option<ProjectCardDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedTeamsDto {
    pub teams: Vec<TeamDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamDto {
    pub name: String,
    pub semester_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTeamDto {
    pub name: String,
}
