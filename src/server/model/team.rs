use crate::{
    model::team::{PaginatedTeamsDto, TeamDto, TeamMemberDto},
    server::model::{project::ProjectCard, user::User},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub semester_id: i32,
}

impl Team {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            semester_id: entity.semester_id,
        }
    }
}

/// Team with its members and registered project resolved for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamWithMembers {
    pub team: Team,
    pub members: Vec<User>,
    pub project: Option<ProjectCard>,
}

impl TeamWithMembers {
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.team.id,
            name: self.team.name,
            semester_id: self.team.semester_id,
            members: self
                .members
                .into_iter()
                .map(|m| TeamMemberDto {
                    id: m.id,
                    name: m.name,
                    avatar_path: m.avatar_path,
                })
                .collect(),
            project: self.project.map(|p| p.into_dto()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub name: String,
    pub semester_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedTeams {
    pub teams: Vec<TeamWithMembers>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedTeams {
    pub fn into_dto(self) -> PaginatedTeamsDto {
        PaginatedTeamsDto {
            teams: self.teams.into_iter().map(|t| t.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
