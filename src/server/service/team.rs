//! Team service for roster-side team management and membership.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        project::ProjectRepository, semester::SemesterRepository, team::TeamRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        team::{CreateTeamParams, PaginatedTeams, Team, TeamWithMembers},
        user::{Role, User},
    },
    service::project::ProjectService,
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team in a semester; names are unique per semester.
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, AppError> {
        let team_repo = TeamRepository::new(self.db);
        let semester_repo = SemesterRepository::new(self.db);

        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("A team name is required.".to_string()));
        }

        if semester_repo.find_by_id(params.semester_id).await?.is_none() {
            return Err(AppError::BadRequest("Unknown semester.".to_string()));
        }

        if team_repo
            .find_by_name_in_semester(&name, params.semester_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "A team named '{}' already exists in this semester.",
                name
            )));
        }

        let team = team_repo
            .create(CreateTeamParams {
                name,
                semester_id: params.semester_id,
            })
            .await?;

        Ok(Team::from_entity(team))
    }

    /// Gets a team with its members and project card.
    pub async fn get_with_members(&self, id: i32) -> Result<Option<TeamWithMembers>, AppError> {
        let team_repo = TeamRepository::new(self.db);

        let Some(team) = team_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(Some(self.resolve_team(team).await?))
    }

    /// Gets paginated teams for a semester with members and project cards.
    pub async fn get_by_semester_paginated(
        &self,
        semester_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedTeams, AppError> {
        let team_repo = TeamRepository::new(self.db);

        let (entities, total) = team_repo
            .get_by_semester_paginated(semester_id, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        let mut teams = Vec::with_capacity(entities.len());
        for entity in entities {
            teams.push(self.resolve_team(entity).await?);
        }

        Ok(PaginatedTeams {
            teams,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Renames a team.
    /// Returns None if the team doesn't exist.
    pub async fn update_name(&self, id: i32, name: &str) -> Result<Option<Team>, AppError> {
        let team_repo = TeamRepository::new(self.db);

        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("A team name is required.".to_string()));
        }

        let Some(team) = team_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(existing) = team_repo
            .find_by_name_in_semester(&name, team.semester_id)
            .await?
        {
            if existing.id != id {
                return Err(AppError::Conflict(format!(
                    "A team named '{}' already exists in this semester.",
                    name
                )));
            }
        }

        let updated = team_repo.update_name(id, name).await?;

        Ok(updated.map(Team::from_entity))
    }

    /// Deletes a team.
    ///
    /// Teams that still have a registered project cannot be removed; members'
    /// team references are cleared by the database.
    ///
    /// # Returns
    /// - `Ok(true)` - Deleted
    /// - `Ok(false)` - No team with that id
    /// - `Err(AppError::Conflict)` - Team still has a project
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let team_repo = TeamRepository::new(self.db);
        let project_repo = ProjectRepository::new(self.db);

        if team_repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        if project_repo.exists_for_team(id).await? {
            return Err(AppError::Conflict(
                "Team still has a registered project; delete it first.".to_string(),
            ));
        }

        team_repo.delete(id).await?;

        Ok(true)
    }

    /// Adds the calling student to a team.
    ///
    /// # Returns
    /// - `Ok(())` - Caller joined the team
    /// - `Err(AppError::NotFound)` - Team does not exist
    /// - `Err(AppError::Conflict)` - Caller already belongs to a team
    pub async fn join(&self, user: &User, team_id: i32) -> Result<(), AppError> {
        let team_repo = TeamRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        if user.team_id.is_some() {
            return Err(AppError::Conflict(
                "You already belong to a team.".to_string(),
            ));
        }

        if team_repo.find_by_id(team_id).await?.is_none() {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        user_repo.set_team(user.id, Some(team_id)).await?;

        Ok(())
    }

    /// Removes a member from a team.
    ///
    /// Staff can remove anyone; a member can remove themselves.
    pub async fn remove_member(
        &self,
        caller: &User,
        team_id: i32,
        member_id: i32,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if caller.role < Role::Staff && caller.id != member_id {
            return Err(AuthError::AccessDenied(
                caller.id,
                "only staff can remove other members from a team".to_string(),
            )
            .into());
        }

        let Some(member) = user_repo.find_by_id(member_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if member.team_id != Some(team_id) {
            return Err(AppError::BadRequest(
                "User is not a member of this team.".to_string(),
            ));
        }

        user_repo.set_team(member_id, None).await?;

        Ok(())
    }

    /// Resolves a team row into its display form with members and project.
    async fn resolve_team(
        &self,
        entity: entity::team::Model,
    ) -> Result<TeamWithMembers, AppError> {
        let user_repo = UserRepository::new(self.db);
        let project_repo = ProjectRepository::new(self.db);
        let project_service = ProjectService::new(self.db);

        let members: Result<Vec<_>, _> = user_repo
            .find_by_team(entity.id)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect();

        let project = match project_repo.find_by_team(entity.id).await? {
            Some(project) => project_service.build_cards(vec![project]).await?.pop(),
            None => None,
        };

        Ok(TeamWithMembers {
            team: Team::from_entity(entity),
            members: members?,
            project,
        })
    }
}
