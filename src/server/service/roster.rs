//! Roster service for the registered-student allowlist.
//!
//! The roster gates self-registration: emails uploaded here receive the
//! capstone student role when they sign up. Uploads are idempotent upserts so
//! staff can re-upload a corrected roster without clearing it first.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{roster::RosterRepository, semester::SemesterRepository},
    error::AppError,
    model::roster::{PaginatedRoster, RegisteredStudent, RosterUploadResult},
    util::parse::normalize_email,
};

/// One entry of a bulk roster upload, already DTO-decoded.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub email: String,
    pub name: String,
}

pub struct RosterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RosterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_semester_paginated(
        &self,
        semester_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedRoster, AppError> {
        let roster_repo = RosterRepository::new(self.db);
        let semester_repo = SemesterRepository::new(self.db);

        if semester_repo.find_by_id(semester_id).await?.is_none() {
            return Err(AppError::NotFound("Semester not found".to_string()));
        }

        let (entities, total) = roster_repo
            .get_by_semester_paginated(semester_id, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedRoster {
            students: entities
                .into_iter()
                .map(RegisteredStudent::from_entity)
                .collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Bulk-upserts roster entries for a semester.
    ///
    /// Emails are normalized before lookup; existing entries (by email) are
    /// moved to the semester and their names refreshed, new entries are
    /// inserted.
    ///
    /// # Returns
    /// - `Ok(RosterUploadResult)` - Counts of inserted and updated entries
    /// - `Err(AppError::NotFound)` - Semester does not exist
    /// - `Err(AppError::BadRequest)` - An entry has an invalid email
    pub async fn upload(
        &self,
        semester_id: i32,
        entries: Vec<RosterEntry>,
    ) -> Result<RosterUploadResult, AppError> {
        let roster_repo = RosterRepository::new(self.db);
        let semester_repo = SemesterRepository::new(self.db);

        if semester_repo.find_by_id(semester_id).await?.is_none() {
            return Err(AppError::NotFound("Semester not found".to_string()));
        }

        let mut result = RosterUploadResult::default();

        for entry in entries {
            let email = normalize_email(&entry.email);
            if email.is_empty() || !email.contains('@') {
                return Err(AppError::BadRequest(format!(
                    "Invalid email address in roster: '{}'",
                    entry.email
                )));
            }

            let name = entry.name.trim().to_string();

            match roster_repo.find_by_email(&email).await? {
                Some(existing) => {
                    roster_repo
                        .update_entry(existing.id, semester_id, name)
                        .await?;
                    result.updated += 1;
                }
                None => {
                    roster_repo.insert(semester_id, email, name).await?;
                    result.inserted += 1;
                }
            }
        }

        Ok(result)
    }

    /// Removes a roster entry.
    ///
    /// # Returns
    /// - `Ok(true)` - Deleted
    /// - `Ok(false)` - No entry with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let roster_repo = RosterRepository::new(self.db);

        if roster_repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        roster_repo.delete(id).await?;

        Ok(true)
    }
}
