use crate::model::roster::{PaginatedRosterDto, RegisteredStudentDto, RosterUploadResultDto};

#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredStudent {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub semester_id: i32,
}

impl RegisteredStudent {
    pub fn from_entity(entity: entity::registered_student::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            semester_id: entity.semester_id,
        }
    }

    pub fn into_dto(self) -> RegisteredStudentDto {
        RegisteredStudentDto {
            id: self.id,
            email: self.email,
            name: self.name,
            semester_id: self.semester_id,
        }
    }
}

/// Outcome of a bulk roster upload.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RosterUploadResult {
    pub inserted: u64,
    pub updated: u64,
}

impl RosterUploadResult {
    pub fn into_dto(self) -> RosterUploadResultDto {
        RosterUploadResultDto {
            inserted: self.inserted,
            updated: self.updated,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedRoster {
    pub students: Vec<RegisteredStudent>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedRoster {
    pub fn into_dto(self) -> PaginatedRosterDto {
        PaginatedRosterDto {
            students: self.students.into_iter().map(|s| s.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
