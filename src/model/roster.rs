use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredStudentDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub semester_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedRosterDto {
    pub students: Vec<RegisteredStudentDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntryDto {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterUploadDto {
    pub students: Vec<RosterEntryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterUploadResultDto {
    pub inserted: u64,
    pub updated: u64,
}
