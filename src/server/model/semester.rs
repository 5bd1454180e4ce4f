use chrono::NaiveDate;

use crate::model::semester::SemesterDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Semester {
    pub id: i32,
    pub name: String,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
}

impl Semester {
    pub fn from_entity(entity: entity::semester::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            starts_on: entity.starts_on,
            ends_on: entity.ends_on,
        }
    }

    pub fn into_dto(self) -> SemesterDto {
        SemesterDto {
            id: self.id,
            name: self.name,
            starts_on: self.starts_on,
            ends_on: self.ends_on,
        }
    }
}

/// Parameters for creating or updating a semester.
#[derive(Debug, Clone)]
pub struct SemesterParams {
    pub name: String,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
}
