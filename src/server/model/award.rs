use crate::model::award::AwardDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Award {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub badge_path: Option<String>,
}

impl Award {
    pub fn from_entity(entity: entity::award::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            badge_path: entity.badge_path,
        }
    }

    pub fn into_dto(self) -> AwardDto {
        AwardDto {
            id: self.id,
            name: self.name,
            description: self.description,
            badge_path: self.badge_path,
        }
    }
}

/// Parameters for creating or updating an award.
#[derive(Debug, Clone)]
pub struct AwardParams {
    pub name: String,
    pub description: Option<String>,
}
