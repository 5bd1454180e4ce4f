use crate::model::tag::TagDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    /// Denormalized count of projects referencing this tag. Maintained by the
    /// tag service on every bind and unbind.
    pub mentions: i32,
}

impl Tag {
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            mentions: entity.mentions,
        }
    }

    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            name: self.name,
            mentions: self.mentions,
        }
    }
}
