use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
    /// Number of projects currently referencing this tag.
    pub mentions: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindTagDto {
    pub name: String,
}
