use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "award")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub badge_path: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_award::Entity")]
    ProjectAward,
}

impl Related<super::project_award::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectAward.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
