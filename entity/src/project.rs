use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub team_id: i32,
    pub semester_id: i32,
    pub category_id: Option<i32>,
    pub name: String,
    pub summary: String,
    pub description: Option<String>,
    pub repo_url: Option<String>,
    pub thumbnail_path: Option<String>,
    pub likes: i32,
    pub favorites: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::semester::Entity",
        from = "Column::SemesterId",
        to = "super::semester::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Semester,
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Category,
    #[sea_orm(has_many = "super::project_image::Entity")]
    ProjectImage,
    #[sea_orm(has_many = "super::project_tag::Entity")]
    ProjectTag,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::project_award::Entity")]
    ProjectAward,
    #[sea_orm(has_many = "super::project_like::Entity")]
    ProjectLike,
    #[sea_orm(has_many = "super::project_favorite::Entity")]
    ProjectFavorite,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::semester::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Semester.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::project_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
