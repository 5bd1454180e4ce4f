//! SeaORM entity definitions for the showcase database schema.

pub mod prelude;

pub mod award;
pub mod category;
pub mod comment;
pub mod project;
pub mod project_award;
pub mod project_favorite;
pub mod project_image;
pub mod project_like;
pub mod project_tag;
pub mod registered_student;
pub mod semester;
pub mod tag;
pub mod team;
pub mod user;
