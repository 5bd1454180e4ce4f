pub use super::award::Entity as Award;
pub use super::category::Entity as Category;
pub use super::comment::Entity as Comment;
pub use super::project::Entity as Project;
pub use super::project_award::Entity as ProjectAward;
pub use super::project_favorite::Entity as ProjectFavorite;
pub use super::project_image::Entity as ProjectImage;
pub use super::project_like::Entity as ProjectLike;
pub use super::project_tag::Entity as ProjectTag;
pub use super::registered_student::Entity as RegisteredStudent;
pub use super::semester::Entity as Semester;
pub use super::tag::Entity as Tag;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
