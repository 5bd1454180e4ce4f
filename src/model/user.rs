use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    /// Permission tier: `visitor`, `capstone_student`, `staff`, or `admin`.
    pub role: String,
    pub avatar_path: Option<String>,
    pub team_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
    pub name: String,
    /// One-time setup code printed to the server log when no admin exists.
    pub setup_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileDto {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRoleDto {
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarDto {
    pub avatar_path: String,
}
