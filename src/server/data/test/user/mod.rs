use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, Role},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod admin_exists;
mod create;
mod get_all_paginated;
mod set_role;
mod set_team;
