use crate::server::{
    data::project::ProjectRepository,
    model::project::{ProjectFilter, UpdateProjectParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod images;
mod one_per_team;
mod update;
