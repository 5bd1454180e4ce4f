use crate::server::data::comment::CommentRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod by_project;
