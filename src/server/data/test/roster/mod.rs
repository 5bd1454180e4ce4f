use crate::server::data::roster::RosterRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert;
