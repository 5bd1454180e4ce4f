//! Business logic layer between controllers and repositories.
//!
//! Services validate operation parameters, enforce the platform's invariants
//! (one project per team, at most five tags per project, counter maintenance),
//! and orchestrate repository calls. Controllers never touch repositories
//! directly for anything beyond the auth guard's user lookup.

pub mod auth;
pub mod award;
pub mod category;
pub mod comment;
pub mod media;
pub mod project;
pub mod roster;
pub mod semester;
pub mod setup;
pub mod tag;
pub mod team;
pub mod user;
