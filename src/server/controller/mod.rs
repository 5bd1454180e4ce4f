//! HTTP request handlers.
//!
//! Controllers are thin: they authenticate via `AuthGuard`, convert DTOs to
//! parameter types, call one service, and map the result to a status code and
//! JSON body. Anything resembling business logic belongs in `service/`.

pub mod auth;
pub mod award;
pub mod category;
pub mod comment;
pub mod project;
pub mod roster;
pub mod semester;
pub mod tag;
pub mod team;
pub mod user;
