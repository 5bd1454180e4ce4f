mod comment;
mod project;
mod roster;
mod user;
