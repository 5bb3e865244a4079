//! Domain entities and value objects, free of persistence concerns.

pub mod activity;
pub mod auth;
pub mod category;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod pagination;
pub mod slug;
pub mod types;
pub mod user;
