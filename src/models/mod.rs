//! Diesel row structs and conversions to/from domain entities.

pub mod activity;
pub mod category;
pub mod config;
pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod user;
