//! Serializable response shapes assembled by the service layer.

pub mod categories;
pub mod courses;
pub mod users;
