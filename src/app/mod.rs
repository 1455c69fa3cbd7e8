//! 应用层

pub mod health;
pub mod users;
