//! # 用户管理服务
//!
//! 基于 Axum 的内存用户 CRUD 服务，采用分层结构：
//! - `app`：用户模型、校验、存储、业务服务和处理器
//! - `core`：错误处理和中间件
//! - `infrastructure`：配置和日志
//! - `server`：路由组装和启动

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod server;

pub use app::users::{
    handler::AppState,
    model::{Field, User, UserFields},
    service::UserService,
    store::{InMemoryUserStore, Mutation, MutationObserver, StoreDumpObserver, UserStore},
    validation::{validate_user, ValidationError},
};
pub use crate::core::error::CoreError;
pub use infrastructure::config::{Config, ConfigError};
