//! 用户存储
//!
//! `UserStore` 是处理器依赖的存储抽象；`InMemoryUserStore` 用读写锁保护的 `HashMap`
//! 实现，生命周期与进程相同。

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

use tracing::{debug, Level};
use uuid::Uuid;

use super::model::{User, UserFields};

/// 存储层 trait
pub trait UserStore: Send + Sync {
    /// 生成新 id 并插入记录
    fn create(&self, fields: UserFields) -> User;

    fn get(&self, id: &Uuid) -> Option<User>;

    /// 顺序不保证
    fn list(&self) -> Vec<User>;

    /// 部分更新，记录不存在时返回 `None`
    fn update(&self, id: &Uuid, fields: UserFields) -> Option<User>;

    /// 记录存在并被删除时返回 `true`
    fn delete(&self, id: &Uuid) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 变更类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Created(Uuid),
    Updated(Uuid),
    Deleted(Uuid),
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::Created(id) => write!(f, "created {}", id),
            Mutation::Updated(id) => write!(f, "updated {}", id),
            Mutation::Deleted(id) => write!(f, "deleted {}", id),
        }
    }
}

/// 每次变更之后调用的观察者
///
/// 在锁释放后以快照调用，不能影响请求结果。
pub trait MutationObserver: Send + Sync {
    /// 返回 `false` 时本次变更不调用，也不为它拍快照
    fn is_enabled(&self) -> bool {
        true
    }

    fn after_mutation(&self, mutation: Mutation, users: &[User]);
}

/// 把记录数和全部记录打到 debug 日志里
#[derive(Debug, Default, Clone, Copy)]
pub struct StoreDumpObserver;

impl MutationObserver for StoreDumpObserver {
    fn is_enabled(&self) -> bool {
        tracing::enabled!(Level::DEBUG)
    }

    fn after_mutation(&self, mutation: Mutation, users: &[User]) {
        debug!("----- 存储快照 ({}) -----", mutation);
        debug!("{} users:", users.len());
        for user in users {
            debug!("    {:?}", user);
        }
        debug!("----- 快照结束 -----");
    }
}

/// 内存存储
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
    observers: Vec<Arc<dyn MutationObserver>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(mut self, observer: Arc<dyn MutationObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    fn notify(&self, mutation: Mutation) {
        let active: Vec<&Arc<dyn MutationObserver>> = self
            .observers
            .iter()
            .filter(|observer| observer.is_enabled())
            .collect();
        if active.is_empty() {
            return;
        }
        let snapshot = self.list();
        for observer in active {
            observer.after_mutation(mutation, &snapshot);
        }
    }
}

// HashMap 的每次写入都是完整的，锁中毒时直接取回内部数据继续使用
impl UserStore for InMemoryUserStore {
    fn create(&self, fields: UserFields) -> User {
        let user = {
            let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
            let mut id = Uuid::new_v4();
            while users.contains_key(&id) {
                id = Uuid::new_v4();
            }
            let user = User::new(id, fields);
            users.insert(id, user.clone());
            user
        };
        self.notify(Mutation::Created(user.id));
        user
    }

    fn get(&self, id: &Uuid) -> Option<User> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.get(id).cloned()
    }

    fn list(&self) -> Vec<User> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.values().cloned().collect()
    }

    fn update(&self, id: &Uuid, fields: UserFields) -> Option<User> {
        let user = {
            let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
            let user = users.get_mut(id)?;
            user.apply(&fields);
            user.clone()
        };
        self.notify(Mutation::Updated(*id));
        Some(user)
    }

    fn delete(&self, id: &Uuid) -> bool {
        let removed = self
            .users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .is_some();
        if removed {
            self.notify(Mutation::Deleted(*id));
        }
        removed
    }

    fn len(&self) -> usize {
        self.users.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
