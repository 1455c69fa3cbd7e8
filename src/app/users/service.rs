//! 用户业务服务：先校验，再写入存储

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::{
    model::{Field, User, UserFields},
    store::UserStore,
    validation::validate_user,
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

/// 只接受小写连字符形式的 id，其他写法（大写、无连字符、urn、花括号）与不存在同样处理
pub fn parse_user_id(id: &str) -> Result<Uuid, CoreError> {
    match Uuid::try_parse(id) {
        Ok(parsed) if parsed.hyphenated().to_string() == id => Ok(parsed),
        _ => Err(CoreError::NotFound),
    }
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub fn list_users(&self) -> Vec<User> {
        self.store.list()
    }

    pub fn get_user(&self, id: &Uuid) -> Result<User, CoreError> {
        self.store.get(id).ok_or(CoreError::NotFound)
    }

    pub fn create_user(&self, fields: UserFields) -> Result<User, CoreError> {
        validate_user(&fields)?;
        let user = self.store.create(fields);
        info!("创建用户 {}，当前共 {} 个用户", user.id, self.store.len());
        Ok(user)
    }

    pub fn update_user(&self, id: &Uuid, fields: UserFields) -> Result<User, CoreError> {
        validate_user(&fields)?;
        let submitted: Vec<&str> = Field::ALL
            .into_iter()
            .filter(|field| fields.get(*field).is_some())
            .map(Field::name)
            .collect();
        let user = self.store.update(id, fields).ok_or(CoreError::NotFound)?;
        info!("更新用户 {}，提交字段: {:?}", id, submitted);
        Ok(user)
    }

    pub fn delete_user(&self, id: &Uuid) -> Result<(), CoreError> {
        if !self.store.delete(id) {
            return Err(CoreError::NotFound);
        }
        info!("删除用户 {}，剩余 {} 个用户", id, self.store.len());
        Ok(())
    }

    pub fn user_count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::users::store::InMemoryUserStore;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserStore::new()))
    }

    #[test]
    fn test_invalid_fields_are_not_stored() {
        let service = service();
        let result = service.create_user(UserFields::default().with(Field::Zipcode, "1234"));

        assert!(matches!(result, Err(CoreError::BadRequest(msg))
            if msg == "zipcode must be formatted as either NNNNN or NNNNN-NNNN"));
        assert_eq!(service.user_count(), 0);
    }

    #[test]
    fn test_invalid_update_leaves_record() {
        let service = service();
        let user = service
            .create_user(UserFields::default().with(Field::Email, "a@b.com"))
            .unwrap();

        let result = service.update_user(&user.id, UserFields::default().with(Field::Email, "nope"));
        assert!(matches!(result, Err(CoreError::BadRequest(_))));
        assert_eq!(service.get_user(&user.id).unwrap(), user);
    }

    #[test]
    fn test_parse_user_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_user_id(&id.to_string()).unwrap(), id);
        assert!(matches!(parse_user_id("not-a-uuid"), Err(CoreError::NotFound)));

        let canonical = id.to_string();
        for alias in [
            canonical.to_uppercase(),
            canonical.replace('-', ""),
            format!("urn:uuid:{}", canonical),
            format!("{{{}}}", canonical),
        ] {
            assert!(
                matches!(parse_user_id(&alias), Err(CoreError::NotFound)),
                "{alias}"
            );
        }
    }
}
