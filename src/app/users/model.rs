//! 用户数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 用户记录
///
/// `id` 由服务端生成，创建后不可修改；其余字段均可由客户端修改，缺省为空字符串。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub zipcode: String,
    pub email: String,
}

/// 可由客户端修改的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Firstname,
    Lastname,
    Zipcode,
    Email,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Firstname,
        Field::Lastname,
        Field::Zipcode,
        Field::Email,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Firstname => "firstname",
            Field::Lastname => "lastname",
            Field::Zipcode => "zipcode",
            Field::Email => "email",
        }
    }
}

/// 创建/更新请求体：每个字段要么缺省，要么带值
///
/// JSON 中的 `null` 与缺省等价，未知字段会被忽略。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserFields {
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserFields {
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Firstname => &self.firstname,
            Field::Lastname => &self.lastname,
            Field::Zipcode => &self.zipcode,
            Field::Email => &self.email,
        };
        value.as_deref()
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            Field::Firstname => self.firstname = value,
            Field::Lastname => self.lastname = value,
            Field::Zipcode => self.zipcode = value,
            Field::Email => self.email = value,
        }
        self
    }
}

impl User {
    /// 用新生成的 id 和给定字段构造记录，缺省字段取空字符串
    pub fn new(id: Uuid, fields: UserFields) -> Self {
        Self {
            id,
            firstname: fields.firstname.unwrap_or_default(),
            lastname: fields.lastname.unwrap_or_default(),
            zipcode: fields.zipcode.unwrap_or_default(),
            email: fields.email.unwrap_or_default(),
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Firstname => &mut self.firstname,
            Field::Lastname => &mut self.lastname,
            Field::Zipcode => &mut self.zipcode,
            Field::Email => &mut self.email,
        }
    }

    /// 只覆盖请求中出现且与当前值不同的字段，返回是否有改动
    pub fn apply(&mut self, fields: &UserFields) -> bool {
        let mut changed = false;
        for field in Field::ALL {
            if let Some(value) = fields.get(field) {
                let current = self.field_mut(field);
                if current.as_str() != value {
                    *current = value.to_string();
                    changed = true;
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_missing_fields_to_empty() {
        let id = Uuid::new_v4();
        let user = User::new(id, UserFields::default().with(Field::Firstname, "The"));

        assert_eq!(user.id, id);
        assert_eq!(user.firstname, "The");
        assert_eq!(user.lastname, "");
        assert_eq!(user.zipcode, "");
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_apply_touches_only_present_fields() {
        let mut user = User::new(
            Uuid::new_v4(),
            UserFields::default()
                .with(Field::Firstname, "The")
                .with(Field::Lastname, "Doctor"),
        );

        let changed = user.apply(&UserFields::default().with(Field::Firstname, "Nick"));
        assert!(changed);
        assert_eq!(user.firstname, "Nick");
        assert_eq!(user.lastname, "Doctor");

        // 相同的值不算改动
        assert!(!user.apply(&UserFields::default().with(Field::Lastname, "Doctor")));
    }

    #[test]
    fn test_serialized_shape() {
        let id = Uuid::new_v4();
        let user = User::new(id, UserFields::default().with(Field::Email, "a@b.com"));
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": id.to_string(),
                "firstname": "",
                "lastname": "",
                "zipcode": "",
                "email": "a@b.com",
            })
        );
    }

    #[test]
    fn test_null_field_is_absent() {
        let fields: UserFields =
            serde_json::from_str(r#"{"firstname": null, "zipcode": "97204", "extra": 1}"#).unwrap();

        assert_eq!(fields.get(Field::Firstname), None);
        assert_eq!(fields.get(Field::Zipcode), Some("97204"));
    }
}
