//! 用户字段校验
//!
//! 按固定顺序检查规则，只返回第一个失败的规则。不做任何规范化（不去空白、不转小写）。

use std::sync::LazyLock;

use regex::Regex;

use super::model::{Field, UserFields};

/// 名字和邮箱允许的最大字符数
pub const MAX_FIELD_LENGTH: usize = 50;

// `$` 只匹配文本的真正末尾，不放过末尾多出的换行："12345\n" 有意拒绝。
static ZIPCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("zipcode pattern"));

// 粗略检查：@ 两侧至少各有一个字符
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^.+@.+").expect("email pattern"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("firstname too long")]
    FirstnameTooLong,
    #[error("lastname too long")]
    LastnameTooLong,
    #[error("zipcode must be formatted as either NNNNN or NNNNN-NNNN")]
    InvalidZipcode,
    #[error("email too long")]
    EmailTooLong,
    #[error("invalid email")]
    InvalidEmail,
}

fn too_long(fields: &UserFields, field: Field) -> bool {
    fields
        .get(field)
        .is_some_and(|value| value.chars().count() > MAX_FIELD_LENGTH)
}

/// 缺省或空字段直接通过
fn present(fields: &UserFields, field: Field) -> Option<&str> {
    fields.get(field).filter(|value| !value.is_empty())
}

pub fn validate_user(fields: &UserFields) -> Result<(), ValidationError> {
    if too_long(fields, Field::Firstname) {
        return Err(ValidationError::FirstnameTooLong);
    }
    if too_long(fields, Field::Lastname) {
        return Err(ValidationError::LastnameTooLong);
    }

    if let Some(zipcode) = present(fields, Field::Zipcode) {
        if !ZIPCODE_RE.is_match(zipcode) {
            return Err(ValidationError::InvalidZipcode);
        }
    }

    if too_long(fields, Field::Email) {
        return Err(ValidationError::EmailTooLong);
    }
    if let Some(email) = present(fields, Field::Email) {
        if !EMAIL_RE.is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> UserFields {
        UserFields::default()
            .with(Field::Firstname, "The")
            .with(Field::Lastname, "Doctor")
            .with(Field::Email, "a@b.com")
            .with(Field::Zipcode, "97204")
    }

    #[test]
    fn test_accepts_complete_user() {
        assert_eq!(validate_user(&valid_user()), Ok(()));
    }

    #[test]
    fn test_accepts_empty_and_missing_fields() {
        assert_eq!(validate_user(&UserFields::default()), Ok(()));

        let empty = UserFields::default()
            .with(Field::Zipcode, "")
            .with(Field::Email, "");
        assert_eq!(validate_user(&empty), Ok(()));
    }

    #[test]
    fn test_name_length_limit() {
        let at_limit = valid_user().with(Field::Firstname, "x".repeat(50));
        assert_eq!(validate_user(&at_limit), Ok(()));

        let first = valid_user().with(Field::Firstname, "x".repeat(51));
        assert_eq!(validate_user(&first), Err(ValidationError::FirstnameTooLong));

        let last = valid_user().with(Field::Lastname, "x".repeat(1000));
        assert_eq!(validate_user(&last), Err(ValidationError::LastnameTooLong));
    }

    #[test]
    fn test_lastname_boundary() {
        let at_limit = valid_user().with(Field::Lastname, "x".repeat(50));
        assert_eq!(validate_user(&at_limit), Ok(()));

        let over = valid_user().with(Field::Lastname, "x".repeat(51));
        assert_eq!(validate_user(&over), Err(ValidationError::LastnameTooLong));
    }

    #[test]
    fn test_email_boundary() {
        // 44 + "@b.com" = 50 个字符
        let at_limit = valid_user().with(Field::Email, format!("{}@b.com", "a".repeat(44)));
        assert_eq!(validate_user(&at_limit), Ok(()));

        let over = valid_user().with(Field::Email, format!("{}@b.com", "a".repeat(45)));
        assert_eq!(validate_user(&over), Err(ValidationError::EmailTooLong));
    }

    #[test]
    fn test_length_counts_characters() {
        // 50 个双字节字符，字节数超过 50
        let name = valid_user().with(Field::Firstname, "é".repeat(50));
        assert_eq!(validate_user(&name), Ok(()));
    }

    #[test]
    fn test_zipcode_format() {
        for ok in ["97204", "12345-6789"] {
            assert_eq!(validate_user(&valid_user().with(Field::Zipcode, ok)), Ok(()));
        }
        for bad in ["1234", "AAAAA-1234", "123456", "12345-678", "12345\n", " 97204"] {
            assert_eq!(
                validate_user(&valid_user().with(Field::Zipcode, bad)),
                Err(ValidationError::InvalidZipcode),
                "zipcode {bad:?}"
            );
        }
    }

    #[test]
    fn test_email_rules() {
        let bad = valid_user().with(Field::Email, "foo-at-bar.com");
        assert_eq!(validate_user(&bad), Err(ValidationError::InvalidEmail));

        let no_local = valid_user().with(Field::Email, "@bar.com");
        assert_eq!(validate_user(&no_local), Err(ValidationError::InvalidEmail));

        let long = valid_user().with(Field::Email, format!("{}@b.com", "a".repeat(50)));
        assert_eq!(validate_user(&long), Err(ValidationError::EmailTooLong));
    }

    #[test]
    fn test_first_failure_wins() {
        let fields = valid_user()
            .with(Field::Firstname, "Multiple")
            .with(Field::Zipcode, "AAAAA-1234")
            .with(Field::Email, "invalid");
        assert_eq!(validate_user(&fields), Err(ValidationError::InvalidZipcode));

        let fields = valid_user()
            .with(Field::Lastname, "x".repeat(51))
            .with(Field::Firstname, "x".repeat(51));
        assert_eq!(validate_user(&fields), Err(ValidationError::FirstnameTooLong));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::InvalidZipcode.to_string(),
            "zipcode must be formatted as either NNNNN or NNNNN-NNNN"
        );
        assert_eq!(ValidationError::InvalidEmail.to_string(), "invalid email");
        assert_eq!(ValidationError::FirstnameTooLong.to_string(), "firstname too long");
    }
}
