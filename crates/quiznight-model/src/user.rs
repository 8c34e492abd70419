use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A user as exposed over the API. Password material never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(with = "crate::timestamp::unix_seconds")]
    #[schema(value_type = String)]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct UserRole {
    pub id: Uuid,
    pub name: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.as_ref().is_some_and(|role| role.name == "Admin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        let id = Uuid::new_v4();
        let created_at = chrono::DateTime::from_timestamp(1700000000, 0).unwrap().naive_utc();
        let user = User {
            id,
            username: "quizmaster".to_owned(),
            email: "host@example.com".to_owned(),
            full_name: "Quiz Master".to_owned(),
            role: None,
            created_at,
        };
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            format!(
                r#"{{"id":"{id}","username":"quizmaster","email":"host@example.com","full_name":"Quiz Master","created_at":"1700000000"}}"#
            )
        );
    }

    #[test]
    fn test_is_admin() {
        let mut user = User {
            id: Uuid::new_v4(),
            username: String::new(),
            email: String::new(),
            full_name: String::new(),
            role: None,
            created_at: chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        };
        assert!(!user.is_admin());
        user.role = Some(UserRole {
            id: Uuid::new_v4(),
            name: "User".to_owned(),
        });
        assert!(!user.is_admin());
        user.role.as_mut().unwrap().name = "Admin".to_owned();
        assert!(user.is_admin());
    }
}
