use crate::user::ExtractUser;
use axum::RequestExt;
use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use serde_derive::Serialize;
use std::collections::HashSet;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize)]
pub(crate) enum Permission {
    Basic, // any logged-in user
    Admin, // role name is exactly "Admin"
}

fn permissions_of(user: &quiznight_model::user::User) -> HashSet<Permission> {
    let mut permissions = HashSet::from([Permission::Basic]);
    if user.is_admin() {
        permissions.insert(Permission::Admin);
    }
    permissions
}

/// Grants extractor for the `/api/admin` router group. A missing or invalid
/// session is rejected here with 401; a valid session without the Admin role
/// reaches the handlers and fails their `#[protect]` check with 403.
pub(crate) async fn extract(request: &mut Request) -> Result<HashSet<Permission>, Response> {
    let user = request
        .extract_parts::<ExtractUser>()
        .await
        .map_err(|(status, message)| (status, message).into_response())?;
    Ok(permissions_of(&user.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiznight_model::user::{User, UserRole};
    use uuid::Uuid;

    fn user_with_role(name: Option<&str>) -> User {
        User {
            id: Uuid::new_v4(),
            username: "u".to_owned(),
            email: "u@example.com".to_owned(),
            full_name: "U".to_owned(),
            role: name.map(|name| UserRole {
                id: Uuid::new_v4(),
                name: name.to_owned(),
            }),
            created_at: chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn test_permissions_of() {
        assert_eq!(permissions_of(&user_with_role(None)), HashSet::from([Permission::Basic]));
        assert_eq!(
            permissions_of(&user_with_role(Some("User"))),
            HashSet::from([Permission::Basic])
        );
        assert_eq!(
            permissions_of(&user_with_role(Some("Admin"))),
            HashSet::from([Permission::Basic, Permission::Admin])
        );
        // The match is exact, not case-insensitive.
        assert_eq!(
            permissions_of(&user_with_role(Some("admin"))),
            HashSet::from([Permission::Basic])
        );
    }
}
