use quiznight_entity::role::Model as RoleModel;
use quiznight_entity::user::Model as UserModel;
use quiznight_model::user::{User, UserRole};

use crate::convert::FromDbModel;

impl FromDbModel<(UserModel, Option<RoleModel>)> for User {
    fn from_db_model((user, role): (UserModel, Option<RoleModel>)) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            role: role.map(|role| UserRole {
                id: role.id,
                name: role.name,
            }),
            created_at: user.created_at,
        }
    }
}
