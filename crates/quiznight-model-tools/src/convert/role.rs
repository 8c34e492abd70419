use quiznight_entity::role::Model as RoleModel;
use quiznight_model::role::Role;

use crate::convert::FromDbModel;

impl FromDbModel<(RoleModel, u64)> for Role {
    fn from_db_model((role, user_count): (RoleModel, u64)) -> Self {
        Self {
            id: role.id,
            name: role.name,
            description: role.description,
            user_count,
            created_at: role.created_at,
        }
    }
}
