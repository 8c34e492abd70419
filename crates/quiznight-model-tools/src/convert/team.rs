use quiznight_entity::team::Model as TeamModel;
use quiznight_model::team::Team;

use crate::convert::FromDbModel;

impl FromDbModel<TeamModel> for Team {
    fn from_db_model(model: TeamModel) -> Self {
        Self {
            id: model.id,
            event_id: model.event_id,
            name: model.name,
            table_number: model.table_number,
            max_members: model.max_members,
            created_at: model.created_at,
        }
    }
}
