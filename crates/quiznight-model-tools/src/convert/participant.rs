use quiznight_entity::participant::Model as ParticipantModel;
use quiznight_model::participant::Participant;

use crate::convert::FromDbModel;

impl FromDbModel<ParticipantModel> for Participant {
    fn from_db_model(model: ParticipantModel) -> Self {
        Self {
            id: model.id,
            event_id: model.event_id,
            team_id: model.team_id,
            display_name: model.display_name,
            participant_token: model.participant_token,
            is_active: model.is_active,
            can_switch_team: model.can_switch_team,
            created_at: model.created_at,
        }
    }
}
