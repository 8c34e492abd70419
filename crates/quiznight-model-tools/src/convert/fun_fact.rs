use quiznight_entity::fun_fact::Model as FunFactModel;
use quiznight_model::fun_fact::FunFact;

use crate::convert::FromDbModel;

impl FromDbModel<FunFactModel> for FunFact {
    fn from_db_model(model: FunFactModel) -> Self {
        Self {
            id: model.id,
            event_id: model.event_id,
            title: model.title,
            content: model.content,
            order_index: model.order_index,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}
