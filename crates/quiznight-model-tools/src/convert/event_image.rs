use quiznight_entity::event_image::Model as EventImageModel;
use quiznight_model::event_image::EventImage;

use crate::convert::FromDbModel;

impl FromDbModel<EventImageModel> for EventImage {
    fn from_db_model(model: EventImageModel) -> Self {
        Self {
            id: model.id,
            question_id: model.question_id,
            unsplash_id: model.unsplash_id,
            image_url: model.image_url,
            thumbnail_url: model.thumbnail_url,
            attribution_name: model.attribution_name,
            attribution_url: model.attribution_url,
            width: model.width,
            height: model.height,
            expires_at: model.expires_at,
            selected_by_user_id: model.selected_by_user_id,
            created_at: model.created_at,
        }
    }
}
