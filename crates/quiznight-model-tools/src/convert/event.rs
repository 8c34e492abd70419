use quiznight_entity::event::{Model as EventModel, Status as EventStatusModel};
use quiznight_model::event::{Event, EventStatus};

use crate::convert::{FromDbModel, IntoDbModel};

impl FromDbModel<EventModel> for Event {
    fn from_db_model(model: EventModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            host_id: model.host_id,
            event_type: model.event_type,
            status: FromDbModel::from_db_model(model.status),
            description: model.description,
            location: model.location,
            scheduled_at: model.scheduled_at,
            primary_color: model.primary_color,
            secondary_color: model.secondary_color,
            logo_url: model.logo_url,
            welcome_message: model.welcome_message,
            closing_message: model.closing_message,
            refund_policy: model.refund_policy,
            allow_participants: model.allow_participants,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl FromDbModel<EventStatusModel> for EventStatus {
    fn from_db_model(model: EventStatusModel) -> Self {
        match model {
            EventStatusModel::Draft => EventStatus::Draft,
            EventStatusModel::Active => EventStatus::Active,
            EventStatusModel::Completed => EventStatus::Completed,
            EventStatusModel::Cancelled => EventStatus::Cancelled,
        }
    }
}

impl IntoDbModel<EventStatusModel> for EventStatus {
    fn into_db_model(self) -> EventStatusModel {
        match self {
            EventStatus::Draft => EventStatusModel::Draft,
            EventStatus::Active => EventStatusModel::Active,
            EventStatus::Completed => EventStatusModel::Completed,
            EventStatus::Cancelled => EventStatusModel::Cancelled,
        }
    }
}
