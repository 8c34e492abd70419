use quiznight_db::{event, user};
use quiznight_entity::event::{ActiveModel as EventActiveModel, Status};
use sea_orm::ActiveValue::Set;
use sea_orm::DbConn;
use uuid::Uuid;

pub async fn create_test_user(db: &DbConn) -> quiznight_entity::user::Model {
    let suffix = Uuid::new_v4().simple().to_string();
    user::Mutation::create_user(
        db,
        &format!("host-{suffix}"),
        &format!("host-{suffix}@example.com"),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$AAAAAAAAAAAAAAAAAAAAAA",
        "Test Host",
        None,
    )
    .await
    .unwrap()
}

pub async fn create_test_event(db: &DbConn, host_id: Uuid) -> quiznight_entity::event::Model {
    let suffix = Uuid::new_v4().simple().to_string();
    let now = chrono::Utc::now().naive_utc();
    event::Mutation::create_event(
        db,
        EventActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set("Wine Night".to_owned()),
            slug: Set(format!("wine-night-{suffix}")),
            host_id: Set(host_id),
            event_type: Set(Some("trivia".to_owned())),
            status: Set(Status::Draft),
            description: Set(None),
            location: Set(None),
            scheduled_at: Set(None),
            primary_color: Set(None),
            secondary_color: Set(None),
            logo_url: Set(None),
            welcome_message: Set(None),
            closing_message: Set(None),
            refund_policy: Set(None),
            allow_participants: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        },
    )
    .await
    .unwrap()
}
