mod common;

use crate::common::fixtures::{create_test_event, create_test_user};
use crate::common::setup_schema;
use quiznight_db::{event, event_image, fun_fact, participant, question, response, team, user};
use quiznight_entity::question::{QuestionType, Round};
use sea_orm::{Database, EntityTrait, PaginatorTrait};
use test_log::test;

#[test(tokio::test)]
async fn test_delete_event_cascades_to_children() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let host = create_test_user(db).await;
    let ev = create_test_event(db, host.id).await;

    let q = question::Mutation::create_question(
        db,
        ev.id,
        "What is the capital of Australia?",
        &QuestionType::FillBlank,
        None,
        "Canberra",
        10,
        Some(30),
        None,
        Some("geography"),
        0,
        &Round::Game,
    )
    .await
    .unwrap();
    let t = team::Mutation::create_team(db, ev.id, "Table Four", Some(4), Some(6)).await.unwrap();
    let p = participant::Mutation::create_participant(db, ev.id, Some(t.id), Some("Dana"), true)
        .await
        .unwrap();
    fun_fact::Mutation::create_fun_fact(db, ev.id, "Did you know?", "Canberra was purpose-built.", 0)
        .await
        .unwrap();
    response::Mutation::create_response(db, p.id, q.id, "Canberra", true, 10, Some(4200), Some(12))
        .await
        .unwrap();
    event_image::Mutation::select_image(
        db,
        event_image::NewEventImage {
            question_id: q.id,
            unsplash_id: "abc123".to_owned(),
            image_url: "https://images.example/abc123".to_owned(),
            thumbnail_url: None,
            attribution_name: None,
            attribution_url: None,
            width: None,
            height: None,
            expires_at: None,
            selected_by_user_id: Some(host.id),
        },
    )
    .await
    .unwrap();

    event::Mutation::delete(db, ev.id).await.unwrap();

    assert!(event::Query::find_event_by_id(db, ev.id).await.unwrap().is_none());
    assert_eq!(quiznight_entity::question::Entity::find().count(db).await.unwrap(), 0);
    assert_eq!(quiznight_entity::team::Entity::find().count(db).await.unwrap(), 0);
    assert_eq!(quiznight_entity::participant::Entity::find().count(db).await.unwrap(), 0);
    assert_eq!(quiznight_entity::fun_fact::Entity::find().count(db).await.unwrap(), 0);
    // Responses and cached images hang off the deleted children.
    assert_eq!(quiznight_entity::response::Entity::find().count(db).await.unwrap(), 0);
    assert_eq!(quiznight_entity::event_image::Entity::find().count(db).await.unwrap(), 0);

    // The host is untouched.
    assert!(user::Query::find_user_by_id(db, host.id).await.unwrap().is_some());
}

#[test(tokio::test)]
async fn test_deleting_host_with_events_is_restricted() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let host = create_test_user(db).await;
    let ev = create_test_event(db, host.id).await;

    assert!(user::Mutation::delete(db, host.id).await.is_err());

    event::Mutation::delete(db, ev.id).await.unwrap();
    user::Mutation::delete(db, host.id).await.unwrap();
}

#[test(tokio::test)]
async fn test_deleting_team_keeps_participants() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let host = create_test_user(db).await;
    let ev = create_test_event(db, host.id).await;
    let t = team::Mutation::create_team(db, ev.id, "Table One", Some(1), None).await.unwrap();
    let p = participant::Mutation::create_participant(db, ev.id, Some(t.id), None, true)
        .await
        .unwrap();

    team::Mutation::delete(db, t.id).await.unwrap();

    let loaded = participant::Query::find_participant_by_id(db, p.id).await.unwrap().unwrap();
    assert_eq!(loaded.team_id, None);
}

#[test(tokio::test)]
async fn test_event_slugs_are_unique() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let host = create_test_user(db).await;
    let first = create_test_event(db, host.id).await;

    let clash = create_test_event(db, host.id).await;
    // Direct collision on the unique column must be rejected.
    let res = event::Mutation::update_event(
        db,
        quiznight_entity::event::ActiveModel {
            id: sea_orm::ActiveValue::Unchanged(clash.id),
            slug: sea_orm::ActiveValue::Set(first.slug.clone()),
            ..Default::default()
        },
    )
    .await;
    assert!(res.is_err());
}
