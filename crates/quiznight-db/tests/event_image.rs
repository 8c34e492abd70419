mod common;

use crate::common::fixtures::{create_test_event, create_test_user};
use crate::common::setup_schema;
use quiznight_db::{event_image, question};
use quiznight_entity::question::{QuestionType, Round};
use sea_orm::Database;
use test_log::test;

fn image_for(question_id: uuid::Uuid, unsplash_id: &str) -> event_image::NewEventImage {
    event_image::NewEventImage {
        question_id,
        unsplash_id: unsplash_id.to_owned(),
        image_url: format!("https://images.example/{unsplash_id}"),
        thumbnail_url: Some(format!("https://images.example/{unsplash_id}/thumb")),
        attribution_name: Some("Ana Fotografa".to_owned()),
        attribution_url: Some("https://unsplash.example/@ana".to_owned()),
        width: Some(4000),
        height: Some(3000),
        expires_at: None,
        selected_by_user_id: None,
    }
}

#[test(tokio::test)]
async fn test_reselecting_replaces_the_cached_image() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let host = create_test_user(db).await;
    let ev = create_test_event(db, host.id).await;
    let q = question::Mutation::create_question(
        db,
        ev.id,
        "Name this landmark.",
        &QuestionType::Image,
        None,
        "Eiffel Tower",
        10,
        None,
        None,
        None,
        0,
        &Round::Game,
    )
    .await
    .unwrap();

    event_image::Mutation::select_image(db, image_for(q.id, "first")).await.unwrap();
    let replaced = event_image::Mutation::select_image(db, image_for(q.id, "second")).await.unwrap();
    assert_eq!(replaced.unsplash_id, "second");

    // Still exactly one row for the question.
    let loaded = event_image::Query::find_by_question(db, q.id).await.unwrap().unwrap();
    assert_eq!(loaded.id, replaced.id);
    assert_eq!(loaded.unsplash_id, "second");
}

#[test(tokio::test)]
async fn test_cleanup_removes_only_expired_images() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let host = create_test_user(db).await;
    let ev = create_test_event(db, host.id).await;
    let make_question = |text: &'static str, index: i32| {
        question::Mutation::create_question(
            db,
            ev.id,
            text,
            &QuestionType::Image,
            None,
            "answer",
            10,
            None,
            None,
            None,
            index,
            &Round::Game,
        )
    };
    let q1 = make_question("Landmark one?", 0).await.unwrap();
    let q2 = make_question("Landmark two?", 1).await.unwrap();

    let now = chrono::Utc::now().naive_utc();
    let mut stale = image_for(q1.id, "stale");
    stale.expires_at = Some(now - chrono::Duration::days(1));
    let mut fresh = image_for(q2.id, "fresh");
    fresh.expires_at = Some(now + chrono::Duration::days(1));

    event_image::Mutation::select_image(db, stale).await.unwrap();
    event_image::Mutation::select_image(db, fresh).await.unwrap();

    let removed = event_image::Mutation::delete_expired(db, now).await.unwrap();
    assert_eq!(removed, 1);
    assert!(event_image::Query::find_by_question(db, q1.id).await.unwrap().is_none());
    assert!(event_image::Query::find_by_question(db, q2.id).await.unwrap().is_some());
}
