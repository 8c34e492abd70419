mod common;

use crate::common::fixtures::{create_test_event, create_test_user};
use crate::common::setup_schema;
use quiznight_db::{participant, question, response, team};
use quiznight_entity::question::{QuestionType, Round};
use sea_orm::Database;
use test_log::test;

#[test(tokio::test)]
async fn test_leaderboard_totals_and_order() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let host = create_test_user(db).await;
    let ev = create_test_event(db, host.id).await;

    let sharks = team::Mutation::create_team(db, ev.id, "Sharks", Some(1), None).await.unwrap();
    let jets = team::Mutation::create_team(db, ev.id, "Jets", Some(2), None).await.unwrap();

    let p1 = participant::Mutation::create_participant(db, ev.id, Some(sharks.id), Some("Ana"), true)
        .await
        .unwrap();
    let p2 = participant::Mutation::create_participant(db, ev.id, Some(jets.id), Some("Ben"), true)
        .await
        .unwrap();

    let q1 = question::Mutation::create_question(
        db, ev.id, "2 + 2?", &QuestionType::FillBlank, None, "4", 10, None, None, None, 0, &Round::Game,
    )
    .await
    .unwrap();
    let q2 = question::Mutation::create_question(
        db, ev.id, "3 + 3?", &QuestionType::FillBlank, None, "6", 10, None, None, None, 1, &Round::Game,
    )
    .await
    .unwrap();

    response::Mutation::create_response(db, p1.id, q1.id, "4", true, 10, None, None).await.unwrap();
    response::Mutation::create_response(db, p1.id, q2.id, "5", false, 0, None, None).await.unwrap();
    response::Mutation::create_response(db, p2.id, q1.id, "4", true, 10, None, None).await.unwrap();
    response::Mutation::create_response(db, p2.id, q2.id, "6", true, 10, None, None).await.unwrap();

    let rows = response::Query::leaderboard(db, ev.id).await.unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].team_name, "Jets");
    assert_eq!(rows[0].total_points, 20);
    assert_eq!(rows[0].correct_answers, 2);

    assert_eq!(rows[1].team_name, "Sharks");
    assert_eq!(rows[1].total_points, 10);
    assert_eq!(rows[1].correct_answers, 1);
}

#[test(tokio::test)]
async fn test_duplicate_answer_lookup() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let host = create_test_user(db).await;
    let ev = create_test_event(db, host.id).await;
    let p = participant::Mutation::create_participant(db, ev.id, None, None, true).await.unwrap();
    let q = question::Mutation::create_question(
        db, ev.id, "2 + 2?", &QuestionType::FillBlank, None, "4", 10, None, None, None, 0, &Round::Game,
    )
    .await
    .unwrap();

    assert!(response::Query::find_response(db, p.id, q.id).await.unwrap().is_none());
    response::Mutation::create_response(db, p.id, q.id, "4", true, 10, None, None).await.unwrap();
    assert!(response::Query::find_response(db, p.id, q.id).await.unwrap().is_some());
}
