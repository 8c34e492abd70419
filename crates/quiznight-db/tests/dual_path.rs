mod common;

use crate::common::fixtures::{create_test_event, create_test_user};
use crate::common::setup_schema;
use quiznight_db::raw::RawQuery;
use quiznight_db::{fun_fact, participant, question, team};
use quiznight_entity::question::{QuestionType, Round};
use quiznight_model_tools::convert::IntoModel;
use sea_orm::Database;
use test_log::test;

/// The raw-SQL endpoints and the ORM endpoints are two implementations of the
/// same read contract: for the same rows they must serialize to the same
/// bytes. This pins that contract at the query layer.
#[test(tokio::test)]
async fn test_team_reads_agree_byte_for_byte() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let host = create_test_user(db).await;
    let ev = create_test_event(db, host.id).await;
    team::Mutation::create_team(db, ev.id, "The Know-It-Ales", Some(2), Some(6)).await.unwrap();
    team::Mutation::create_team(db, ev.id, "Quizteama Aguilera", Some(1), None).await.unwrap();

    let via_orm: Vec<quiznight_model::team::Team> = team::Query::get_teams_by_event(db, ev.id)
        .await
        .unwrap()
        .into_iter()
        .map(IntoModel::into_model)
        .collect();
    let via_raw: Vec<quiznight_model::team::Team> = RawQuery::get_teams_by_event(db, ev.id)
        .await
        .unwrap()
        .into_iter()
        .map(IntoModel::into_model)
        .collect();

    assert_eq!(
        serde_json::to_string(&via_orm).unwrap(),
        serde_json::to_string(&via_raw).unwrap()
    );
}

#[test(tokio::test)]
async fn test_question_reads_agree_byte_for_byte() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let host = create_test_user(db).await;
    let ev = create_test_event(db, host.id).await;
    question::Mutation::create_question(
        db,
        ev.id,
        "Name the grape of Chablis.",
        &QuestionType::MultipleChoice,
        Some(r#"[{"option":"Chardonnay","correct":true},{"option":"Riesling","correct":false}]"#),
        "Chardonnay",
        10,
        Some(30),
        Some("medium"),
        Some("wine"),
        1,
        &Round::Game,
    )
    .await
    .unwrap();
    question::Mutation::create_question(
        db,
        ev.id,
        "The Great Wall is visible from the Moon.",
        &QuestionType::TrueFalse,
        None,
        "false",
        5,
        None,
        None,
        None,
        0,
        &Round::TieBreaker,
    )
    .await
    .unwrap();

    let via_orm: Vec<quiznight_model::question::Question> = question::Query::get_questions_by_event(db, ev.id)
        .await
        .unwrap()
        .into_iter()
        .map(IntoModel::into_model)
        .collect();
    let via_raw: Vec<quiznight_model::question::Question> = RawQuery::get_questions_by_event(db, ev.id)
        .await
        .unwrap()
        .into_iter()
        .map(IntoModel::into_model)
        .collect();

    let orm_json = serde_json::to_string(&via_orm).unwrap();
    assert_eq!(orm_json, serde_json::to_string(&via_raw).unwrap());

    // Timestamps must come out as unix-seconds strings, on both paths.
    let value: serde_json::Value = serde_json::from_str(&orm_json).unwrap();
    let created_at = value[0]["created_at"].as_str().unwrap();
    assert!(created_at.parse::<i64>().is_ok());
    // Ordering follows order_index: the tie breaker was created second but
    // carries the lower index.
    assert_eq!(value[0]["round"], "tie_breaker");
}

#[test(tokio::test)]
async fn test_participant_and_fun_fact_reads_agree() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let host = create_test_user(db).await;
    let ev = create_test_event(db, host.id).await;
    let t = team::Mutation::create_team(db, ev.id, "Table Nine", Some(9), None).await.unwrap();
    participant::Mutation::create_participant(db, ev.id, Some(t.id), Some("Alex"), true)
        .await
        .unwrap();
    participant::Mutation::create_participant(db, ev.id, None, None, false)
        .await
        .unwrap();
    fun_fact::Mutation::create_fun_fact(db, ev.id, "House rule", "No phones during picture rounds.", 0)
        .await
        .unwrap();

    let participants_orm: Vec<quiznight_model::participant::Participant> =
        participant::Query::get_participants_by_event(db, ev.id)
            .await
            .unwrap()
            .into_iter()
            .map(IntoModel::into_model)
            .collect();
    let participants_raw: Vec<quiznight_model::participant::Participant> =
        RawQuery::get_participants_by_event(db, ev.id)
            .await
            .unwrap()
            .into_iter()
            .map(IntoModel::into_model)
            .collect();
    assert_eq!(
        serde_json::to_string(&participants_orm).unwrap(),
        serde_json::to_string(&participants_raw).unwrap()
    );

    let facts_orm: Vec<quiznight_model::fun_fact::FunFact> = fun_fact::Query::get_fun_facts_by_event(db, ev.id)
        .await
        .unwrap()
        .into_iter()
        .map(IntoModel::into_model)
        .collect();
    let facts_raw: Vec<quiznight_model::fun_fact::FunFact> = RawQuery::get_fun_facts_by_event(db, ev.id)
        .await
        .unwrap()
        .into_iter()
        .map(IntoModel::into_model)
        .collect();
    assert_eq!(
        serde_json::to_string(&facts_orm).unwrap(),
        serde_json::to_string(&facts_raw).unwrap()
    );
}
