mod common;

use crate::common::fixtures::create_test_user;
use crate::common::setup_schema;
use quiznight_db::{role, user};
use sea_orm::Database;
use test_log::test;

#[test(tokio::test)]
async fn test_create_and_load_user() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let created = create_test_user(db).await;

    let (loaded, loaded_role) = user::Query::find_user_by_id(db, created.id).await.unwrap().unwrap();
    assert_eq!(loaded.id, created.id);
    assert_eq!(loaded.email, created.email);
    assert!(loaded_role.is_none());

    let by_email = user::Query::find_user_by_email(db, &created.email).await.unwrap();
    assert_eq!(by_email.unwrap().0.id, created.id);
}

#[test(tokio::test)]
async fn test_duplicate_email_is_rejected() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let first = create_test_user(db).await;
    let res = user::Mutation::create_user(db, "someone-else", &first.email, "hash", "Someone Else", None).await;
    assert!(res.is_err());
}

#[test(tokio::test)]
async fn test_assign_and_clear_role() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let created = create_test_user(db).await;
    let admin = role::Query::find_role_by_name(db, "Admin").await.unwrap().unwrap();

    user::Mutation::set_role(db, created.id, Some(admin.id)).await.unwrap();
    let (_, loaded_role) = user::Query::find_user_by_id(db, created.id).await.unwrap().unwrap();
    assert_eq!(loaded_role.unwrap().name, "Admin");

    user::Mutation::set_role(db, created.id, None).await.unwrap();
    let (_, loaded_role) = user::Query::find_user_by_id(db, created.id).await.unwrap().unwrap();
    assert!(loaded_role.is_none());
}

#[test(tokio::test)]
async fn test_delete_user() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let created = create_test_user(db).await;
    user::Mutation::delete(db, created.id).await.unwrap();
    assert!(user::Query::find_user_by_id(db, created.id).await.unwrap().is_none());
}

#[test(tokio::test)]
async fn test_count_by_role() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let admin = role::Query::find_role_by_name(db, "Admin").await.unwrap().unwrap();
    assert_eq!(user::Query::count_by_role(db, admin.id).await.unwrap(), 0);

    let a = create_test_user(db).await;
    let b = create_test_user(db).await;
    user::Mutation::set_role(db, a.id, Some(admin.id)).await.unwrap();
    user::Mutation::set_role(db, b.id, Some(admin.id)).await.unwrap();

    assert_eq!(user::Query::count_by_role(db, admin.id).await.unwrap(), 2);
}
