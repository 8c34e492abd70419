mod common;

use crate::common::fixtures::create_test_user;
use crate::common::setup_schema;
use quiznight_db::{role, user};
use sea_orm::Database;
use test_log::test;

#[test(tokio::test)]
async fn test_roles_are_seeded() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let roles = role::Query::get_roles(db).await.unwrap();
    let names: Vec<&str> = roles.iter().map(|role| role.name.as_str()).collect();
    assert_eq!(names, vec!["Admin", "User"]);
}

#[test(tokio::test)]
async fn test_create_role_enforces_unique_name() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    role::Mutation::create_role(db, "Moderator", Some("Can review questions"))
        .await
        .unwrap();
    assert!(role::Mutation::create_role(db, "Moderator", None).await.is_err());
}

#[test(tokio::test)]
async fn test_delete_role_clears_user_assignment() {
    let db = &Database::connect("sqlite::memory:").await.unwrap();
    setup_schema(db).await.unwrap();

    let moderator = role::Mutation::create_role(db, "Moderator", None).await.unwrap();
    let member = create_test_user(db).await;
    user::Mutation::set_role(db, member.id, Some(moderator.id)).await.unwrap();

    role::Mutation::delete(db, moderator.id).await.unwrap();

    // The user survives with the role reference cleared.
    let (loaded, loaded_role) = user::Query::find_user_by_id(db, member.id).await.unwrap().unwrap();
    assert_eq!(loaded.id, member.id);
    assert!(loaded_role.is_none());
}
