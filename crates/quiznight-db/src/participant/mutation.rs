use base64::Engine;
use quiznight_entity::participant::{ActiveModel, Entity, Model};
use ring::rand::{self, SecureRandom};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

fn generate_participant_token() -> String {
    let rng = rand::SystemRandom::new();
    let mut bytes = [0u8; 16];
    // getentropy is the only failure mode here and does not fail on any
    // supported platform.
    rng.fill(&mut bytes).expect("failed to generate random bytes");
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

impl Mutation {
    pub async fn create_participant<C: ConnectionTrait>(
        conn: &C,
        event_id: Uuid,
        team_id: Option<Uuid>,
        display_name: Option<&str>,
        can_switch_team: bool,
    ) -> Result<Model, DbErr> {
        let participant = ActiveModel {
            id: Set(Uuid::new_v4()),
            event_id: Set(event_id),
            team_id: Set(team_id),
            display_name: Set(display_name.map(std::string::ToString::to_string)),
            participant_token: Set(generate_participant_token()),
            is_active: Set(true),
            can_switch_team: Set(can_switch_team),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        participant.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to create participant");
        })
    }

    pub async fn set_team<C: ConnectionTrait>(
        conn: &C,
        participant_id: Uuid,
        team_id: Option<Uuid>,
    ) -> Result<Model, DbErr> {
        let participant = ActiveModel {
            id: sea_orm::ActiveValue::Unchanged(participant_id),
            team_id: Set(team_id),
            ..Default::default()
        };
        participant.update(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to move participant");
        })
    }

    pub async fn set_active<C: ConnectionTrait>(
        conn: &C,
        participant_id: Uuid,
        is_active: bool,
    ) -> Result<Model, DbErr> {
        let participant = ActiveModel {
            id: sea_orm::ActiveValue::Unchanged(participant_id),
            is_active: Set(is_active),
            ..Default::default()
        };
        participant.update(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to update participant");
        })
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, participant_id: Uuid) -> Result<(), DbErr> {
        let res = Entity::delete_by_id(participant_id).exec(conn).await;
        if let Err(error) = res {
            tracing::error!(error = &error as &dyn Error, "failed to delete participant");
            return Err(error);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_participant_token() {
        let token = generate_participant_token();
        let decoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.decode(&token).unwrap();
        assert_eq!(decoded.len(), 16);
        assert_ne!(generate_participant_token(), token);
    }
}
