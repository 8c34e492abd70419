use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    FillBlank,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionRound {
    Game,
    Training,
    TieBreaker,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct QuestionOption {
    pub option: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct Question {
    pub id: Uuid,
    pub event_id: Uuid,
    pub question: String,
    pub r#type: QuestionType,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub options: Vec<QuestionOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    pub points: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub order_index: i32,
    pub round: QuestionRound,
    #[serde(with = "crate::timestamp::unix_seconds")]
    #[schema(value_type = String)]
    pub created_at: NaiveDateTime,
}

impl Question {
    /// Strips everything that would give the answer away before a question is
    /// shown to participants.
    pub fn sanitize_for_participants(&mut self) {
        self.correct_answer = None;
        for option in &mut self.options {
            option.correct = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            question: "Which grape is used for Chablis?".to_owned(),
            r#type: QuestionType::MultipleChoice,
            options: vec![
                QuestionOption {
                    option: "Chardonnay".to_owned(),
                    correct: Some(true),
                },
                QuestionOption {
                    option: "Riesling".to_owned(),
                    correct: Some(false),
                },
            ],
            correct_answer: Some("Chardonnay".to_owned()),
            points: 10,
            time_limit_seconds: Some(30),
            difficulty: None,
            category: Some("wine".to_owned()),
            order_index: 1,
            round: QuestionRound::Game,
            created_at: chrono::DateTime::from_timestamp(1700000000, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn test_sanitize_for_participants() {
        let mut q = question();
        q.sanitize_for_participants();
        assert!(q.correct_answer.is_none());
        assert!(q.options.iter().all(|o| o.correct.is_none()));
    }

    #[test]
    fn test_sanitized_serialization_omits_answers() {
        let mut q = question();
        q.sanitize_for_participants();
        let json = serde_json::to_string(&q).unwrap();
        assert!(!json.contains("correct"));
        assert!(json.contains(r#""created_at":"1700000000""#));
    }
}
