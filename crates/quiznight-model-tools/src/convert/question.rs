use quiznight_entity::question::Model as QuestionModel;
use quiznight_entity::question::QuestionType as QuestionTypeModel;
use quiznight_entity::question::Round as RoundModel;
use quiznight_model::question::{Question, QuestionOption, QuestionRound, QuestionType};

use crate::convert::{FromDbModel, IntoDbModel};

impl FromDbModel<QuestionModel> for Question {
    fn from_db_model(model: QuestionModel) -> Self {
        // Options are stored as a JSON-encoded string; rows written before the
        // column existed decode to an empty list.
        let options: Vec<QuestionOption> = if let Some(options_json) = model.options {
            serde_json::from_str(&options_json).unwrap_or_default()
        } else {
            Vec::new()
        };

        Self {
            id: model.id,
            event_id: model.event_id,
            question: model.question,
            r#type: FromDbModel::from_db_model(model.r#type),
            options,
            correct_answer: Some(model.correct_answer),
            points: model.points,
            time_limit_seconds: model.time_limit_seconds,
            difficulty: model.difficulty,
            category: model.category,
            order_index: model.order_index,
            round: FromDbModel::from_db_model(model.round),
            created_at: model.created_at,
        }
    }
}

impl FromDbModel<QuestionTypeModel> for QuestionType {
    fn from_db_model(model: QuestionTypeModel) -> Self {
        match model {
            QuestionTypeModel::MultipleChoice => QuestionType::MultipleChoice,
            QuestionTypeModel::TrueFalse => QuestionType::TrueFalse,
            QuestionTypeModel::FillBlank => QuestionType::FillBlank,
            QuestionTypeModel::Image => QuestionType::Image,
        }
    }
}

impl IntoDbModel<QuestionTypeModel> for QuestionType {
    fn into_db_model(self) -> QuestionTypeModel {
        match self {
            QuestionType::MultipleChoice => QuestionTypeModel::MultipleChoice,
            QuestionType::TrueFalse => QuestionTypeModel::TrueFalse,
            QuestionType::FillBlank => QuestionTypeModel::FillBlank,
            QuestionType::Image => QuestionTypeModel::Image,
        }
    }
}

impl FromDbModel<RoundModel> for QuestionRound {
    fn from_db_model(model: RoundModel) -> Self {
        match model {
            RoundModel::Game => QuestionRound::Game,
            RoundModel::Training => QuestionRound::Training,
            RoundModel::TieBreaker => QuestionRound::TieBreaker,
        }
    }
}

impl IntoDbModel<RoundModel> for QuestionRound {
    fn into_db_model(self) -> RoundModel {
        match self {
            QuestionRound::Game => RoundModel::Game,
            QuestionRound::Training => RoundModel::Training,
            QuestionRound::TieBreaker => RoundModel::TieBreaker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::IntoModel;

    #[test]
    fn test_options_json_round_trip() {
        let created_at = chrono::DateTime::from_timestamp(1700000000, 0).unwrap().naive_utc();
        let model = QuestionModel {
            id: uuid::Uuid::new_v4(),
            event_id: uuid::Uuid::new_v4(),
            question: "The Eiffel Tower is taller than the Chrysler Building.".to_owned(),
            r#type: QuestionTypeModel::TrueFalse,
            options: Some(r#"[{"option":"true","correct":true},{"option":"false"}]"#.to_owned()),
            correct_answer: "true".to_owned(),
            points: 5,
            time_limit_seconds: None,
            difficulty: None,
            category: None,
            order_index: 0,
            round: RoundModel::Game,
            created_at,
        };

        let question: Question = model.into_model();
        assert_eq!(question.options.len(), 2);
        assert_eq!(question.options[0].correct, Some(true));
        assert_eq!(question.options[1].correct, None);
        assert_eq!(question.correct_answer.as_deref(), Some("true"));
    }

    #[test]
    fn test_malformed_options_become_empty() {
        let created_at = chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        let model = QuestionModel {
            id: uuid::Uuid::new_v4(),
            event_id: uuid::Uuid::new_v4(),
            question: "?".to_owned(),
            r#type: QuestionTypeModel::FillBlank,
            options: Some("not json".to_owned()),
            correct_answer: "x".to_owned(),
            points: 1,
            time_limit_seconds: None,
            difficulty: None,
            category: None,
            order_index: 0,
            round: RoundModel::Training,
            created_at,
        };

        let question: Question = model.into_model();
        assert!(question.options.is_empty());
    }
}
