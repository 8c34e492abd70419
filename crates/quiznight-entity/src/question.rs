use sea_orm::entity::prelude::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "question_type_enum")]
pub enum QuestionType {
    #[sea_orm(string_value = "multiple_choice")]
    MultipleChoice,
    #[sea_orm(string_value = "true_false")]
    TrueFalse,
    #[sea_orm(string_value = "fill_blank")]
    FillBlank,
    #[sea_orm(string_value = "image")]
    Image,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "question_round_enum")]
pub enum Round {
    #[sea_orm(string_value = "game")]
    Game,
    #[sea_orm(string_value = "training")]
    Training,
    #[sea_orm(string_value = "tie_breaker")]
    TieBreaker,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub event_id: Uuid,
    pub question: String,
    pub r#type: QuestionType,
    pub options: Option<String>,
    pub correct_answer: String,
    pub points: i32,
    pub time_limit_seconds: Option<i32>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub order_index: i32,
    pub round: Round,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id"
    )]
    Event,
    #[sea_orm(has_many = "super::response::Entity")]
    Response,
    #[sea_orm(has_one = "super::event_image::Entity")]
    EventImage,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::response::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Response.def()
    }
}

impl Related<super::event_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
