use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .col(ColumnDef::new(Roles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Roles::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Roles::Description).string())
                    .col(ColumnDef::new(Roles::CreatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Username).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::FullName).string().not_null())
                    .col(ColumnDef::new(Users::RoleId).uuid())
                    .col(ColumnDef::new(Users::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-users-role_id")
                            .from(Users::Table, Users::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .col(ColumnDef::new(Events::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Events::Title).string().not_null())
                    .col(ColumnDef::new(Events::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Events::HostId).uuid().not_null())
                    .col(ColumnDef::new(Events::EventType).string())
                    .col(ColumnDef::new(Events::Status).string().not_null())
                    .col(ColumnDef::new(Events::Description).string())
                    .col(ColumnDef::new(Events::Location).string())
                    .col(ColumnDef::new(Events::ScheduledAt).date_time())
                    .col(ColumnDef::new(Events::PrimaryColor).string())
                    .col(ColumnDef::new(Events::SecondaryColor).string())
                    .col(ColumnDef::new(Events::LogoUrl).string())
                    .col(ColumnDef::new(Events::WelcomeMessage).string())
                    .col(ColumnDef::new(Events::ClosingMessage).string())
                    .col(ColumnDef::new(Events::RefundPolicy).string())
                    .col(ColumnDef::new(Events::AllowParticipants).boolean().not_null())
                    .col(ColumnDef::new(Events::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Events::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-events-host_id")
                            .from(Events::Table, Events::HostId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .col(ColumnDef::new(Questions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Questions::EventId).uuid().not_null())
                    .col(ColumnDef::new(Questions::Question).string().not_null())
                    .col(ColumnDef::new(Questions::Type).string().not_null())
                    .col(ColumnDef::new(Questions::Options).string())
                    .col(ColumnDef::new(Questions::CorrectAnswer).string().not_null())
                    .col(ColumnDef::new(Questions::Points).integer().not_null())
                    .col(ColumnDef::new(Questions::TimeLimitSeconds).integer())
                    .col(ColumnDef::new(Questions::Difficulty).string())
                    .col(ColumnDef::new(Questions::Category).string())
                    .col(ColumnDef::new(Questions::OrderIndex).integer().not_null())
                    .col(ColumnDef::new(Questions::Round).string().not_null())
                    .col(ColumnDef::new(Questions::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-questions-event_id")
                            .from(Questions::Table, Questions::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .col(ColumnDef::new(Teams::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Teams::EventId).uuid().not_null())
                    .col(ColumnDef::new(Teams::Name).string().not_null())
                    .col(ColumnDef::new(Teams::TableNumber).integer())
                    .col(ColumnDef::new(Teams::MaxMembers).integer())
                    .col(ColumnDef::new(Teams::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-teams-event_id")
                            .from(Teams::Table, Teams::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Participants::Table)
                    .col(ColumnDef::new(Participants::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Participants::EventId).uuid().not_null())
                    .col(ColumnDef::new(Participants::TeamId).uuid())
                    .col(ColumnDef::new(Participants::DisplayName).string())
                    .col(
                        ColumnDef::new(Participants::ParticipantToken)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Participants::IsActive).boolean().not_null())
                    .col(ColumnDef::new(Participants::CanSwitchTeam).boolean().not_null())
                    .col(ColumnDef::new(Participants::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-participants-event_id")
                            .from(Participants::Table, Participants::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-participants-team_id")
                            .from(Participants::Table, Participants::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Responses::Table)
                    .col(ColumnDef::new(Responses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Responses::ParticipantId).uuid().not_null())
                    .col(ColumnDef::new(Responses::QuestionId).uuid().not_null())
                    .col(ColumnDef::new(Responses::Answer).string().not_null())
                    .col(ColumnDef::new(Responses::IsCorrect).boolean().not_null())
                    .col(ColumnDef::new(Responses::Points).integer().not_null())
                    .col(ColumnDef::new(Responses::ResponseTimeMs).integer())
                    .col(ColumnDef::new(Responses::TimeRemainingSeconds).integer())
                    .col(ColumnDef::new(Responses::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-responses-participant_id")
                            .from(Responses::Table, Responses::ParticipantId)
                            .to(Participants::Table, Participants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-responses-question_id")
                            .from(Responses::Table, Responses::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FunFacts::Table)
                    .col(ColumnDef::new(FunFacts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(FunFacts::EventId).uuid().not_null())
                    .col(ColumnDef::new(FunFacts::Title).string().not_null())
                    .col(ColumnDef::new(FunFacts::Content).string().not_null())
                    .col(ColumnDef::new(FunFacts::OrderIndex).integer().not_null())
                    .col(ColumnDef::new(FunFacts::IsActive).boolean().not_null())
                    .col(ColumnDef::new(FunFacts::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-fun_facts-event_id")
                            .from(FunFacts::Table, FunFacts::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventImages::Table)
                    .col(ColumnDef::new(EventImages::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(EventImages::QuestionId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(EventImages::UnsplashId).string().not_null())
                    .col(ColumnDef::new(EventImages::ImageUrl).string().not_null())
                    .col(ColumnDef::new(EventImages::ThumbnailUrl).string())
                    .col(ColumnDef::new(EventImages::AttributionName).string())
                    .col(ColumnDef::new(EventImages::AttributionUrl).string())
                    .col(ColumnDef::new(EventImages::Width).integer())
                    .col(ColumnDef::new(EventImages::Height).integer())
                    .col(ColumnDef::new(EventImages::ExpiresAt).date_time())
                    .col(ColumnDef::new(EventImages::SelectedByUserId).uuid())
                    .col(ColumnDef::new(EventImages::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event_images-question_id")
                            .from(EventImages::Table, EventImages::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-event_images-selected_by_user_id")
                            .from(EventImages::Table, EventImages::SelectedByUserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EventImages::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(FunFacts::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Responses::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Participants::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Teams::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Questions::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Events::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Roles::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Roles {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    FullName,
    RoleId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Title,
    Slug,
    HostId,
    EventType,
    Status,
    Description,
    Location,
    ScheduledAt,
    PrimaryColor,
    SecondaryColor,
    LogoUrl,
    WelcomeMessage,
    ClosingMessage,
    RefundPolicy,
    AllowParticipants,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Questions {
    Table,
    Id,
    EventId,
    Question,
    Type,
    Options,
    CorrectAnswer,
    Points,
    TimeLimitSeconds,
    Difficulty,
    Category,
    OrderIndex,
    Round,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
    EventId,
    Name,
    TableNumber,
    MaxMembers,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Participants {
    Table,
    Id,
    EventId,
    TeamId,
    DisplayName,
    ParticipantToken,
    IsActive,
    CanSwitchTeam,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Responses {
    Table,
    Id,
    ParticipantId,
    QuestionId,
    Answer,
    IsCorrect,
    Points,
    ResponseTimeMs,
    TimeRemainingSeconds,
    CreatedAt,
}

#[derive(DeriveIden)]
enum FunFacts {
    Table,
    Id,
    EventId,
    Title,
    Content,
    OrderIndex,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EventImages {
    Table,
    Id,
    QuestionId,
    UnsplashId,
    ImageUrl,
    ThumbnailUrl,
    AttributionName,
    AttributionUrl,
    Width,
    Height,
    ExpiresAt,
    SelectedByUserId,
    CreatedAt,
}
