pub mod fixtures;

use sea_orm::{ConnectionTrait, DbConn, DbErr};

pub async fn setup_schema(db: &DbConn) -> Result<(), DbErr> {
    db.execute_unprepared(include_str!("sqlite.sql")).await?;
    Ok(())
}
