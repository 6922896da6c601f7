use ::entity::{actor, director, movie, movie_actor};
use sea_orm::sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, Table, TableCreateStatement,
};
use sea_orm::{ConnectionTrait, DbErr, ExecResult};

/// Creates the catalog tables if they do not exist yet, parents first.
pub async fn create_tables<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    create_director_table(db).await?;
    create_actor_table(db).await?;
    create_movie_table(db).await?;
    create_movie_actor_table(db).await?;
    Ok(())
}

async fn create_table<C>(db: &C, stmt: &TableCreateStatement) -> Result<ExecResult, DbErr>
where
    C: ConnectionTrait,
{
    let builder = db.get_database_backend();
    db.execute(builder.build(stmt)).await
}

pub async fn create_director_table<C>(db: &C) -> Result<ExecResult, DbErr>
where
    C: ConnectionTrait,
{
    let stmt = Table::create()
        .table(director::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(director::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(director::Column::FirstName)
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(director::Column::LastName)
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(director::Column::BirthDate).date())
        .to_owned();

    create_table(db, &stmt).await
}

pub async fn create_actor_table<C>(db: &C) -> Result<ExecResult, DbErr>
where
    C: ConnectionTrait,
{
    let stmt = Table::create()
        .table(actor::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(actor::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(actor::Column::FirstName)
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(actor::Column::LastName)
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(actor::Column::BirthDate).date())
        .to_owned();

    create_table(db, &stmt).await
}

pub async fn create_movie_table<C>(db: &C) -> Result<ExecResult, DbErr>
where
    C: ConnectionTrait,
{
    let stmt = Table::create()
        .table(movie::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(movie::Column::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(movie::Column::Title)
                .string_len(300)
                .not_null(),
        )
        .col(ColumnDef::new(movie::Column::Year).integer().not_null())
        .col(ColumnDef::new(movie::Column::Genre).string_len(60))
        .col(ColumnDef::new(movie::Column::RuntimeMin).integer())
        .col(ColumnDef::new(movie::Column::PlotOneLine).text())
        .col(ColumnDef::new(movie::Column::PosterUrl).string_len(1000))
        .col(
            ColumnDef::new(movie::Column::ImdbId)
                .string_len(20)
                .unique_key(),
        )
        .col(
            ColumnDef::new(movie::Column::DirectorId)
                .integer()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_movie_director")
                .from(movie::Entity, movie::Column::DirectorId)
                .to(director::Entity, director::Column::Id),
        )
        .to_owned();

    create_table(db, &stmt).await
}

pub async fn create_movie_actor_table<C>(db: &C) -> Result<ExecResult, DbErr>
where
    C: ConnectionTrait,
{
    let stmt = Table::create()
        .table(movie_actor::Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(movie_actor::Column::MovieId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(movie_actor::Column::ActorId)
                .integer()
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(movie_actor::Column::MovieId)
                .col(movie_actor::Column::ActorId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_movie_actor_movie")
                .from(movie_actor::Entity, movie_actor::Column::MovieId)
                .to(movie::Entity, movie::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_movie_actor_actor")
                .from(movie_actor::Entity, movie_actor::Column::ActorId)
                .to(actor::Entity, actor::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned();

    create_table(db, &stmt).await
}
