use ::entity::{actor, movie, prelude::Actor};
use chrono::NaiveDate;
use sea_orm::*;

use crate::crud::CrudService;

pub struct ActorService;

impl CrudService for ActorService {
    type Entity = Actor;

    fn find_all_query() -> Select<Actor> {
        Actor::find()
            .order_by_asc(actor::Column::LastName)
            .order_by_asc(actor::Column::FirstName)
    }
}

impl ActorService {
    /// Fetches the actors with the given ids, ordered like [`CrudService::find_all`].
    /// Ids with no matching row are left out; an empty slice never reaches
    /// the database.
    pub async fn find_by_ids<C>(db: &C, ids: &[i32]) -> Result<Vec<actor::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Self::find_all_query()
            .filter(actor::Column::Id.is_in(ids.iter().copied()))
            .all(db)
            .await
    }

    /// Movies the actor appears in, ordered by title. The association is
    /// owned by the movie side; this is a lookup only.
    pub async fn find_movies<C>(db: &C, actor: &actor::Model) -> Result<Vec<movie::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        actor
            .find_related(movie::Entity)
            .order_by_asc(movie::Column::Title)
            .all(db)
            .await
    }

    /// Inserts a few well-known actors into an empty table. Development only.
    /// Returns how many rows were inserted.
    pub async fn ensure_dev_seed<C>(db: &C) -> Result<usize, DbErr>
    where
        C: ConnectionTrait,
    {
        if Self::count(db).await? > 0 {
            return Ok(0);
        }

        let seed_data = [
            ("Leonardo", "DiCaprio", NaiveDate::from_ymd_opt(1974, 11, 11)),
            ("Brad", "Pitt", NaiveDate::from_ymd_opt(1963, 12, 18)),
            ("Angelina", "Jolie", NaiveDate::from_ymd_opt(1975, 6, 4)),
        ];

        for (first_name, last_name, birth_date) in seed_data {
            Self::create(
                db,
                actor::ActiveModel {
                    first_name: Set(first_name.to_owned()),
                    last_name: Set(last_name.to_owned()),
                    birth_date: Set(birth_date),
                    ..Default::default()
                },
            )
            .await?;
        }

        tracing::info!("Seeded {} actors", seed_data.len());
        Ok(seed_data.len())
    }
}
