use ::entity::{director, prelude::Director};
use chrono::NaiveDate;
use sea_orm::*;

use crate::crud::CrudService;

pub struct DirectorService;

impl CrudService for DirectorService {
    type Entity = Director;

    fn find_all_query() -> Select<Director> {
        Director::find()
            .order_by_asc(director::Column::LastName)
            .order_by_asc(director::Column::FirstName)
    }
}

impl DirectorService {
    pub async fn find_director_by_id<C>(db: &C, id: i32) -> Result<Option<director::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Self::find_by_id(db, id).await
    }

    /// Inserts two directors into an empty table. Development only.
    pub async fn ensure_dev_seed<C>(db: &C) -> Result<usize, DbErr>
    where
        C: ConnectionTrait,
    {
        if Self::count(db).await? > 0 {
            return Ok(0);
        }

        let seed_data = [
            ("Christopher", "Nolan", NaiveDate::from_ymd_opt(1970, 7, 30)),
            ("Greta", "Gerwig", NaiveDate::from_ymd_opt(1983, 8, 4)),
        ];

        for (first_name, last_name, birth_date) in seed_data {
            director::ActiveModel {
                first_name: Set(first_name.to_owned()),
                last_name: Set(last_name.to_owned()),
                birth_date: Set(birth_date),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }

        tracing::info!("Seeded {} directors", seed_data.len());
        Ok(seed_data.len())
    }
}
