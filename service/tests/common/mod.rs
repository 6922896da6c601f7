#![allow(dead_code)]

use chrono::NaiveDate;
use entity::{actor, director, movie};
use movie_catalog_service::sea_orm::{ActiveValue::Set, Database, DatabaseConnection};
use movie_catalog_service::{schema, ActorService, CrudService, DirectorService, MovieService};

pub async fn setup() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    schema::create_tables(&db).await.unwrap();
    db
}

pub async fn insert_director(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
) -> director::Model {
    DirectorService::create(
        db,
        director::ActiveModel {
            first_name: Set(first_name.to_owned()),
            last_name: Set(last_name.to_owned()),
            birth_date: Set(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
}

pub async fn insert_actor(db: &DatabaseConnection, first_name: &str, last_name: &str) -> actor::Model {
    ActorService::create(
        db,
        actor::ActiveModel {
            first_name: Set(first_name.to_owned()),
            last_name: Set(last_name.to_owned()),
            birth_date: Set(NaiveDate::from_ymd_opt(1970, 1, 1)),
            ..Default::default()
        },
    )
    .await
    .unwrap()
}

pub fn draft(title: &str, year: i32, director: &director::Model) -> movie::ActiveModel {
    movie::ActiveModel {
        title: Set(title.to_owned()),
        year: Set(year),
        director_id: Set(director.id),
        ..Default::default()
    }
}

pub async fn insert_movie(
    db: &DatabaseConnection,
    title: &str,
    year: i32,
    director: &director::Model,
    actor_ids: &[i32],
) -> movie::Model {
    MovieService::create_with_actors(db, draft(title, year, director), actor_ids)
        .await
        .unwrap()
}
