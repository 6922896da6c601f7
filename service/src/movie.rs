use std::collections::HashMap;

use ::entity::{
    actor, director, movie, movie_actor,
    prelude::{Movie, MovieActor},
};
use itertools::Itertools;
use sea_orm::*;
use serde::{Deserialize, Serialize};

use crate::actor::ActorService;
use crate::crud::CrudService;
use crate::director::DirectorService;

/// A movie together with the relations loaded alongside it.
///
/// `actors` is `None` when the query did not load them (listings), and
/// `Some` (possibly empty) when it did.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: movie::Model,
    pub director: director::Model,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actors: Option<Vec<actor::Model>>,
}

impl MovieDetails {
    fn assemble(
        movie: movie::Model,
        director: Option<director::Model>,
        actors: Option<Vec<actor::Model>>,
    ) -> Result<Self, DbErr> {
        let director = director.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Director {} of movie {} does not exist",
                movie.director_id, movie.id
            ))
        })?;

        Ok(Self {
            movie,
            director,
            actors: actors.map(|actors| {
                actors
                    .into_iter()
                    .unique()
                    .sorted_by(|a, b| {
                        (&a.last_name, &a.first_name).cmp(&(&b.last_name, &b.first_name))
                    })
                    .collect()
            }),
        })
    }

    /// Ids of the loaded actors; empty when actors were not loaded.
    pub fn actor_ids(&self) -> Vec<i32> {
        self.actors
            .iter()
            .flatten()
            .map(|actor| actor.id)
            .collect()
    }
}

pub struct MovieService;

impl MovieService {
    /// Every movie with its director, ordered by title then year. Actors are
    /// not loaded.
    pub async fn list_all<C>(db: &C) -> Result<Vec<MovieDetails>, DbErr>
    where
        C: ConnectionTrait,
    {
        Movie::find()
            .order_by_asc(movie::Column::Title)
            .order_by_asc(movie::Column::Year)
            .find_also_related(director::Entity)
            .all(db)
            .await?
            .into_iter()
            .map(|(movie, director)| MovieDetails::assemble(movie, director, None))
            .collect()
    }

    /// One movie with its director and full cast, or `None` if there is no
    /// movie with that id.
    ///
    /// Two statements rather than one: the cast is joined onto the movie,
    /// then the director is fetched by key. Neither grows with the cast size.
    pub async fn find_with_details<C>(db: &C, id: i32) -> Result<Option<MovieDetails>, DbErr>
    where
        C: ConnectionTrait,
    {
        let rows = Movie::find_by_id(id)
            .find_with_related(actor::Entity)
            .all(db)
            .await?;

        let Some((movie, actors)) = merge_fan_out(rows).into_iter().next() else {
            return Ok(None);
        };

        let director = movie.find_related(director::Entity).one(db).await?;

        MovieDetails::assemble(movie, director, Some(actors)).map(Some)
    }

    /// Movies released in `year` with directors and casts, ordered by title.
    pub async fn find_by_year<C>(db: &C, year: i32) -> Result<Vec<MovieDetails>, DbErr>
    where
        C: ConnectionTrait,
    {
        let rows = Movie::find()
            .filter(movie::Column::Year.eq(year))
            .order_by_asc(movie::Column::Title)
            .order_by_asc(movie::Column::Id)
            .find_with_related(actor::Entity)
            .all(db)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let (movies, casts): (Vec<movie::Model>, Vec<Vec<actor::Model>>) =
            merge_fan_out(rows).into_iter().unzip();
        let directors = movies.load_one(director::Entity, db).await?;

        tracing::debug!(year, found = movies.len(), "Loaded movies by year");

        movies
            .into_iter()
            .zip(directors)
            .zip(casts)
            .map(|((movie, director), actors)| {
                MovieDetails::assemble(movie, director, Some(actors))
            })
            .collect()
    }

    /// Inserts a movie. Field constraints are checked by the entity on save.
    pub async fn create<C>(db: &C, movie: movie::ActiveModel) -> Result<movie::Model, DbErr>
    where
        C: ConnectionTrait,
    {
        movie.insert(db).await
    }

    /// Inserts a movie and associates the given actors in one transaction.
    pub async fn create_with_actors<C>(
        db: &C,
        movie: movie::ActiveModel,
        actor_ids: &[i32],
    ) -> Result<movie::Model, DbErr>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = db.begin().await?;

        let movie = Self::create(&txn, movie).await?;
        if !actor_ids.is_empty() {
            Self::add_actors(&txn, &movie, actor_ids).await?;
        }

        txn.commit().await?;

        tracing::info!(id = movie.id, title = %movie.title, "Created movie");
        Ok(movie)
    }

    /// Replaces the cast of `movie` with the actors behind `actor_ids`.
    /// Ids that match no actor are dropped. Returns the resulting cast.
    pub async fn add_actors<C>(
        db: &C,
        movie: &movie::Model,
        actor_ids: &[i32],
    ) -> Result<Vec<actor::Model>, DbErr>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = db.begin().await?;

        let actors = ActorService::find_by_ids(&txn, actor_ids).await?;
        if actors.len() < actor_ids.len() {
            tracing::debug!(
                movie_id = movie.id,
                requested = actor_ids.len(),
                found = actors.len(),
                "Dropping unknown actor ids"
            );
        }

        MovieActor::delete_many()
            .filter(movie_actor::Column::MovieId.eq(movie.id))
            .exec(&txn)
            .await?;

        if !actors.is_empty() {
            MovieActor::insert_many(actors.iter().map(|actor| movie_actor::ActiveModel {
                movie_id: Set(movie.id),
                actor_id: Set(actor.id),
            }))
            .exec_without_returning(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(actors)
    }

    /// Removes a movie and its cast associations.
    pub async fn delete<C>(db: &C, id: i32) -> Result<(), DbErr>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = db.begin().await?;

        MovieActor::delete_many()
            .filter(movie_actor::Column::MovieId.eq(id))
            .exec(&txn)
            .await?;

        let res = Movie::delete_by_id(id).exec(&txn).await?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("Movie {id} does not exist")));
        }

        txn.commit().await
    }

    pub async fn all_directors<C>(db: &C) -> Result<Vec<director::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        DirectorService::find_all(db).await
    }

    pub async fn find_director<C>(db: &C, id: i32) -> Result<Option<director::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        DirectorService::find_director_by_id(db, id).await
    }

    pub async fn all_actors<C>(db: &C) -> Result<Vec<actor::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        ActorService::find_all(db).await
    }

    pub async fn find_actors_by_ids<C>(db: &C, ids: &[i32]) -> Result<Vec<actor::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        ActorService::find_by_ids(db, ids).await
    }
}

/// Folds joined rows into one entry per movie, keeping first-seen order.
/// Rows for the same movie need not be adjacent.
fn merge_fan_out(
    rows: Vec<(movie::Model, Vec<actor::Model>)>,
) -> Vec<(movie::Model, Vec<actor::Model>)> {
    let mut merged: Vec<(movie::Model, Vec<actor::Model>)> = Vec::with_capacity(rows.len());
    let mut positions: HashMap<i32, usize> = HashMap::new();

    for (movie, actors) in rows {
        match positions.get(&movie.id) {
            Some(&pos) => merged[pos].1.extend(actors),
            None => {
                positions.insert(movie.id, merged.len());
                merged.push((movie, actors));
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn movie(id: i32, title: &str) -> movie::Model {
        movie::Model {
            id,
            title: title.to_owned(),
            year: 2010,
            genre: None,
            runtime_min: None,
            plot_one_line: None,
            poster_url: None,
            imdb_id: None,
            director_id: 1,
        }
    }

    fn actor(id: i32, first_name: &str, last_name: &str) -> actor::Model {
        actor::Model {
            id,
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            birth_date: None,
        }
    }

    fn nolan() -> director::Model {
        director::Model {
            id: 1,
            first_name: "Christopher".to_owned(),
            last_name: "Nolan".to_owned(),
            birth_date: None,
        }
    }

    #[test]
    fn merge_fan_out_collapses_split_rows() {
        let rows = vec![
            (movie(1, "Inception"), vec![actor(1, "Leonardo", "DiCaprio")]),
            (movie(2, "Tenet"), vec![]),
            (movie(1, "Inception"), vec![actor(2, "Tom", "Hardy")]),
        ];

        let merged = merge_fan_out(rows);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].0.id, 1);
        assert_eq!(
            merged[0].1.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(merged[1].0.id, 2);
        assert!(merged[1].1.is_empty());
    }

    #[test]
    fn assemble_orders_and_dedups_cast() {
        let details = MovieDetails::assemble(
            movie(1, "Inception"),
            Some(nolan()),
            Some(vec![
                actor(2, "Tom", "Hardy"),
                actor(1, "Leonardo", "DiCaprio"),
                actor(2, "Tom", "Hardy"),
            ]),
        )
        .unwrap();

        assert_eq!(details.actor_ids(), vec![1, 2]);
    }

    #[test]
    fn assemble_requires_a_director() {
        let err = MovieDetails::assemble(movie(1, "Inception"), None, None).unwrap_err();
        assert!(matches!(err, DbErr::RecordNotFound(_)));
    }

    #[test]
    fn listing_omits_unloaded_actors() {
        let details = MovieDetails::assemble(movie(1, "Inception"), Some(nolan()), None).unwrap();
        let json = serde_json::to_value(&details).unwrap();

        assert_eq!(json["title"], "Inception");
        assert_eq!(json["directorId"], 1);
        assert_eq!(json["director"]["lastName"], "Nolan");
        assert!(json.get("actors").is_none());
    }
}
