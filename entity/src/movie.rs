use std::hash::{Hash, Hasher};

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Value};
use serde::{Deserialize, Serialize};

/// The first year a motion picture is known to have been recorded.
pub const MIN_RELEASE_YEAR: i32 = 1888;

pub const TITLE_MAX_LEN: usize = 300;
pub const GENRE_MAX_LEN: usize = 60;
pub const POSTER_URL_MAX_LEN: usize = 1000;
pub const IMDB_ID_MAX_LEN: usize = 20;

#[derive(Clone, Debug, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "movie")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(300))")]
    pub title: String,
    #[sea_orm(column_name = "release_year")]
    pub year: i32,
    #[sea_orm(column_type = "String(StringLen::N(60))", nullable)]
    pub genre: Option<String>,
    pub runtime_min: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub plot_one_line: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(1000))", nullable)]
    pub poster_url: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable, unique)]
    pub imdb_id: Option<String>,
    pub director_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::director::Entity",
        from = "Column::DirectorId",
        to = "super::director::Column::Id"
    )]
    Director,
    #[sea_orm(has_many = "super::movie_actor::Entity")]
    MovieActor,
}

impl Related<super::director::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Director.def()
    }
}

impl Related<super::movie_actor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieActor.def()
    }
}

impl Related<super::actor::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_actor::Relation::Actor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_actor::Relation::Movie.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        validate(&self)?;
        Ok(self)
    }
}

/// Field constraints every stored movie satisfies. Only fields that carry a
/// value are checked, so partial updates validate what they touch.
pub fn validate(movie: &ActiveModel) -> Result<(), DbErr> {
    if let Some(title) = current(&movie.title) {
        if title.trim().is_empty() {
            return Err(invalid("title must not be blank"));
        }
        check_len("title", title, TITLE_MAX_LEN)?;
    }
    if let Some(year) = current(&movie.year) {
        if *year < MIN_RELEASE_YEAR {
            return Err(invalid(format!(
                "year must be {MIN_RELEASE_YEAR} or later, got {year}"
            )));
        }
    }
    if let Some(Some(runtime)) = current(&movie.runtime_min) {
        if *runtime <= 0 {
            return Err(invalid(format!(
                "runtime must be a positive number of minutes, got {runtime}"
            )));
        }
    }
    if let Some(Some(genre)) = current(&movie.genre) {
        check_len("genre", genre, GENRE_MAX_LEN)?;
    }
    if let Some(Some(poster_url)) = current(&movie.poster_url) {
        check_len("poster URL", poster_url, POSTER_URL_MAX_LEN)?;
    }
    if let Some(Some(imdb_id)) = current(&movie.imdb_id) {
        check_len("IMDb id", imdb_id, IMDB_ID_MAX_LEN)?;
    }
    Ok(())
}

fn current<V>(value: &ActiveValue<V>) -> Option<&V>
where
    V: Into<Value>,
{
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v),
        ActiveValue::NotSet => None,
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), DbErr> {
    let len = value.chars().count();
    if len > max {
        return Err(invalid(format!(
            "{field} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> DbErr {
    DbErr::Custom(format!("Invalid movie: {}", message.into()))
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Model {}

impl Hash for Model {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Set;

    fn draft() -> ActiveModel {
        ActiveModel {
            title: Set("Inception".to_owned()),
            year: Set(2010),
            director_id: Set(1),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_a_complete_draft() {
        let movie = ActiveModel {
            genre: Set(Some("Sci-Fi".to_owned())),
            runtime_min: Set(Some(148)),
            imdb_id: Set(Some("tt1375666".to_owned())),
            ..draft()
        };
        assert!(validate(&movie).is_ok());
    }

    #[test]
    fn rejects_blank_title() {
        let movie = ActiveModel {
            title: Set("   ".to_owned()),
            ..draft()
        };
        assert!(matches!(validate(&movie), Err(DbErr::Custom(msg)) if msg.contains("title")));
    }

    #[test]
    fn rejects_years_before_cinema() {
        let movie = ActiveModel {
            year: Set(1887),
            ..draft()
        };
        assert!(validate(&movie).is_err());

        let movie = ActiveModel {
            year: Set(MIN_RELEASE_YEAR),
            ..draft()
        };
        assert!(validate(&movie).is_ok());
    }

    #[test]
    fn rejects_non_positive_runtime() {
        let movie = ActiveModel {
            runtime_min: Set(Some(0)),
            ..draft()
        };
        assert!(validate(&movie).is_err());
    }

    #[test]
    fn rejects_oversized_imdb_id() {
        let movie = ActiveModel {
            imdb_id: Set(Some("t".repeat(IMDB_ID_MAX_LEN + 1))),
            ..draft()
        };
        assert!(validate(&movie).is_err());
    }

    #[test]
    fn skips_unset_fields() {
        let movie = ActiveModel {
            ..Default::default()
        };
        assert!(validate(&movie).is_ok());
    }
}
