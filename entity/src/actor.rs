use std::hash::{Hash, Hasher};

use sea_orm::entity::prelude::*;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;

#[derive(Clone, Debug, DeriveEntityModel, Deserialize)]
#[sea_orm(table_name = "actor")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(30))")]
    pub first_name: String,
    #[sea_orm(column_type = "String(StringLen::N(30))")]
    pub last_name: String,
    pub birth_date: Option<Date>,
}

impl Model {
    /// First and last name joined by a space, with surrounding whitespace
    /// removed so a missing part does not leave a dangling separator.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Actor", 5)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("firstName", &self.first_name)?;
        state.serialize_field("lastName", &self.last_name)?;
        state.serialize_field("birthDate", &self.birth_date)?;
        state.serialize_field("fullName", &self.full_name())?;
        state.end()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_actor::Entity")]
    MovieActor,
}

impl Related<super::movie_actor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieActor.def()
    }
}

// Read-only view of the movies an actor appears in; the association itself
// is only ever written from the movie side.
impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        super::movie_actor::Relation::Movie.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::movie_actor::Relation::Actor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

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
