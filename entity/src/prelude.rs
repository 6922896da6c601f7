pub use super::actor::Entity as Actor;
pub use super::director::Entity as Director;
pub use super::movie::Entity as Movie;
pub use super::movie_actor::Entity as MovieActor;
