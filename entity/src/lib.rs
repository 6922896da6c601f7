pub mod prelude;

pub mod actor;
pub mod director;
pub mod movie;
pub mod movie_actor;
