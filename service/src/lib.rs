mod actor;
mod crud;
mod director;
mod movie;
pub mod schema;
mod seed;

pub use actor::ActorService;
pub use crud::{ActiveModelOf, CrudService, IdOf, ModelOf};
pub use director::DirectorService;
pub use movie::{MovieDetails, MovieService};
pub use seed::ensure_dev_seed;

pub use sea_orm;
