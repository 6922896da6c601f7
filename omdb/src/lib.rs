//! A small client for the [OMDb](https://www.omdbapi.com/) movie-metadata API
//! and the mapping from its payload to a movie draft.

mod client;
mod error;
mod models;

pub use client::{OmdbClient, BASE_URL};
pub use error::{OmdbError, Result};
pub use models::{parse_digits, MovieDraft, OmdbMovie};
