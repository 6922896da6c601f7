use serde::{Deserialize, Serialize};

use crate::error::OmdbError;

/// The subset of an OMDb title lookup the catalog cares about. Field names
/// follow OMDb's own casing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbMovie {
    pub response: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub runtime: Option<String>,
    pub plot: Option<String>,
    pub poster: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    pub error: Option<String>,
}

impl OmdbMovie {
    pub fn is_found(&self) -> bool {
        self.response.as_deref() == Some("True")
    }
}

/// Keeps only the ASCII digits of `text` and parses them. `"2010–2012"`
/// becomes `20102012`, which the caller then range-checks.
pub fn parse_digits(text: &str) -> Option<i32> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Movie fields prefilled from an OMDb lookup. Nothing here is persisted
/// until a client posts it back with a director.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDraft {
    pub title: String,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub runtime_min: Option<i32>,
    pub plot_one_line: Option<String>,
    pub poster_url: Option<String>,
    pub imdb_id: Option<String>,
}

impl TryFrom<OmdbMovie> for MovieDraft {
    type Error = OmdbError;

    fn try_from(movie: OmdbMovie) -> Result<Self, Self::Error> {
        if !movie.is_found() {
            return Err(OmdbError::NotFound(
                movie.error.unwrap_or_else(|| "no matching title".to_owned()),
            ));
        }

        Ok(Self {
            title: movie.title.unwrap_or_default(),
            year: movie.year.as_deref().and_then(parse_digits),
            genre: known(movie.genre),
            runtime_min: movie.runtime.as_deref().and_then(parse_digits),
            plot_one_line: known(movie.plot),
            poster_url: known(movie.poster),
            imdb_id: known(movie.imdb_id),
        })
    }
}

/// OMDb spells a missing value as `"N/A"`.
fn known(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && v != "N/A")
}
