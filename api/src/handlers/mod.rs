pub mod actors;
pub mod directors;
pub mod movies;
pub mod metadata;

/// `None` for missing, empty or whitespace-only text.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
