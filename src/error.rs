//! Error taxonomy for the data layer.
//!
//! Repository operations fail in exactly three ways: the caller sent an
//! unusable field (`Validation`), the referenced record does not exist
//! (`NotFound`), or the backing store itself failed (`Storage`). An HTTP
//! layer maps these to 400 / 404 / 500 via [`Error::status_code`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    /// Carries the entity kind, e.g. "Student" or "Idea".
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::NotFound(_) => 404,
            Error::Storage(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(Error::validation("title is required").status_code(), 400);
        assert_eq!(Error::NotFound("Idea").status_code(), 404);
        assert_eq!(
            Error::Storage(anyhow::anyhow!("disk full")).status_code(),
            500
        );
    }

    #[test]
    fn not_found_names_the_entity() {
        assert_eq!(Error::NotFound("Student").to_string(), "Student not found");
    }
}
