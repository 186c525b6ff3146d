use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Returns a fresh record id: a random v4 UUID in canonical hyphenated form.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// A movie's director. Owned entirely by its parent [`Movie`]; both name
/// fields are required once a director is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    pub first_name: String,
    pub last_name: String,
}

/// A stored catalog record. `id` is assigned by the server and immutable
/// after creation; `director` is always present on a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub isbn: String,
    pub title: String,
    pub overview: String,
    pub director: Director,
}

/// Creation payload. Any client-supplied `id` is ignored; the server always
/// assigns its own. `director` is optional only here, never on a stored
/// record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieDraft {
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub director: Option<Director>,
}

impl MovieDraft {
    /// Validates the draft and consumes it into a stored record under the
    /// given id. Fails with `InvalidInput` when a required field is empty or
    /// the director is absent.
    pub fn into_movie(self, id: String) -> Result<Movie, ApiError> {
        if self.isbn.is_empty() || self.title.is_empty() || self.overview.is_empty() {
            return Err(ApiError::InvalidInput(
                "isbn, title, and overview are required fields".to_string(),
            ));
        }
        let director = match self.director {
            Some(d) if !d.first_name.is_empty() && !d.last_name.is_empty() => d,
            _ => {
                return Err(ApiError::InvalidInput(
                    "director's first and last name are required".to_string(),
                ));
            }
        };
        Ok(Movie {
            id,
            isbn: self.isbn,
            title: self.title,
            overview: self.overview,
            director,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> MovieDraft {
        MovieDraft {
            isbn: "123456".to_string(),
            title: "Test Movie".to_string(),
            overview: "A movie used in tests.".to_string(),
            director: Some(Director {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
            }),
        }
    }

    #[test]
    fn valid_draft_becomes_movie_with_assigned_id() {
        let movie = full_draft().into_movie("abc".to_string()).unwrap();
        assert_eq!(movie.id, "abc");
        assert_eq!(movie.title, "Test Movie");
        assert_eq!(movie.director.first_name, "Jane");
    }

    #[test]
    fn missing_overview_is_rejected() {
        let draft = MovieDraft {
            overview: String::new(),
            ..full_draft()
        };
        let err = draft.into_movie(generate_id()).unwrap_err();
        assert!(
            err.to_string().contains("isbn, title, and overview"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn absent_or_unnamed_director_is_rejected() {
        let draft = MovieDraft {
            director: None,
            ..full_draft()
        };
        assert!(draft.into_movie(generate_id()).is_err());

        let draft = MovieDraft {
            director: Some(Director {
                first_name: "Jane".to_string(),
                last_name: String::new(),
            }),
            ..full_draft()
        };
        assert!(draft.into_movie(generate_id()).is_err());
    }

    #[test]
    fn client_supplied_id_is_ignored_on_deserialization() {
        let draft: MovieDraft = serde_json::from_str(
            r#"{"id":"attacker-chosen","isbn":"1","title":"T","overview":"O",
                "director":{"firstName":"A","lastName":"B"}}"#,
        )
        .unwrap();
        let movie = draft.into_movie("server-chosen".to_string()).unwrap();
        assert_eq!(movie.id, "server-chosen");
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = generate_id();
        let b = generate_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }
}
