use crate::catalog::model::Movie;
use serde::{Deserialize, Serialize};

/// Sparse update for the nested director value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorPatch {
    /// `None` => do not change; `Some(v)` => overwrite when non-empty
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Sparse update for a stored movie. Unknown keys in the request body are
/// ignored during deserialization; a patch can change a field but never
/// clear it to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoviePatch {
    /// `None` => do not change; `Some(v)` => overwrite when non-empty
    pub isbn: Option<String>,
    pub title: Option<String>,
    pub overview: Option<String>,
    pub director: Option<DirectorPatch>,
}

impl MoviePatch {
    /// Merges the patch into an existing record, field by field.
    pub fn apply(&self, movie: &mut Movie) {
        overwrite(&mut movie.isbn, self.isbn.as_deref());
        overwrite(&mut movie.title, self.title.as_deref());
        overwrite(&mut movie.overview, self.overview.as_deref());
        if let Some(director) = &self.director {
            overwrite(&mut movie.director.first_name, director.first_name.as_deref());
            overwrite(&mut movie.director.last_name, director.last_name.as_deref());
        }
    }

    /// True when no field would change any record.
    pub fn is_empty(&self) -> bool {
        self.isbn.is_none()
            && self.title.is_none()
            && self.overview.is_none()
            && self.director.is_none()
    }
}

fn overwrite(field: &mut String, value: Option<&str>) {
    if let Some(v) = value {
        if !v.is_empty() {
            *field = v.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::Director;

    fn sample_movie() -> Movie {
        Movie {
            id: "m-1".to_string(),
            isbn: "531306".to_string(),
            title: "Rim of the World".to_string(),
            overview: "Four teens save the world.".to_string(),
            director: Director {
                first_name: "Joseph".to_string(),
                last_name: "McGinty Nichol".to_string(),
            },
        }
    }

    #[test]
    fn non_empty_fields_overwrite() {
        let mut movie = sample_movie();
        let patch = MoviePatch {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        patch.apply(&mut movie);
        assert_eq!(movie.title, "Renamed");
        assert_eq!(movie.isbn, "531306");
    }

    #[test]
    fn empty_string_never_overwrites() {
        let mut movie = sample_movie();
        let patch = MoviePatch {
            title: Some(String::new()),
            ..Default::default()
        };
        patch.apply(&mut movie);
        assert_eq!(movie.title, "Rim of the World");
    }

    #[test]
    fn director_names_merge_independently() {
        let mut movie = sample_movie();
        let patch = MoviePatch {
            director: Some(DirectorPatch {
                first_name: Some("X".to_string()),
                last_name: None,
            }),
            ..Default::default()
        };
        patch.apply(&mut movie);
        assert_eq!(movie.director.first_name, "X");
        assert_eq!(movie.director.last_name, "McGinty Nichol");
    }

    #[test]
    fn unknown_keys_deserialize_to_a_noop_patch() {
        let patch: MoviePatch = serde_json::from_str(r#"{"rating": "5", "year": "1999"}"#).unwrap();
        assert!(patch.is_empty());

        let mut movie = sample_movie();
        let before = movie.clone();
        patch.apply(&mut movie);
        assert_eq!(movie, before);
    }

    #[test]
    fn null_fields_are_left_unchanged() {
        let patch: MoviePatch =
            serde_json::from_str(r#"{"title": null, "director": null}"#).unwrap();
        let mut movie = sample_movie();
        let before = movie.clone();
        patch.apply(&mut movie);
        assert_eq!(movie, before);
    }
}
