use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
}

impl Movie {
    pub fn new(title: impl Into<String>, overview: impl Into<String>, poster_path: Option<String>) -> Self {
        Self {
            title: title.into(),
            overview: overview.into(),
            poster_path,
        }
    }

    /// Absolute poster URL under `image_base_url`, or `None` when the movie has no poster.
    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", image_base_url, path))
    }
}

/// Top-level wrapper returned by the search endpoint.
///
/// The `results` key must be present. A `null` value is accepted and treated
/// as an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoviesResponseBody {
    #[serde(deserialize_with = "deserialize_nullable_results")]
    pub results: Vec<Movie>,
}

fn deserialize_nullable_results<'de, D>(deserializer: D) -> Result<Vec<Movie>, D::Error>
where
    D: Deserializer<'de>,
{
    let results: Option<Vec<Movie>> = Option::deserialize(deserializer)?;
    Ok(results.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_well_formed_envelope() {
        let json = r#"{"results":[{"title":"A","overview":"B","poster_path":"/p.jpg"}]}"#;

        let body: MoviesResponseBody = serde_json::from_str(json).unwrap();

        assert_eq!(
            body.results,
            vec![Movie::new("A", "B", Some("/p.jpg".to_string()))]
        );
    }

    #[test]
    fn test_empty_results_array_is_valid() {
        let body: MoviesResponseBody = serde_json::from_str(r#"{"results":[]}"#).unwrap();
        assert!(body.results.is_empty());
    }

    #[test]
    fn test_null_results_is_treated_as_empty() {
        let body: MoviesResponseBody = serde_json::from_str(r#"{"results":null}"#).unwrap();
        assert!(body.results.is_empty());
    }

    #[test]
    fn test_missing_results_key_is_rejected() {
        let result = serde_json::from_str::<MoviesResponseBody>(r#"{"foo":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_null_poster_path_maps_to_none() {
        let json = r#"{"results":[{"title":"A","overview":"B","poster_path":null}]}"#;

        let body: MoviesResponseBody = serde_json::from_str(json).unwrap();

        assert_eq!(body.results[0].poster_path, None);
    }

    #[test]
    fn test_ignores_unknown_fields_and_keeps_order() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 10, "title": "First", "overview": "one", "poster_path": "/1.jpg", "vote_average": 7.1},
                {"id": 20, "title": "Second", "overview": "two", "poster_path": null}
            ],
            "total_pages": 1
        }"#;

        let body: MoviesResponseBody = serde_json::from_str(json).unwrap();

        let titles: Vec<&str> = body.results.iter().map(|movie| movie.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_poster_url_joins_base_and_path() {
        let movie = Movie::new("A", "B", Some("/p.jpg".to_string()));

        assert_eq!(
            movie.poster_url("https://image.tmdb.org/t/p/original"),
            Some("https://image.tmdb.org/t/p/original/p.jpg".to_string())
        );
    }

    #[test]
    fn test_poster_url_is_none_without_poster_path() {
        let movie = Movie::new("A", "B", None);
        assert_eq!(movie.poster_url("https://image.tmdb.org/t/p/original"), None);
    }
}
