use serde::Deserialize;

use crate::error::LookupError;

/// Placeholder used when the API omits a field.
pub const UNKNOWN: &str = "Unknown";

/// Top-level response from the `volumes` search endpoint.
///
/// `items` is absent entirely when nothing matched.
#[derive(Debug, Deserialize)]
pub struct VolumesResponse {
    #[serde(default, rename = "totalItems")]
    pub total_items: u32,
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
pub struct Volume {
    #[serde(default, rename = "volumeInfo")]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub published_date: Option<String>,
}

/// Best-guess bibliographic fields for a title query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetails {
    pub title: String,
    pub author: String,
    pub genre: String,
    /// As reported by the API: a year, a year-month, or a full date.
    pub published: String,
}

impl BookDetails {
    /// The leading year of `published`, if it starts with four digits.
    pub fn year(&self) -> Option<&str> {
        let year = self.published.get(..4)?;
        year.chars().all(|c| c.is_ascii_digit()).then_some(year)
    }
}

impl VolumeInfo {
    /// Collapse to [`BookDetails`]. Missing title falls back to the query;
    /// missing author, category and date become [`UNKNOWN`].
    pub fn into_details(self, query: &str) -> BookDetails {
        let first_or_unknown = |v: Vec<String>| {
            v.into_iter()
                .next()
                .unwrap_or_else(|| UNKNOWN.to_string())
        };
        BookDetails {
            title: self.title.unwrap_or_else(|| query.to_string()),
            author: first_or_unknown(self.authors),
            genre: first_or_unknown(self.categories),
            published: self.published_date.unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

/// Parse a `volumes` response body and pick the first candidate.
///
/// `Ok(None)` means the search succeeded with zero matches.
pub fn parse_volumes(body: &str, query: &str) -> Result<Option<BookDetails>, LookupError> {
    let response: VolumesResponse = serde_json::from_str(body)?;
    log::debug!(
        "volumes: {} total, {} returned for '{query}'",
        response.total_items,
        response.items.len()
    );
    Ok(response
        .items
        .into_iter()
        .next()
        .map(|v| v.volume_info.into_details(query)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_item() {
        let body = r#"{
            "kind": "books#volumes",
            "totalItems": 2,
            "items": [
                {"volumeInfo": {
                    "title": "The Hobbit",
                    "authors": ["J.R.R. Tolkien", "Christopher Tolkien"],
                    "categories": ["Juvenile Fiction"],
                    "publishedDate": "1937-09-21"
                }},
                {"volumeInfo": {"title": "The Hobbit: Graphic Novel"}}
            ]
        }"#;
        let details = parse_volumes(body, "hobbit").unwrap().unwrap();
        assert_eq!(details.title, "The Hobbit");
        assert_eq!(details.author, "J.R.R. Tolkien");
        assert_eq!(details.genre, "Juvenile Fiction");
        assert_eq!(details.published, "1937-09-21");
        assert_eq!(details.year(), Some("1937"));
    }

    #[test]
    fn test_parse_defaults_unknown() {
        let body = r#"{"totalItems": 1, "items": [{"volumeInfo": {"title": "Obscure"}}]}"#;
        let details = parse_volumes(body, "obscure").unwrap().unwrap();
        assert_eq!(details.author, UNKNOWN);
        assert_eq!(details.genre, UNKNOWN);
        assert_eq!(details.published, UNKNOWN);
        assert_eq!(details.year(), None);
    }

    #[test]
    fn test_parse_missing_title_uses_query() {
        let body = r#"{"items": [{"volumeInfo": {}}]}"#;
        let details = parse_volumes(body, "some query").unwrap().unwrap();
        assert_eq!(details.title, "some query");
    }

    #[test]
    fn test_parse_no_items() {
        assert_eq!(parse_volumes(r#"{"kind": "books#volumes", "totalItems": 0}"#, "x").unwrap(), None);
        assert_eq!(parse_volumes(r#"{"items": []}"#, "x").unwrap(), None);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_volumes("<html>oops</html>", "x"),
            Err(LookupError::Json(_))
        ));
    }

    #[test]
    fn test_year_partial_dates() {
        let mut d = BookDetails {
            title: String::new(),
            author: String::new(),
            genre: String::new(),
            published: "2004-05".to_string(),
        };
        assert_eq!(d.year(), Some("2004"));
        d.published = "19".to_string();
        assert_eq!(d.year(), None);
    }
}
