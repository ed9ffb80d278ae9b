//! Query string builder for list endpoints. Filters left at "all" or blank are
//! omitted so the backend applies its defaults.

use super::errors::AppError;
use url::form_urlencoded::Serializer;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter unless the value is blank after trimming.
    pub fn push(mut self, key: &str, value: impl AsRef<str>) -> Self {
        let value = value.as_ref().trim();
        if !value.is_empty() {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Adds a parameter only when present.
    pub fn push_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(key, value.to_string()),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encodes the pairs without the leading `?`.
    pub fn encode(&self) -> String {
        let mut serializer = Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Appends the encoded query to a path.
    pub fn apply(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{}", self.encode())
        }
    }
}

/// Joins the configured API base URL and an endpoint path.
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Builds `{collection}/{id}{suffix}` after checking the id is present.
/// Ids are backend ObjectIds, so only blanks and slashes are rejected.
pub fn resource_path(collection: &str, id: &str, suffix: &str) -> Result<String, AppError> {
    let id = id.trim();
    if id.is_empty() || id.contains('/') {
        return Err(AppError::validation("A valid record id is required."));
    }
    Ok(format!("{collection}/{id}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::{QueryParams, join_url, resource_path};

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://localhost:5000/api/", "/halls"),
            "http://localhost:5000/api/halls"
        );
        assert_eq!(
            join_url("http://localhost:5000/api", "halls/1"),
            "http://localhost:5000/api/halls/1"
        );
        assert_eq!(join_url("  ", "/halls"), "/halls");
    }

    #[test]
    fn blank_values_are_skipped() {
        let query = QueryParams::new()
            .push("building", "")
            .push("floor", "   ")
            .push_opt::<u8>("academicYear", None);
        assert!(query.is_empty());
        assert_eq!(query.apply("/halls"), "/halls");
    }

    #[test]
    fn values_are_form_encoded() {
        let query = QueryParams::new()
            .push("building", "LectureComplex")
            .push("date", "2025-03-14")
            .push_opt("isActive", Some(true))
            .push("purpose", "Guest lecture & demo");
        assert_eq!(
            query.apply("/bookings/availability"),
            "/bookings/availability?building=LectureComplex&date=2025-03-14&isActive=true&purpose=Guest+lecture+%26+demo"
        );
    }

    #[test]
    fn resource_path_rejects_blank_ids() {
        assert_eq!(
            resource_path("/bookings", " 65ab ", "/cancel").as_deref(),
            Ok("/bookings/65ab/cancel")
        );
        assert!(resource_path("/halls", "  ", "").is_err());
        assert!(resource_path("/halls", "a/b", "").is_err());
    }
}
