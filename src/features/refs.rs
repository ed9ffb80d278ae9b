//! References that the backend either populates with the full document or
//! leaves as a bare id, depending on the endpoint.

use serde::{Deserialize, Serialize};

/// Anything with a backend document id.
pub trait Identified {
    fn id(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Populated(T),
    Id(String),
}

impl<T: Identified> Ref<T> {
    pub fn id(&self) -> &str {
        match self {
            Ref::Populated(value) => value.id(),
            Ref::Id(id) => id,
        }
    }

    pub fn populated(&self) -> Option<&T> {
        match self {
            Ref::Populated(value) => Some(value),
            Ref::Id(_) => None,
        }
    }
}

/// A user as embedded in bookings and requests.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

impl Identified for Person {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Name of a populated person reference, or a placeholder.
pub fn person_name(person: Option<&Ref<Person>>) -> String {
    person
        .and_then(Ref::populated)
        .map(|person| person.name.clone())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_accepts_ids_and_documents() {
        let by_id: Ref<Person> = serde_json::from_str(r#""64f0c2""#).expect("id ref");
        assert_eq!(by_id.id(), "64f0c2");
        assert!(by_id.populated().is_none());

        let populated: Ref<Person> =
            serde_json::from_str(r#"{"_id":"64f0c3","name":"Dr. Perera","department":"ICT"}"#)
                .expect("populated ref");
        assert_eq!(populated.id(), "64f0c3");
        assert_eq!(person_name(Some(&populated)), "Dr. Perera");
        assert_eq!(person_name(Some(&by_id)), "—");
        assert_eq!(person_name(None), "—");
    }
}
